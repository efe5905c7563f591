//! Memory match: find the term/translation card pairs.
//!
//! Up to six word pairs are dealt face down. The player turns over two
//! cards per move; a term card and its translation card stay up, anything
//! else is turned back down. Timing is the caller's concern: a mismatch
//! stays face up until [`MemoryGame::conceal_mismatch`] is called, so the
//! caller can show the pair for as long as it likes.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::vocab::{VocabWord, MEMORY_PAIR_COUNT};

/// Which side of a word a card shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSide {
    /// The word in the language being learned.
    Term,

    /// The translation.
    Translation,
}

/// One card on the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    /// The text shown when the card is face up.
    pub text: String,

    /// Which side of its word this card shows.
    pub side: CardSide,

    /// Pair identifier; a card matches the one other card with the same pair.
    pub pair: usize,

    face_up: bool,
    matched: bool,
}

impl Card {
    /// Whether the card is currently face up.
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Whether the card's pair has been matched.
    pub fn is_matched(&self) -> bool {
        self.matched
    }
}

/// What a call to [`MemoryGame::flip`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The first card of a move was turned face up.
    Flipped,

    /// The second card completed a pair; both cards are now matched.
    Matched,

    /// The second card did not match; call
    /// [`MemoryGame::conceal_mismatch`] to turn both back down.
    NoMatch,

    /// The flip was not allowed: the card is already face up or matched,
    /// the index is out of range, or a mismatch is still showing.
    Ignored,
}

/// One game of memory match.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    cards: Vec<Card>,
    face_up: Vec<usize>,
    moves: usize,
    matched_pairs: usize,
    total_pairs: usize,
}

impl MemoryGame {
    /// Deals a new game from the given words, using up to
    /// [`MEMORY_PAIR_COUNT`] randomly chosen pairs.
    pub fn new(words: &[VocabWord]) -> Self {
        Self::with_rng(words, &mut rand::thread_rng())
    }

    /// Like [`MemoryGame::new`], with an explicit random source.
    pub fn with_rng<R: Rng>(words: &[VocabWord], rng: &mut R) -> Self {
        let mut pool = words.to_vec();
        pool.shuffle(rng);
        pool.truncate(MEMORY_PAIR_COUNT);

        let mut cards = Vec::with_capacity(pool.len() * 2);
        for (pair, word) in pool.iter().enumerate() {
            cards.push(Card {
                text: word.term.clone(),
                side: CardSide::Term,
                pair,
                face_up: false,
                matched: false,
            });
            cards.push(Card {
                text: word.translation.clone(),
                side: CardSide::Translation,
                pair,
                face_up: false,
                matched: false,
            });
        }
        cards.shuffle(rng);

        Self {
            cards,
            face_up: Vec::new(),
            moves: 0,
            matched_pairs: 0,
            total_pairs: pool.len(),
        }
    }

    /// Turns the card at `index` face up and, on the second card of a
    /// move, resolves the pair.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        let Some(card) = self.cards.get(index) else {
            return FlipOutcome::Ignored;
        };

        if card.face_up || card.matched || self.face_up.len() >= 2 {
            return FlipOutcome::Ignored;
        }

        self.cards[index].face_up = true;
        self.face_up.push(index);

        if self.face_up.len() < 2 {
            return FlipOutcome::Flipped;
        }

        self.moves += 1;
        let first = self.face_up[0];
        let second = self.face_up[1];

        if self.cards[first].pair == self.cards[second].pair {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.matched_pairs += 1;
            self.face_up.clear();
            FlipOutcome::Matched
        } else {
            FlipOutcome::NoMatch
        }
    }

    /// Turns a mismatched pair back face down. Does nothing unless a
    /// mismatch is currently showing.
    pub fn conceal_mismatch(&mut self) {
        if self.face_up.len() < 2 {
            return;
        }

        for index in self.face_up.drain(..) {
            self.cards[index].face_up = false;
        }
    }

    /// The cards on the table, in dealt order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many two-card moves the player has made.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// How many pairs have been matched so far.
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// How many pairs were dealt.
    pub fn total_pairs(&self) -> usize {
        self.total_pairs
    }

    /// Whether every pair has been matched.
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.total_pairs
    }
}
