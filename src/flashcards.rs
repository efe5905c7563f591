//! Flashcard session with three card stacks.
//!
//! Every card starts in the study stack. Cards the learner knows move to
//! the learned stack; cards missed while studying move to the review stack,
//! where they stay until known. The session is done when the study and
//! review stacks are both empty.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::vocab::VocabWord;

/// Which stack the learner is currently working through. The learned stack
/// is not browsable; it only collects finished cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveStack {
    /// Cards not yet seen or sorted.
    #[default]
    Study,

    /// Cards the learner got wrong at least once.
    Review,
}

/// A flashcard session over one word list.
#[derive(Clone, Debug)]
pub struct Flashcards {
    study: Vec<VocabWord>,
    review: Vec<VocabWord>,
    learned: Vec<VocabWord>,
    active: ActiveStack,
    current: usize,
}

impl Flashcards {
    /// Starts a session with all words shuffled into the study stack.
    pub fn new(words: &[VocabWord]) -> Self {
        Self::with_rng(words, &mut rand::thread_rng())
    }

    /// Like [`Flashcards::new`], with an explicit random source.
    pub fn with_rng<R: Rng>(words: &[VocabWord], rng: &mut R) -> Self {
        let mut study = words.to_vec();
        study.shuffle(rng);

        Self {
            study,
            review: Vec::new(),
            learned: Vec::new(),
            active: ActiveStack::Study,
            current: 0,
        }
    }

    fn active_cards(&self) -> &Vec<VocabWord> {
        match self.active {
            ActiveStack::Study => &self.study,
            ActiveStack::Review => &self.review,
        }
    }

    /// The card currently shown, if the active stack has any cards left.
    pub fn current_card(&self) -> Option<&VocabWord> {
        self.active_cards().get(self.current)
    }

    /// Marks the current card as known, moving it to the learned stack.
    /// Does nothing when the active stack is empty.
    pub fn mark_known(&mut self) {
        let current = self.current;
        let stack = match self.active {
            ActiveStack::Study => &mut self.study,
            ActiveStack::Review => &mut self.review,
        };

        if current >= stack.len() {
            return;
        }

        let card = stack.remove(current);
        self.learned.push(card);
        self.clamp_cursor();
    }

    /// Marks the current card as missed. From the study stack the card
    /// moves to review; in the review stack it stays and the cursor moves
    /// on to the next card.
    pub fn mark_unknown(&mut self) {
        match self.active {
            ActiveStack::Study => {
                if self.current >= self.study.len() {
                    return;
                }
                let card = self.study.remove(self.current);
                self.review.push(card);
                self.clamp_cursor();
            }
            ActiveStack::Review => {
                if self.review.is_empty() {
                    return;
                }
                self.current = (self.current + 1) % self.review.len();
            }
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.active_cards().len();
        self.current = self.current.min(len.saturating_sub(1));
    }

    /// Switches to the given stack and rewinds to its first card.
    pub fn switch_to(&mut self, stack: ActiveStack) {
        self.active = stack;
        self.current = 0;
    }

    /// The stack currently being worked through.
    pub fn active_stack(&self) -> ActiveStack {
        self.active
    }

    /// Cards not yet sorted.
    pub fn study_count(&self) -> usize {
        self.study.len()
    }

    /// Cards waiting for another pass.
    pub fn review_count(&self) -> usize {
        self.review.len()
    }

    /// Cards finished for good.
    pub fn learned_count(&self) -> usize {
        self.learned.len()
    }

    /// Whether every card has reached the learned stack.
    pub fn is_complete(&self) -> bool {
        self.study.is_empty() && self.review.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn session(count: usize, seed: u64) -> Flashcards {
        let words: Vec<VocabWord> = (0..count)
            .map(|i| VocabWord::new(format!("вожа{i}"), format!("word {i}")))
            .collect();
        Flashcards::with_rng(&words, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn all_cards_start_in_study() {
        let cards = session(5, 1);

        assert_eq!(cards.study_count(), 5);
        assert_eq!(cards.review_count(), 0);
        assert_eq!(cards.learned_count(), 0);
        assert!(cards.current_card().is_some());
    }

    #[test]
    fn known_cards_move_to_learned() {
        let mut cards = session(3, 2);

        cards.mark_known();
        assert_eq!(cards.study_count(), 2);
        assert_eq!(cards.learned_count(), 1);

        cards.mark_known();
        cards.mark_known();
        assert!(cards.is_complete());
        assert_eq!(cards.learned_count(), 3);
        assert!(cards.current_card().is_none());
    }

    #[test]
    fn missed_study_cards_move_to_review() {
        let mut cards = session(2, 3);
        let missed = cards.current_card().cloned().unwrap();

        cards.mark_unknown();

        assert_eq!(cards.study_count(), 1);
        assert_eq!(cards.review_count(), 1);

        cards.switch_to(ActiveStack::Review);
        assert_eq!(cards.current_card(), Some(&missed));
    }

    #[test]
    fn missed_review_cards_stay_in_review() {
        let mut cards = session(2, 4);
        cards.mark_unknown();
        cards.mark_unknown();
        cards.switch_to(ActiveStack::Review);

        let first = cards.current_card().cloned().unwrap();
        cards.mark_unknown();

        assert_eq!(cards.review_count(), 2);
        // The cursor advanced to the other card.
        assert_ne!(cards.current_card(), Some(&first));

        // Wrapping brings the first card back around.
        cards.mark_unknown();
        assert_eq!(cards.current_card(), Some(&first));
    }

    #[test]
    fn review_cards_can_graduate() {
        let mut cards = session(1, 5);
        cards.mark_unknown();
        cards.switch_to(ActiveStack::Review);

        cards.mark_known();

        assert!(cards.is_complete());
        assert_eq!(cards.learned_count(), 1);
    }

    #[test]
    fn cursor_clamps_at_the_end_of_a_stack() {
        let mut cards = session(3, 6);

        // Work from the back of the stack.
        cards.current = 2;
        cards.mark_known();

        assert_eq!(cards.current, 1);
        assert!(cards.current_card().is_some());
    }

    #[test]
    fn marks_on_an_empty_session_are_no_ops() {
        let mut cards = session(0, 7);

        cards.mark_known();
        cards.mark_unknown();
        cards.switch_to(ActiveStack::Review);
        cards.mark_unknown();

        assert!(cards.is_complete());
        assert_eq!(cards.learned_count(), 0);
    }
}
