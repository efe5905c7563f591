//! Word and word-list data shared by every practice activity.
//!
//! Word lists are stored as JSON. Two entry formats are accepted: the full
//! object form, and a compact `[term, translation]` or
//! `[term, translation, transliteration]` array form. Loading normalizes
//! both into [`VocabWord`] values.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of words drawn for a quiz round.
pub const QUIZ_WORD_COUNT: usize = 10;

/// Maximum number of words drawn for a word search puzzle.
pub const WORD_SEARCH_WORD_COUNT: usize = 15;

/// Number of word pairs drawn for a memory match game.
pub const MEMORY_PAIR_COUNT: usize = 6;

/// Shortest word eligible for the word search grid, in characters.
pub const MIN_PUZZLE_WORD_LEN: usize = 3;

/// Longest word eligible for the word search grid, in characters.
pub const MAX_PUZZLE_WORD_LEN: usize = 10;

/// An error that happened while loading a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The word list file could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),

    /// The word list was not valid JSON, or did not match either entry format.
    #[error("failed to parse word list: {0}")]
    Json(#[from] serde_json::Error),

    /// A compact entry had fewer than two strings.
    #[error("word entry {index} must contain at least a term and a translation")]
    MalformedEntry {
        /// Zero-based position of the offending entry in the list.
        index: usize,
    },
}

/// A single vocabulary word: the term being learned plus its translation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabWord {
    /// Identifier unique within one word list.
    #[serde(default)]
    pub id: String,

    /// The word in the language being learned.
    #[serde(alias = "tajik")]
    pub term: String,

    /// The translation shown to the learner.
    #[serde(alias = "english")]
    pub translation: String,

    /// Latin-script transliteration, when the term uses another script.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,

    /// Topical category, e.g. "food".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Difficulty level within the word list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl VocabWord {
    /// Creates a word from a term and its translation, with no id or metadata.
    pub fn new(term: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            term: term.into(),
            translation: translation.into(),
            transliteration: None,
            category: None,
            level: None,
        }
    }
}

/// A named collection of vocabulary words.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordList {
    /// Identifier of the list, e.g. "adjectives".
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The words in the list.
    pub words: Vec<VocabWord>,
}

#[derive(Deserialize)]
struct RawWordList {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    words: Vec<RawEntry>,
}

// Compact must come first: serde derives also accept sequences for
// structs, so a three-string array would otherwise fill VocabWord's
// fields positionally.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Compact(Vec<String>),
    Full(VocabWord),
}

impl WordList {
    /// Parses a word list from a JSON string, accepting both entry formats.
    ///
    /// Compact entries are assigned 1-based ids by position; full entries
    /// keep whatever id they carry.
    pub fn from_json_str(json: &str) -> Result<Self, WordListError> {
        let raw: RawWordList = serde_json::from_str(json)?;
        Self::normalize(raw)
    }

    /// Parses a word list from any reader producing JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, WordListError> {
        let raw: RawWordList = serde_json::from_reader(reader)?;
        Self::normalize(raw)
    }

    /// Loads a word list from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WordListError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn normalize(raw: RawWordList) -> Result<Self, WordListError> {
        let mut words = Vec::with_capacity(raw.words.len());

        for (index, entry) in raw.words.into_iter().enumerate() {
            match entry {
                RawEntry::Full(word) => words.push(word),
                RawEntry::Compact(parts) => {
                    if parts.len() < 2 {
                        return Err(WordListError::MalformedEntry { index });
                    }

                    let mut parts = parts.into_iter();
                    words.push(VocabWord {
                        id: (index + 1).to_string(),
                        // len >= 2 was checked above
                        term: parts.next().unwrap_or_default(),
                        translation: parts.next().unwrap_or_default(),
                        transliteration: parts.next(),
                        category: None,
                        level: None,
                    });
                }
            }
        }

        Ok(Self {
            id: raw.id,
            name: raw.name,
            description: raw.description,
            words,
        })
    }
}

/// Randomly selects up to `count` words. When `count` covers the whole
/// slice, all words are returned in their original order.
pub fn select_random<R: Rng>(words: &[VocabWord], count: usize, rng: &mut R) -> Vec<VocabWord> {
    if count >= words.len() {
        return words.to_vec();
    }

    let mut shuffled = words.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

/// Whether a word can go into the word search grid: 3 to 10 characters and
/// no internal spaces. Lengths are counted in characters, not bytes.
pub fn is_puzzle_eligible(word: &VocabWord) -> bool {
    let len = word.term.chars().count();
    (MIN_PUZZLE_WORD_LEN..=MAX_PUZZLE_WORD_LEN).contains(&len) && !word.term.contains(' ')
}

/// Selects up to [`WORD_SEARCH_WORD_COUNT`] puzzle-eligible words.
pub fn words_for_word_search<R: Rng>(words: &[VocabWord], rng: &mut R) -> Vec<VocabWord> {
    let eligible: Vec<VocabWord> = words.iter().filter(|w| is_puzzle_eligible(w)).cloned().collect();
    select_random(&eligible, WORD_SEARCH_WORD_COUNT, rng)
}

/// Selects up to [`QUIZ_WORD_COUNT`] words for a quiz round.
pub fn words_for_quiz<R: Rng>(words: &[VocabWord], rng: &mut R) -> Vec<VocabWord> {
    select_random(words, QUIZ_WORD_COUNT, rng)
}

/// All words, shuffled, for a memory match game.
pub fn words_for_memory<R: Rng>(words: &[VocabWord], rng: &mut R) -> Vec<VocabWord> {
    let mut shuffled = words.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// All words, shuffled, for a flashcard session.
pub fn words_for_flashcards<R: Rng>(words: &[VocabWord], rng: &mut R) -> Vec<VocabWord> {
    let mut shuffled = words.to_vec();
    shuffled.shuffle(rng);
    shuffled
}
