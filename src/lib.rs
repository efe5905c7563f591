#![warn(missing_docs)]

//! # Vocabulary trainer
//!
//! Four independent practice activities over shared word-list data: a word
//! search puzzle, flashcards, memory match, and a multiple-choice quiz.
//!
//! The [`vocab`] module loads and normalizes word lists and selects words
//! for each activity. The activities themselves are pure game logic with
//! no rendering: callers feed in input events (pointer cells, card flips,
//! answer picks) and read the resulting state back out.
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use vocab_trainer::vocab::VocabWord;
//! use vocab_trainer::wordsearch::{WordSearchConfig, WordSearchGame};
//!
//! let words = vec![
//!     VocabWord::new("нон", "bread"),
//!     VocabWord::new("гул", "flower"),
//! ];
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let game = WordSearchGame::with_rng(&words, &WordSearchConfig::default(), &mut rng);
//!
//! // Every placed word spells itself along its span.
//! for placed in game.search().placed_words() {
//!     let spelled: String = placed
//!         .span
//!         .cells()
//!         .iter()
//!         .map(|&(row, col)| game.search()[(row, col)].letter)
//!         .collect();
//!     assert_eq!(spelled, placed.word.term);
//! }
//! ```

pub mod flashcards;
pub mod memory;
pub mod quiz;
pub mod vocab;
pub mod wordsearch;
