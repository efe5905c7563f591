//! Multiple-choice quiz: pick the translation of a shown term.
//!
//! Each round draws up to ten words. A question shows the term with four
//! shuffled options: the correct translation plus three distractor
//! translations drawn from the rest of the word list.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::vocab::{select_random, VocabWord, QUIZ_WORD_COUNT};

/// Number of distractor options per question, pool permitting.
const DISTRACTOR_COUNT: usize = 3;

/// One quiz question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    /// The word being asked about; its term is shown to the player.
    pub word: VocabWord,

    /// The answer options, shuffled. Contains [`Question::correct_answer`].
    pub options: Vec<String>,

    /// The correct translation.
    pub correct_answer: String,
}

/// One quiz round.
#[derive(Clone, Debug)]
pub struct Quiz {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    answered: bool,
}

impl Quiz {
    /// Builds a quiz round from a word list, drawing up to
    /// [`QUIZ_WORD_COUNT`] words and distractors from the whole pool.
    pub fn new(pool: &[VocabWord]) -> Self {
        Self::with_rng(pool, &mut rand::thread_rng())
    }

    /// Like [`Quiz::new`], with an explicit random source.
    pub fn with_rng<R: Rng>(pool: &[VocabWord], rng: &mut R) -> Self {
        let selected = select_random(pool, QUIZ_WORD_COUNT, rng);

        let mut questions: Vec<Question> = selected
            .into_iter()
            .map(|word| {
                // Distractors must not duplicate the correct translation,
                // or a question could show two right-looking options.
                let mut distractors: Vec<String> = pool
                    .iter()
                    .filter(|other| other.translation != word.translation)
                    .map(|other| other.translation.clone())
                    .collect();
                distractors.shuffle(rng);
                distractors.truncate(DISTRACTOR_COUNT);

                let correct_answer = word.translation.clone();
                let mut options = distractors;
                options.push(correct_answer.clone());
                options.shuffle(rng);

                Question {
                    word,
                    options,
                    correct_answer,
                }
            })
            .collect();

        questions.shuffle(rng);

        Self {
            questions,
            current: 0,
            score: 0,
            answered: false,
        }
    }

    /// The question currently shown, or [`None`] once the round is over.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Submits an answer for the current question and returns whether it
    /// was correct. Returns [`None`] when the round is over or the current
    /// question was already answered; a question can only score once.
    pub fn answer(&mut self, option: &str) -> Option<bool> {
        if self.answered {
            return None;
        }

        let question = self.questions.get(self.current)?;
        self.answered = true;

        let correct = option == question.correct_answer;
        if correct {
            self.score += 1;
        }

        Some(correct)
    }

    /// Moves on to the next question once the current one has been
    /// answered. Returns `true` while questions remain.
    pub fn advance(&mut self) -> bool {
        if self.answered {
            self.current += 1;
            self.answered = false;
        }

        !self.is_complete()
    }

    /// Number of correctly answered questions so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Total number of questions in the round.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Whether every question has been answered and advanced past.
    pub fn is_complete(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Score as a rounded percentage. A round with no questions counts as 0.
    pub fn percentage(&self) -> u32 {
        if self.questions.is_empty() {
            return 0;
        }

        ((self.score as f64 / self.questions.len() as f64) * 100.0).round() as u32
    }
}
