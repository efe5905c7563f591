//! The word search activity: grid generation, drag selection, and
//! found-word bookkeeping.
//!
//! [`WordSearchGame`] is the surface the presentation layer talks to: it
//! routes pointer events into the [`SelectionTracker`] and resolves ended
//! selections against the placed words. Everything is synchronous and
//! single-gesture; any animation delay before visually committing a match
//! is the caller's concern.

pub mod grid;
pub mod selection;

pub use grid::{
    Cell, Direction, PlacedWord, WordSearch, WordSearchConfig, WordSpan, DEFAULT_GRID_SIZE,
    FILLER_ALPHABET,
};
pub use selection::SelectionTracker;

use rand::Rng;

use crate::vocab::VocabWord;

/// A word the player has found: the word, its translation, and the cell
/// path that matched it. Records are never removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoundWord {
    /// The matched word's text.
    pub word: String,

    /// The matched word's translation.
    pub translation: String,

    /// The selected cells, in selection order.
    pub path: Vec<(usize, usize)>,
}

/// One playable word search puzzle.
#[derive(Clone, Debug)]
pub struct WordSearchGame {
    search: WordSearch,
    tracker: SelectionTracker,
    found: Vec<FoundWord>,
}

impl WordSearchGame {
    /// Generates a new puzzle from the given candidate words.
    ///
    /// Candidates are expected to be puzzle-eligible already (see
    /// [`crate::vocab::words_for_word_search`]); ineligible or unlucky
    /// words are silently dropped by the grid builder.
    pub fn new(candidates: &[VocabWord], config: &WordSearchConfig) -> Self {
        Self::with_rng(candidates, config, &mut rand::thread_rng())
    }

    /// Like [`WordSearchGame::new`], with an explicit random source.
    pub fn with_rng<R: Rng>(
        candidates: &[VocabWord],
        config: &WordSearchConfig,
        rng: &mut R,
    ) -> Self {
        Self {
            search: WordSearch::generate_with_rng(candidates, config, rng),
            tracker: SelectionTracker::new(),
            found: Vec::new(),
        }
    }

    /// The underlying puzzle: grid contents and placed words.
    pub fn search(&self) -> &WordSearch {
        &self.search
    }

    /// Starts a drag selection at the given cell. Out-of-grid coordinates
    /// are ignored.
    pub fn begin_selection(&mut self, row: usize, col: usize) {
        if row < self.search.size() && col < self.search.size() {
            self.tracker.begin((row, col));
        }
    }

    /// Extends the current drag selection to the given cell. Out-of-grid
    /// coordinates and cells off the established line are ignored.
    pub fn extend_selection(&mut self, row: usize, col: usize) {
        if row < self.search.size() && col < self.search.size() {
            self.tracker.extend((row, col));
        }
    }

    /// Ends the drag selection and resolves it against the placed words.
    ///
    /// The selected letters match a placed word read forwards or backwards;
    /// which end of the word was the anchor does not matter. Returns the
    /// new found-word record on a match, or [`None`] for a miss, a
    /// single-cell selection, or a word that was already found (finding a
    /// word twice never duplicates its record).
    pub fn end_selection(&mut self) -> Option<&FoundWord> {
        let path = self.tracker.finish()?;

        let selected: String = path
            .iter()
            .map(|&(row, col)| self.search[(row, col)].letter)
            .collect();
        let reversed: String = selected.chars().rev().collect();

        let hit = self
            .search
            .placed_words()
            .iter()
            .find(|placed| placed.word.term == selected || placed.word.term == reversed)?;

        if self.found.iter().any(|found| found.word == hit.word.term) {
            return None;
        }

        let record = FoundWord {
            word: hit.word.term.clone(),
            translation: hit.word.translation.clone(),
            path,
        };

        let index = self.found.len();
        self.search.mark_found(&record.path, index);
        self.found.push(record);
        self.found.last()
    }

    /// The in-progress selection path, for highlighting. Empty when no
    /// gesture is active.
    pub fn selection_path(&self) -> &[(usize, usize)] {
        self.tracker.path()
    }

    /// The words found so far, in the order they were found.
    pub fn found_words(&self) -> &[FoundWord] {
        &self.found
    }

    /// Whether a placed word has been found yet.
    pub fn is_found(&self, term: &str) -> bool {
        self.found.iter().any(|found| found.word == term)
    }

    /// Whether every placed word has been found. Trivially true for a
    /// puzzle with no placed words.
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.search.placed_words().len()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn game_with(terms: &[(&str, &str)], seed: u64) -> WordSearchGame {
        let candidates: Vec<VocabWord> = terms
            .iter()
            .map(|&(term, translation)| VocabWord::new(term, translation))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        WordSearchGame::with_rng(&candidates, &WordSearchConfig::default(), &mut rng)
    }

    /// Drives the tracker along a placed word's cells, front to back or
    /// back to front.
    fn select_span(game: &mut WordSearchGame, cells: &[(usize, usize)], reverse: bool) {
        let mut cells = cells.to_vec();
        if reverse {
            cells.reverse();
        }

        let (row, col) = cells[0];
        game.begin_selection(row, col);
        for &(row, col) in &cells[1..] {
            game.extend_selection(row, col);
        }
    }

    #[test]
    fn selecting_a_placed_word_finds_it() {
        let mut game = game_with(&[("кор", "work"), ("нон", "bread")], 21);
        let placed = game.search().placed_words()[0].clone();

        select_span(&mut game, &placed.span.cells(), false);
        let found = game.end_selection().cloned().unwrap();

        assert_eq!(found.word, placed.word.term);
        assert_eq!(found.translation, placed.word.translation);
        assert_eq!(found.path, placed.span.cells());
        assert!(game.is_found(&placed.word.term));
    }

    #[test]
    fn reverse_selection_also_matches() {
        let mut game = game_with(&[("кор", "work"), ("нон", "bread")], 22);
        let placed = game.search().placed_words()[0].clone();

        select_span(&mut game, &placed.span.cells(), true);
        let found = game.end_selection().cloned().unwrap();

        assert_eq!(found.word, placed.word.term);
        // The record keeps the player's traversal order.
        let mut reversed = placed.span.cells();
        reversed.reverse();
        assert_eq!(found.path, reversed);
    }

    #[test]
    fn finding_a_word_twice_is_idempotent() {
        let mut game = game_with(&[("кор", "work")], 23);
        let cells = game.search().placed_words()[0].span.cells();

        select_span(&mut game, &cells, false);
        assert!(game.end_selection().is_some());

        select_span(&mut game, &cells, true);
        assert!(game.end_selection().is_none());

        assert_eq!(game.found_words().len(), 1);
    }

    #[test]
    fn found_cells_are_marked_with_the_match_index() {
        let mut game = game_with(&[("кор", "work"), ("гул", "flower")], 24);
        let first = game.search().placed_words()[0].span.cells();

        select_span(&mut game, &first, false);
        game.end_selection();

        for &(row, col) in &first {
            let cell = game.search()[(row, col)];
            assert!(cell.found);
            assert_eq!(cell.word_index, Some(0));
        }
    }

    #[test]
    fn a_miss_changes_nothing() {
        let mut game = game_with(&[("кор", "work")], 25);

        // A two-cell selection can never spell the only placed word, which
        // has three letters.
        game.begin_selection(0, 0);
        game.extend_selection(0, 1);

        assert!(game.end_selection().is_none());
        assert!(game.found_words().is_empty());
        assert!(game.selection_path().is_empty());

        for row in 0..game.search().size() {
            for col in 0..game.search().size() {
                assert!(!game.search()[(row, col)].found);
            }
        }
    }

    #[test]
    fn single_cell_selection_never_matches() {
        let mut game = game_with(&[("кор", "work")], 26);
        let (row, col) = game.search().placed_words()[0].span.cells()[0];

        game.begin_selection(row, col);
        assert!(game.end_selection().is_none());
    }

    #[test]
    fn out_of_grid_coordinates_are_ignored() {
        let mut game = game_with(&[("кор", "work")], 27);

        game.begin_selection(99, 0);
        assert!(game.selection_path().is_empty());
        game.extend_selection(0, 99);
        assert!(game.selection_path().is_empty());
        assert!(game.end_selection().is_none());
    }

    #[test]
    fn completion_tracks_all_placed_words() {
        let mut game = game_with(&[("кор", "work"), ("нон", "bread")], 28);
        assert!(!game.is_complete());

        let spans: Vec<Vec<(usize, usize)>> = game
            .search()
            .placed_words()
            .iter()
            .map(|placed| placed.span.cells())
            .collect();

        for cells in &spans {
            select_span(&mut game, cells, false);
            game.end_selection();
        }

        assert!(game.is_complete());
    }

    #[test]
    fn empty_placed_set_is_a_valid_puzzle() {
        // A word longer than the grid can never place.
        let mut game = game_with(&[("абвгдеёзийкл", "unplaceable")], 29);

        assert!(game.search().placed_words().is_empty());
        assert!(game.is_complete());

        game.begin_selection(0, 0);
        game.extend_selection(0, 3);
        assert!(game.end_selection().is_none());
    }
}
