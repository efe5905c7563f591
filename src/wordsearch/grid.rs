//! Word search grid construction.
//!
//! Placement is a best-effort Monte Carlo process: each word gets a budget
//! of random (start, direction) attempts and is silently dropped when the
//! budget runs out. The placed-word list the builder returns is therefore
//! the authoritative list of findable words, which may be shorter than the
//! candidate list.

use std::fmt::Display;
use std::ops::Index;

use array2d::Array2D;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::vocab::VocabWord;

/// Letters used to fill cells not covered by any placed word. This is the
/// Tajik alphabet minus letters that only occur in Russian loanwords.
pub const FILLER_ALPHABET: &str = "абвгдеёзийклмнопрстуфхчшэюя";

/// Default number of rows and columns in the puzzle grid.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// How many of the shuffled candidates the diagonal-priority pass considers.
const DIAGONAL_CANDIDATES: usize = 3;

/// The diagonal-priority pass stops early once this many words are placed.
const DIAGONAL_TARGET: usize = 2;

/// Attempt budget per word during the diagonal-priority pass.
const DIAGONAL_ATTEMPTS: usize = 50;

/// Attempt budget per word during the general pass.
const PLACEMENT_ATTEMPTS: usize = 100;

/// The direction a word runs in inside the grid, as a (row, column) unit step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The word goes up from the start position.
    Up,

    /// The word goes down from the start position.
    Down,

    /// The word goes left from the start position.
    Left,

    /// The word goes right from the start position.
    Right,

    /// The word goes diagonally up and left from the start position.
    DiagonalUpLeft,

    /// The word goes diagonally up and right from the start position.
    DiagonalUpRight,

    /// The word goes diagonally down and left from the start position.
    DiagonalDownLeft,

    /// The word goes diagonally down and right from the start position.
    DiagonalDownRight,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::DiagonalUpLeft,
        Direction::DiagonalUpRight,
        Direction::DiagonalDownLeft,
        Direction::DiagonalDownRight,
    ];

    /// The four diagonal directions.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::DiagonalUpLeft,
        Direction::DiagonalUpRight,
        Direction::DiagonalDownLeft,
        Direction::DiagonalDownRight,
    ];

    /// Returns a uniformly random direction.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Returns a uniformly random diagonal direction.
    pub fn random_diagonal<R: Rng>(rng: &mut R) -> Self {
        Self::DIAGONALS[rng.gen_range(0..Self::DIAGONALS.len())]
    }

    /// The (row, column) step this direction takes per letter.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::DiagonalUpLeft => (-1, -1),
            Direction::DiagonalUpRight => (-1, 1),
            Direction::DiagonalDownLeft => (1, -1),
            Direction::DiagonalDownRight => (1, 1),
        }
    }

    /// Maps a (row, column) unit step back to a direction. Returns [`None`]
    /// for the zero step or any step with a component outside {-1, 0, 1}.
    pub fn from_step(dr: isize, dc: isize) -> Option<Self> {
        match (dr, dc) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            (-1, -1) => Some(Direction::DiagonalUpLeft),
            (-1, 1) => Some(Direction::DiagonalUpRight),
            (1, -1) => Some(Direction::DiagonalDownLeft),
            (1, 1) => Some(Direction::DiagonalDownRight),
            _ => None,
        }
    }
}

/// Describes where a word's letters are placed in the grid: a beginning
/// coordinate, a length, and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    /// The (row, column) coordinate of the word's first letter.
    pub begin: (usize, usize),

    /// The length of the word, in characters.
    pub len: usize,

    /// The direction the word runs in.
    pub direction: Direction,
}

impl WordSpan {
    /// Creates a new [WordSpan] from a beginning coordinate, a length, and a direction.
    pub fn new(begin: (usize, usize), len: usize, direction: Direction) -> Self {
        Self {
            begin,
            len,
            direction,
        }
    }

    /// Returns the grid coordinates the word covers, in letter order.
    ///
    /// Spans produced by the builder are always fully in bounds, so the
    /// coordinates are valid grid indices.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (dr, dc) = self.direction.delta();

        (0..self.len as isize)
            .map(|i| {
                (
                    (self.begin.0 as isize + i * dr) as usize,
                    (self.begin.1 as isize + i * dc) as usize,
                )
            })
            .collect()
    }
}

/// A word that found a valid placement, together with where it sits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
    /// The vocabulary word.
    pub word: VocabWord,

    /// Where the word's letters sit in the grid.
    pub span: WordSpan,
}

/// One cell of the puzzle grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// The letter shown in this cell.
    pub letter: char,

    /// Whether this cell is part of a word the player has found.
    pub found: bool,

    /// Index of the found-word record covering this cell, for distinct
    /// visual treatment of overlapping finds.
    pub word_index: Option<usize>,
}

/// The configuration for generating a word search grid.
#[derive(Clone, Debug)]
pub struct WordSearchConfig {
    /// The number of rows and columns in the square grid.
    pub size: usize,

    /// Letters used to fill cells no word covers. When empty,
    /// [`FILLER_ALPHABET`] is used instead.
    pub filler_alphabet: String,
}

impl Default for WordSearchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            filler_alphabet: FILLER_ALPHABET.to_string(),
        }
    }
}

/// A generated word search: a fully filled letter grid plus the subset of
/// candidate words that found a valid placement.
#[derive(Clone, Debug)]
pub struct WordSearch {
    grid: Array2D<Cell>,
    placed: Vec<PlacedWord>,
}

impl WordSearch {
    /// Generates a word search from the given candidate words.
    ///
    /// Candidates are shuffled, then placed in three passes: a
    /// diagonal-priority pass that tries to place up to two of the first
    /// three candidates diagonally (so puzzles are not purely
    /// horizontal/vertical), a general pass over all remaining candidates
    /// using all eight directions, and a fill pass that assigns a random
    /// filler letter to every cell no word covers.
    ///
    /// A candidate that exhausts its attempt budget is dropped: it appears
    /// neither in the grid nor in [`WordSearch::placed_words`]. Callers
    /// must be prepared for fewer placed words than candidates, including
    /// none at all.
    pub fn generate(candidates: &[VocabWord], config: &WordSearchConfig) -> Self {
        Self::generate_with_rng(candidates, config, &mut rand::thread_rng())
    }

    /// Like [`WordSearch::generate`], with an explicit random source.
    pub fn generate_with_rng<R: Rng>(
        candidates: &[VocabWord],
        config: &WordSearchConfig,
        rng: &mut R,
    ) -> Self {
        let size = config.size;
        let mut letters: Array2D<Option<char>> = Array2D::filled_with(None, size, size);

        let mut shuffled: Vec<VocabWord> = candidates.to_vec();
        shuffled.shuffle(rng);

        let mut placed: Vec<PlacedWord> = Vec::new();
        let mut is_placed = vec![false; shuffled.len()];

        // Diagonal-priority pass. This is a soft guarantee: if the attempt
        // budget runs out, the pass ends without error and the general pass
        // picks the words up again.
        let mut diagonals_placed = 0;
        for i in 0..shuffled.len().min(DIAGONAL_CANDIDATES) {
            if diagonals_placed >= DIAGONAL_TARGET {
                break;
            }

            let chars: Vec<char> = shuffled[i].term.chars().collect();

            for _ in 0..DIAGONAL_ATTEMPTS {
                let direction = Direction::random_diagonal(rng);
                let begin = (rng.gen_range(0..size), rng.gen_range(0..size));

                if can_place(&letters, &chars, begin, direction) {
                    place(&mut letters, &chars, begin, direction);
                    placed.push(PlacedWord {
                        word: shuffled[i].clone(),
                        span: WordSpan::new(begin, chars.len(), direction),
                    });
                    is_placed[i] = true;
                    diagonals_placed += 1;
                    break;
                }
            }
        }

        // General pass over everything not yet placed.
        for (i, word) in shuffled.iter().enumerate() {
            if is_placed[i] {
                continue;
            }

            let chars: Vec<char> = word.term.chars().collect();
            let mut success = false;

            for _ in 0..PLACEMENT_ATTEMPTS {
                let direction = Direction::random(rng);
                let begin = (rng.gen_range(0..size), rng.gen_range(0..size));

                if can_place(&letters, &chars, begin, direction) {
                    place(&mut letters, &chars, begin, direction);
                    placed.push(PlacedWord {
                        word: word.clone(),
                        span: WordSpan::new(begin, chars.len(), direction),
                    });
                    success = true;
                    break;
                }
            }

            if !success {
                log::debug!(
                    "dropping word {:?}: no valid placement in {} attempts",
                    word.term,
                    PLACEMENT_ATTEMPTS
                );
            }
        }

        log::debug!(
            "placed {} of {} candidate words ({} diagonal)",
            placed.len(),
            candidates.len(),
            diagonals_placed
        );

        // Fill pass: every cell no word covers gets a random filler letter.
        let alphabet: Vec<char> = if config.filler_alphabet.is_empty() {
            FILLER_ALPHABET.chars().collect()
        } else {
            config.filler_alphabet.chars().collect()
        };

        let mut grid = Array2D::filled_with(Cell::default(), size, size);
        for row in 0..size {
            for col in 0..size {
                grid[(row, col)].letter = match letters[(row, col)] {
                    Some(ch) => ch,
                    None => alphabet[rng.gen_range(0..alphabet.len())],
                };
            }
        }

        Self { grid, placed }
    }

    /// The number of rows and columns in the grid.
    pub fn size(&self) -> usize {
        self.grid.num_rows()
    }

    /// Provides a reference to the inner grid.
    pub fn grid(&self) -> &Array2D<Cell> {
        &self.grid
    }

    /// Gets the cell at the specified coordinate, returning [`Option::None`]
    /// if the coordinate is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.grid.get(row, column).copied()
    }

    /// The words that found a valid placement, with their spans. Only these
    /// words can be found by the player.
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.placed
    }

    /// Marks every cell on `path` as found and tags it with the found-word
    /// record index, for per-word highlighting.
    pub(crate) fn mark_found(&mut self, path: &[(usize, usize)], word_index: usize) {
        for &(row, col) in path {
            let cell = &mut self.grid[(row, col)];
            cell.found = true;
            cell.word_index = Some(word_index);
        }
    }
}

/// Checks that every cell the word would cover is in bounds and either
/// empty or already holding the letter the word needs there. Nothing is
/// written; shared-letter overlap is allowed, conflicting overlap is not.
fn can_place(
    letters: &Array2D<Option<char>>,
    word: &[char],
    begin: (usize, usize),
    direction: Direction,
) -> bool {
    let rows = letters.num_rows() as isize;
    let columns = letters.num_columns() as isize;
    let (dr, dc) = direction.delta();

    for (i, &ch) in word.iter().enumerate() {
        let row = begin.0 as isize + i as isize * dr;
        let col = begin.1 as isize + i as isize * dc;

        if row < 0 || row >= rows || col < 0 || col >= columns {
            return false;
        }

        if let Some(existing) = letters[(row as usize, col as usize)] {
            if existing != ch {
                return false;
            }
        }
    }

    true
}

/// Writes the word's letters along the span. Only called after
/// [`can_place`] has validated the whole placement.
fn place(
    letters: &mut Array2D<Option<char>>,
    word: &[char],
    begin: (usize, usize),
    direction: Direction,
) {
    let (dr, dc) = direction.delta();

    for (i, &ch) in word.iter().enumerate() {
        let row = (begin.0 as isize + i as isize * dr) as usize;
        let col = (begin.1 as isize + i as isize * dc) as usize;
        letters[(row, col)] = Some(ch);
    }
}

impl Index<(usize, usize)> for WordSearch {
    type Output = Cell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for WordSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.placed.iter();

        for row in self.grid.rows_iter() {
            for cell in row {
                f.write_fmt(format_args!("{} ", cell.letter))?;
            }

            match words_iter.next() {
                Some(placed) => f.write_fmt(format_args!(
                    "| {} ({})\n",
                    placed.word.term, placed.word.translation
                ))?,
                None => f.write_str("|\n")?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn words(terms: &[(&str, &str)]) -> Vec<VocabWord> {
        terms
            .iter()
            .map(|&(term, translation)| VocabWord::new(term, translation))
            .collect()
    }

    #[test]
    fn direction_step_roundtrip() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            assert_eq!(Direction::from_step(dr, dc), Some(direction));
        }

        assert_eq!(Direction::from_step(0, 0), None);
        assert_eq!(Direction::from_step(2, 1), None);
    }

    #[test]
    fn span_cells_follow_direction() {
        let span = WordSpan::new((5, 2), 3, Direction::DiagonalUpRight);
        assert_eq!(span.cells(), vec![(5, 2), (4, 3), (3, 4)]);

        let span = WordSpan::new((0, 9), 4, Direction::Left);
        assert_eq!(span.cells(), vec![(0, 9), (0, 8), (0, 7), (0, 6)]);
    }

    #[test]
    fn grid_is_fully_filled() {
        let candidates = words(&[("кор", "work"), ("оби", "of water"), ("нон", "bread")]);
        let mut rng = StdRng::seed_from_u64(42);

        let search = WordSearch::generate_with_rng(&candidates, &WordSearchConfig::default(), &mut rng);

        for row in 0..search.size() {
            for col in 0..search.size() {
                let cell = search[(row, col)];
                assert_ne!(cell.letter, char::default());
                assert!(!cell.found);
                assert!(cell.word_index.is_none());
            }
        }
    }

    #[test]
    fn placed_words_spell_out_on_grid() {
        let candidates = words(&[
            ("кор", "work"),
            ("нон", "bread"),
            ("мактаб", "school"),
            ("дарахт", "tree"),
        ]);
        let mut rng = StdRng::seed_from_u64(1);

        let search = WordSearch::generate_with_rng(&candidates, &WordSearchConfig::default(), &mut rng);

        for placed in search.placed_words() {
            let spelled: String = placed
                .span
                .cells()
                .iter()
                .map(|&(row, col)| search[(row, col)].letter)
                .collect();
            assert_eq!(spelled, placed.word.term);
        }
    }

    #[test]
    fn placed_words_are_a_subset_of_candidates() {
        let candidates = words(&[("кор", "work"), ("гул", "flower"), ("осмон", "sky")]);
        let mut rng = StdRng::seed_from_u64(9);

        let search = WordSearch::generate_with_rng(&candidates, &WordSearchConfig::default(), &mut rng);

        assert!(search.placed_words().len() <= candidates.len());
        for placed in search.placed_words() {
            assert!(candidates.contains(&placed.word));
        }

        // No word appears in the placed set twice.
        for (i, a) in search.placed_words().iter().enumerate() {
            for b in &search.placed_words()[i + 1..] {
                assert_ne!(a.word.term, b.word.term);
            }
        }
    }

    #[test]
    fn short_words_on_a_large_grid_all_place() {
        // Two 3-letter words on a 10x10 grid fail only if 100 random
        // attempts all miss, which has vanishing probability.
        let candidates = words(&[("кор", "work"), ("оби", "of water")]);
        let mut rng = StdRng::seed_from_u64(123);

        let search = WordSearch::generate_with_rng(&candidates, &WordSearchConfig::default(), &mut rng);

        assert_eq!(search.placed_words().len(), 2);
    }

    #[test]
    fn oversized_word_is_dropped() {
        // 12 characters can never fit a 10x10 grid in any direction.
        let candidates = words(&[("абвгдеёзийкл", "unplaceable"), ("кор", "work")]);
        let mut rng = StdRng::seed_from_u64(5);

        let search = WordSearch::generate_with_rng(&candidates, &WordSearchConfig::default(), &mut rng);

        assert!(search
            .placed_words()
            .iter()
            .all(|placed| placed.word.term != "абвгдеёзийкл"));

        // The grid is still fully filled for the words that did place.
        for row in 0..search.size() {
            for col in 0..search.size() {
                assert_ne!(search[(row, col)].letter, char::default());
            }
        }
    }

    #[test]
    fn empty_candidate_list_yields_empty_placed_set() {
        let mut rng = StdRng::seed_from_u64(2);

        let search = WordSearch::generate_with_rng(&[], &WordSearchConfig::default(), &mut rng);

        assert!(search.placed_words().is_empty());
        for row in 0..search.size() {
            for col in 0..search.size() {
                assert!(FILLER_ALPHABET.contains(search[(row, col)].letter));
            }
        }
    }

    #[test]
    fn filler_letters_come_from_the_configured_alphabet() {
        let config = WordSearchConfig {
            size: 8,
            filler_alphabet: "ab".to_string(),
        };
        let mut rng = StdRng::seed_from_u64(11);

        let search = WordSearch::generate_with_rng(&words(&[("кор", "work")]), &config, &mut rng);

        let word_cells: Vec<(usize, usize)> = search
            .placed_words()
            .iter()
            .flat_map(|placed| placed.span.cells())
            .collect();

        for row in 0..search.size() {
            for col in 0..search.size() {
                if !word_cells.contains(&(row, col)) {
                    assert!(matches!(search[(row, col)].letter, 'a' | 'b'));
                }
            }
        }
    }
}
