//! Drag-selection tracking for the word search.
//!
//! A selection is a single continuous pointer gesture over grid cells. The
//! tracker keeps the selected path constrained to a straight line in one of
//! the eight grid directions: once a direction is established, samples off
//! that line are ignored rather than abandoning the gesture, and moving the
//! pointer back and forth along the line shrinks and grows the path.
//!
//! All arithmetic is exact integer arithmetic; coordinates live on a small
//! grid, so there is no need for tolerance-based comparisons.

use super::grid::Direction;

/// Tracker state. A new gesture always starts from [`SelectionState::Idle`];
/// the first visited cell anchors the selection, and the second (aligned)
/// cell establishes the direction.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SelectionState {
    Idle,
    Anchored {
        anchor: (usize, usize),
    },
    Tracking {
        anchor: (usize, usize),
        direction: Direction,
        path: Vec<(usize, usize)>,
    },
}

/// Tracks the cell path of one in-progress drag selection.
///
/// The tracker is exclusively owned by the single active gesture; calling
/// [`SelectionTracker::begin`] while a gesture is in progress abandons the
/// prior path.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    state: SelectionState,
}

impl Default for SelectionState {
    fn default() -> Self {
        SelectionState::Idle
    }
}

impl SelectionTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new selection anchored at the given cell, abandoning any
    /// selection in progress.
    pub fn begin(&mut self, cell: (usize, usize)) {
        self.state = SelectionState::Anchored { anchor: cell };
    }

    /// Extends the selection to the given cell.
    ///
    /// While anchored, the first cell different from the anchor establishes
    /// the direction, provided it lies on one of the eight grid lines
    /// through the anchor. While tracking, the path is recomputed as the
    /// full run from the anchor to `cell` whenever `cell` is on the
    /// established line (ahead of the anchor); any off-line cell is ignored
    /// and the current path is kept.
    pub fn extend(&mut self, cell: (usize, usize)) {
        match &mut self.state {
            SelectionState::Idle => {}
            SelectionState::Anchored { anchor } => {
                let anchor = *anchor;
                if cell == anchor {
                    return;
                }

                let dr = cell.0 as isize - anchor.0 as isize;
                let dc = cell.1 as isize - anchor.1 as isize;

                // A sample that is not on any of the eight lines through
                // the anchor cannot establish a direction; skip it.
                if let Some(direction) = Direction::from_step(dr.signum(), dc.signum()) {
                    if let Some(steps) = steps_along(anchor, cell, direction) {
                        self.state = SelectionState::Tracking {
                            anchor,
                            direction,
                            path: line_path(anchor, direction, steps),
                        };
                    }
                }
            }
            SelectionState::Tracking {
                anchor,
                direction,
                path,
            } => {
                if let Some(steps) = steps_along(*anchor, cell, *direction) {
                    *path = line_path(*anchor, *direction, steps);
                }
            }
        }
    }

    /// Ends the gesture and returns the selected path, resetting the
    /// tracker to idle. Returns [`None`] when no selection was in progress
    /// or the path never grew past the anchor cell.
    pub fn finish(&mut self) -> Option<Vec<(usize, usize)>> {
        match std::mem::take(&mut self.state) {
            SelectionState::Tracking { path, .. } if path.len() > 1 => Some(path),
            _ => None,
        }
    }

    /// The currently selected cells, in selection order. Empty when idle.
    pub fn path(&self) -> &[(usize, usize)] {
        match &self.state {
            SelectionState::Idle => &[],
            SelectionState::Anchored { anchor } => std::slice::from_ref(anchor),
            SelectionState::Tracking { path, .. } => path,
        }
    }

    /// The established direction, once a second cell has been visited.
    pub fn direction(&self) -> Option<Direction> {
        match &self.state {
            SelectionState::Tracking { direction, .. } => Some(*direction),
            _ => None,
        }
    }
}

/// Collinearity test: the number of whole steps from `anchor` to `point`
/// along `direction`, or [`None`] when `point` is off that ray (behind the
/// anchor counts as off).
fn steps_along(
    anchor: (usize, usize),
    point: (usize, usize),
    direction: Direction,
) -> Option<usize> {
    let (dr, dc) = direction.delta();
    let row_diff = point.0 as isize - anchor.0 as isize;
    let col_diff = point.1 as isize - anchor.1 as isize;

    // Signed displacement along whichever axis the direction moves on.
    // Unit components make the division a sign flip.
    let steps = if dr != 0 { row_diff * dr } else { col_diff * dc };

    if steps < 0 {
        return None;
    }

    if row_diff != steps * dr || col_diff != steps * dc {
        return None;
    }

    Some(steps as usize)
}

/// Materializes the path of `steps + 1` cells from `anchor` along
/// `direction`. Both endpoints are in bounds, so every intermediate cell is
/// as well.
fn line_path(anchor: (usize, usize), direction: Direction, steps: usize) -> Vec<(usize, usize)> {
    let (dr, dc) = direction.delta();

    (0..=steps as isize)
        .map(|k| {
            (
                (anchor.0 as isize + k * dr) as usize,
                (anchor.1 as isize + k * dc) as usize,
            )
        })
        .collect()
}
