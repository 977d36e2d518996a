//! The rectangle step searcher.

use std::collections::HashSet;

use quadra_core::{DigitSet, Grid};

use crate::{
    RectangleStep,
    checks::{self, UrCtx},
    rectangles::{RECTANGLES, Rectangle},
    view::BoardView,
};

/// Options controlling a search pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearcherOptions {
    /// Report rectangles whose expected candidates have been partially
    /// removed by other logic. Off by default: every corner must still
    /// show both pair digits for a pattern to be reported.
    pub allow_incomplete: bool,
}

/// Searches a grid for every provable unique/avoidable rectangle step.
///
/// The searcher is a bounded, pure computation: it reads the grid once,
/// walks the precomputed rectangle table in a fixed order, and returns a
/// sorted, deduplicated step list. It never mutates the grid and never
/// fails; a grid where no variant applies yields an empty list.
///
/// Consistency of the input is the caller's concern; the searcher does
/// not call [`Grid::check_consistency`] itself.
///
/// # Examples
///
/// ```
/// use quadra_core::Grid;
/// use quadra_solver::RectangleSearcher;
///
/// let grid = Grid::new();
/// let steps = RectangleSearcher::new().find_steps(&grid);
/// assert!(steps.is_empty());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RectangleSearcher {
    options: SearcherOptions,
}

impl RectangleSearcher {
    /// Creates a searcher with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a searcher with the given options.
    #[must_use]
    pub fn with_options(options: SearcherOptions) -> Self {
        Self { options }
    }

    /// Returns the configured options.
    #[must_use]
    pub fn options(&self) -> SearcherOptions {
        self.options
    }

    /// Runs one search pass and returns the steps in reporting order:
    /// simpler variants first, ties broken by rectangle cells, then digit
    /// pair. Steps repeating an earlier step's exact conclusions are
    /// dropped.
    #[must_use]
    pub fn find_steps(&self, grid: &Grid) -> Vec<RectangleStep> {
        let view = BoardView::new(grid);
        let mut steps = Vec::new();

        for rect in &RECTANGLES {
            if !rect.spans_two_boxes() {
                continue;
            }
            self.search_unique(&view, rect, &mut steps);
            Self::search_avoidable(&view, rect, &mut steps);
        }

        steps.sort_unstable();
        let mut seen = HashSet::new();
        steps.retain(|step| seen.insert(step.conclusions().to_vec()));
        log::debug!("rectangle search pass produced {} steps", steps.len());
        for step in &steps {
            log::trace!("{step}");
        }
        steps
    }

    /// Strict mode: all four corners must still be empty.
    fn search_unique(&self, view: &BoardView, rect: &Rectangle, out: &mut Vec<RectangleStep>) {
        if !view.empty_cells().is_superset(rect.cell_set()) {
            return;
        }
        let union = rect
            .cells()
            .iter()
            .fold(DigitSet::EMPTY, |acc, &pos| acc | view.candidates(pos));

        for d1 in union {
            for d2 in union {
                if d2 <= d1 {
                    continue;
                }
                let pair = DigitSet::from_iter([d1, d2]);
                if !self.pair_applies(view, rect, pair) {
                    continue;
                }
                let ctx = UrCtx { view, rect, d1, d2, pair };
                checks::type_1::find(&ctx, out);
                checks::type_2::find(&ctx, out);
                checks::type_3::find(&ctx, out);
                checks::type_4::find(&ctx, out);
                checks::type_6::find(&ctx, out);
                checks::hidden::find(&ctx, out);
                checks::external::find(&ctx, out);
                checks::wings::find(&ctx, out);
            }
        }
    }

    /// A digit pair is worth checking when at least one corner still
    /// holds both digits; a fully-formed pattern additionally shows both
    /// digits in every corner unless incomplete patterns are admitted.
    fn pair_applies(&self, view: &BoardView, rect: &Rectangle, pair: DigitSet) -> bool {
        let with_both = rect
            .cells()
            .iter()
            .filter(|&&pos| view.candidates(pos).is_superset(pair))
            .count();
        if with_both == 0 {
            return false;
        }
        self.options.allow_incomplete || with_both == 4
    }

    /// Avoidable mode: no Given corners, at least one empty corner, and
    /// enough Modifiable placements to threaten the swappable pattern.
    fn search_avoidable(view: &BoardView, rect: &Rectangle, out: &mut Vec<RectangleStep>) {
        let cells = rect.cell_set();
        if !(cells & view.given_cells()).is_empty() {
            return;
        }
        let placed = (cells & view.modifiable_cells()).len();
        let empty = (cells & view.empty_cells()).len();
        if empty == 0 || placed < 2 {
            return;
        }
        checks::avoidable::find(view, rect, out);
    }
}

/// Searches `grid` with default options; the single entry point for
/// callers that do not need configuration.
#[must_use]
pub fn find_all_rectangle_steps(grid: &Grid) -> Vec<RectangleStep> {
    RectangleSearcher::new().find_steps(grid)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use proptest::prelude::*;
    use quadra_core::{CellState, Digit, Grid, Position};

    use super::*;
    use crate::{Conclusion, testing::SearchTester};

    #[test]
    fn test_empty_grid_yields_nothing() {
        // No two cells share a restricted candidate pair: Scenario D.
        assert!(find_all_rectangle_steps(&Grid::new()).is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let tester = SearchTester::new()
            .restrict(Position::new(0, 0), [Digit::D4, Digit::D7])
            .restrict(Position::new(3, 0), [Digit::D4, Digit::D7])
            .restrict(Position::new(0, 1), [Digit::D4, Digit::D7])
            .restrict(Position::new(3, 1), [Digit::D2, Digit::D4, Digit::D7]);
        let first = RectangleSearcher::new().find_steps(tester.grid());
        let second = RectangleSearcher::new().find_steps(tester.grid());
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_is_sorted_and_deduplicated() {
        let tester = SearchTester::new()
            .restrict(Position::new(0, 0), [Digit::D1, Digit::D2])
            .restrict(Position::new(3, 0), [Digit::D1, Digit::D2])
            .restrict(Position::new(0, 1), [Digit::D1, Digit::D2, Digit::D9])
            .restrict(Position::new(3, 1), [Digit::D1, Digit::D2, Digit::D9]);
        let steps = RectangleSearcher::new().find_steps(tester.grid());
        let mut sorted = steps.clone();
        sorted.sort();
        assert_eq!(steps, sorted);
        for (i, a) in steps.iter().enumerate() {
            for b in &steps[i + 1..] {
                assert_ne!(a.conclusions(), b.conclusions());
            }
        }
    }

    /// A valid solved grid: row `y` is the base row rotated left by
    /// `offsets[y]`.
    fn solved_rows(relabel: &[u8; 9]) -> [[u8; 9]; 9] {
        const BASE: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        const OFFSETS: [usize; 9] = [0, 3, 6, 1, 4, 7, 2, 5, 8];
        let mut rows = [[0u8; 9]; 9];
        for (y, row) in rows.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let digit = BASE[(x + OFFSETS[y]) % 9];
                *cell = relabel[(digit - 1) as usize];
            }
        }
        rows
    }

    /// Counts completions of the grid by exhausting the empty cells;
    /// stops at `limit`. Each branch works on its own clone because
    /// candidate propagation is monotonic and cannot be unwound.
    fn count_solutions(grid: &Grid, empties: &[Position], limit: usize) -> usize {
        let Some((&pos, rest)) = empties.split_first() else {
            return 1;
        };
        let mut found = 0;
        for digit in grid.candidates(pos) {
            let mut next = grid.clone();
            next.set_digit(pos, digit);
            found += count_solutions(&next, rest, limit - found);
            if found >= limit {
                break;
            }
        }
        found
    }

    proptest! {
        /// Soundness: on a uniquely completable carve of a solved grid,
        /// no emitted elimination targets the solution digit and no
        /// assignment contradicts it.
        #[test]
        fn prop_steps_never_remove_the_solution(
            relabel in Just(vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9]).prop_shuffle(),
            carved in prop::collection::hash_set(0u8..81, 1..12),
            modifiable in any::<bool>(),
        ) {
            let relabel: [u8; 9] = relabel.try_into().unwrap();
            let rows = solved_rows(&relabel);

            let mut grid = Grid::new();
            for pos in Position::all() {
                if !carved.contains(&pos.index()) {
                    let digit = Digit::new(rows[pos.y() as usize][pos.x() as usize]);
                    grid.set_digit(pos, digit);
                }
            }
            if !modifiable {
                grid.fix();
            }

            let empties: Vec<Position> = Position::all()
                .filter(|pos| grid.state(*pos) == CellState::Empty)
                .collect();
            prop_assume!(count_solutions(&grid, &empties, 2) == 1);

            for step in find_all_rectangle_steps(&grid) {
                for conclusion in step.conclusions() {
                    match *conclusion {
                        Conclusion::Elimination { pos, digit } => {
                            prop_assert_ne!(
                                digit.value(),
                                rows[pos.y() as usize][pos.x() as usize],
                                "step {} removes the solution digit at {}",
                                step,
                                pos
                            );
                        }
                        Conclusion::Assignment { pos, digit } => {
                            prop_assert_eq!(
                                digit.value(),
                                rows[pos.y() as usize][pos.x() as usize]
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_grid_text_round_trip_search() {
        // A mid-solve grid parsed from text searches without panicking
        // and twice identically.
        let grid = Grid::from_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        ",
        )
        .unwrap();
        let first = find_all_rectangle_steps(&grid);
        let second = find_all_rectangle_steps(&grid);
        assert_eq!(first, second);
    }
}
