//! Test utilities for the rectangle searcher.
//!
//! [`SearchTester`] builds grids with precise candidate layouts, runs a
//! search pass, and asserts on the produced steps with chained,
//! `#[track_caller]`-annotated methods.
//!
//! # Example
//!
//! ```
//! use quadra_core::{Digit, Position};
//! use quadra_solver::testing::SearchTester;
//!
//! SearchTester::new()
//!     .restrict(Position::new(0, 0), [Digit::D4, Digit::D7])
//!     .restrict(Position::new(3, 0), [Digit::D4, Digit::D7])
//!     .restrict(Position::new(0, 1), [Digit::D4, Digit::D7])
//!     .restrict(Position::new(3, 1), [Digit::D2, Digit::D4, Digit::D7])
//!     .search()
//!     .assert_eliminates(Position::new(3, 1), Digit::D4)
//!     .assert_eliminates(Position::new(3, 1), Digit::D7);
//! ```

use std::str::FromStr as _;

use quadra_core::{Digit, DigitSet, Grid, Position};

use crate::{RectangleSearcher, RectangleStep, SearcherOptions};

/// A fluent builder for searcher tests.
#[derive(Debug, Default)]
pub struct SearchTester {
    grid: Grid,
    options: SearcherOptions,
}

impl SearchTester {
    /// Creates a tester over an empty grid with all candidates open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tester from a puzzle string (the [`Grid`] text format).
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed.
    #[track_caller]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self { grid: Grid::from_str(s).unwrap(), options: SearcherOptions::default() }
    }

    /// Creates a tester over an existing grid.
    #[must_use]
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid, options: SearcherOptions::default() }
    }

    /// Restricts a cell's candidates to exactly the given digits.
    #[must_use]
    pub fn restrict<I>(mut self, pos: Position, digits: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let keep = DigitSet::from_iter(digits);
        for digit in keep.complement() {
            self.grid.set_candidate(pos, digit, false);
        }
        self
    }

    /// Removes a single candidate from a cell.
    #[must_use]
    pub fn remove(mut self, pos: Position, digit: Digit) -> Self {
        self.grid.set_candidate(pos, digit, false);
        self
    }

    /// Assigns a digit to a cell as a Modifiable placement.
    #[must_use]
    pub fn assign(mut self, pos: Position, digit: Digit) -> Self {
        self.grid.set_digit(pos, digit);
        self
    }

    /// Admits incomplete (partially solved) rectangle patterns.
    #[must_use]
    pub fn allow_incomplete(mut self) -> Self {
        self.options.allow_incomplete = true;
        self
    }

    /// Returns the grid built so far.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs a search pass and returns the result for assertions.
    #[must_use]
    pub fn search(&self) -> SearchResult {
        let steps = RectangleSearcher::with_options(self.options).find_steps(&self.grid);
        SearchResult { steps }
    }
}

/// The outcome of one search pass.
#[derive(Debug)]
pub struct SearchResult {
    steps: Vec<RectangleStep>,
}

impl SearchResult {
    /// Returns the steps in reporting order.
    #[must_use]
    pub fn steps(&self) -> &[RectangleStep] {
        &self.steps
    }

    /// Returns the first step matching a predicate.
    pub fn find<F>(&self, predicate: F) -> Option<&RectangleStep>
    where
        F: FnMut(&&RectangleStep) -> bool,
    {
        self.steps.iter().find(predicate)
    }

    /// Asserts that the search produced no steps.
    ///
    /// # Panics
    ///
    /// Panics if any step was produced.
    #[track_caller]
    pub fn assert_empty(&self) -> &Self {
        assert!(
            self.steps.is_empty(),
            "expected no steps, found {}: {:?}",
            self.steps.len(),
            self.steps
        );
        self
    }

    /// Asserts that some step eliminates `digit` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if no step produces the elimination.
    #[track_caller]
    pub fn assert_eliminates(&self, pos: Position, digit: Digit) -> &Self {
        assert!(
            self.steps
                .iter()
                .any(|step| step.eliminations().any(|e| e == (pos, digit))),
            "no step eliminates {digit} at {pos}; steps: {:?}",
            self.steps
        );
        self
    }

    /// Asserts that no step eliminates `digit` at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if some step produces the elimination.
    #[track_caller]
    pub fn assert_not_eliminates(&self, pos: Position, digit: Digit) -> &Self {
        assert!(
            !self
                .steps
                .iter()
                .any(|step| step.eliminations().any(|e| e == (pos, digit))),
            "a step unexpectedly eliminates {digit} at {pos}; steps: {:?}",
            self.steps
        );
        self
    }

    /// Asserts that some step satisfies the predicate.
    ///
    /// # Panics
    ///
    /// Panics if no step matches.
    #[track_caller]
    pub fn assert_any<F>(&self, mut predicate: F) -> &Self
    where
        F: FnMut(&RectangleStep) -> bool,
    {
        assert!(
            self.steps.iter().any(|step| predicate(step)),
            "no step matches the predicate; steps: {:?}",
            self.steps
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restrict_builds_exact_candidates() {
        let tester = SearchTester::new().restrict(Position::new(2, 2), [Digit::D1, Digit::D2]);
        assert_eq!(
            tester.grid().candidates(Position::new(2, 2)),
            DigitSet::from_iter([Digit::D1, Digit::D2])
        );
    }

    #[test]
    fn test_empty_grid_produces_no_steps() {
        SearchTester::new().search().assert_empty();
    }
}
