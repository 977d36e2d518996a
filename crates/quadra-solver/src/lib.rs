//! Unique/avoidable rectangle analysis over [`quadra_core`] bit-boards.
//!
//! The searcher walks a precomputed table of every geometrically possible
//! rectangle (two rows crossed with two columns) and, for each digit pair
//! present across the four corners, runs a battery of structural checks:
//! restricted corners (Types 1/2/5), naked subsets (Type 3), conjugate
//! pairs (Types 4/6, hidden rectangles), strong-link chains (`+2D`,
//! `+2B/1SL`, `+3X/2SL`, `+4C/3SL`), bivalue pincer wings (XY/XYZ/WXYZ),
//! and avoidable rectangles over cells placed during solving.
//!
//! Every successful check emits a [`RectangleStep`]: an immutable record
//! of the forced eliminations together with the pattern and evidence that
//! prove them. The search itself is read-only, deterministic, and
//! infallible; "nothing found" is an empty list, not an error.
//!
//! # Examples
//!
//! ```
//! use quadra_core::{Digit, DigitSet, Grid, Position};
//! use quadra_solver::find_all_rectangle_steps;
//!
//! let mut grid = Grid::new();
//! // Three corners restricted to {4,7}, the fourth with an extra 2.
//! for (pos, keep) in [
//!     (Position::new(0, 0), DigitSet::from_iter([Digit::D4, Digit::D7])),
//!     (Position::new(3, 0), DigitSet::from_iter([Digit::D4, Digit::D7])),
//!     (Position::new(0, 1), DigitSet::from_iter([Digit::D4, Digit::D7])),
//!     (
//!         Position::new(3, 1),
//!         DigitSet::from_iter([Digit::D2, Digit::D4, Digit::D7]),
//!     ),
//! ] {
//!     for digit in keep.complement() {
//!         grid.set_candidate(pos, digit, false);
//!     }
//! }
//!
//! let steps = find_all_rectangle_steps(&grid);
//! assert!(!steps.is_empty());
//! assert_eq!(steps[0].name(), "Unique Rectangle Type 1");
//! ```

pub use self::{
    rectangles::{RECTANGLES, Rectangle},
    searcher::{RectangleSearcher, SearcherOptions, find_all_rectangle_steps},
    step::{Conclusion, ConjugatePair, RectangleKind, RectangleStep},
};

mod checks;
pub mod rectangles;
pub mod searcher;
pub mod step;
pub mod testing;
mod view;
