//! Bit-board data structures for 9x9 constraint grids.
//!
//! This crate provides the substrate that deduction searchers read: compact
//! bit-sets over cells and candidates, and an 81-cell [`Grid`] whose digit
//! assignments automatically propagate to peer cells.
//!
//! # Overview
//!
//! - [`Digit`], [`DigitSet`]: typed digits 1-9 and 9-bit digit sets.
//! - [`Position`], [`CellSet`]: board coordinates and 81-bit cell sets
//!   with precomputed row/column/box/peer geometry.
//! - [`CandidateSet`]: a 729-bit set over the cell-times-digit space.
//! - [`House`]: rows, columns, and boxes as first-class values.
//! - [`CellMask`], [`CellState`], [`Grid`]: per-cell exclusion masks with
//!   Empty/Modifiable/Given status and propagation-on-assignment.
//!
//! # Examples
//!
//! ```
//! use quadra_core::{Digit, Grid, Position};
//!
//! let mut grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! grid.set_digit(Position::new(2, 0), Digit::D4);
//! assert!(!grid.candidates(Position::new(2, 8)).contains(Digit::D4));
//! # Ok::<(), quadra_core::GridParseError>(())
//! ```

pub use self::{
    candidate_set::CandidateSet,
    cell::{CellMask, CellState},
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    error::{ConsistencyError, GridParseError},
    grid::Grid,
    house::House,
    position::Position,
};

pub mod candidate_set;
pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod grid;
pub mod house;
pub mod position;
