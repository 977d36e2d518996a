//! Error types for grid validation and parsing.

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A contradiction detected by [`Grid::check_consistency`].
///
/// [`Grid::check_consistency`]: crate::Grid::check_consistency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConsistencyError {
    /// Two filled peer cells hold the same digit.
    #[display("digit {digit} is held by both {first} and {second}")]
    DuplicateDigit {
        /// The duplicated digit.
        digit: Digit,
        /// The first of the two conflicting cells.
        first: Position,
        /// The second of the two conflicting cells.
        second: Position,
    },
    /// An empty cell has no remaining candidates.
    #[display("cell {pos} has no remaining candidates")]
    NoCandidates {
        /// The exhausted cell.
        pos: Position,
    },
}

/// An error produced when parsing a grid from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// The text did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {len}")]
    WrongLength {
        /// The number of cell characters found.
        len: usize,
    },
    /// The text contained a character that is not a digit, placeholder,
    /// or whitespace.
    #[display("unexpected character {c:?}")]
    UnexpectedChar {
        /// The offending character.
        c: char,
    },
}
