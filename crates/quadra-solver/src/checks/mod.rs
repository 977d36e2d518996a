//! The per-rectangle type-check battery.
//!
//! Each submodule is an independent predicate-plus-emitter: it inspects
//! the candidate snapshot for one rectangle and digit pair and appends
//! zero or more steps. A check that finds no qualifying configuration
//! simply produces nothing; degenerate geometry is filtered by
//! precondition, never by error.

use quadra_core::{CellSet, Digit, DigitSet, Position};

use crate::{Conclusion, RectangleKind, RectangleStep, rectangles::Rectangle, view::BoardView};

pub(crate) mod avoidable;
pub(crate) mod external;
pub(crate) mod hidden;
pub(crate) mod type_1;
pub(crate) mod type_2;
pub(crate) mod type_3;
pub(crate) mod type_4;
pub(crate) mod type_6;
pub(crate) mod wings;

/// Shared context for the unique-rectangle checks: one rectangle, one
/// digit pair, one candidate snapshot.
pub(crate) struct UrCtx<'a> {
    pub(crate) view: &'a BoardView,
    pub(crate) rect: &'a Rectangle,
    pub(crate) d1: Digit,
    pub(crate) d2: Digit,
    pub(crate) pair: DigitSet,
}

impl UrCtx<'_> {
    #[inline]
    pub(crate) fn cell(&self, i: usize) -> Position {
        self.rect.cell(i)
    }

    #[inline]
    pub(crate) fn cands(&self, i: usize) -> DigitSet {
        self.view.candidates(self.cell(i))
    }

    /// Candidates of corner `i` beyond the digit pair.
    #[inline]
    pub(crate) fn extras(&self, i: usize) -> DigitSet {
        self.cands(i) - self.pair
    }

    /// A floor corner is restricted to the digit pair (possibly to one
    /// digit of it, when incomplete patterns are admitted upstream), so
    /// it can only ever take a pair value.
    #[inline]
    pub(crate) fn is_floor(&self, i: usize) -> bool {
        let cands = self.cands(i);
        !cands.is_empty() && self.pair.is_superset(cands)
    }

    pub(crate) fn step(&self, kind: RectangleKind, conclusions: Vec<Conclusion>) -> RectangleStep {
        RectangleStep::new(
            kind,
            (self.d1, self.d2),
            self.rect.cells(),
            false,
            conclusions,
        )
    }
}

/// Appends an elimination for every cell of `targets` that still holds
/// `digit`.
pub(crate) fn push_eliminations(
    conclusions: &mut Vec<Conclusion>,
    view: &BoardView,
    targets: CellSet,
    digit: Digit,
) {
    for pos in targets & view.digit_cells(digit) {
        conclusions.push(Conclusion::Elimination { pos, digit });
    }
}

/// The cells that see every member of `cells`.
pub(crate) fn common_peers(cells: CellSet) -> CellSet {
    let mut acc = CellSet::FULL;
    for pos in cells {
        acc &= pos.peers();
    }
    acc
}

/// The complementary corner-index pair: for an adjacent pair this is the
/// opposite line, for a diagonal the other diagonal.
pub(crate) const fn opposite_pair(a: usize, b: usize) -> (usize, usize) {
    if a ^ b == 3 {
        (a ^ 1, b ^ 1)
    } else {
        let mask = (a ^ b) ^ 3;
        (a ^ mask, b ^ mask)
    }
}
