//! Read-only candidate snapshot taken at the start of a search pass.

use quadra_core::{CellSet, CellState, Digit, DigitSet, Grid, House, Position};

/// Cached per-digit candidate positions and cell status for one search
/// pass.
///
/// The grid is read once up front; every check then works on O(1) set
/// intersections. The searcher never writes back, so the snapshot stays
/// valid for the whole pass.
#[derive(Debug)]
pub(crate) struct BoardView {
    digit_cells: [CellSet; 9],
    candidates: [DigitSet; 81],
    digits: [Option<Digit>; 81],
    empty: CellSet,
    given: CellSet,
    modifiable: CellSet,
}

impl BoardView {
    pub(crate) fn new(grid: &Grid) -> Self {
        let mut digit_cells = [CellSet::EMPTY; 9];
        let mut candidates = [DigitSet::EMPTY; 81];
        let mut digits = [None; 81];
        let mut empty = CellSet::EMPTY;
        let mut given = CellSet::EMPTY;
        let mut modifiable = CellSet::EMPTY;

        for pos in Position::all() {
            let i = pos.index() as usize;
            match grid.state(pos) {
                CellState::Empty => {
                    empty.insert(pos);
                    let cands = grid.candidates(pos);
                    candidates[i] = cands;
                    for digit in cands {
                        digit_cells[digit.index() as usize].insert(pos);
                    }
                }
                CellState::Modifiable => {
                    modifiable.insert(pos);
                    digits[i] = grid.digit(pos);
                }
                CellState::Given => {
                    given.insert(pos);
                    digits[i] = grid.digit(pos);
                }
            }
        }

        Self { digit_cells, candidates, digits, empty, given, modifiable }
    }

    /// Candidates of an empty cell (empty set for filled cells).
    #[inline]
    pub(crate) fn candidates(&self, pos: Position) -> DigitSet {
        self.candidates[pos.index() as usize]
    }

    /// The digit held by a filled cell.
    #[inline]
    pub(crate) fn digit(&self, pos: Position) -> Option<Digit> {
        self.digits[pos.index() as usize]
    }

    /// Empty cells where `digit` remains a candidate.
    #[inline]
    pub(crate) fn digit_cells(&self, digit: Digit) -> CellSet {
        self.digit_cells[digit.index() as usize]
    }

    #[inline]
    pub(crate) fn empty_cells(&self) -> CellSet {
        self.empty
    }

    #[inline]
    pub(crate) fn given_cells(&self) -> CellSet {
        self.given
    }

    #[inline]
    pub(crate) fn modifiable_cells(&self) -> CellSet {
        self.modifiable
    }

    /// The conjugate-pair (strong-link) primitive shared by every
    /// link-based check: digit `d` is conjugate on `{a, b}` within
    /// `house` iff the house's candidate cells for `d` are exactly
    /// `{a, b}`.
    pub(crate) fn conjugate_pair(&self, house: House, digit: Digit) -> Option<(Position, Position)> {
        (self.digit_cells(digit) & house.cells()).as_double()
    }

    /// Returns `true` if `digit` is conjugate on exactly `{a, b}` in
    /// `house`.
    pub(crate) fn is_conjugate(&self, house: House, digit: Digit, a: Position, b: Position) -> bool {
        self.conjugate_pair(house, digit)
            .is_some_and(|(lo, hi)| (lo, hi) == (a.min(b), a.max(b)))
    }

    /// Returns the conjugate partner of `pos` on `digit` within `house`,
    /// if the house forms a strong link through `pos`.
    pub(crate) fn conjugate_partner(
        &self,
        house: House,
        digit: Digit,
        pos: Position,
    ) -> Option<Position> {
        let (a, b) = self.conjugate_pair(house, digit)?;
        if a == pos {
            Some(b)
        } else if b == pos {
            Some(a)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn test_snapshot_matches_grid() {
        let mut grid = Grid::from_str(
            "
            1__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .unwrap();
        grid.set_digit(Position::new(4, 4), Digit::D2);

        let view = BoardView::new(&grid);
        assert_eq!(view.digit(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(view.digit(Position::new(4, 4)), Some(Digit::D2));
        assert!(view.given_cells().contains(Position::new(0, 0)));
        assert!(view.modifiable_cells().contains(Position::new(4, 4)));
        assert_eq!(view.empty_cells().len(), 79);
        assert_eq!(view.candidates(Position::new(1, 0)), grid.candidates(Position::new(1, 0)));
        assert_eq!(view.digit_cells(Digit::D1), grid.digit_cells(Digit::D1));
    }

    #[test]
    fn test_conjugate_pair() {
        let mut grid = Grid::new();
        // Restrict digit 5 in row 0 to columns 2 and 6.
        for x in 0..9 {
            if x != 2 && x != 6 {
                grid.set_candidate(Position::new(x, 0), Digit::D5, false);
            }
        }
        let view = BoardView::new(&grid);
        let house = House::Row { y: 0 };
        assert_eq!(
            view.conjugate_pair(house, Digit::D5),
            Some((Position::new(2, 0), Position::new(6, 0)))
        );
        assert!(view.is_conjugate(house, Digit::D5, Position::new(6, 0), Position::new(2, 0)));
        assert_eq!(
            view.conjugate_partner(house, Digit::D5, Position::new(2, 0)),
            Some(Position::new(6, 0))
        );
        assert_eq!(view.conjugate_partner(house, Digit::D5, Position::new(3, 0)), None);
        assert_eq!(view.conjugate_pair(house, Digit::D4), None);
    }
}
