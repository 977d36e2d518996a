//! The 81-cell grid with automatic peer propagation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    CandidateSet, CellMask, CellSet, CellState, ConsistencyError, Digit, DigitSet, GridParseError,
    Position,
};

/// An 81-slot array of cell masks with automatic peer propagation.
///
/// Assigning a digit to a cell clears that digit from the candidate masks
/// of every empty peer cell, so the grid is always in a propagated,
/// consistent shape from the caller's point of view. A frozen snapshot of
/// the cells taken at construction (and refreshed by [`fix`]) backs the
/// [`reset`] operation.
///
/// The grid is the substrate every searcher reads; searchers never mutate
/// it. The only mutation pathway is the explicit digit/candidate setters
/// below, used by callers between search passes.
///
/// # Examples
///
/// ```
/// use quadra_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// grid.set_digit(Position::new(0, 0), Digit::D5);
///
/// // 5 is no longer a candidate anywhere in row 1, column 1, or box 1.
/// assert!(!grid.candidates(Position::new(8, 0)).contains(Digit::D5));
/// assert!(!grid.candidates(Position::new(0, 8)).contains(Digit::D5));
/// assert!(!grid.candidates(Position::new(2, 2)).contains(Digit::D5));
/// ```
///
/// [`fix`]: Grid::fix
/// [`reset`]: Grid::reset
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [CellMask; 81],
    initial: [CellMask; 81],
}

impl Default for Grid {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid with every digit possible in every cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [CellMask::EMPTY; 81],
            initial: [CellMask::EMPTY; 81],
        }
    }

    #[inline]
    fn cell(&self, pos: Position) -> CellMask {
        self.cells[pos.index() as usize]
    }

    /// Returns the status of a cell.
    #[inline]
    #[must_use]
    pub fn state(&self, pos: Position) -> CellState {
        self.cell(pos).state()
    }

    /// Returns the digit held by a cell, or `None` if the cell is empty.
    #[inline]
    #[must_use]
    pub fn digit(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).digit()
    }

    /// Returns the candidates of an empty cell.
    ///
    /// Filled cells report no candidates; read their digit through
    /// [`digit`](Grid::digit) instead.
    #[inline]
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        let cell = self.cell(pos);
        if cell.is_filled() {
            DigitSet::EMPTY
        } else {
            cell.candidates()
        }
    }

    /// Assigns a digit to a cell and propagates to its peers.
    ///
    /// The cell becomes Modifiable with `digit` as its single surviving
    /// candidate, and `digit` is excluded from every peer cell that is
    /// still empty. The operation is atomic: it is either fully applied,
    /// or (on a Given cell) a documented no-op.
    ///
    /// Propagation is monotonic; digits excluded from a peer before the
    /// call stay excluded afterwards.
    pub fn set_digit(&mut self, pos: Position, digit: Digit) {
        let cell = self.cell(pos);
        debug_assert!(
            cell.state() != CellState::Given,
            "set_digit on a given cell at {pos}"
        );
        if cell.state() == CellState::Given {
            return;
        }
        self.cells[pos.index() as usize] = CellMask::filled(digit, CellState::Modifiable);
        for peer in pos.peers() {
            let mask = &mut self.cells[peer.index() as usize];
            if !mask.is_filled() {
                mask.exclude(digit);
            }
        }
    }

    /// Clears a Modifiable cell back to Empty.
    ///
    /// The cell's candidates are rebuilt from scratch by scanning the
    /// digits held by its filled peers; this is a full recomputation, not
    /// an incremental un-propagation, so candidates excluded by cells that
    /// have since been cleared become available again. Other cells are
    /// not touched.
    ///
    /// Calling this on an Empty or Given cell is a documented no-op.
    pub fn clear_digit(&mut self, pos: Position) {
        let cell = self.cell(pos);
        debug_assert!(
            cell.state() == CellState::Modifiable,
            "clear_digit on a non-modifiable cell at {pos}"
        );
        if cell.state() != CellState::Modifiable {
            return;
        }
        let mut excluded = DigitSet::EMPTY;
        for peer in pos.peers() {
            if let Some(digit) = self.digit(peer) {
                excluded.insert(digit);
            }
        }
        self.cells[pos.index() as usize] = CellMask::empty_excluding(excluded);
    }

    /// Sets or clears a single candidate of an empty cell.
    ///
    /// This is the surface collaborators use to apply step eliminations.
    /// Calling it on a filled cell is a documented no-op.
    pub fn set_candidate(&mut self, pos: Position, digit: Digit, possible: bool) {
        let mask = &mut self.cells[pos.index() as usize];
        debug_assert!(!mask.is_filled(), "set_candidate on a filled cell at {pos}");
        if mask.is_filled() {
            return;
        }
        if possible {
            mask.allow(digit);
        } else {
            mask.exclude(digit);
        }
    }

    /// Converts every Modifiable cell to Given and refreezes the snapshot
    /// used by [`reset`](Grid::reset). Bulk and non-propagating.
    pub fn fix(&mut self) {
        for mask in &mut self.cells {
            if mask.state() == CellState::Modifiable {
                *mask = mask.with_state(CellState::Given);
            }
        }
        self.initial = self.cells;
    }

    /// Converts every Given cell to Modifiable. Bulk and non-propagating;
    /// the frozen snapshot is left untouched.
    pub fn unfix(&mut self) {
        for mask in &mut self.cells {
            if mask.state() == CellState::Given {
                *mask = mask.with_state(CellState::Modifiable);
            }
        }
    }

    /// Restores the grid to the frozen snapshot taken at construction or
    /// by the last [`fix`](Grid::fix).
    pub fn reset(&mut self) {
        self.cells = self.initial;
    }

    /// Returns the set of empty cells where `digit` remains a candidate.
    #[must_use]
    pub fn digit_cells(&self, digit: Digit) -> CellSet {
        let mut cells = CellSet::EMPTY;
        for pos in Position::all() {
            if self.candidates(pos).contains(digit) {
                cells.insert(pos);
            }
        }
        cells
    }

    /// Returns the set of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> CellSet {
        self.cells_in_state(CellState::Empty)
    }

    /// Returns the set of Given cells.
    #[must_use]
    pub fn given_cells(&self) -> CellSet {
        self.cells_in_state(CellState::Given)
    }

    /// Returns the set of Modifiable cells.
    #[must_use]
    pub fn modifiable_cells(&self) -> CellSet {
        self.cells_in_state(CellState::Modifiable)
    }

    /// Returns the set of empty cells with exactly two candidates.
    #[must_use]
    pub fn bivalue_cells(&self) -> CellSet {
        let mut cells = CellSet::EMPTY;
        for pos in Position::all() {
            if self.candidates(pos).len() == 2 {
                cells.insert(pos);
            }
        }
        cells
    }

    fn cells_in_state(&self, state: CellState) -> CellSet {
        let mut cells = CellSet::EMPTY;
        for pos in Position::all() {
            if self.state(pos) == state {
                cells.insert(pos);
            }
        }
        cells
    }

    /// Returns the full cell-times-digit candidate set of the grid's
    /// empty cells.
    #[must_use]
    pub fn candidate_set(&self) -> CandidateSet {
        let mut set = CandidateSet::EMPTY;
        for pos in Position::all() {
            for digit in self.candidates(pos) {
                set.insert(pos, digit);
            }
        }
        set
    }

    /// Returns `true` if no two filled peer cells share a digit and no
    /// empty cell has run out of candidates.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.check_consistency().is_ok()
    }

    /// Checks the grid for contradictions.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::DuplicateDigit`] if two filled peers
    /// hold the same digit, or [`ConsistencyError::NoCandidates`] if an
    /// empty cell has no remaining candidates.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for pos in Position::all() {
            match self.digit(pos) {
                Some(digit) => {
                    for peer in pos.peers() {
                        if peer > pos && self.digit(peer) == Some(digit) {
                            return Err(ConsistencyError::DuplicateDigit {
                                digit,
                                first: pos,
                                second: peer,
                            });
                        }
                    }
                }
                None => {
                    if self.candidates(pos).is_empty() {
                        return Err(ConsistencyError::NoCandidates { pos });
                    }
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses a grid from text.
    ///
    /// Digits 1-9 become Given cells; `.`, `_`, and `0` are empty cells;
    /// whitespace is ignored. The parsed layout becomes the frozen
    /// snapshot, so [`Grid::reset`] restores it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Grid::new();
        let mut index = 0usize;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let digit = match c {
                '.' | '_' | '0' => None,
                '1'..='9' => Some(Digit::new(c as u8 - b'0')),
                _ => return Err(GridParseError::UnexpectedChar { c }),
            };
            if index >= 81 {
                return Err(GridParseError::WrongLength { len: index + 1 });
            }
            if let Some(digit) = digit {
                #[expect(clippy::cast_possible_truncation)]
                grid.set_digit(Position::from_index(index as u8), digit);
            }
            index += 1;
        }
        if index != 81 {
            return Err(GridParseError::WrongLength { len: index });
        }
        grid.fix();
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                match self.digit(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str("_")?,
                }
                if x == 2 || x == 5 {
                    f.write_str(" ")?;
                }
            }
            if y < 8 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({self})")
    }
}
