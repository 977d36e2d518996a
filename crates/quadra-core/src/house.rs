//! Houses: the rows, columns, and boxes of the grid.

use std::fmt::{self, Display};

use crate::{CellSet, Position};

/// A house: a row, column, or 3x3 box of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3x3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { y: i as u8 };
            all[i + 9] = Self::Column { x: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the positions contained in this house.
    #[inline]
    #[must_use]
    pub const fn cells(self) -> CellSet {
        match self {
            House::Row { y } => CellSet::ROWS[y as usize],
            House::Column { x } => CellSet::COLUMNS[x as usize],
            House::Box { index } => CellSet::BOXES[index as usize],
        }
    }

    /// Returns the three houses containing a position: its row, column,
    /// and box, in that order.
    #[inline]
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box { index: pos.box_index() },
        ]
    }

    /// Returns the houses shared by two distinct positions, if any.
    ///
    /// Two cells share at most two houses (a line and a box).
    #[must_use]
    pub fn common(a: Position, b: Position) -> Vec<Self> {
        let mut shared = Vec::with_capacity(2);
        if a.y() == b.y() && a != b {
            shared.push(Self::Row { y: a.y() });
        }
        if a.x() == b.x() && a != b {
            shared.push(Self::Column { x: a.x() });
        }
        if a.box_index() == b.box_index() && a != b {
            shared.push(Self::Box { index: a.box_index() });
        }
        shared
    }

    /// Returns `true` if the house contains the position.
    #[inline]
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        self.cells().contains(pos)
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            House::Row { y } => write!(f, "row {}", y + 1),
            House::Column { x } => write!(f, "column {}", x + 1),
            House::Box { index } => write!(f, "box {}", index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_houses_cover_grid() {
        assert_eq!(House::ALL.len(), 27);
        for house in House::ALL {
            assert_eq!(house.cells().len(), 9);
        }
    }

    #[test]
    fn test_houses_of_position() {
        let [row, col, bx] = House::of(Position::new(5, 2));
        assert_eq!(row, House::Row { y: 2 });
        assert_eq!(col, House::Column { x: 5 });
        assert_eq!(bx, House::Box { index: 1 });
        for house in [row, col, bx] {
            assert!(house.contains(Position::new(5, 2)));
        }
    }

    #[test]
    fn test_common_houses() {
        let same_row_and_box = House::common(Position::new(0, 0), Position::new(1, 0));
        assert_eq!(same_row_and_box.len(), 2);

        let same_column_only = House::common(Position::new(3, 0), Position::new(3, 8));
        assert_eq!(same_column_only, vec![House::Column { x: 3 }]);

        assert!(House::common(Position::new(0, 0), Position::new(8, 8)).is_empty());
        assert!(House::common(Position::new(4, 4), Position::new(4, 4)).is_empty());
    }
}
