//! Type 1: three corners restricted to the pair, one corner with extras.

use super::UrCtx;
use crate::{Conclusion, RectangleKind, RectangleStep};

/// If three corners can only take the pair digits, the fourth corner may
/// not complete the deadly pattern: both pair digits are removed from it.
pub(crate) fn find(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    for corner in 0..4 {
        if ctx.extras(corner).is_empty() {
            continue;
        }
        if !(0..4).filter(|&i| i != corner).all(|i| ctx.is_floor(i)) {
            continue;
        }
        let removable = ctx.cands(corner) & ctx.pair;
        if removable.is_empty() {
            continue;
        }
        let pos = ctx.cell(corner);
        let conclusions = removable
            .iter()
            .map(|digit| Conclusion::Elimination { pos, digit })
            .collect();
        out.push(ctx.step(RectangleKind::Type1 { corner: pos }, conclusions));
    }
}

#[cfg(test)]
mod tests {
    use quadra_core::{Digit, Position};

    use crate::testing::SearchTester;

    #[test]
    fn test_removes_pair_from_extra_corner() {
        // Rows 1-2, columns 1 and 4: two boxes, three corners {4,7}.
        SearchTester::new()
            .restrict(Position::new(0, 0), [Digit::D4, Digit::D7])
            .restrict(Position::new(3, 0), [Digit::D4, Digit::D7])
            .restrict(Position::new(0, 1), [Digit::D4, Digit::D7])
            .restrict(Position::new(3, 1), [Digit::D2, Digit::D4, Digit::D7])
            .search()
            .assert_eliminates(Position::new(3, 1), Digit::D4)
            .assert_eliminates(Position::new(3, 1), Digit::D7)
            .assert_not_eliminates(Position::new(3, 1), Digit::D2);
    }

    #[test]
    fn test_single_box_rectangle_is_ignored() {
        // Same pattern squeezed into box 1: no deadly geometry.
        SearchTester::new()
            .restrict(Position::new(0, 0), [Digit::D4, Digit::D7])
            .restrict(Position::new(1, 0), [Digit::D4, Digit::D7])
            .restrict(Position::new(0, 1), [Digit::D4, Digit::D7])
            .restrict(Position::new(1, 1), [Digit::D2, Digit::D4, Digit::D7])
            .search()
            .assert_not_eliminates(Position::new(1, 1), Digit::D4);
    }

    #[test]
    fn test_incomplete_pattern_respects_flag() {
        // One floor already lost digit 7; the pattern is incomplete.
        let build = || {
            SearchTester::new()
                .restrict(Position::new(0, 0), [Digit::D4])
                .restrict(Position::new(3, 0), [Digit::D4, Digit::D7])
                .restrict(Position::new(0, 1), [Digit::D4, Digit::D7])
                .restrict(Position::new(3, 1), [Digit::D2, Digit::D4, Digit::D7])
        };

        build()
            .search()
            .assert_not_eliminates(Position::new(3, 1), Digit::D4);
        build()
            .allow_incomplete()
            .search()
            .assert_eliminates(Position::new(3, 1), Digit::D4)
            .assert_eliminates(Position::new(3, 1), Digit::D7);
    }
}
