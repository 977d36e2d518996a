//! Hidden rectangle: row and column links through the corner opposite a
//! bivalue corner.

use quadra_core::House;

use super::UrCtx;
use crate::{Conclusion, ConjugatePair, RectangleKind, RectangleStep};

/// With a bivalue corner and one pair digit conjugate along both lines
/// through its diagonal partner, the other pair digit in that partner
/// would force the deadly pattern and is removed from it.
pub(crate) fn find(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    for a_idx in 0..4 {
        if !ctx.is_floor(a_idx) {
            continue;
        }
        let t_idx = 3 - a_idx;
        let target = ctx.cell(t_idx);
        let row_partner = ctx.cell(t_idx ^ 1);
        let col_partner = ctx.cell(t_idx ^ 2);
        let row = House::Row { y: target.y() };
        let col = House::Column { x: target.x() };

        for (digit, other) in [(ctx.d1, ctx.d2), (ctx.d2, ctx.d1)] {
            if !ctx.view.is_conjugate(row, digit, target, row_partner)
                || !ctx.view.is_conjugate(col, digit, target, col_partner)
            {
                continue;
            }
            if !ctx.cands(t_idx).contains(other) {
                continue;
            }
            out.push(ctx.step(
                RectangleKind::Hidden {
                    links: [
                        ConjugatePair::new(row, digit, target, row_partner),
                        ConjugatePair::new(col, digit, target, col_partner),
                    ],
                    corner: target,
                },
                vec![Conclusion::Elimination { pos: target, digit: other }],
            ));
        }
    }
}
