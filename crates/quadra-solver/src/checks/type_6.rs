//! Type 6: both diagonal corners are conjugate with their line partners.

use quadra_core::{CellSet, House};

use super::{UrCtx, push_eliminations};
use crate::{ConjugatePair, RectangleKind, RectangleStep, rectangles::DIAGONALS};

/// When one pair digit is confined to the rectangle in both rows (or both
/// columns), it must land on a diagonal. If one diagonal is restricted to
/// the pair, the digit on the other diagonal would force the deadly
/// pattern, so it is removed from those two cells.
pub(crate) fn find(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    for (a_idx, d_idx) in DIAGONALS {
        if !ctx.is_floor(a_idx) || !ctx.is_floor(d_idx) {
            continue;
        }
        let a = ctx.cell(a_idx);
        let d = ctx.cell(d_idx);

        // axis mask 1: row partners; axis mask 2: column partners.
        for axis in [1usize, 2] {
            let partner_a = ctx.cell(a_idx ^ axis);
            let partner_d = ctx.cell(d_idx ^ axis);
            let house_a = if axis == 1 {
                House::Row { y: a.y() }
            } else {
                House::Column { x: a.x() }
            };
            let house_d = if axis == 1 {
                House::Row { y: d.y() }
            } else {
                House::Column { x: d.x() }
            };

            for digit in [ctx.d1, ctx.d2] {
                if !ctx.view.is_conjugate(house_a, digit, a, partner_a)
                    || !ctx.view.is_conjugate(house_d, digit, d, partner_d)
                {
                    continue;
                }
                let mut conclusions = Vec::new();
                push_eliminations(
                    &mut conclusions,
                    ctx.view,
                    CellSet::from_iter([partner_a, partner_d]),
                    digit,
                );
                if !conclusions.is_empty() {
                    out.push(ctx.step(
                        RectangleKind::Type6 {
                            links: [
                                ConjugatePair::new(house_a, digit, a, partner_a),
                                ConjugatePair::new(house_d, digit, d, partner_d),
                            ],
                        },
                        conclusions,
                    ));
                }
            }
        }
    }
}
