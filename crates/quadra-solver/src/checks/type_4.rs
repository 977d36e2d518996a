//! Type 4: the roof corners are conjugate on one pair digit.

use quadra_core::{CellSet, House};

use super::{UrCtx, opposite_pair, push_eliminations};
use crate::{ConjugatePair, RectangleKind, RectangleStep, rectangles::ADJACENT_PAIRS};

/// If one pair digit is confined to the two roof corners within a shared
/// house, one roof must take it, and the other pair digit in either roof
/// would complete the deadly pattern: it is removed from both roofs.
pub(crate) fn find(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    for (ra, rb) in ADJACENT_PAIRS {
        let (fa, fb) = opposite_pair(ra, rb);
        if !ctx.is_floor(fa) || !ctx.is_floor(fb) {
            continue;
        }
        let roof_a = ctx.cell(ra);
        let roof_b = ctx.cell(rb);
        let roofs = CellSet::from_iter([roof_a, roof_b]);

        for house in House::common(roof_a, roof_b) {
            for (digit, other) in [(ctx.d1, ctx.d2), (ctx.d2, ctx.d1)] {
                if !ctx.view.is_conjugate(house, digit, roof_a, roof_b) {
                    continue;
                }
                let mut conclusions = Vec::new();
                push_eliminations(&mut conclusions, ctx.view, roofs, other);
                if !conclusions.is_empty() {
                    out.push(ctx.step(
                        RectangleKind::Type4 {
                            link: ConjugatePair::new(house, digit, roof_a, roof_b),
                        },
                        conclusions,
                    ));
                }
            }
        }
    }
}
