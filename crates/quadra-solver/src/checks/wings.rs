//! Wing variants: bivalue pincers covering the roof extras.

use quadra_core::{CellSet, Digit, DigitSet, Position};
use tinyvec::ArrayVec;

use super::{UrCtx, common_peers, opposite_pair, push_eliminations};
use crate::{
    RectangleKind, RectangleStep,
    rectangles::{ADJACENT_PAIRS, DIAGONALS},
};

/// Some roof takes one of the extra digits. A bivalue pincer `{e, z}`
/// seeing every roof that carries `e` is then pushed to `z` whenever `e`
/// lands in the rectangle, so a full cover of the extras forces `z` into
/// one of the pincers: cells seeing all pincers lose `z`.
///
/// Two pincers form the XY-Wing, three the XYZ-Wing, four the WXYZ-Wing.
pub(crate) fn find(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    for (ra, rb) in ADJACENT_PAIRS.into_iter().chain(DIAGONALS) {
        let (fa, fb) = opposite_pair(ra, rb);
        if !ctx.is_floor(fa) || !ctx.is_floor(fb) {
            continue;
        }
        let extras_a = ctx.extras(ra);
        let extras_b = ctx.extras(rb);
        if extras_a.is_empty() || extras_b.is_empty() {
            continue;
        }
        let extras = extras_a | extras_b;
        if extras.len() < 2 || extras.len() > 4 {
            continue;
        }

        let roof_a = ctx.cell(ra);
        let roof_b = ctx.cell(rb);
        for z in DigitSet::FULL - ctx.pair - extras {
            let pincer_sets: Vec<Vec<Position>> = extras
                .iter()
                .map(|e| pincers_for(ctx, e, z, (roof_a, extras_a), (roof_b, extras_b)))
                .collect();
            if pincer_sets.iter().any(Vec::is_empty) {
                continue;
            }
            let mut chosen: ArrayVec<[Position; 4]> = ArrayVec::new();
            choose_pincers(ctx, extras, z, &pincer_sets, &mut chosen, out);
        }
    }
}

/// Bivalue `{e, z}` cells outside the rectangle that see every roof
/// carrying `e`.
fn pincers_for(
    ctx: &UrCtx<'_>,
    e: Digit,
    z: Digit,
    (roof_a, extras_a): (Position, DigitSet),
    (roof_b, extras_b): (Position, DigitSet),
) -> Vec<Position> {
    let wanted = DigitSet::from_iter([e, z]);
    let mut visible = CellSet::FULL;
    if extras_a.contains(e) {
        visible &= roof_a.peers();
    }
    if extras_b.contains(e) {
        visible &= roof_b.peers();
    }
    ((visible & ctx.view.empty_cells()) - ctx.rect.cell_set())
        .iter()
        .filter(|&pos| ctx.view.candidates(pos) == wanted)
        .collect()
}

fn choose_pincers(
    ctx: &UrCtx<'_>,
    extras: DigitSet,
    z: Digit,
    pincer_sets: &[Vec<Position>],
    chosen: &mut ArrayVec<[Position; 4]>,
    out: &mut Vec<RectangleStep>,
) {
    if chosen.len() == pincer_sets.len() {
        let pincers = CellSet::from_iter(chosen.iter().copied());
        let targets =
            (common_peers(pincers) & ctx.view.empty_cells()) - ctx.rect.cell_set() - pincers;
        let mut conclusions = Vec::new();
        push_eliminations(&mut conclusions, ctx.view, targets, z);
        if !conclusions.is_empty() {
            let kind = match extras.len() {
                2 => RectangleKind::XyWing { pincers, extra: z },
                3 => RectangleKind::XyzWing { pincers, extra: z },
                _ => RectangleKind::WxyzWing { pincers, extra: z },
            };
            out.push(ctx.step(kind, conclusions));
        }
        return;
    }
    for &candidate in &pincer_sets[chosen.len()] {
        chosen.push(candidate);
        choose_pincers(ctx, extras, z, pincer_sets, chosen, out);
        chosen.pop();
    }
}
