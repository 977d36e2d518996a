//! Type 2/5: every corner reduces to the pair plus one shared extra digit.

use quadra_core::CellSet;

use super::{UrCtx, common_peers, push_eliminations};
use crate::{RectangleKind, RectangleStep};

/// If the corners are restricted to the pair plus a single shared extra
/// digit `x`, some corner must take `x`, so `x` falls out of every cell
/// that sees all the carriers. Adjacent carriers form the classic Type 2,
/// diagonal carriers Type 5; the logic is identical.
pub(crate) fn find(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    let mut carriers = CellSet::EMPTY;
    let mut floors = 0usize;
    let mut shared = None;

    for i in 0..4 {
        let extras = ctx.extras(i);
        if extras.is_empty() {
            if !ctx.is_floor(i) {
                return;
            }
            floors += 1;
            continue;
        }
        let Some(x) = extras.as_single() else {
            return;
        };
        match shared {
            None => shared = Some(x),
            Some(s) if s == x => {}
            Some(_) => return,
        }
        carriers.insert(ctx.cell(i));
    }

    let Some(extra) = shared else { return };
    if floors == 0 || carriers.len() < 2 {
        return;
    }

    let targets = (common_peers(carriers) & ctx.view.empty_cells()) - ctx.rect.cell_set();
    let mut conclusions = Vec::new();
    push_eliminations(&mut conclusions, ctx.view, targets, extra);
    if !conclusions.is_empty() {
        out.push(ctx.step(RectangleKind::Type2 { extra, carriers }, conclusions));
    }
}
