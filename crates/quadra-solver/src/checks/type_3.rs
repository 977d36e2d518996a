//! Type 3: roof extras form a naked subset with house mates.

use quadra_core::{CellSet, House, Position};
use tinyvec::ArrayVec;

use super::{UrCtx, opposite_pair, push_eliminations};
use crate::{RectangleKind, RectangleStep, rectangles::ADJACENT_PAIRS};

/// The two roof corners jointly take one of their extra digits, so they
/// act as a single virtual cell holding the extras. If that virtual cell
/// plus `k - 1` mates of a shared house cover exactly `k` digits, the
/// digits are locked and leave the rest of the house.
pub(crate) fn find(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    for (ra, rb) in ADJACENT_PAIRS {
        let (fa, fb) = opposite_pair(ra, rb);
        if !ctx.is_floor(fa) || !ctx.is_floor(fb) {
            continue;
        }
        let extras = ctx.extras(ra) | ctx.extras(rb);
        if extras.is_empty() || extras.len() > 3 {
            continue;
        }
        if ctx.extras(ra).is_empty() || ctx.extras(rb).is_empty() {
            // A roof without extras is Type 1 territory.
            continue;
        }

        let roof_a = ctx.cell(ra);
        let roof_b = ctx.cell(rb);
        for house in House::common(roof_a, roof_b) {
            let pool: Vec<Position> = ((house.cells() & ctx.view.empty_cells())
                - ctx.rect.cell_set())
            .iter()
            .filter(|&pos| !ctx.view.candidates(pos).is_empty())
            .collect();

            for size in 1..=3usize.min(pool.len()) {
                if extras.len() > size + 1 {
                    continue;
                }
                for_each_combination(&pool, size, &mut |mates| {
                    let mut subset_digits = extras;
                    for &mate in mates {
                        subset_digits |= ctx.view.candidates(mate);
                    }
                    if subset_digits.len() != size + 1 {
                        return;
                    }
                    let subset_cells = CellSet::from_iter(mates.iter().copied());
                    let targets = (house.cells() & ctx.view.empty_cells())
                        - ctx.rect.cell_set()
                        - subset_cells;
                    let mut conclusions = Vec::new();
                    for digit in subset_digits {
                        push_eliminations(&mut conclusions, ctx.view, targets, digit);
                    }
                    if !conclusions.is_empty() {
                        out.push(ctx.step(
                            RectangleKind::Type3 { house, subset_digits, subset_cells },
                            conclusions,
                        ));
                    }
                });
            }
        }
    }
}

/// Calls `f` with every `size`-element combination of `pool`, in
/// lexicographic order.
fn for_each_combination<F>(pool: &[Position], size: usize, f: &mut F)
where
    F: FnMut(&[Position]),
{
    let mut combo: ArrayVec<[Position; 3]> = ArrayVec::new();
    recurse(pool, 0, size, &mut combo, f);
}

fn recurse<F>(
    pool: &[Position],
    start: usize,
    size: usize,
    combo: &mut ArrayVec<[Position; 3]>,
    f: &mut F,
) where
    F: FnMut(&[Position]),
{
    if combo.len() == size {
        f(combo.as_slice());
        return;
    }
    for i in start..pool.len() {
        combo.push(pool[i]);
        recurse(pool, i + 1, size, combo, f);
        combo.pop();
    }
}
