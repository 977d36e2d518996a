//! Avoidable rectangles: corners already filled during solving.
//!
//! A rectangle whose four corners are all non-given cannot resolve into
//! two digits in an alternating pattern; the swapped assignment would be
//! another valid solution. Filled corners here are always Modifiable
//! placements; the searcher has already excluded Given cells.

use quadra_core::{CellSet, DigitSet};

use super::{common_peers, push_eliminations};
use crate::{Conclusion, RectangleKind, RectangleStep, rectangles::Rectangle, view::BoardView};

pub(crate) fn find(view: &BoardView, rect: &Rectangle, out: &mut Vec<RectangleStep>) {
    let filled: Vec<usize> = (0..4)
        .filter(|&i| view.digit(rect.cell(i)).is_some())
        .collect();
    match filled.len() {
        3 => find_type_1(view, rect, out),
        2 => find_type_2(view, rect, &filled, out),
        _ => {}
    }
}

/// Three corners filled with two distinct digits: the empty corner may
/// not take its diagonal partner's digit.
fn find_type_1(view: &BoardView, rect: &Rectangle, out: &mut Vec<RectangleStep>) {
    let Some(empty_idx) = (0..4).find(|&i| view.digit(rect.cell(i)).is_none()) else {
        return;
    };
    let corner = rect.cell(empty_idx);
    let diagonal = view.digit(rect.cell(3 - empty_idx));
    let row_mate = view.digit(rect.cell(empty_idx ^ 1));
    let col_mate = view.digit(rect.cell(empty_idx ^ 2));
    let (Some(a), Some(b1), Some(b2)) = (diagonal, row_mate, col_mate) else {
        return;
    };
    if b1 != b2 || a == b1 {
        return;
    }
    if !view.candidates(corner).contains(a) {
        return;
    }
    let digits = if a < b1 { (a, b1) } else { (b1, a) };
    out.push(RectangleStep::new(
        RectangleKind::Type1 { corner },
        digits,
        rect.cells(),
        true,
        vec![Conclusion::Elimination { pos: corner, digit: a }],
    ));
}

/// Two adjacent corners filled with digits `a` and `b`; the two empty
/// corners hold exactly the deadly completion plus one shared extra `x`.
/// One of them must take `x`, so `x` leaves the cells seeing both.
fn find_type_2(
    view: &BoardView,
    rect: &Rectangle,
    filled: &[usize],
    out: &mut Vec<RectangleStep>,
) {
    let (fa, fb) = (filled[0], filled[1]);
    // Only line-adjacent filled pairs form the pattern.
    if fa ^ fb == 3 {
        return;
    }
    let (ea, eb) = super::opposite_pair(fa, fb);

    let threat = |empty_idx: usize| view.digit(rect.cell(3 - empty_idx));
    let (Some(ta), Some(tb)) = (threat(ea), threat(eb)) else {
        return;
    };
    if ta == tb {
        return;
    }

    let cands_a = view.candidates(rect.cell(ea));
    let cands_b = view.candidates(rect.cell(eb));
    let extra_a = cands_a - DigitSet::from_elem(ta);
    let extra_b = cands_b - DigitSet::from_elem(tb);
    let (Some(x), Some(x2)) = (extra_a.as_single(), extra_b.as_single()) else {
        return;
    };
    if x != x2 || !cands_a.contains(ta) || !cands_b.contains(tb) {
        return;
    }

    let carriers = CellSet::from_iter([rect.cell(ea), rect.cell(eb)]);
    let targets = (common_peers(carriers) & view.empty_cells()) - rect.cell_set();
    let mut conclusions = Vec::new();
    push_eliminations(&mut conclusions, view, targets, x);
    if !conclusions.is_empty() {
        let digits = if ta < tb { (ta, tb) } else { (tb, ta) };
        out.push(RectangleStep::new(
            RectangleKind::Type2 { extra: x, carriers },
            digits,
            rect.cells(),
            true,
            conclusions,
        ));
    }
}
