//! Extended variants: strong-link chains rooted at the roof corners.
//!
//! All chain variants share one premise: the floors are restricted to the
//! pair, and both roofs carry the same single extra digit `x`, so exactly
//! one roof takes `x`. Conjugate links then transport that fact to
//! external cells; eliminations land on the cells seeing both endpoints
//! of the resulting chain.

use quadra_core::{CellSet, Digit, DigitSet, House, Position};

use super::{UrCtx, push_eliminations};
use crate::{
    ConjugatePair, RectangleKind, RectangleStep,
    rectangles::{ADJACENT_PAIRS, DIAGONALS},
};

pub(crate) fn find(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    find_two_d(ctx, out);
    find_chains(ctx, out);
}

/// `+2D`: diagonal roofs with distinct single extras `x` and `y`, plus an
/// external bivalue `{x,y}` cell seeing both roofs. One roof takes its
/// extra, so the external cell takes the other digit; cells seeing all
/// three hold neither `x` nor `y`.
fn find_two_d(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    for (ra, rb) in DIAGONALS {
        let (fa, fb) = super::opposite_pair(ra, rb);
        if !ctx.is_floor(fa) || !ctx.is_floor(fb) {
            continue;
        }
        let Some(x) = ctx.extras(ra).as_single() else {
            continue;
        };
        let Some(y) = ctx.extras(rb).as_single() else {
            continue;
        };
        if x == y {
            continue;
        }
        let roof_a = ctx.cell(ra);
        let roof_b = ctx.cell(rb);
        let external_candidates = DigitSet::from_iter([x, y]);

        let both_roofs = roof_a.peers() & roof_b.peers() & ctx.view.empty_cells();
        for external in both_roofs - ctx.rect.cell_set() {
            if ctx.view.candidates(external) != external_candidates {
                continue;
            }
            let targets = (both_roofs & external.peers())
                - ctx.rect.cell_set()
                - CellSet::from_elem(external);
            let mut conclusions = Vec::new();
            push_eliminations(&mut conclusions, ctx.view, targets, x);
            push_eliminations(&mut conclusions, ctx.view, targets, y);
            if !conclusions.is_empty() {
                out.push(ctx.step(RectangleKind::TwoD { external }, conclusions));
            }
        }
    }
}

/// The strong-link chains `+2B/1SL`, `+3X/2SL`, and `+4C/3SL`.
fn find_chains(ctx: &UrCtx<'_>, out: &mut Vec<RectangleStep>) {
    for (ra, rb) in ADJACENT_PAIRS {
        let (fa, fb) = super::opposite_pair(ra, rb);
        if !ctx.is_floor(fa) || !ctx.is_floor(fb) {
            continue;
        }
        let (Some(x), Some(other)) = (ctx.extras(ra).as_single(), ctx.extras(rb).as_single())
        else {
            continue;
        };
        if x != other {
            continue;
        }

        // Exactly one of the two roofs takes x (they see each other and
        // one of them must escape the deadly pattern).
        for (first, second) in [(ra, rb), (rb, ra)] {
            let roof_1 = ctx.cell(first);
            let roof_2 = ctx.cell(second);
            one_link(ctx, x, roof_1, roof_2, out);
        }
        four_c(ctx, x, ctx.cell(ra), ctx.cell(rb), out);
    }
}

/// `+2B/1SL` from a link off `roof_2`, extended to `+3X/2SL` where a
/// second link continues the chain.
fn one_link(
    ctx: &UrCtx<'_>,
    x: Digit,
    roof_1: Position,
    roof_2: Position,
    out: &mut Vec<RectangleStep>,
) {
    for house in House::of(roof_2) {
        if house.contains(roof_1) {
            continue;
        }
        let Some(e1) = ctx.view.conjugate_partner(house, x, roof_2) else {
            continue;
        };
        if ctx.rect.cell_set().contains(e1) {
            continue;
        }
        let link_1 = ConjugatePair::new(house, x, roof_2, e1);

        // roof_1 = x forces e1 = x through the link, so x sits on roof_2
        // or e1; both are visible from the elimination cells.
        let targets = (roof_2.peers() & e1.peers() & ctx.view.empty_cells())
            - ctx.rect.cell_set()
            - CellSet::from_elem(e1);
        let mut conclusions = Vec::new();
        push_eliminations(&mut conclusions, ctx.view, targets, x);
        if !conclusions.is_empty() {
            out.push(ctx.step(RectangleKind::TwoB1Sl { link: link_1 }, conclusions));
        }

        // Chain one more link: roof_2 = x now forces e2 = x, so the
        // endpoints are roof_1 and e2.
        for house_2 in House::of(e1) {
            if house_2 == house {
                continue;
            }
            let Some(e2) = ctx.view.conjugate_partner(house_2, x, e1) else {
                continue;
            };
            if ctx.rect.cell_set().contains(e2) || e2 == roof_2 {
                continue;
            }
            let link_2 = ConjugatePair::new(house_2, x, e1, e2);
            let targets = (roof_1.peers() & e2.peers() & ctx.view.empty_cells())
                - ctx.rect.cell_set()
                - CellSet::from_iter([e1, e2]);
            let mut conclusions = Vec::new();
            push_eliminations(&mut conclusions, ctx.view, targets, x);
            if !conclusions.is_empty() {
                out.push(ctx.step(
                    RectangleKind::ThreeX2Sl { links: [link_1, link_2] },
                    conclusions,
                ));
            }
        }
    }
}

/// `+4C/3SL`: links off both roofs joined by a middle link. Whichever
/// roof takes x, one of the two middle cells takes it too.
fn four_c(
    ctx: &UrCtx<'_>,
    x: Digit,
    roof_a: Position,
    roof_b: Position,
    out: &mut Vec<RectangleStep>,
) {
    for house_a in House::of(roof_a) {
        if house_a.contains(roof_b) {
            continue;
        }
        let Some(f1) = ctx.view.conjugate_partner(house_a, x, roof_a) else {
            continue;
        };
        if ctx.rect.cell_set().contains(f1) {
            continue;
        }
        for house_b in House::of(roof_b) {
            if house_b.contains(roof_a) {
                continue;
            }
            let Some(f2) = ctx.view.conjugate_partner(house_b, x, roof_b) else {
                continue;
            };
            if ctx.rect.cell_set().contains(f2) || f2 == f1 {
                continue;
            }
            for house_m in House::common(f1, f2) {
                if house_m == house_a || house_m == house_b {
                    continue;
                }
                if !ctx.view.is_conjugate(house_m, x, f1, f2) {
                    continue;
                }
                let targets = (f1.peers() & f2.peers() & ctx.view.empty_cells())
                    - ctx.rect.cell_set()
                    - CellSet::from_iter([f1, f2]);
                let mut conclusions = Vec::new();
                push_eliminations(&mut conclusions, ctx.view, targets, x);
                if !conclusions.is_empty() {
                    out.push(ctx.step(
                        RectangleKind::FourC3Sl {
                            links: [
                                ConjugatePair::new(house_a, x, roof_a, f1),
                                ConjugatePair::new(house_m, x, f1, f2),
                                ConjugatePair::new(house_b, x, roof_b, f2),
                            ],
                        },
                        conclusions,
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quadra_core::{Digit, Position};

    use crate::testing::SearchTester;

    #[test]
    fn test_two_d_eliminates_both_extras() {
        // Diagonal roofs r1c1 (+8) and r2c4 (+9); external {8,9} at r1c4
        // sees both. Cells seeing the external cell and both roofs lose
        // 8 and 9.
        SearchTester::new()
            .restrict(Position::new(0, 0), [Digit::D1, Digit::D2, Digit::D8])
            .restrict(Position::new(3, 0), [Digit::D1, Digit::D2])
            .restrict(Position::new(0, 1), [Digit::D1, Digit::D2])
            .restrict(Position::new(3, 1), [Digit::D1, Digit::D2, Digit::D9])
            .restrict(Position::new(5, 0), [Digit::D8, Digit::D9])
            .search()
            // r1c5 shares row 1 with the roof r1c1 and box 2 with both the
            // external cell and the roof r2c4.
            .assert_eliminates(Position::new(4, 0), Digit::D8)
            .assert_eliminates(Position::new(4, 0), Digit::D9)
            .assert_not_eliminates(Position::new(6, 0), Digit::D8);
    }

    #[test]
    fn test_two_b_one_sl() {
        // Roofs r2c1/r2c4 share extra 9. Digit 9 is conjugate in column 4
        // between the roof r2c4 and r3c4 (both inside box 1), so box 1
        // cells seeing both lose 9.
        let mut tester = SearchTester::new()
            .restrict(Position::new(0, 0), [Digit::D1, Digit::D2])
            .restrict(Position::new(3, 0), [Digit::D1, Digit::D2])
            .restrict(Position::new(0, 1), [Digit::D1, Digit::D2, Digit::D9])
            .restrict(Position::new(3, 1), [Digit::D1, Digit::D2, Digit::D9]);
        for y in 3..9 {
            tester = tester.remove(Position::new(3, y), Digit::D9);
        }
        tester
            .search()
            // Box 1 cells outside column 4 see both link cells.
            .assert_eliminates(Position::new(4, 0), Digit::D9)
            .assert_eliminates(Position::new(5, 2), Digit::D9)
            .assert_any(|step| step.name().contains("+2B/1SL"))
            // Cells outside box 1 and column 4 never see both endpoints.
            .assert_not_eliminates(Position::new(6, 0), Digit::D9);
    }

    #[test]
    fn test_shared_extra_without_link_yields_no_chain() {
        SearchTester::new()
            .restrict(Position::new(0, 0), [Digit::D1, Digit::D2])
            .restrict(Position::new(3, 0), [Digit::D1, Digit::D2])
            .restrict(Position::new(0, 1), [Digit::D1, Digit::D2, Digit::D9])
            .restrict(Position::new(3, 1), [Digit::D1, Digit::D2, Digit::D9])
            .search()
            .assert_any(|step| step.name().contains("Type 2"))
            .assert_not_eliminates(Position::new(4, 0), Digit::D9);
    }
}
