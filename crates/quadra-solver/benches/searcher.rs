//! Benchmarks for the rectangle searcher.

use std::str::FromStr as _;

use criterion::{Criterion, criterion_group, criterion_main};
use quadra_core::Grid;
use quadra_solver::{RectangleSearcher, SearcherOptions};

const MID_SOLVE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

fn bench_find_steps(c: &mut Criterion) {
    let grid = Grid::from_str(MID_SOLVE).unwrap();
    let searcher = RectangleSearcher::new();

    c.bench_function("find_steps/mid_solve", |b| {
        b.iter(|| std::hint::black_box(searcher.find_steps(&grid)));
    });

    c.bench_function("find_steps/empty_grid", |b| {
        let empty = Grid::new();
        b.iter(|| std::hint::black_box(searcher.find_steps(&empty)));
    });

    c.bench_function("find_steps/incomplete_patterns", |b| {
        let searcher =
            RectangleSearcher::with_options(SearcherOptions { allow_incomplete: true });
        b.iter(|| std::hint::black_box(searcher.find_steps(&grid)));
    });
}

criterion_group!(benches, bench_find_steps);
criterion_main!(benches);
