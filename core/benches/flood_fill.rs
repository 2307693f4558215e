use std::hint::black_box;

use cookie_search_core::*;
use criterion::{Criterion, criterion_group, criterion_main};

fn reveal_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("reveal");

    for orientation in [Orientation::Landscape, Orientation::Portrait] {
        let mut template = GridGame::with_orientation(orientation);
        template.new_game(RandomPrizeGenerator::new(0x5eed, Placement::Rejection));
        let start = template
            .save()
            .iter()
            .position(|&state| state == CellState::Hidden)
            .unwrap_or(0);

        group.bench_function(format!("{:?}", orientation), |b| {
            b.iter(|| {
                let mut game = template.clone();
                black_box(game.reveal(black_box(start)))
            })
        });
    }

    group.bench_function("new_game", |b| {
        let mut game = GridGame::with_orientation(Orientation::Landscape);
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(game.new_game(RandomPrizeGenerator::new(seed, Placement::Rejection)))
        })
    });

    group.finish();
}

criterion_group!(benches, reveal_benchmark);
criterion_main!(benches);
