use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use tilesweep_core::*;

fn generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    for (name, width, height) in [("beginner", 9, 9), ("expert", 30, 16), ("huge", 255, 255)] {
        let config = GameConfig::new(width, height, DEFAULT_DENSITY);
        let mut generator = RandomMineGenerator::new(0x5eed);
        group.bench_function(name, |b| {
            b.iter(|| {
                let mines = config.mine_count().unwrap();
                black_box(generator.generate(config.size(), mines).unwrap())
            })
        });
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let mine_layout = MineLayout::from_mine_coords((255, 255), &[(254, 254)]).unwrap();
    let engine = Engine::new(mine_layout, Layout::default()).unwrap();

    c.bench_function("flood_fill_open_board", |b| {
        b.iter_batched(
            || engine.clone(),
            |mut engine| black_box(engine.reveal((0, 0)).unwrap()),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, generation, flood_fill);
criterion_main!(benches);
