//! Benchmark: measure tick() cost at the window's grid resolution.
//!
//! Target: one tick on the 200×150 grid must stay well under the 16 ms
//! frame period, leaving room for drawing 30K rectangles.
//!
//! Falling benchmarks use `iter_batched` to re-seed the grid before every
//! iteration so we measure *active* simulation, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simulation::config::{GRID_HEIGHT, GRID_WIDTH, SEED_WALL_COUNT};
use simulation::{Universe, World};

/// Floor only: baseline cost of resetting the buffer and scanning 30K cells.
fn bench_tick_empty(c: &mut Criterion) {
    c.bench_function("tick_empty_200x150", |b| {
        let mut world = World::new(GRID_WIDTH, GRID_HEIGHT);
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| {
            world.tick(&mut rng);
            black_box(&world);
        });
    });
}

/// Sand falling — re-seed each iteration so sand is always actively moving.
fn bench_tick_sand_falling(c: &mut Criterion) {
    c.bench_function("tick_sand_falling_200x150", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter_batched(
            || {
                let mut world = World::new(GRID_WIDTH, GRID_HEIGHT);
                // Sand in the top 20% — it will all be actively falling
                for y in 0..(GRID_HEIGHT / 5) as i32 {
                    for x in 0..GRID_WIDTH as i32 {
                        world.set_sand(x, y);
                    }
                }
                world
            },
            |mut world| {
                world.tick(&mut rng);
                black_box(&world);
            },
            BatchSize::SmallInput,
        );
    });
}

/// A heap resting on the floor: most grains are blocked and draw a diagonal.
fn bench_tick_settled_heap(c: &mut Criterion) {
    c.bench_function("tick_settled_heap_200x150", |b| {
        let mut rng = StdRng::seed_from_u64(2);
        let mut world = World::seeded(GRID_WIDTH, GRID_HEIGHT, SEED_WALL_COUNT, &mut rng);
        for y in (GRID_HEIGHT / 2) as i32..GRID_HEIGHT as i32 {
            for x in 0..GRID_WIDTH as i32 {
                world.set_sand(x, y);
            }
        }
        b.iter(|| {
            world.tick(&mut rng);
            black_box(&world);
        });
    });
}

/// Full Universe::tick() including ambient spawning — what the browser calls.
fn bench_universe_tick(c: &mut Criterion) {
    c.bench_function("universe_tick_200x150", |b| {
        let mut universe = Universe::new(GRID_WIDTH, GRID_HEIGHT, 3);
        b.iter(|| {
            universe.tick();
            black_box(&universe);
        });
    });
}

criterion_group!(
    benches,
    bench_tick_empty,
    bench_tick_sand_falling,
    bench_tick_settled_heap,
    bench_universe_tick,
);
criterion_main!(benches);
