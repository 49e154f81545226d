use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::collections::VecDeque;
use std::time::Duration;

use common::{Direction, GameState, GameStatus, GridSize, Point, SessionRng, Snake};

/// A long straight snake circling a torus row never collides, so ticks
/// can run back to back indefinitely.
fn build_circling_state(length: usize) -> GameState {
    let grid = GridSize::new(length + 50, 50);
    let mut cells = VecDeque::new();
    for i in 0..length {
        cells.push_back(Point::new(length - 1 - i, 25));
    }

    let mut snake = Snake::new(*cells.back().unwrap());
    for cell in cells.iter().rev().skip(1) {
        snake.push_head(*cell);
    }

    GameState {
        snake,
        food: Some(Point::new(0, 0)),
        grid,
        direction: Direction::Right,
        pending_direction: None,
        score: 0,
        status: GameStatus::Running,
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group
        .sampling_mode(SamplingMode::Flat)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("tick_500_segment_snake", |b| {
        let mut state = build_circling_state(500);
        let mut rng = SessionRng::new(7);
        b.iter(|| state.apply_tick(&mut rng));
    });

    group.bench_function("tick_single_segment_snake", |b| {
        let mut state = build_circling_state(1);
        let mut rng = SessionRng::new(7);
        b.iter(|| state.apply_tick(&mut rng));
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
