use criterion::{criterion_group, criterion_main, Criterion};

use snake_engine::{Direction, GameConfig, GameEngine, Intent, RunState, SessionRng};

// A snake that weaves down the board, eating whatever food the session
// spawned along the way, restarting whenever it dies.
fn bench_weaving_session(ticks: u64) {
    let config = GameConfig {
        grid_width: 50,
        grid_height: 50,
        starting_position: snake_engine::Point::new(0, 0),
        ..GameConfig::default()
    };
    let mut engine = GameEngine::with_rng(config, SessionRng::new(42)).unwrap();
    engine.handle(Intent::ToggleRunPause).unwrap();

    let mut heading_right = true;
    for _ in 0..ticks {
        if engine.run_state() == RunState::GameOver {
            engine.handle(Intent::Restart).unwrap();
            heading_right = true;
        }

        let head = engine.session.snake.head();
        let at_edge = if heading_right { head.x >= 49 } else { head.x <= 0 };
        if at_edge {
            engine.handle(Intent::Turn(Direction::Down)).unwrap();
            engine.handle(Intent::Tick).unwrap();
            heading_right = !heading_right;
            let direction = if heading_right {
                Direction::Right
            } else {
                Direction::Left
            };
            engine.handle(Intent::Turn(direction)).unwrap();
        } else {
            engine.handle(Intent::Tick).unwrap();
        }
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("weaving_10k_ticks", |b| b.iter(|| bench_weaving_session(10_000)));

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
