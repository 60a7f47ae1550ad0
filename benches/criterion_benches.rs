#[macro_use]
extern crate criterion;

use criterion::{Benchmark, Criterion};

use board_search::config::{AgentKind, Config, Method};
use board_search::movement::Movement;
use board_search::{LoadBoard, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_maze_bfs(c: &mut Criterion) {
    // ~2k states
    bench_board(c, Movement::Default, Method::BreadthFirst, "boards/maze.txt", 50);
}

#[allow(unused)]
fn bench_maze_astar(c: &mut Criterion) {
    bench_board(c, Movement::Default, Method::AStar, "boards/maze.txt", 100);
}

#[allow(unused)]
fn bench_maze_queen_bfs(c: &mut Criterion) {
    // sliding creates a lot more states
    bench_board(c, Movement::Queen, Method::BreadthFirst, "boards/maze.txt", 25);
}

fn bench_board(
    c: &mut Criterion,
    movement: Movement,
    method: Method,
    board_path: &str,
    samples: usize,
) {
    let board = board_path.load_board().unwrap();
    let config = Config {
        movement,
        method,
        agent: AgentKind::Collector,
        ..Config::default()
    };

    c.bench(
        &format!("{}-{}", method, movement),
        Benchmark::new(board_path, move |b| {
            b.iter(|| {
                criterion::black_box(
                    board.solve(criterion::black_box(&config), criterion::black_box(false)),
                )
            })
        })
        .sample_size(samples),
    );
}

criterion_group!(
    benches,
    bench_maze_bfs,
    bench_maze_astar,
    //bench_maze_queen_bfs,
);
criterion_main!(benches);
