use stacktoe::alpha_beta_searcher::SearchContext;
use stacktoe::board::player::Player;
use stacktoe::board::Position;
use stacktoe::move_generator::MoveGenerator;
use stacktoe::stack_search::search_best_move;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let empty = Position::new(Player::Me);
    let midgame: Position = "sL,.,./.,m,./.,.,S opponent"
        .parse()
        .expect("benchmark position should parse");

    c.bench_function("alpha beta depth 4 from empty board", |b| {
        b.iter(|| {
            let mut context = SearchContext::new(4);
            search_best_move(&mut context, black_box(&empty)).unwrap()
        })
    });

    c.bench_function("parallel alpha beta depth 4 from empty board", |b| {
        b.iter(|| {
            let mut context = SearchContext::with_parallel(4, true);
            search_best_move(&mut context, black_box(&empty)).unwrap()
        })
    });

    c.bench_function("alpha beta depth 4 midgame", |b| {
        b.iter(|| {
            let mut context = SearchContext::new(4);
            search_best_move(&mut context, black_box(&midgame)).unwrap()
        })
    });

    c.bench_function("count positions to depth 3", |b| {
        b.iter(|| MoveGenerator::count_positions(black_box(&empty), 3))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
