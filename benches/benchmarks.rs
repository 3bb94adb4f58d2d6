criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_river_pool,
        dealing_one_trial,
        running_preflop_equity,
}

use holdem_equity::cards::{Board, Card, Deck, Evaluator, Hole, Strength};
use holdem_equity::simulation::Engine;

fn evaluating_river_pool(c: &mut criterion::Criterion) {
    c.bench_function("evaluate a 7-card pool", |b| {
        let mut deck = Deck::seeded(42);
        deck.shuffle();
        let pool = deck.deal(7);
        b.iter(|| Strength::from(Evaluator::from(pool.as_slice())))
    });
}

fn dealing_one_trial(c: &mut criterion::Criterion) {
    c.bench_function("reset, filter, shuffle, and deal one trial", |b| {
        let mut deck = Deck::seeded(42);
        let known = Card::parse("As Ad").expect("valid cards");
        b.iter(|| {
            deck.reset();
            deck.remove(&known);
            deck.shuffle();
            deck.deal(7)
        })
    });
}

fn running_preflop_equity(c: &mut criterion::Criterion) {
    c.bench_function("run 10k preflop trials", |b| {
        let hole = Hole::try_from("As Ad").expect("valid hole");
        let board = Board::try_from("").expect("valid board");
        b.iter(|| Engine::seeded(hole, board.clone(), 42).run(10_000))
    });
}
