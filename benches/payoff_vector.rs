use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_nfg::core::{Action, GameRng};
use rust_nfg::games::random_game;

fn bench_payoff_vector(c: &mut Criterion) {
    let game = random_game(&[8, 8, 8, 8], &mut GameRng::new(42)).unwrap();
    let player = &game.players()[0];

    let pure = Action::pure_profile(&[3, 5, 1]);
    let mixed: Vec<Action> = (0..3).map(|_| Action::Mixed(vec![0.125; 8])).collect();

    c.bench_function("payoff_vector 4p pure", |b| {
        b.iter(|| player.payoff_vector(black_box(&pure)).unwrap())
    });
    c.bench_function("payoff_vector 4p mixed", |b| {
        b.iter(|| player.payoff_vector(black_box(&mixed)).unwrap())
    });
    c.bench_function("is_nash 4p mixed", |b| {
        let profile: Vec<Action> = (0..4).map(|_| Action::Mixed(vec![0.125; 8])).collect();
        b.iter(|| game.is_nash(black_box(&profile)).unwrap())
    });
}

criterion_group!(benches, bench_payoff_vector);
criterion_main!(benches);
