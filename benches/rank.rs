use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poker_hands::core::{Deck, Hand};
use rand::{rngs::StdRng, SeedableRng};

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse hand", |b| {
        b.iter(|| Hand::new_from_str(black_box("7S 7D AS AC AH")))
    });
}

fn bench_rank_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_key");
    for s in ["3H 4S 7S QD KD", "6S 6D TD TH KH", "AS 2H 3S 4H 5C", "AH TH JH QH KH"] {
        let hand = Hand::new_from_str(s).unwrap();
        group.bench_function(s, |b| b.iter(|| black_box(&hand).rank_key()));
    }
    group.finish();
}

fn bench_evaluate_random(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(420);
    let deck = Deck::default();
    let hands: Vec<Hand> = (0..1000)
        .map(|_| deck.sample_hand(&mut rng).unwrap())
        .collect();

    c.bench_function("evaluate 1000 random hands", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(hand.evaluate());
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_rank_key, bench_evaluate_random);
criterion_main!(benches);
