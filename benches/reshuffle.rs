//! Reshuffle-path benchmarks: uniform shuffle vs smart shuffle.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deck_battle::cards::SkillId;
use deck_battle::core::CardRng;
use deck_battle::piles::Deck;

fn deck_of(size: u32) -> Deck {
    let mut deck = Deck::new();
    for i in 0..size {
        deck.add(SkillId::new(i % 40));
    }
    deck
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("reshuffle");

    for &size in &[10u32, 40, 200] {
        let recent: Vec<_> = (0..10).map(SkillId::new).collect();

        group.bench_function(format!("uniform_{size}"), |b| {
            let mut rng = CardRng::new(42);
            let mut deck = deck_of(size);
            b.iter(|| {
                deck.shuffle(&mut rng);
                black_box(deck.len());
            });
        });

        group.bench_function(format!("smart_{size}"), |b| {
            let mut rng = CardRng::new(42);
            let mut deck = deck_of(size);
            b.iter(|| {
                let swaps = deck.smart_shuffle(black_box(&recent), 5, &mut rng);
                black_box(swaps);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shuffle);
criterion_main!(benches);
