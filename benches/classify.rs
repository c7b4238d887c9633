use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pokerhand::cards::{Card, Rank, Suit};
use pokerhand::classify::classify_five;

fn bench_classify_five(c: &mut Criterion) {
    let hi = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let sf = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];

    let mut g = c.benchmark_group("classify_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| classify_five(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| classify_five(black_box(input)))
    });
    g.finish();
}

criterion_group!(benches, bench_classify_five);
criterion_main!(benches);
