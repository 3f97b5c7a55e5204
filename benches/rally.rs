//! Rally benchmarks for the bubble core
//!
//! Run with: cargo bench --bench rally

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use bubble_volley::config::{BubbleConfig, SimConfig};
use bubble_volley::game::constants::physics::DT;
use bubble_volley::game::round::Round;
use bubble_volley::game::state::{Bubble, Player};
use bubble_volley::game::systems::buoyancy::FlatGround;
use bubble_volley::game::systems::collision::{ColliderTag, ContactEvent};
use bubble_volley::util::vec3::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Benchmark the bare per-step update
fn bench_step(c: &mut Criterion) {
    let mut bubble = Bubble::new(BubbleConfig::default(), Vec3::new(0.0, 12.0, 0.0))
        .expect("default tuning is valid");
    let ground = FlatGround { height: 0.0 };

    c.bench_function("bubble_step", |b| {
        b.iter(|| {
            bubble.step(black_box(&ground), black_box(DT));
        })
    });
}

/// Benchmark contact dispatch over a batch of random impacts
fn bench_contacts(c: &mut Criterion) {
    let mut group = c.benchmark_group("contacts");
    let mut rng = StdRng::seed_from_u64(42);
    let tags = [
        ColliderTag::PlayerA,
        ColliderTag::PlayerB,
        ColliderTag::Ground,
        ColliderTag::Hazard,
    ];

    for count in [100, 1_000, 10_000] {
        let events: Vec<ContactEvent> = (0..count)
            .map(|i| {
                ContactEvent::new(
                    tags[i % tags.len()],
                    Vec3::new(rng.gen_range(-5.0..5.0), rng.gen_range(5.0..15.0), 0.0),
                    Vec3::UP,
                    Vec3::new(0.0, rng.gen_range(-10.0..10.0), 0.0),
                )
            })
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("dispatch", count), &events, |b, events| {
            let mut bubble = Bubble::new(BubbleConfig::default(), Vec3::new(0.0, 12.0, 0.0))
                .expect("default tuning is valid");
            let mut lost: Vec<Player> = Vec::new();
            b.iter(|| {
                for event in events {
                    black_box(bubble.on_contact_begin(event, &mut lost));
                }
                lost.clear();
            })
        });
    }

    group.finish();
}

/// Benchmark a full headless minute of play
fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("round");
    group.sample_size(20);

    group.bench_function("one_minute", |b| {
        b.iter(|| {
            let sim = SimConfig {
                time_limit: 60.0,
                ..SimConfig::default()
            };
            let mut round =
                Round::new(BubbleConfig::default(), &sim).expect("default config is valid");
            let mut rng = StdRng::seed_from_u64(7);
            while round.result().is_none() {
                black_box(round.tick(DT, &mut rng));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_step, bench_contacts, bench_round);
criterion_main!(benches);
