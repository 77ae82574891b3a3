//! Benchmarks for the CPU field update.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use driftfield::spawn::{ambient_particle, SpawnContext};
use driftfield::{ParticleField, Vec2, Viewport};

fn seeded_field(count: u32) -> ParticleField {
    let viewport = Viewport::new(1280.0, 720.0);
    let particles = (0..count)
        .map(|i| ambient_particle(&mut SpawnContext::new(i, count, viewport, Some(11))))
        .collect();
    ParticleField::new(particles, viewport, false)
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_tick");

    for count in [40u32, 400, 4000] {
        group.bench_with_input(
            BenchmarkId::new("pointer_absent", count),
            &count,
            |b, &count| {
                let mut field = seeded_field(count);
                b.iter(|| {
                    field.tick();
                    black_box(field.particles().len())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("pointer_center", count),
            &count,
            |b, &count| {
                let mut field = seeded_field(count);
                field.pointer_moved(Vec2::new(640.0, 360.0));
                b.iter(|| {
                    field.tick();
                    black_box(field.particles().len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
