//! Selection benchmarks
//!
//! Measures automatic spawn selection against growing player counts, with
//! and without team filtering.
//!
//! Run with: cargo bench --bench selection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use spawn_director::config::SpawnConfig;
use spawn_director::engine::acquisition::Eager;
use spawn_director::engine::point::SpawnPoint;
use spawn_director::engine::selector::SpawnEngine;
use spawn_director::sim::{PlayerId, SimWorld};
use spawn_director::util::vec3::Vec3;

const POINT_COUNT: usize = 32;
const ARENA_RADIUS: f32 = 800.0;

/// Create a world with players split across two teams and a ring of
/// resolved spawn points
fn create_setup(
    player_count: usize,
    config: SpawnConfig,
) -> (SimWorld, SpawnEngine<SimWorld, Eager>, PlayerId) {
    let mut world = SimWorld::new();
    let mut rng = rand::thread_rng();

    let mut requester = None;
    for i in 0..player_count {
        let position = Vec3::new(
            rng.gen_range(-ARENA_RADIUS..ARENA_RADIUS),
            0.0,
            rng.gen_range(-ARENA_RADIUS..ARENA_RADIUS),
        );
        let id = world.add_player((i % 2) as u32 + 1, position);
        requester.get_or_insert(id);
    }

    let mut points = Vec::with_capacity(POINT_COUNT);
    for i in 0..POINT_COUNT {
        let id = 1001 + i as i32;
        let angle = i as f32 / POINT_COUNT as f32 * std::f32::consts::TAU;
        world.add_spawn_object(
            id,
            Vec3::new(angle.cos() * ARENA_RADIUS, 0.0, angle.sin() * ARENA_RADIUS),
        );
        points.push(SpawnPoint::new(id));
    }

    let mut engine = SpawnEngine::new(config, Eager);
    engine.set_teams(vec![1, 2]);
    engine.set_spawn_points(&world, points);

    let requester = requester.expect("at least one player");
    (world, engine, requester)
}

/// Benchmark automatic selection at various player counts
fn bench_automatic(c: &mut Criterion) {
    let mut group = c.benchmark_group("automatic_selection");
    group.sample_size(50);

    for count in [16, 64, 256, 1000] {
        let (world, mut engine, requester) = create_setup(count, SpawnConfig::default());

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("any_player", count), &count, |b, _| {
            b.iter(|| {
                black_box(engine.select_spawn_point(&world, black_box(&requester), None))
            })
        });
    }
    group.finish();
}

/// Benchmark team-filtered selection at various player counts
fn bench_team_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("team_filtered_selection");
    group.sample_size(50);

    for count in [16, 64, 256, 1000] {
        let config = SpawnConfig {
            team_filter: true,
            ..Default::default()
        };
        let (world, mut engine, requester) = create_setup(count, config);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("opposing_teams", count), &count, |b, _| {
            b.iter(|| {
                black_box(engine.select_spawn_point(&world, black_box(&requester), None))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_automatic, bench_team_filter);
criterion_main!(benches);
