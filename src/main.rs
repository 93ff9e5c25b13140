use anyhow::Result;
use rand::Rng;
use tracing::{info, warn, Level};

use spawn_director::config::SpawnConfig;
use spawn_director::engine::acquisition::{Eager, Exploratory, PositionAcquisition};
use spawn_director::engine::events::DeployBuffer;
use spawn_director::engine::point::SpawnPoint;
use spawn_director::engine::selector::SpawnEngine;
use spawn_director::sim::{PlayerId, SimWorld};
use spawn_director::util::vec3::Vec3;
use spawn_director::world::World;

const PLAYERS_PER_TEAM: usize = 8;
const SPAWN_RING_RADIUS: f32 = 500.0;
const WAVES: usize = 3;

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Spawn Director v{}", env!("CARGO_PKG_VERSION"));

    let config = SpawnConfig::load_or_default();
    info!(
        "Configuration loaded: min_distance={}, max_distance={}, team_filter={}",
        config.min_distance, config.max_distance, config.team_filter
    );

    let strategy = std::env::var("SPAWN_STRATEGY").unwrap_or_else(|_| "eager".to_string());
    match strategy.as_str() {
        "eager" => run_match(Eager, &config),
        "exploratory" => run_match(Exploratory, &config),
        other => {
            warn!("Unknown SPAWN_STRATEGY '{}', using eager", other);
            run_match(Eager, &config)
        }
    }
}

/// Two teams scattered across the arena, spawn objects on a ring
fn build_world() -> SimWorld {
    let mut world = SimWorld::new();
    let mut rng = rand::thread_rng();

    for team in [1u32, 2] {
        for _ in 0..PLAYERS_PER_TEAM {
            let position = Vec3::new(
                rng.gen_range(-400.0..400.0),
                0.0,
                rng.gen_range(-400.0..400.0),
            );
            world.add_player(team, position);
        }
    }

    for (index, id) in (1001..=1008).chain(1101..=1108).enumerate() {
        let angle = index as f32 / 16.0 * std::f32::consts::TAU;
        world.add_spawn_object(
            id,
            Vec3::new(
                angle.cos() * SPAWN_RING_RADIUS,
                0.0,
                angle.sin() * SPAWN_RING_RADIUS,
            ),
        );
    }

    world
}

/// Run a few spawn waves: select, place, then feed the observed deploy
/// positions back through the event buffer
fn run_match<A: PositionAcquisition<SimWorld>>(acquisition: A, config: &SpawnConfig) -> Result<()> {
    let mut world = build_world();

    let mut engine = SpawnEngine::new(config.clone(), acquisition);
    engine.set_teams(vec![1, 2]);
    let points = (1001..=1008)
        .map(|id| SpawnPoint::with_team(id, 1))
        .chain((1101..=1108).map(|id| SpawnPoint::with_team(id, 2)))
        .collect();
    engine.set_spawn_points(&world, points);
    info!("Registered {} spawn points", engine.registry().len());

    let buffer: DeployBuffer<PlayerId> = DeployBuffer::default();
    let deploys = buffer.sender();

    for wave in 1..=WAVES {
        let mut placed = 0;
        for player in world.player_ids() {
            match engine.select_spawn_point(&world, &player, None) {
                Ok(point) => {
                    if world.place_player(&player, point) {
                        placed += 1;
                        if let Some(position) = world.player_position(&player) {
                            if deploys.try_send(player, position).is_err() {
                                warn!("deploy buffer full, dropping observation");
                            }
                        }
                    }
                }
                Err(err) => warn!("wave {}: no spawn for player {}: {}", wave, player, err),
            }
        }

        for event in buffer.drain() {
            engine.on_position_observed(&world, &event.player, event.position);
        }

        info!(
            "wave {}: placed {}/{} players, {:.0}% of points explored",
            wave,
            placed,
            world.player_count(),
            engine.explored_fraction() * 100.0
        );
    }

    Ok(())
}
