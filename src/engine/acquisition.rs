//! Position acquisition strategies
//!
//! A spawn point record starts without a world position. How that position
//! is learned is the one axis the engine is generic over:
//!
//! - [`Exploratory`] learns nothing up front. Unpositioned points are handed
//!   out first, and the position observed when the player actually deploys
//!   is written back through the engine's event sink.
//! - [`Eager`] resolves every point against the world in one pass when the
//!   point list is installed. Points that fail resolution stay unpositioned
//!   and are treated as unusable.

use tracing::warn;

use crate::engine::point::SpawnPoint;
use crate::world::World;

/// How spawn point positions are obtained
pub trait PositionAcquisition<W: World> {
    /// Run one acquisition round over a freshly installed point list
    fn acquire(&self, world: &W, points: &mut [SpawnPoint<W::Player>]);

    /// Whether an unknown position means "hand the point out so the deploy
    /// teaches us where it is" rather than "unusable"
    fn discovers_by_placement(&self) -> bool;
}

/// Learn positions from deploy observations
#[derive(Debug, Clone, Copy, Default)]
pub struct Exploratory;

impl<W: World> PositionAcquisition<W> for Exploratory {
    fn acquire(&self, _world: &W, _points: &mut [SpawnPoint<W::Player>]) {
        // Nothing to do up front; positions arrive through the event sink.
    }

    fn discovers_by_placement(&self) -> bool {
        true
    }
}

/// Resolve every position at setup time
#[derive(Debug, Clone, Copy, Default)]
pub struct Eager;

impl<W: World> PositionAcquisition<W> for Eager {
    fn acquire(&self, world: &W, points: &mut [SpawnPoint<W::Player>]) {
        for point in points.iter_mut() {
            let position = world
                .resolve_spawn_handle(point.id)
                .and_then(|handle| world.handle_position(&handle));
            match position {
                Some(position) => point.position = Some(position),
                None => {
                    // Leave unpositioned; the remaining points still resolve.
                    warn!(
                        "spawn point {} failed resolution, excluded from selection",
                        point.id
                    );
                }
            }
        }
    }

    fn discovers_by_placement(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::point::SpawnPointId;
    use crate::util::vec3::Vec3;

    /// World that only knows spawn objects with ids below 2000
    struct HalfResolvableWorld;

    impl World for HalfResolvableWorld {
        type Player = u32;
        type Team = i32;
        type Handle = SpawnPointId;

        fn resolve_spawn_handle(&self, id: SpawnPointId) -> Option<SpawnPointId> {
            (id < 2000).then_some(id)
        }

        fn handle_position(&self, handle: &SpawnPointId) -> Option<Vec3> {
            Some(Vec3::new(*handle as f32, 0.0, 0.0))
        }

        fn player_position(&self, _player: &u32) -> Option<Vec3> {
            None
        }

        fn player_team(&self, _player: &u32) -> Option<i32> {
            None
        }

        fn closest_player(&self, _position: Vec3, _team: Option<&i32>) -> Option<u32> {
            None
        }

        fn teams_equal(&self, a: &i32, b: &i32) -> bool {
            a == b
        }

        fn players_equal(&self, a: &u32, b: &u32) -> bool {
            a == b
        }

        fn place_player(&mut self, _player: &u32, _point: SpawnPointId) -> bool {
            false
        }
    }

    #[test]
    fn test_exploratory_acquire_is_noop() {
        let mut points: Vec<SpawnPoint<u32>> =
            vec![SpawnPoint::new(1001), SpawnPoint::new(1002)];
        Exploratory.acquire(&HalfResolvableWorld, &mut points);
        assert!(points.iter().all(|p| p.position.is_none()));
        assert!(PositionAcquisition::<HalfResolvableWorld>::discovers_by_placement(&Exploratory));
    }

    #[test]
    fn test_eager_keeps_resolved_points() {
        let mut points: Vec<SpawnPoint<u32>> =
            vec![SpawnPoint::new(1001), SpawnPoint::new(1002)];
        Eager.acquire(&HalfResolvableWorld, &mut points);

        // Points the world can resolve end up positioned and usable
        assert_eq!(points[0].position, Some(Vec3::new(1001.0, 0.0, 0.0)));
        assert_eq!(points[1].position, Some(Vec3::new(1002.0, 0.0, 0.0)));
        assert!(!PositionAcquisition::<HalfResolvableWorld>::discovers_by_placement(&Eager));
    }

    #[test]
    fn test_eager_excludes_failed_points() {
        let mut points: Vec<SpawnPoint<u32>> =
            vec![SpawnPoint::new(1001), SpawnPoint::new(2001), SpawnPoint::new(1002)];
        Eager.acquire(&HalfResolvableWorld, &mut points);

        // A failed resolution leaves that point unusable without aborting
        // the rest of the batch
        assert!(points[0].position.is_some());
        assert!(points[1].position.is_none());
        assert!(points[2].position.is_some());
    }
}
