//! Boundary to the surrounding simulation
//!
//! The engine never walks the world itself; everything it needs (positions,
//! team membership, proximity queries) comes through this trait. Player and
//! team handles are opaque and compared only through the identity methods,
//! since foreign handles may not support native equality.

use crate::engine::point::SpawnPointId;
use crate::util::vec3::Vec3;

/// Queries the engine issues against the surrounding simulation
pub trait World {
    /// Opaque player handle
    type Player: Clone;
    /// Opaque team handle
    type Team: Clone;
    /// Handle to a spawn-point object in the world
    type Handle;

    /// Resolve the world object behind a spawn point id, if any
    fn resolve_spawn_handle(&self, id: SpawnPointId) -> Option<Self::Handle>;

    /// World position of a spawn-point handle
    fn handle_position(&self, handle: &Self::Handle) -> Option<Vec3>;

    /// Current world position of a player
    fn player_position(&self, player: &Self::Player) -> Option<Vec3>;

    /// Team the player belongs to
    fn player_team(&self, player: &Self::Player) -> Option<Self::Team>;

    /// Player nearest to `position`, restricted to `team` when given
    fn closest_player(&self, position: Vec3, team: Option<&Self::Team>) -> Option<Self::Player>;

    /// Identity comparison for team handles
    fn teams_equal(&self, a: &Self::Team, b: &Self::Team) -> bool;

    /// Identity comparison for player handles
    fn players_equal(&self, a: &Self::Player, b: &Self::Player) -> bool;

    /// Materialize a player at a spawn point. Invoked by the match
    /// controller after a successful selection, never by the engine.
    /// Returns false if the point has no world object.
    fn place_player(&mut self, player: &Self::Player, point: SpawnPointId) -> bool;
}
