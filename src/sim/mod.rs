//! In-memory simulation world
//!
//! A minimal stand-in for the surrounding game: players with positions and
//! team tags, plus a table of spawn objects backing eager resolution. Used
//! by the demo binary, the benches, and integration-style tests.

use hashbrown::HashMap;
use tracing::warn;
use uuid::Uuid;

use crate::engine::point::SpawnPointId;
use crate::util::vec3::Vec3;
use crate::world::World;

/// Unique player identifier
pub type PlayerId = Uuid;

/// Team tag in the simulation
pub type TeamTag = u32;

/// One simulated player
#[derive(Debug, Clone)]
pub struct SimPlayer {
    pub id: PlayerId,
    pub team: TeamTag,
    pub position: Vec3,
}

/// Simulation world state
#[derive(Debug, Default)]
pub struct SimWorld {
    players: HashMap<PlayerId, SimPlayer>,
    spawn_objects: HashMap<SpawnPointId, Vec3>,
}

impl SimWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player, returning its generated id
    pub fn add_player(&mut self, team: TeamTag, position: Vec3) -> PlayerId {
        let id = Uuid::new_v4();
        self.players.insert(
            id,
            SimPlayer {
                id,
                team,
                position,
            },
        );
        id
    }

    /// Register the world object behind a spawn point id
    pub fn add_spawn_object(&mut self, id: SpawnPointId, position: Vec3) {
        self.spawn_objects.insert(id, position);
    }

    pub fn player(&self, id: &PlayerId) -> Option<&SimPlayer> {
        self.players.get(id)
    }

    pub fn set_player_position(&mut self, id: &PlayerId, position: Vec3) {
        if let Some(player) = self.players.get_mut(id) {
            player.position = position;
        }
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.keys().copied().collect()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

impl World for SimWorld {
    type Player = PlayerId;
    type Team = TeamTag;
    type Handle = SpawnPointId;

    fn resolve_spawn_handle(&self, id: SpawnPointId) -> Option<SpawnPointId> {
        self.spawn_objects.contains_key(&id).then_some(id)
    }

    fn handle_position(&self, handle: &SpawnPointId) -> Option<Vec3> {
        self.spawn_objects.get(handle).copied()
    }

    fn player_position(&self, player: &PlayerId) -> Option<Vec3> {
        self.players.get(player).map(|p| p.position)
    }

    fn player_team(&self, player: &PlayerId) -> Option<TeamTag> {
        self.players.get(player).map(|p| p.team)
    }

    fn closest_player(&self, position: Vec3, team: Option<&TeamTag>) -> Option<PlayerId> {
        let mut best: Option<(PlayerId, f32)> = None;
        for player in self.players.values() {
            if team.is_some_and(|t| *t != player.team) {
                continue;
            }
            let distance = position.distance_sq_to(player.position);
            if best.is_none() || best.is_some_and(|(_, d)| distance < d) {
                best = Some((player.id, distance));
            }
        }
        best.map(|(id, _)| id)
    }

    fn teams_equal(&self, a: &TeamTag, b: &TeamTag) -> bool {
        a == b
    }

    fn players_equal(&self, a: &PlayerId, b: &PlayerId) -> bool {
        a == b
    }

    fn place_player(&mut self, player: &PlayerId, point: SpawnPointId) -> bool {
        let Some(position) = self.spawn_objects.get(&point).copied() else {
            warn!("no spawn object for point {}", point);
            return false;
        };
        match self.players.get_mut(player) {
            Some(entry) => {
                entry.position = position;
                true
            }
            None => false,
        }
    }
}
