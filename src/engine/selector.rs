//! Spawn point selection
//!
//! One engine instance per match, owned by the match-lifecycle controller
//! and handed the world snapshot on every call. Selection either honors an
//! explicit request or ranks candidates by distance to the nearest checked
//! player, preferring the most remote point inside the configured window.

use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::config::SpawnConfig;
use crate::engine::acquisition::PositionAcquisition;
use crate::engine::point::{SpawnPoint, SpawnPointId};
use crate::engine::registry::SpawnRegistry;
use crate::util::vec3::Vec3;
use crate::world::World;

/// Selection errors. All recoverable; the caller decides whether to retry
/// with a different id or fall back to a default placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("spawn point {0} is not registered")]
    UnknownSpawnPoint(SpawnPointId),
    #[error("no spawn point satisfies the distance window")]
    NoEligibleSpawnPoint,
    #[error("spawn point {0} failed position resolution")]
    ResolutionFailure(SpawnPointId),
}

/// Spawn selection engine
///
/// Generic over the world boundary and the position acquisition strategy.
/// Setup populates the registry, each spawn request returns the chosen point
/// id, and the caller performs the actual placement.
pub struct SpawnEngine<W: World, A: PositionAcquisition<W>> {
    pub config: SpawnConfig,
    registry: SpawnRegistry<W::Player, W::Team>,
    acquisition: A,
}

impl<W: World, A: PositionAcquisition<W>> SpawnEngine<W, A> {
    pub fn new(config: SpawnConfig, acquisition: A) -> Self {
        Self {
            config,
            registry: SpawnRegistry::new(),
            acquisition,
        }
    }

    /// Replace the known team list
    pub fn set_teams(&mut self, teams: Vec<W::Team>) {
        self.registry.set_teams(teams);
    }

    /// Replace the spawn point list and run one acquisition round over it
    pub fn set_spawn_points(&mut self, world: &W, points: Vec<SpawnPoint<W::Player>>) {
        self.registry.set_points(points);
        self.acquisition.acquire(world, self.registry.points_mut());
    }

    /// Append a single point. Acquisition is a side effect of bulk
    /// replacement only, so under the eager strategy the point stays
    /// unresolved until the next `set_spawn_points`.
    pub fn add_spawn_point(&mut self, point: SpawnPoint<W::Player>) {
        self.registry.push_point(point);
    }

    pub fn registry(&self) -> &SpawnRegistry<W::Player, W::Team> {
        &self.registry
    }

    /// Fraction of points whose position is known
    pub fn explored_fraction(&self) -> f32 {
        self.registry.explored_fraction()
    }

    /// Choose a spawn point for `player`
    ///
    /// With `explicit` the request is honored as-is (no distance or team
    /// logic); otherwise candidates are ranked automatically. The returned
    /// id is for the caller to place the player at.
    pub fn select_spawn_point(
        &mut self,
        world: &W,
        player: &W::Player,
        explicit: Option<SpawnPointId>,
    ) -> Result<SpawnPointId, SelectError> {
        match explicit {
            Some(id) => self.select_explicit(player, id),
            None => self.select_automatic(world, player),
        }
    }

    /// Record an observed deploy position for `player`
    ///
    /// Routed back to the originating point through its last occupant. The
    /// first observation for a point wins; later ones, and observations that
    /// match no point, are ignored. Only meaningful for strategies that
    /// discover positions by placement.
    pub fn on_position_observed(&mut self, world: &W, player: &W::Player, position: Vec3) {
        if !self.acquisition.discovers_by_placement() {
            return;
        }
        let Some(point) = self
            .registry
            .find_by_last_occupant_mut(|p| world.players_equal(p, player))
        else {
            // Late or unmatched event; nothing to correlate it with.
            return;
        };
        if point.position.is_some() {
            return;
        }
        point.position = Some(position);
        let point_id = point.id;
        debug!(
            "spawn point {} position discovered, {:.0}% explored",
            point_id,
            self.registry.explored_fraction() * 100.0
        );
    }

    fn select_explicit(
        &mut self,
        player: &W::Player,
        id: SpawnPointId,
    ) -> Result<SpawnPointId, SelectError> {
        let discovers = self.acquisition.discovers_by_placement();
        let point = self
            .registry
            .find_by_id_mut(id)
            .ok_or(SelectError::UnknownSpawnPoint(id))?;
        if point.position.is_none() && !discovers {
            return Err(SelectError::ResolutionFailure(id));
        }
        if discovers {
            point.last_occupant = Some(player.clone());
        }
        Ok(id)
    }

    fn select_automatic(
        &mut self,
        world: &W,
        player: &W::Player,
    ) -> Result<SpawnPointId, SelectError> {
        let team = if self.config.team_filter {
            world.player_team(player)
        } else {
            None
        };

        if self.acquisition.discovers_by_placement() {
            // An unpositioned point beats any ranking: handing it out is the
            // only way its position gets discovered.
            if let Some(point) = self
                .registry
                .points_mut()
                .iter_mut()
                .find(|p| p.position.is_none())
            {
                point.last_occupant = Some(player.clone());
                return Ok(point.id);
            }
        }

        let id = self
            .most_remote(world, team.as_ref())
            .ok_or(SelectError::NoEligibleSpawnPoint)?;
        if self.acquisition.discovers_by_placement() {
            if let Some(point) = self.registry.find_by_id_mut(id) {
                point.last_occupant = Some(player.clone());
            }
        }
        debug!("selected spawn point {}", id);
        Ok(id)
    }

    /// Rank candidates and return the most remote eligible point.
    ///
    /// The running maximum goes over the flattened (point, checked team)
    /// pairs, not over a per-point minimum across teams: a point can win on
    /// its distance to one opposing team while sitting close to another.
    /// Replacement requires strictly greater distance, so ties keep the
    /// earliest pair in encounter order.
    fn most_remote(&self, world: &W, team: Option<&W::Team>) -> Option<SpawnPointId> {
        let checked_teams = self.checked_teams(world, team);
        let mut best: Option<(SpawnPointId, f32)> = None;

        for point in self.registry.points() {
            let Some(point_position) = point.position else {
                continue;
            };
            for checked in &checked_teams {
                let Some(closest) = world.closest_player(point_position, checked.as_ref()) else {
                    continue;
                };
                let Some(player_position) = world.player_position(&closest) else {
                    continue;
                };
                let distance = point_position.distance_to(player_position);
                if !self.config.window_contains(distance) {
                    continue;
                }
                let beats = match best {
                    Some((_, best_distance)) => distance > best_distance,
                    None => true,
                };
                if beats {
                    best = Some((point.id, distance));
                }
            }
        }

        best.map(|(id, _)| id)
    }

    /// Teams to measure candidate distances against. With team filtering
    /// active and a known requester team, every other registered team is
    /// checked; otherwise the single `None` entry means "any player".
    fn checked_teams(
        &self,
        world: &W,
        team: Option<&W::Team>,
    ) -> SmallVec<[Option<W::Team>; 4]> {
        if let Some(team) = team {
            if !self.registry.teams().is_empty() {
                return self
                    .registry
                    .teams()
                    .iter()
                    .filter(|other| !world.teams_equal(team, *other))
                    .cloned()
                    .map(Some)
                    .collect();
            }
        }
        smallvec![None]
    }
}
