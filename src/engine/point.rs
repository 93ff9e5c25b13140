use crate::util::vec3::Vec3;

/// Stable spawn point identifier, assigned by the surrounding simulation
pub type SpawnPointId = i32;

/// Owning team tag carried on a spawn point record
pub type TeamId = i32;

/// Team tag for neutral/unassigned points
pub const NEUTRAL_TEAM: TeamId = -1;

/// One candidate spawn location
///
/// `position` is filled in by the acquisition strategy: immediately at setup
/// (eager) or after the first player deployed there has been observed
/// (exploratory). Once set it is never cleared.
///
/// `last_occupant` is the player most recently handed this point, kept so a
/// late deploy observation can be routed back to its originating point. It
/// is a lookup aid, not an ownership relation: overwritten by every new
/// placement and allowed to go stale.
#[derive(Debug, Clone)]
pub struct SpawnPoint<P> {
    pub id: SpawnPointId,
    pub team_id: TeamId,
    pub position: Option<Vec3>,
    pub last_occupant: Option<P>,
}

impl<P> SpawnPoint<P> {
    /// Create a neutral spawn point
    pub fn new(id: SpawnPointId) -> Self {
        Self {
            id,
            team_id: NEUTRAL_TEAM,
            position: None,
            last_occupant: None,
        }
    }

    /// Create a spawn point owned by a team
    pub fn with_team(id: SpawnPointId, team_id: TeamId) -> Self {
        Self {
            id,
            team_id,
            position: None,
            last_occupant: None,
        }
    }

    /// Create a spawn point with a known position
    pub fn at(id: SpawnPointId, position: Vec3) -> Self {
        Self {
            id,
            team_id: NEUTRAL_TEAM,
            position: Some(position),
            last_occupant: None,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.team_id == NEUTRAL_TEAM
    }
}
