/// Sentinel disabling a distance bound
pub const UNBOUNDED: f32 = -1.0;

/// Spawn selection configuration
///
/// Bounds apply to the distance between a candidate point and the nearest
/// checked player. A negative bound means "no bound". Degenerate windows
/// (min above max) are not rejected; they simply admit no candidate.
#[derive(Debug, Clone)]
pub struct SpawnConfig {
    /// Minimum distance to the nearest checked player (negative = unbounded)
    pub min_distance: f32,
    /// Maximum distance to the nearest checked player (negative = unbounded)
    pub max_distance: f32,
    /// Rank candidates against opposing teams only
    pub team_filter: bool,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min_distance: UNBOUNDED,
            max_distance: UNBOUNDED,
            team_filter: false,
        }
    }
}

impl SpawnConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(min) = std::env::var("SPAWN_MIN_DISTANCE") {
            if let Ok(parsed) = min.parse::<f32>() {
                config.min_distance = parsed;
            } else {
                tracing::warn!("Invalid SPAWN_MIN_DISTANCE '{}', using default", min);
            }
        }

        if let Ok(max) = std::env::var("SPAWN_MAX_DISTANCE") {
            if let Ok(parsed) = max.parse::<f32>() {
                config.max_distance = parsed;
            } else {
                tracing::warn!("Invalid SPAWN_MAX_DISTANCE '{}', using default", max);
            }
        }

        if let Ok(filter) = std::env::var("SPAWN_TEAM_FILTER") {
            match filter.as_str() {
                "1" | "true" | "TRUE" => config.team_filter = true,
                "0" | "false" | "FALSE" => config.team_filter = false,
                _ => tracing::warn!("Invalid SPAWN_TEAM_FILTER '{}', using default", filter),
            }
        }

        config
    }

    /// Check whether a candidate distance falls inside the configured window
    #[inline]
    pub fn window_contains(&self, distance: f32) -> bool {
        let above_min = self.min_distance < 0.0 || distance >= self.min_distance;
        let below_max = self.max_distance < 0.0 || distance <= self.max_distance;
        above_min && below_max
    }
}
