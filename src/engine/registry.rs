//! Authoritative spawn point and team lists
//!
//! Backed by a Vec because registry order is meaningful: the exploratory
//! strategy hands out the first unpositioned point in order, and the ranking
//! keeps the earliest point on ties. Populated once at mode startup, appended
//! to afterward, never shrunk during a match.

use crate::engine::point::{SpawnPoint, SpawnPointId};

/// Registry of candidate spawn points and known teams
#[derive(Debug)]
pub struct SpawnRegistry<P, T> {
    points: Vec<SpawnPoint<P>>,
    teams: Vec<T>,
}

impl<P, T> Default for SpawnRegistry<P, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, T> SpawnRegistry<P, T> {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            teams: Vec::new(),
        }
    }

    /// Replace the team list wholesale. No validation; duplicate or stale
    /// handles are the caller's responsibility.
    pub fn set_teams(&mut self, teams: Vec<T>) {
        self.teams = teams;
    }

    /// Replace the spawn point list wholesale
    pub fn set_points(&mut self, points: Vec<SpawnPoint<P>>) {
        self.points = points;
    }

    /// Append a single point
    pub fn push_point(&mut self, point: SpawnPoint<P>) {
        self.points.push(point);
    }

    pub fn find_by_id(&self, id: SpawnPointId) -> Option<&SpawnPoint<P>> {
        self.points.iter().find(|p| p.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: SpawnPointId) -> Option<&mut SpawnPoint<P>> {
        self.points.iter_mut().find(|p| p.id == id)
    }

    /// First point whose last occupant satisfies the identity predicate.
    /// Used to route a deploy observation back to its originating point.
    pub fn find_by_last_occupant_mut(
        &mut self,
        mut is_player: impl FnMut(&P) -> bool,
    ) -> Option<&mut SpawnPoint<P>> {
        self.points
            .iter_mut()
            .find(|p| p.last_occupant.as_ref().is_some_and(&mut is_player))
    }

    pub fn points(&self) -> &[SpawnPoint<P>] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [SpawnPoint<P>] {
        &mut self.points
    }

    pub fn teams(&self) -> &[T] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points with a known position
    pub fn positioned_count(&self) -> usize {
        self.points.iter().filter(|p| p.position.is_some()).count()
    }

    /// Fraction of points with a known position, 0.0 for an empty registry
    pub fn explored_fraction(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.positioned_count() as f32 / self.points.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::vec3::Vec3;

    fn registry_with_ids(ids: &[SpawnPointId]) -> SpawnRegistry<u32, i32> {
        let mut registry = SpawnRegistry::new();
        registry.set_points(ids.iter().map(|&id| SpawnPoint::new(id)).collect());
        registry
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry: SpawnRegistry<u32, i32> = SpawnRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.teams().is_empty());
    }

    #[test]
    fn test_set_points_replaces_wholesale() {
        let mut registry = registry_with_ids(&[1001, 1002]);
        registry.set_points(vec![SpawnPoint::new(2001)]);
        assert_eq!(registry.len(), 1);
        assert!(registry.find_by_id(1001).is_none());
        assert!(registry.find_by_id(2001).is_some());
    }

    #[test]
    fn test_push_point_appends_in_order() {
        let mut registry = registry_with_ids(&[1001]);
        registry.push_point(SpawnPoint::new(1002));
        let ids: Vec<_> = registry.points().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1001, 1002]);
    }

    #[test]
    fn test_find_by_id() {
        let registry = registry_with_ids(&[1001, 1002, 1003]);
        assert_eq!(registry.find_by_id(1002).map(|p| p.id), Some(1002));
        assert!(registry.find_by_id(9999).is_none());
    }

    #[test]
    fn test_find_by_last_occupant() {
        let mut registry = registry_with_ids(&[1001, 1002]);
        registry.find_by_id_mut(1002).unwrap().last_occupant = Some(7);

        let found = registry.find_by_last_occupant_mut(|p| *p == 7);
        assert_eq!(found.map(|p| p.id), Some(1002));

        assert!(registry.find_by_last_occupant_mut(|p| *p == 8).is_none());
    }

    #[test]
    fn test_explored_fraction() {
        let mut registry = registry_with_ids(&[1001, 1002, 1003, 1004]);
        assert_eq!(registry.explored_fraction(), 0.0);

        registry.find_by_id_mut(1001).unwrap().position = Some(Vec3::ZERO);
        assert_eq!(registry.explored_fraction(), 0.25);

        registry.find_by_id_mut(1003).unwrap().position = Some(Vec3::ONE);
        assert_eq!(registry.explored_fraction(), 0.5);
    }

    #[test]
    fn test_explored_fraction_empty_registry() {
        let registry: SpawnRegistry<u32, i32> = SpawnRegistry::new();
        assert_eq!(registry.explored_fraction(), 0.0);
    }
}
