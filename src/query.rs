use crate::ids::Ability;
use crate::sunit::Tag;
use glam::Vec2;

/// Synchronous questions to the game. Every call is a round trip, callers keep them rare.
pub trait QueryService {
    /// Ground path length from the unit to `to`. Values below `UNREACHABLE_DISTANCE` mean there
    /// is no path.
    fn pathing_distance(&self, unit: Tag, to: Vec2) -> f32;

    fn placement_valid(&self, ability: Ability, at: Vec2) -> bool;

    /// Abilities the unit could use right now (energy and cooldowns considered)
    fn abilities_available(&self, unit: Tag) -> Vec<Ability>;
}

pub const UNREACHABLE_DISTANCE: f32 = 0.1;

pub fn is_reachable(query: &dyn QueryService, unit: Tag, to: Vec2) -> bool {
    query.pathing_distance(unit, to) >= UNREACHABLE_DISTANCE
}
