use crate::*;
use glam::Vec2;
use ordered_float::OrderedFloat;

// Inside this nothing moves, outside the outer radius everyone walks back
const RETREAT_INNER_RADIUS: f32 = 10.0;
const RETREAT_OUTER_RADIUS: f32 = 14.0;

/// Closest of `units` to `to` with its distance. Of equally close units the first one wins.
pub fn nearest<'u>(
    units: impl IntoIterator<Item = &'u UnitSnapshot>,
    to: Vec2,
) -> Option<(&'u UnitSnapshot, f32)> {
    units
        .into_iter()
        .map(|u| (u, u.distance_squared(to)))
        .min_by_key(|(_, d)| OrderedFloat(*d))
        .map(|(u, d)| (u, d.sqrt()))
}

impl<'a> Bot<'a> {
    pub fn nearest_enemy(&self, unit: &UnitSnapshot) -> Option<(&'a UnitSnapshot, f32)> {
        nearest(self.game.visible_enemies(), unit.position_2d())
    }

    /// Attack-move onto the first visible enemy unless already attacking.
    pub fn attack(&mut self, unit: &UnitSnapshot) {
        let Some(target) = self.game.visible_enemies().first().copied() else {
            return;
        };
        if unit.first_ability() != Some(Ability::Attack) {
            self.issue(
                unit.tag,
                Ability::Attack,
                Target::Pos(target.position_2d()),
            );
        }
    }

    pub fn retreat(&mut self, unit: &UnitSnapshot, to: Vec2) {
        let distance = unit.distance(to);
        if distance < RETREAT_INNER_RADIUS {
            if !unit.idle() {
                self.issue(unit.tag, Ability::Stop, Target::None);
            }
        } else if distance > RETREAT_OUTER_RADIUS && unit.first_ability() != Some(Ability::Move) {
            self.issue(unit.tag, Ability::Move, Target::Pos(to));
        }
    }
}
