use crate::classify::is_vespene_geyser;
use crate::*;
use glam::Vec2;
use log::trace;
use ordered_float::OrderedFloat;

// Structures other than hatcheries keep out of base locations
const EXPANSION_CLEARANCE: f32 = 7.0;
const CREEP_BUILD_RADIUS: f32 = 15.0;
const GEYSER_RADIUS: f32 = 15.0;

impl<'a> Bot<'a> {
    /// Some drone that may start building with `ability`. Fails if one is already on it, or was
    /// sent earlier this tick.
    fn choose_builder(&mut self, ability: Ability) -> Result<&'a UnitSnapshot, FailureReason> {
        let workers = self.game.of_type(UnitType::Zerg_Drone);
        if workers.is_empty() {
            return Err(FailureReason::NoValidTarget);
        }
        if self.tracker.was_issued(ability) || workers.iter().any(|w| w.has_order(ability)) {
            return Err(FailureReason::AlreadyInProgress);
        }
        let available: Vec<_> = workers
            .into_iter()
            .filter(|w| w.completed() && self.tracker.is_available(w.tag))
            .collect();
        self.pick(&available)
            .ok_or(FailureReason::InsufficientResources)
    }

    pub fn try_build_structure(
        &mut self,
        ability: Ability,
        at: Vec2,
        is_expansion: bool,
    ) -> Result<(), FailureReason> {
        let worker = self.choose_builder(ability)?;
        if !query::is_reachable(self.query, worker.tag, at) {
            return Err(FailureReason::Unreachable);
        }
        if !is_expansion && self.state.expansions.any_within(at, EXPANSION_CLEARANCE) {
            return Err(FailureReason::NotPlaceable);
        }
        if !self.query.placement_valid(ability, at) {
            return Err(FailureReason::NotPlaceable);
        }
        if !self.tracker.pay(ability, ability.price()) {
            return Err(FailureReason::InsufficientResources);
        }
        self.issue(worker.tag, ability, Target::Pos(at));
        Ok(())
    }

    /// Builds on top of another unit, which is how extractors are placed.
    pub fn try_build_structure_on_tag(
        &mut self,
        ability: Ability,
        target: Tag,
    ) -> Result<(), FailureReason> {
        let site = self
            .game
            .get_unit(target)
            .ok_or(FailureReason::NoValidTarget)?;
        let worker = self.choose_builder(ability)?;
        if !self.query.placement_valid(ability, site.position_2d()) {
            return Err(FailureReason::NotPlaceable);
        }
        if !self.tracker.pay(ability, ability.price()) {
            return Err(FailureReason::InsufficientResources);
        }
        self.issue(worker.tag, ability, Target::Tag(target));
        Ok(())
    }

    /// Tries one random spot around the start location.
    pub fn try_build_on_creep(&mut self, ability: Ability) -> Result<(), FailureReason> {
        let at = util::random_offset(self.rng, self.start_location(), CREEP_BUILD_RADIUS);
        if !self.game.has_creep(at) {
            trace!("No creep at {} for {:?}", at, ability);
            return Err(FailureReason::NotPlaceable);
        }
        self.try_build_structure(ability, at, false)
    }

    /// Extractor on the closest free geyser of the base at `base`
    pub fn try_build_gas(&mut self, base: Vec2) -> Result<(), FailureReason> {
        let mut geysers = self.game.units(Alliance::Neutral, |u| {
            is_vespene_geyser(u) && u.distance(base) < GEYSER_RADIUS
        });
        geysers.sort_by_key(|g| OrderedFloat(g.distance_squared(base)));
        let geyser = geysers
            .into_iter()
            .find(|g| {
                self.query
                    .placement_valid(Ability::Build_Extractor, g.position_2d())
            })
            .ok_or(FailureReason::NoValidTarget)?;
        self.try_build_structure_on_tag(Ability::Build_Extractor, geyser.tag)
    }
}
