use crate::*;
use log::trace;

impl<'a> Bot<'a> {
    /// Decides for every army unit from scratch. Waits at the staging location while the army
    /// is small, goes looking for the enemy when it is big enough, and fights by role as soon
    /// as anything is visible.
    pub fn manage_army(&mut self) {
        let game = self.game;
        let army = game.army();
        if game.visible_enemies().is_empty() {
            let gathering = game.food_army() < self.config.army_wait_supply;
            let staging = self.staging_location();
            for unit in army {
                if unit.unit_type == UnitType::Zerg_Lurker_Burrowed {
                    self.issue(unit.tag, Ability::Burrow_Up, Target::None);
                } else if gathering {
                    self.retreat(unit, staging);
                } else if let Err(reason) = self.scout(unit) {
                    trace!("{} not scouting: {}", unit.tag, reason);
                }
            }
        } else {
            for unit in army {
                Role::of(unit.unit_type).tactic().execute(self, unit);
            }
        }
    }
}
