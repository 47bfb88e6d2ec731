use crate::*;
use log::trace;

/// Levels 1 to 3 of a leveled research
fn levels(ability: Ability) -> Option<[Upgrade; 3]> {
    use Upgrade::*;
    Some(match ability {
        Ability::Research_Zerg_Missile_Weapons => [
            Zerg_Missile_Weapons_Level_1,
            Zerg_Missile_Weapons_Level_2,
            Zerg_Missile_Weapons_Level_3,
        ],
        Ability::Research_Zerg_Melee_Weapons => [
            Zerg_Melee_Weapons_Level_1,
            Zerg_Melee_Weapons_Level_2,
            Zerg_Melee_Weapons_Level_3,
        ],
        Ability::Research_Zerg_Ground_Armor => [
            Zerg_Ground_Armors_Level_1,
            Zerg_Ground_Armors_Level_2,
            Zerg_Ground_Armors_Level_3,
        ],
        Ability::Research_Zerg_Flyer_Attack => [
            Zerg_Flyer_Weapons_Level_1,
            Zerg_Flyer_Weapons_Level_2,
            Zerg_Flyer_Weapons_Level_3,
        ],
        Ability::Research_Zerg_Flyer_Armor => [
            Zerg_Flyer_Armors_Level_1,
            Zerg_Flyer_Armors_Level_2,
            Zerg_Flyer_Armors_Level_3,
        ],
        _ => return None,
    })
}

fn single_upgrade(ability: Ability) -> Option<Upgrade> {
    Some(match ability {
        Ability::Research_Metabolic_Boost => Upgrade::Metabolic_Boost,
        Ability::Research_Adrenal_Glands => Upgrade::Adrenal_Glands,
        Ability::Research_Pneumatized_Carapace => Upgrade::Pneumatized_Carapace,
        Ability::Research_Centrifugal_Hooks => Upgrade::Centrifugal_Hooks,
        Ability::Research_Muscular_Augments => Upgrade::Muscular_Augments,
        Ability::Research_Glial_Reconstitution => Upgrade::Glial_Reconstitution,
        Ability::Research_Chitinous_Plating => Upgrade::Chitinous_Plating,
        _ => return None,
    })
}

// Town halls needed before starting the given level
fn bases_needed(level: usize) -> usize {
    match level {
        1 => 0,
        2 => 4,
        _ => 5,
    }
}

impl<'a> Bot<'a> {
    fn price_of_research(&self, ability: Ability) -> Result<Gms, FailureReason> {
        let game = self.game;
        let Some(levels) = levels(ability) else {
            if single_upgrade(ability).map_or(false, |u| game.has_upgrade(u)) {
                return Err(FailureReason::NoValidTarget);
            }
            return Ok(ability.price());
        };
        let level = levels.iter().filter(|&&u| game.has_upgrade(u)).count() + 1;
        if level > levels.len() {
            return Err(FailureReason::NoValidTarget);
        }
        if game.town_halls().len() < bases_needed(level) {
            return Err(FailureReason::InsufficientResources);
        }
        Ok(gms::research_price(ability, level))
    }

    /// Starts `ability` on an idle structure of one of the `researchers` types.
    pub fn try_research(
        &mut self,
        ability: Ability,
        researchers: &[UnitType],
    ) -> Result<(), FailureReason> {
        let price = self.price_of_research(ability)?;
        let game = self.game;
        if self.tracker.was_issued(ability) || !game.mine(|u| u.has_order(ability)).is_empty() {
            return Err(FailureReason::AlreadyInProgress);
        }
        let candidates: Vec<_> = game
            .mine(|u| researchers.contains(&u.unit_type) && u.completed() && u.idle())
            .into_iter()
            .filter(|u| self.tracker.is_available(u.tag))
            .collect();
        let researcher = self
            .pick(&candidates)
            .ok_or(FailureReason::InsufficientResources)?;
        if !self.tracker.pay(ability, price) {
            return Err(FailureReason::InsufficientResources);
        }
        self.issue(researcher.tag, ability, Target::None);
        Ok(())
    }

    fn research(&mut self, ability: Ability, researchers: &[UnitType]) {
        if let Err(reason) = self.try_research(ability, researchers) {
            trace!("Not researching {:?}: {}", ability, reason);
        }
    }

    pub fn manage_upgrades(&mut self) {
        use UnitType::*;
        if self.game.upgrades().is_empty() {
            self.research(Ability::Research_Metabolic_Boost, &[Zerg_Spawning_Pool]);
            return;
        }
        let tech = self.tech();
        match self.state.composition {
            Composition::Mutalisk => {
                let spires = &[Zerg_Spire, Zerg_Greater_Spire];
                self.research(Ability::Research_Zerg_Flyer_Attack, spires);
                self.research(Ability::Research_Zerg_Flyer_Armor, spires);
                self.research(Ability::Research_Zerg_Ground_Armor, &[Zerg_Evolution_Chamber]);
                self.research(Ability::Research_Zerg_Melee_Weapons, &[Zerg_Evolution_Chamber]);
            }
            Composition::Ground => {
                if tech.hive_tech {
                    self.research(Ability::Research_Chitinous_Plating, &[Zerg_Ultralisk_Cavern]);
                }
                if tech.lair_tech {
                    self.research(
                        Ability::Research_Zerg_Missile_Weapons,
                        &[Zerg_Evolution_Chamber],
                    );
                    self.research(Ability::Research_Zerg_Ground_Armor, &[Zerg_Evolution_Chamber]);
                    self.research(Ability::Research_Centrifugal_Hooks, &[Zerg_Baneling_Nest]);
                    self.research(
                        Ability::Research_Muscular_Augments,
                        &[Zerg_Hydralisk_Den, Zerg_Lurker_Den],
                    );
                    self.research(Ability::Research_Glial_Reconstitution, &[Zerg_Roach_Warren]);
                }
            }
        }
        if tech.hive_tech {
            self.research(Ability::Research_Adrenal_Glands, &[Zerg_Spawning_Pool]);
        } else if tech.lair_tech {
            self.research(
                Ability::Research_Pneumatized_Carapace,
                &[Zerg_Hive, Zerg_Lair, Zerg_Hatchery],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testkit::*;
    use crate::*;

    fn rich_game() -> GameSnapshot {
        let mut game = base_game();
        game.minerals = 2000;
        game.vespene = 2000;
        game.units
            .push(own(30, UnitType::Zerg_Spawning_Pool, 45.0, 58.0));
        game.units
            .push(own(31, UnitType::Zerg_Evolution_Chamber, 56.0, 42.0));
        game
    }

    fn researched(env: &Env) -> Vec<(Tag, Ability)> {
        env.commands
            .commands
            .iter()
            .map(|c| (c.unit, c.ability))
            .collect()
    }

    #[test]
    fn metabolic_boost_comes_first() {
        let game = rich_game();
        let mut env = Env::new(&game);
        env.bot().manage_upgrades();
        assert_eq!(
            researched(&env),
            vec![(Tag(30), Ability::Research_Metabolic_Boost)]
        );
    }

    #[test]
    fn lair_unlocks_the_ground_ladder() {
        let mut game = rich_game();
        game.upgrades = vec![Upgrade::Metabolic_Boost];
        game.units[0].unit_type = UnitType::Zerg_Lair;
        game.units
            .push(own(32, UnitType::Zerg_Roach_Warren, 44.0, 42.0));
        let mut env = Env::new(&game);
        env.bot().manage_upgrades();
        assert_eq!(
            researched(&env),
            vec![
                (Tag(31), Ability::Research_Zerg_Missile_Weapons),
                (Tag(32), Ability::Research_Glial_Reconstitution),
                (Tag(1), Ability::Research_Pneumatized_Carapace),
            ]
        );
        // Missile 100/100, glial 100/100, carapace 100/100
        assert_eq!(env.tracker.available_gms.minerals, 1700);
    }

    #[test]
    fn later_levels_wait_for_more_bases() {
        let mut game = rich_game();
        game.upgrades = vec![Upgrade::Metabolic_Boost, Upgrade::Zerg_Missile_Weapons_Level_1];
        game.units[0].unit_type = UnitType::Zerg_Lair;
        for tag in 2..4 {
            game.units
                .push(own(tag, UnitType::Zerg_Hatchery, tag as f32 * 30.0, 190.0));
        }
        let mut env = Env::new(&game);
        assert_eq!(
            env.bot()
                .try_research(Ability::Research_Zerg_Missile_Weapons, &[UnitType::Zerg_Evolution_Chamber]),
            Err(FailureReason::InsufficientResources)
        );

        game.units
            .push(own(4, UnitType::Zerg_Hatchery, 120.0, 190.0));
        let mut env = Env::new(&game);
        env.bot()
            .try_research(Ability::Research_Zerg_Missile_Weapons, &[UnitType::Zerg_Evolution_Chamber])
            .unwrap();
        assert_eq!(env.tracker.available_gms, Gms::new(1850, 1850, 2));
    }

    #[test]
    fn finished_research_is_not_repeated() {
        let mut game = rich_game();
        game.upgrades = vec![Upgrade::Metabolic_Boost];
        let mut env = Env::new(&game);
        assert_eq!(
            env.bot()
                .try_research(Ability::Research_Metabolic_Boost, &[UnitType::Zerg_Spawning_Pool]),
            Err(FailureReason::NoValidTarget)
        );

        game.upgrades = vec![];
        game.units[5] = game.units[5]
            .clone()
            .with_order(Ability::Research_Metabolic_Boost, Target::None);
        let mut env = Env::new(&game);
        assert_eq!(
            env.bot()
                .try_research(Ability::Research_Metabolic_Boost, &[UnitType::Zerg_Spawning_Pool]),
            Err(FailureReason::AlreadyInProgress)
        );
    }

    #[test]
    fn mutalisk_ladder_uses_the_spire() {
        let mut game = rich_game();
        game.upgrades = vec![Upgrade::Metabolic_Boost];
        game.units.push(own(33, UnitType::Zerg_Spire, 44.0, 42.0));
        let mut env = Env::new(&game);
        env.state.composition = Composition::Mutalisk;
        env.bot().manage_upgrades();
        assert_eq!(
            researched(&env),
            vec![
                (Tag(33), Ability::Research_Zerg_Flyer_Attack),
                (Tag(31), Ability::Research_Zerg_Ground_Armor),
            ]
        );
    }
}
