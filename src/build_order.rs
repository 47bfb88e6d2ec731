use crate::*;
use log::trace;

impl<'a> Bot<'a> {
    fn log_failure(&self, what: Ability, result: Result<(), FailureReason>) {
        if let Err(reason) = result {
            trace!("Build order: {:?} failed: {}", what, reason);
        }
    }

    fn build_on_creep_if_missing(&mut self, missing: bool, ability: Ability) {
        if missing {
            let result = self.try_build_on_creep(ability);
            self.log_failure(ability, result);
        }
    }

    fn morph(&mut self, ability: Ability, from: UnitType) {
        let result = self.try_build_unit(ability, from);
        self.log_failure(ability, result);
    }

    /// Tech structures in a fixed order. Nothing else happens until there is a spawning pool.
    pub fn build_order(&mut self) {
        use UnitType::*;
        let tech = self.tech();
        let ground = self.state.composition == Composition::Ground;

        if !tech.has(Zerg_Spawning_Pool) {
            self.build_on_creep_if_missing(true, Ability::Build_Spawning_Pool);
            return;
        }
        if tech.base_count < 1 {
            let result = self.try_build_expansion_hatch();
            self.log_failure(Ability::Build_Hatchery, result);
            return;
        }

        let evolution_chambers = if ground { 2 } else { 1 };
        self.build_on_creep_if_missing(
            tech.count(Zerg_Evolution_Chamber) < evolution_chambers,
            Ability::Build_Evolution_Chamber,
        );
        self.build_on_creep_if_missing(
            ground && !tech.has(Zerg_Roach_Warren),
            Ability::Build_Roach_Warren,
        );

        if !tech.lair_tech {
            if tech.morphing_lair == 0 && tech.has(Zerg_Queen) {
                self.morph(Ability::Morph_Lair, Zerg_Hatchery);
            }
        } else {
            if ground {
                self.build_on_creep_if_missing(
                    tech.count_any(&[Zerg_Hydralisk_Den, Zerg_Lurker_Den]) == 0,
                    Ability::Build_Hydralisk_Den,
                );
                if tech.has(Zerg_Hydralisk_Den) {
                    self.morph(Ability::Morph_Lurker_Den, Zerg_Hydralisk_Den);
                }
            } else {
                self.build_on_creep_if_missing(
                    tech.count_any(&[Zerg_Spire, Zerg_Greater_Spire]) == 0,
                    Ability::Build_Spire,
                );
            }

            if tech.base_count < 3 {
                let result = self.try_build_expansion_hatch();
                self.log_failure(Ability::Build_Hatchery, result);
                return;
            }
            if tech.has(Zerg_Infestation_Pit) && !tech.hive_tech {
                if tech.morphing_hive == 0 {
                    self.morph(Ability::Morph_Hive, Zerg_Lair);
                }
                return;
            }
            self.build_on_creep_if_missing(
                !tech.has(Zerg_Baneling_Nest),
                Ability::Build_Baneling_Nest,
            );
            self.build_on_creep_if_missing(
                tech.base_count > 2 && !tech.has(Zerg_Infestation_Pit),
                Ability::Build_Infestation_Pit,
            );
        }

        if tech.hive_tech {
            self.build_on_creep_if_missing(
                ground && !tech.has(Zerg_Ultralisk_Cavern),
                Ability::Build_Ultralisk_Cavern,
            );
            if !tech.has(Zerg_Greater_Spire) {
                self.morph(Ability::Morph_Greater_Spire, Zerg_Spire);
            }
        }
    }

    /// Up to two extractors per town hall, only at bases that have all their mineral workers.
    pub fn build_extractor(&mut self) -> Result<(), FailureReason> {
        let game = self.game;
        if game.count(UnitType::Zerg_Extractor) >= 2 * game.town_halls().len() {
            return Err(FailureReason::NoValidTarget);
        }
        for base in self.saturated_bases() {
            match self.try_build_gas(base.position_2d()) {
                Ok(()) => return Ok(()),
                Err(reason) => trace!("No extractor at {}: {}", base.tag, reason),
            }
        }
        Err(FailureReason::NoValidTarget)
    }
}
