use crate::game::Snapshot;
use crate::ids::{Ability, UnitType};
use crate::sunit::Alliance;
use ahash::AHashMap;

/// What our structures allow right now. Derived from the snapshot each time, never stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TechState {
    pub lair_tech: bool,
    pub hive_tech: bool,
    pub base_count: usize,
    // Hatcheries with a lair morph as first order
    pub morphing_lair: usize,
    pub morphing_hive: usize,
    counts: AHashMap<UnitType, usize>,
}

impl TechState {
    pub fn of(game: Snapshot) -> Self {
        let mut counts = AHashMap::new();
        let mut morphing_lair = 0;
        let mut morphing_hive = 0;
        for unit in game.all_units().iter().filter(|u| u.alliance == Alliance::Own) {
            *counts.entry(unit.unit_type).or_insert(0) += 1;
            match (unit.unit_type, unit.first_ability()) {
                (UnitType::Zerg_Hatchery, Some(Ability::Morph_Lair)) => morphing_lair += 1,
                (UnitType::Zerg_Lair, Some(Ability::Morph_Hive)) => morphing_hive += 1,
                _ => (),
            }
        }
        let count = |t: UnitType| counts.get(&t).copied().unwrap_or(0);
        let hive_tech = count(UnitType::Zerg_Hive) > 0;
        let lair_tech = count(UnitType::Zerg_Lair) > 0 || hive_tech;
        Self {
            lair_tech,
            hive_tech,
            base_count: game.town_halls().len(),
            morphing_lair,
            morphing_hive,
            counts,
        }
    }

    /// Own units of this type, complete or not
    pub fn count(&self, unit_type: UnitType) -> usize {
        self.counts.get(&unit_type).copied().unwrap_or(0)
    }

    pub fn count_any(&self, unit_types: &[UnitType]) -> usize {
        unit_types.iter().map(|&t| self.count(t)).sum()
    }

    pub fn has(&self, unit_type: UnitType) -> bool {
        self.count(unit_type) > 0
    }
}
