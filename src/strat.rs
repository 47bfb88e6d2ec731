use crate::ids::{Ability, UnitType};
use serde::{Deserialize, Serialize};

/// Which army the bot builds. Only changes what the tables below yield.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Composition {
    #[default]
    Ground,
    Mutalisk,
}

/// One row of the army table: keep training `ability` while fewer than the target exist.
#[derive(Debug)]
pub struct ArmyTarget {
    pub ability: Ability,
    pub producer: UnitType,
    // Everything that counts towards the target, cocoons and burrowed variants included
    pub counted_as: &'static [UnitType],
    // `None`: not part of this composition
    pub ground: Option<usize>,
    pub mutalisk: Option<usize>,
    // Any of these, completed
    pub requires: &'static [UnitType],
    // Nothing later in the table is trained until the first one of these exists
    pub saves_for_first: bool,
}

impl ArmyTarget {
    pub fn target(&self, composition: Composition) -> Option<usize> {
        match composition {
            Composition::Ground => self.ground,
            Composition::Mutalisk => self.mutalisk,
        }
    }

    /// Where orders for this unit show up while it is being made
    pub fn in_production(&self) -> &'static [UnitType] {
        if self.producer == UnitType::Zerg_Larva {
            &[UnitType::Zerg_Egg]
        } else {
            &[]
        }
    }
}

use UnitType::*;

pub const ARMY_TARGETS: &[ArmyTarget] = &[
    ArmyTarget {
        ability: Ability::Train_Viper,
        producer: Zerg_Larva,
        counted_as: &[Zerg_Viper],
        ground: Some(2),
        mutalisk: Some(2),
        requires: &[Zerg_Hive],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Train_Ultralisk,
        producer: Zerg_Larva,
        counted_as: &[Zerg_Ultralisk],
        ground: Some(4),
        mutalisk: None,
        requires: &[Zerg_Ultralisk_Cavern],
        saves_for_first: true,
    },
    ArmyTarget {
        ability: Ability::Morph_Ravager,
        producer: Zerg_Roach,
        counted_as: &[Zerg_Ravager, Zerg_Ravager_Cocoon],
        ground: Some(3),
        mutalisk: None,
        requires: &[],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Morph_Lurker,
        producer: Zerg_Hydralisk,
        counted_as: &[Zerg_Lurker, Zerg_Lurker_Egg, Zerg_Lurker_Burrowed],
        ground: Some(6),
        mutalisk: None,
        requires: &[Zerg_Lurker_Den],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Train_Hydralisk,
        producer: Zerg_Larva,
        counted_as: &[Zerg_Hydralisk],
        ground: Some(15),
        mutalisk: None,
        requires: &[Zerg_Hydralisk_Den, Zerg_Lurker_Den],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Train_Swarm_Host,
        producer: Zerg_Larva,
        counted_as: &[Zerg_Swarm_Host],
        ground: Some(1),
        mutalisk: None,
        requires: &[Zerg_Infestation_Pit],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Train_Infestor,
        producer: Zerg_Larva,
        counted_as: &[Zerg_Infestor],
        ground: Some(1),
        mutalisk: None,
        requires: &[Zerg_Infestation_Pit],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Train_Corruptor,
        producer: Zerg_Larva,
        counted_as: &[Zerg_Corruptor],
        ground: None,
        mutalisk: Some(7),
        requires: &[Zerg_Spire, Zerg_Greater_Spire],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Train_Mutalisk,
        producer: Zerg_Larva,
        counted_as: &[Zerg_Mutalisk],
        ground: None,
        mutalisk: Some(usize::MAX),
        requires: &[Zerg_Spire, Zerg_Greater_Spire],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Morph_Brood_Lord,
        producer: Zerg_Corruptor,
        counted_as: &[Zerg_Brood_Lord, Zerg_Brood_Lord_Cocoon],
        ground: Some(4),
        mutalisk: Some(4),
        requires: &[Zerg_Greater_Spire],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Train_Roach,
        producer: Zerg_Larva,
        counted_as: &[Zerg_Roach],
        ground: Some(10),
        mutalisk: None,
        requires: &[Zerg_Roach_Warren],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Train_Zergling,
        producer: Zerg_Larva,
        counted_as: &[Zerg_Zergling],
        ground: Some(20),
        mutalisk: Some(20),
        requires: &[Zerg_Spawning_Pool],
        saves_for_first: false,
    },
    ArmyTarget {
        ability: Ability::Train_Baneling,
        producer: Zerg_Zergling,
        counted_as: &[Zerg_Baneling, Zerg_Baneling_Cocoon],
        ground: Some(5),
        mutalisk: Some(10),
        requires: &[Zerg_Baneling_Nest],
        saves_for_first: false,
    },
];
