//! Closed id sets for the unit types, abilities and upgrades the bot reasons about. Anything
//! else the game reports is carried as `Other` with its raw id.
use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Zerg_Hatchery,
    Zerg_Lair,
    Zerg_Hive,
    Zerg_Extractor,
    Zerg_Spawning_Pool,
    Zerg_Evolution_Chamber,
    Zerg_Roach_Warren,
    Zerg_Hydralisk_Den,
    Zerg_Lurker_Den,
    Zerg_Baneling_Nest,
    Zerg_Spire,
    Zerg_Greater_Spire,
    Zerg_Infestation_Pit,
    Zerg_Ultralisk_Cavern,
    Zerg_Larva,
    Zerg_Egg,
    Zerg_Drone,
    Zerg_Overlord,
    Zerg_Overlord_Cocoon,
    Zerg_Overseer,
    Zerg_Queen,
    Zerg_Zergling,
    Zerg_Baneling,
    Zerg_Baneling_Cocoon,
    Zerg_Roach,
    Zerg_Ravager,
    Zerg_Ravager_Cocoon,
    Zerg_Hydralisk,
    Zerg_Lurker,
    Zerg_Lurker_Egg,
    Zerg_Lurker_Burrowed,
    Zerg_Infestor,
    Zerg_Swarm_Host,
    Zerg_Ultralisk,
    Zerg_Viper,
    Zerg_Mutalisk,
    Zerg_Corruptor,
    Zerg_Brood_Lord,
    Zerg_Brood_Lord_Cocoon,
    Terran_Command_Center,
    Terran_Orbital_Command,
    Terran_Orbital_Command_Flying,
    Terran_Planetary_Fortress,
    Terran_Supply_Depot,
    Terran_Barracks,
    Terran_SCV,
    Terran_MULE,
    Terran_Nuke,
    Terran_Marine,
    Protoss_Nexus,
    Protoss_Pylon,
    Protoss_Probe,
    Protoss_Observer,
    Protoss_Zealot,
    Neutral_Mineral_Field,
    Neutral_Mineral_Field_750,
    Neutral_Rich_Mineral_Field,
    Neutral_Vespene_Geyser,
    Neutral_Space_Platform_Geyser,
    Neutral_Protoss_Vespene_Geyser,
    Other(u32),
}

impl UnitType {
    /// Structures as far as the bot knows them without asking the game for type data.
    pub fn is_building(self) -> bool {
        use UnitType::*;
        matches!(
            self,
            Zerg_Hatchery
                | Zerg_Lair
                | Zerg_Hive
                | Zerg_Extractor
                | Zerg_Spawning_Pool
                | Zerg_Evolution_Chamber
                | Zerg_Roach_Warren
                | Zerg_Hydralisk_Den
                | Zerg_Lurker_Den
                | Zerg_Baneling_Nest
                | Zerg_Spire
                | Zerg_Greater_Spire
                | Zerg_Infestation_Pit
                | Zerg_Ultralisk_Cavern
                | Terran_Command_Center
                | Terran_Orbital_Command
                | Terran_Orbital_Command_Flying
                | Terran_Planetary_Fortress
                | Terran_Supply_Depot
                | Terran_Barracks
                | Protoss_Nexus
                | Protoss_Pylon
        )
    }

    pub fn is_two_units_in_one_egg(self) -> bool {
        self == UnitType::Zerg_Zergling
    }
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Smart,
    Attack,
    Move,
    Stop,
    Harvest_Gather,
    Burrow_Down,
    Burrow_Up,
    Build_Hatchery,
    Build_Extractor,
    Build_Spawning_Pool,
    Build_Evolution_Chamber,
    Build_Roach_Warren,
    Build_Hydralisk_Den,
    Build_Baneling_Nest,
    Build_Spire,
    Build_Infestation_Pit,
    Build_Ultralisk_Cavern,
    Morph_Lair,
    Morph_Hive,
    Morph_Lurker_Den,
    Morph_Greater_Spire,
    Morph_Overseer,
    Morph_Ravager,
    Morph_Lurker,
    Morph_Brood_Lord,
    Train_Drone,
    Train_Overlord,
    Train_Queen,
    Train_Zergling,
    Train_Baneling,
    Train_Roach,
    Train_Hydralisk,
    Train_Infestor,
    Train_Swarm_Host,
    Train_Ultralisk,
    Train_Viper,
    Train_Mutalisk,
    Train_Corruptor,
    Research_Metabolic_Boost,
    Research_Adrenal_Glands,
    Research_Pneumatized_Carapace,
    Research_Centrifugal_Hooks,
    Research_Muscular_Augments,
    Research_Glial_Reconstitution,
    Research_Chitinous_Plating,
    Research_Zerg_Missile_Weapons,
    Research_Zerg_Melee_Weapons,
    Research_Zerg_Ground_Armor,
    Research_Zerg_Flyer_Attack,
    Research_Zerg_Flyer_Armor,
    Effect_Inject_Larva,
    Effect_Caustic_Spray,
    Effect_Corrosive_Bile,
    Effect_Spawn_Locusts,
    Effect_Fungal_Growth,
    Effect_Parasitic_Bomb,
    Effect_Blinding_Cloud,
    Effect_Viper_Consume,
    Other(u32),
}

impl Ability {
    /// Supply providers can always be started, even when capped.
    pub fn provides_supply(self) -> bool {
        self == Ability::Train_Overlord
    }
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Upgrade {
    Metabolic_Boost,
    Adrenal_Glands,
    Pneumatized_Carapace,
    Centrifugal_Hooks,
    Muscular_Augments,
    Glial_Reconstitution,
    Chitinous_Plating,
    Zerg_Missile_Weapons_Level_1,
    Zerg_Missile_Weapons_Level_2,
    Zerg_Missile_Weapons_Level_3,
    Zerg_Melee_Weapons_Level_1,
    Zerg_Melee_Weapons_Level_2,
    Zerg_Melee_Weapons_Level_3,
    Zerg_Ground_Armors_Level_1,
    Zerg_Ground_Armors_Level_2,
    Zerg_Ground_Armors_Level_3,
    Zerg_Flyer_Weapons_Level_1,
    Zerg_Flyer_Weapons_Level_2,
    Zerg_Flyer_Weapons_Level_3,
    Zerg_Flyer_Armors_Level_1,
    Zerg_Flyer_Armors_Level_2,
    Zerg_Flyer_Armors_Level_3,
    Other(u32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Light,
    Armored,
    Biological,
    Mechanical,
    Robotic,
    Psionic,
    Massive,
    Structure,
    Hover,
    Heroic,
    Summoned,
}

/// Attributes of known types, used when the game does not provide type data
pub fn default_attributes(unit_type: UnitType) -> &'static [Attribute] {
    if unit_type.is_building() {
        &[Attribute::Armored, Attribute::Structure]
    } else {
        &[]
    }
}
