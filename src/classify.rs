//! Unit filters. Everything that selects units out of a snapshot goes through these.
use crate::ids::{Attribute, UnitType};
use crate::sunit::{DisplayType, UnitSnapshot};

pub fn is_visible(unit: &UnitSnapshot) -> bool {
    unit.display == DisplayType::Visible
}

// Detectors and supply providers are not worth chasing
pub fn is_attackable(unit: &UnitSnapshot) -> bool {
    !matches!(
        unit.unit_type,
        UnitType::Zerg_Overlord | UnitType::Zerg_Overseer | UnitType::Protoss_Observer
    )
}

pub fn is_flying(unit: &UnitSnapshot) -> bool {
    unit.is_flying
}

pub fn is_structure(unit: &UnitSnapshot, attributes: &[Attribute]) -> bool {
    attributes.contains(&Attribute::Structure) || unit.unit_type.is_building()
}

/// Fighting units: no structures, workers, supply, larvae/eggs or one-shot weapons.
pub fn is_army(unit: &UnitSnapshot, attributes: &[Attribute]) -> bool {
    if is_structure(unit, attributes) {
        return false;
    }
    !matches!(
        unit.unit_type,
        UnitType::Zerg_Overlord
            | UnitType::Protoss_Probe
            | UnitType::Zerg_Drone
            | UnitType::Terran_SCV
            | UnitType::Zerg_Queen
            | UnitType::Zerg_Larva
            | UnitType::Zerg_Egg
            | UnitType::Terran_MULE
            | UnitType::Terran_Nuke
    )
}

pub fn is_town_hall(unit: &UnitSnapshot) -> bool {
    is_town_hall_type(unit.unit_type)
}

pub fn is_town_hall_type(unit_type: UnitType) -> bool {
    matches!(
        unit_type,
        UnitType::Zerg_Hatchery
            | UnitType::Zerg_Lair
            | UnitType::Zerg_Hive
            | UnitType::Terran_Command_Center
            | UnitType::Terran_Orbital_Command
            | UnitType::Terran_Orbital_Command_Flying
            | UnitType::Terran_Planetary_Fortress
            | UnitType::Protoss_Nexus
    )
}

pub fn is_vespene_geyser(unit: &UnitSnapshot) -> bool {
    matches!(
        unit.unit_type,
        UnitType::Neutral_Vespene_Geyser
            | UnitType::Neutral_Space_Platform_Geyser
            | UnitType::Neutral_Protoss_Vespene_Geyser
    )
}

pub fn is_mineral_field(unit: &UnitSnapshot) -> bool {
    matches!(
        unit.unit_type,
        UnitType::Neutral_Mineral_Field
            | UnitType::Neutral_Mineral_Field_750
            | UnitType::Neutral_Rich_Mineral_Field
    )
}

pub fn is_resource_node(unit: &UnitSnapshot) -> bool {
    is_mineral_field(unit) || is_vespene_geyser(unit)
}
