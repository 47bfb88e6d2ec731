use crate::action::Target;
use crate::ids::{Ability, UnitType};
use derive_more::Display;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Opaque unit handle. Only valid for re-querying or as a command target within the tick it
/// was read in.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[display(fmt = "#{}", _0)]
pub struct Tag(pub u64);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alliance {
    Own,
    Ally,
    Enemy,
    Neutral,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayType {
    Visible,
    // Last known state of a structure under fog of war
    Snapshot,
    Hidden,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitOrder {
    pub ability: Ability,
    pub target: Target,
}

/// One unit as the game reported it this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub tag: Tag,
    pub unit_type: UnitType,
    pub alliance: Alliance,
    pub display: DisplayType,
    pub position: Vec3,
    pub health: f32,
    pub energy: f32,
    pub build_progress: f32,
    pub is_flying: bool,
    // Only meaningful for town halls and extractors
    pub assigned_harvesters: i32,
    pub ideal_harvesters: i32,
    pub orders: Vec<UnitOrder>,
    // Geysers and extractors
    pub vespene_contents: i32,
}

impl UnitSnapshot {
    pub fn new(tag: u64, unit_type: UnitType, alliance: Alliance, position: Vec3) -> Self {
        Self {
            tag: Tag(tag),
            unit_type,
            alliance,
            display: DisplayType::Visible,
            position,
            health: 100.0,
            energy: 0.0,
            build_progress: 1.0,
            is_flying: false,
            assigned_harvesters: 0,
            ideal_harvesters: 0,
            orders: vec![],
            vespene_contents: 0,
        }
    }

    pub fn with_order(mut self, ability: Ability, target: Target) -> Self {
        self.orders.push(UnitOrder { ability, target });
        self
    }

    pub fn with_harvesters(mut self, assigned: i32, ideal: i32) -> Self {
        self.assigned_harvesters = assigned;
        self.ideal_harvesters = ideal;
        self
    }

    pub fn with_energy(mut self, energy: f32) -> Self {
        self.energy = energy;
        self
    }

    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health;
        self
    }

    pub fn with_build_progress(mut self, build_progress: f32) -> Self {
        self.build_progress = build_progress;
        self
    }

    pub fn with_vespene(mut self, vespene_contents: i32) -> Self {
        self.vespene_contents = vespene_contents;
        self
    }

    pub fn with_display(mut self, display: DisplayType) -> Self {
        self.display = display;
        self
    }

    pub fn flying(mut self) -> Self {
        self.is_flying = true;
        self
    }

    pub fn completed(&self) -> bool {
        self.build_progress >= 1.0
    }

    pub fn idle(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn first_order(&self) -> Option<&UnitOrder> {
        self.orders.first()
    }

    pub fn first_ability(&self) -> Option<Ability> {
        self.first_order().map(|o| o.ability)
    }

    pub fn first_order_target(&self) -> Option<Tag> {
        match self.first_order()?.target {
            Target::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Any queued order uses the given ability
    pub fn has_order(&self, ability: Ability) -> bool {
        self.orders.iter().any(|o| o.ability == ability)
    }

    pub fn position_2d(&self) -> Vec2 {
        self.position.truncate()
    }

    pub fn distance_squared(&self, to: Vec2) -> f32 {
        self.position_2d().distance_squared(to)
    }

    pub fn distance(&self, to: Vec2) -> f32 {
        self.position_2d().distance(to)
    }
}
