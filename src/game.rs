use crate::classify;
use crate::ids::{default_attributes, Ability, Attribute, UnitType, Upgrade};
use crate::sunit::{Alliance, Tag, UnitSnapshot};
use ahash::AHashMap;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    pub playable_min: Vec2,
    pub playable_max: Vec2,
    pub start_location: Vec3,
    pub enemy_start_locations: Vec<Vec2>,
}

/// World state as provided by the host for a single tick. Read only.
pub trait GameState {
    /// Every unit the host knows about. Iteration order is stable within a tick and is the
    /// order used to break ties.
    fn all_units(&self) -> &[UnitSnapshot];
    fn minerals(&self) -> i32;
    fn vespene(&self) -> i32;
    fn food_used(&self) -> i32;
    fn food_cap(&self) -> i32;
    fn food_army(&self) -> i32;
    fn food_workers(&self) -> i32;
    fn game_loop(&self) -> u32;
    fn upgrades(&self) -> &[Upgrade];
    fn has_creep(&self, at: Vec2) -> bool;
    fn game_info(&self) -> &GameInfo;
    /// Candidate base locations, only asked once at game start
    fn expansion_locations(&self) -> Vec<Vec3>;

    fn attributes(&self, unit_type: UnitType) -> &[Attribute] {
        default_attributes(unit_type)
    }
}

/// Filtering and counting on top of a `GameState`.
#[derive(Copy, Clone)]
pub struct Snapshot<'a> {
    state: &'a dyn GameState,
}

impl<'a> Deref for Snapshot<'a> {
    type Target = dyn GameState + 'a;

    fn deref(&self) -> &Self::Target {
        self.state
    }
}

impl<'a> Snapshot<'a> {
    pub fn new(state: &'a dyn GameState) -> Self {
        Self { state }
    }

    pub fn units(
        self,
        alliance: Alliance,
        filter: impl Fn(&UnitSnapshot) -> bool,
    ) -> Vec<&'a UnitSnapshot> {
        self.state
            .all_units()
            .iter()
            .filter(|u| u.alliance == alliance && filter(u))
            .collect()
    }

    pub fn mine(self, filter: impl Fn(&UnitSnapshot) -> bool) -> Vec<&'a UnitSnapshot> {
        self.units(Alliance::Own, filter)
    }

    pub fn of_type(self, unit_type: UnitType) -> Vec<&'a UnitSnapshot> {
        self.mine(|u| u.unit_type == unit_type)
    }

    pub fn visible_enemies(self) -> Vec<&'a UnitSnapshot> {
        self.units(Alliance::Enemy, classify::is_visible)
    }

    pub fn get_unit(self, tag: Tag) -> Option<&'a UnitSnapshot> {
        self.state.all_units().iter().find(|u| u.tag == tag)
    }

    pub fn town_halls(self) -> Vec<&'a UnitSnapshot> {
        self.mine(classify::is_town_hall)
    }

    pub fn army(self) -> Vec<&'a UnitSnapshot> {
        self.mine(|u| self.is_army(u))
    }

    pub fn is_army(self, unit: &UnitSnapshot) -> bool {
        classify::is_army(unit, self.state.attributes(unit.unit_type))
    }

    pub fn is_structure(self, unit: &UnitSnapshot) -> bool {
        classify::is_structure(unit, self.state.attributes(unit.unit_type))
    }

    pub fn count(self, unit_type: UnitType) -> usize {
        self.count_any(&[unit_type])
    }

    pub fn count_any(self, unit_types: &[UnitType]) -> usize {
        self.state
            .all_units()
            .iter()
            .filter(|u| u.alliance == Alliance::Own && unit_types.contains(&u.unit_type))
            .count()
    }

    /// Orders for `ability` queued on any of our `producers`
    pub fn count_in_production(self, producers: &[UnitType], ability: Ability) -> usize {
        self.state
            .all_units()
            .iter()
            .filter(|u| u.alliance == Alliance::Own && producers.contains(&u.unit_type))
            .map(|u| u.orders.iter().filter(|o| o.ability == ability).count())
            .sum()
    }

    /// Existing units of any of `unit_types` plus the ones currently being produced by
    /// `ability`. Without counting production in flight the same order would be queued every
    /// tick until the first one pops.
    pub fn count_total(
        self,
        unit_types: &[UnitType],
        producers: &[UnitType],
        ability: Ability,
    ) -> usize {
        let per_order = if unit_types.iter().any(|t| t.is_two_units_in_one_egg()) {
            2
        } else {
            1
        };
        self.count_any(unit_types) + per_order * self.count_in_production(producers, ability)
    }

    pub fn has_upgrade(self, upgrade: Upgrade) -> bool {
        self.state.upgrades().contains(&upgrade)
    }
}

/// Plain data version of the game state.
#[derive(Clone, Debug, Default)]
pub struct GameSnapshot {
    pub units: Vec<UnitSnapshot>,
    pub minerals: i32,
    pub vespene: i32,
    pub food_used: i32,
    pub food_cap: i32,
    pub food_army: i32,
    pub food_workers: i32,
    pub game_loop: u32,
    pub upgrades: Vec<Upgrade>,
    // Creep patches as (center, radius)
    pub creep: Vec<(Vec2, f32)>,
    pub unit_type_data: AHashMap<UnitType, Vec<Attribute>>,
    pub game_info: GameInfo,
    pub expansions: Vec<Vec3>,
}

impl GameState for GameSnapshot {
    fn all_units(&self) -> &[UnitSnapshot] {
        &self.units
    }

    fn minerals(&self) -> i32 {
        self.minerals
    }

    fn vespene(&self) -> i32 {
        self.vespene
    }

    fn food_used(&self) -> i32 {
        self.food_used
    }

    fn food_cap(&self) -> i32 {
        self.food_cap
    }

    fn food_army(&self) -> i32 {
        self.food_army
    }

    fn food_workers(&self) -> i32 {
        self.food_workers
    }

    fn game_loop(&self) -> u32 {
        self.game_loop
    }

    fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    fn has_creep(&self, at: Vec2) -> bool {
        self.creep
            .iter()
            .any(|(center, radius)| center.distance_squared(at) <= radius * radius)
    }

    fn game_info(&self) -> &GameInfo {
        &self.game_info
    }

    fn expansion_locations(&self) -> Vec<Vec3> {
        self.expansions.clone()
    }

    fn attributes(&self, unit_type: UnitType) -> &[Attribute] {
        self.unit_type_data
            .get(&unit_type)
            .map(|a| a.as_slice())
            .unwrap_or_else(|| default_attributes(unit_type))
    }
}
