//! What each kind of army unit does once an enemy is in sight.
use crate::*;
use log::trace;

/// Exactly one tactic runs per unit and tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Siege,
    Sieged,
    Detector,
    AntiStructure,
    Artillery,
    AreaDenial,
    Caster,
    Drain,
    Default,
}

impl Role {
    pub fn of(unit_type: UnitType) -> Self {
        match unit_type {
            UnitType::Zerg_Lurker => Role::Siege,
            UnitType::Zerg_Lurker_Burrowed => Role::Sieged,
            UnitType::Zerg_Overseer => Role::Detector,
            UnitType::Zerg_Corruptor => Role::AntiStructure,
            UnitType::Zerg_Ravager => Role::Artillery,
            UnitType::Zerg_Swarm_Host => Role::AreaDenial,
            UnitType::Zerg_Infestor => Role::Caster,
            UnitType::Zerg_Viper => Role::Drain,
            _ => Role::Default,
        }
    }

    pub fn tactic(self) -> &'static dyn Tactic {
        match self {
            Role::Siege => &Siege,
            Role::Sieged => &Sieged,
            Role::Detector => &Detector,
            Role::AntiStructure => &AntiStructure,
            Role::Artillery => &Artillery,
            Role::AreaDenial => &AreaDenial,
            Role::Caster => &Caster,
            Role::Drain => &Drain,
            Role::Default => &DefaultAttack,
        }
    }
}

pub trait Tactic {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot);
}

const BURROW_RANGE: f32 = 7.0;
const UNBURROW_RANGE: f32 = 9.0;
const BILE_RANGE: f32 = 9.0;
const LOCUST_RANGE: f32 = 15.0;
const FUNGAL_RANGE: f32 = 9.0;
const FUNGAL_ENERGY: f32 = 75.0;
const VIPER_RANGE: f32 = 10.0;
const PARASITIC_BOMB_ENERGY: f32 = 124.0;
const BLINDING_CLOUD_ENERGY: f32 = 100.0;
// Below this the extractor would die from being consumed
const CONSUME_STOP_HEALTH: f32 = 100.0;
const CONSUME_MIN_HEALTH: f32 = 200.0;

fn attack_position(bot: &mut Bot<'_>, unit: &UnitSnapshot, enemy: &UnitSnapshot) {
    bot.issue(unit.tag, Ability::Attack, Target::Pos(enemy.position_2d()));
}

pub struct Siege;

impl Tactic for Siege {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot) {
        let Some((enemy, distance)) = bot.nearest_enemy(unit) else {
            return;
        };
        if distance < BURROW_RANGE {
            bot.issue(unit.tag, Ability::Burrow_Down, Target::None);
        } else {
            attack_position(bot, unit, enemy);
        }
    }
}

pub struct Sieged;

impl Tactic for Sieged {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot) {
        let in_range = bot
            .nearest_enemy(unit)
            .map_or(false, |(_, distance)| distance <= UNBURROW_RANGE);
        if !in_range {
            bot.issue(unit.tag, Ability::Burrow_Up, Target::None);
        }
    }
}

pub struct Detector;

impl Tactic for Detector {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot) {
        let Some(enemy) = bot.game.visible_enemies().first().copied() else {
            return;
        };
        let attacking = unit.first_ability() == Some(Ability::Attack)
            && unit.first_order_target() == Some(enemy.tag);
        if !attacking {
            bot.issue(unit.tag, Ability::Attack, Target::Tag(enemy.tag));
        }
    }
}

pub struct AntiStructure;

impl Tactic for AntiStructure {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot) {
        let Some((enemy, _)) = bot.nearest_enemy(unit) else {
            return;
        };
        if !bot.game.is_structure(enemy) {
            bot.attack(unit);
            return;
        }
        let spraying = unit.first_ability() == Some(Ability::Effect_Caustic_Spray)
            && unit.first_order_target() == Some(enemy.tag);
        if !spraying {
            bot.issue(unit.tag, Ability::Effect_Caustic_Spray, Target::Tag(enemy.tag));
        }
    }
}

pub struct Artillery;

impl Tactic for Artillery {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot) {
        let Some((enemy, distance)) = bot.nearest_enemy(unit) else {
            return;
        };
        if distance <= BILE_RANGE
            && bot
                .query
                .abilities_available(unit.tag)
                .contains(&Ability::Effect_Corrosive_Bile)
        {
            bot.issue(
                unit.tag,
                Ability::Effect_Corrosive_Bile,
                Target::Pos(enemy.position_2d()),
            );
        } else {
            bot.attack(unit);
        }
    }
}

pub struct AreaDenial;

impl Tactic for AreaDenial {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot) {
        let Some((enemy, distance)) = bot.nearest_enemy(unit) else {
            return;
        };
        if distance > LOCUST_RANGE {
            attack_position(bot, unit, enemy);
        } else if bot
            .query
            .abilities_available(unit.tag)
            .contains(&Ability::Effect_Spawn_Locusts)
        {
            bot.issue(
                unit.tag,
                Ability::Effect_Spawn_Locusts,
                Target::Pos(enemy.position_2d()),
            );
        } else {
            let staging = bot.staging_location();
            bot.retreat(unit, staging);
        }
    }
}

pub struct Caster;

impl Tactic for Caster {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot) {
        let Some((enemy, distance)) = bot.nearest_enemy(unit) else {
            return;
        };
        if distance > FUNGAL_RANGE {
            attack_position(bot, unit, enemy);
        } else if unit.energy > FUNGAL_ENERGY {
            bot.issue(
                unit.tag,
                Ability::Effect_Fungal_Growth,
                Target::Pos(enemy.position_2d()),
            );
        } else {
            let staging = bot.staging_location();
            bot.retreat(unit, staging);
        }
    }
}

/// Vipers fight with energy, and refill it from our own extractors when out of range.
pub struct Drain;

impl Tactic for Drain {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot) {
        let game = bot.game;
        let target = micro::nearest(
            game.visible_enemies()
                .into_iter()
                .filter(|e| !game.is_structure(e)),
            unit.position_2d(),
        );
        match target {
            Some((enemy, distance)) if distance < VIPER_RANGE => {
                if enemy.is_flying && unit.energy > PARASITIC_BOMB_ENERGY {
                    bot.issue(unit.tag, Ability::Effect_Parasitic_Bomb, Target::Tag(enemy.tag));
                } else if !enemy.is_flying && unit.energy > BLINDING_CLOUD_ENERGY {
                    bot.issue(
                        unit.tag,
                        Ability::Effect_Blinding_Cloud,
                        Target::Pos(enemy.position_2d()),
                    );
                } else {
                    let home = bot.start_location();
                    bot.retreat(unit, home);
                }
            }
            _ if unit.energy > PARASITIC_BOMB_ENERGY => bot.attack(unit),
            _ if unit.first_ability() == Some(Ability::Effect_Viper_Consume) => {
                let drained = unit
                    .first_order_target()
                    .and_then(|tag| game.get_unit(tag))
                    .map_or(false, |extractor| extractor.health < CONSUME_STOP_HEALTH);
                if drained {
                    bot.issue(unit.tag, Ability::Stop, Target::None);
                }
            }
            _ if !unit.idle() => {
                let extractor = game
                    .of_type(UnitType::Zerg_Extractor)
                    .into_iter()
                    .find(|e| e.health > CONSUME_MIN_HEALTH);
                match extractor {
                    Some(extractor) => bot.issue(
                        unit.tag,
                        Ability::Effect_Viper_Consume,
                        Target::Tag(extractor.tag),
                    ),
                    None => trace!("{} has nothing to consume", unit.tag),
                }
            }
            Some((enemy, _)) => attack_position(bot, unit, enemy),
            None => (),
        }
    }
}

pub struct DefaultAttack;

impl Tactic for DefaultAttack {
    fn execute(&self, bot: &mut Bot<'_>, unit: &UnitSnapshot) {
        bot.attack(unit);
    }
}
