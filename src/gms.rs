use crate::ids::Ability;
use derive_more::{Add, AddAssign, Display, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::ops::*;

/// Gas, minerals, supply
#[derive(
    Eq,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "m: {}, g: {}, s: {}", minerals, gas, supply)]
pub struct Gms {
    pub minerals: i32,
    pub gas: i32,
    pub supply: i32,
}

impl Gms {
    pub const fn new(minerals: i32, gas: i32, supply: i32) -> Self {
        Self {
            minerals,
            gas,
            supply,
        }
    }

    /// Subtracts `price` if it can be paid. Items that don't need supply can be paid while
    /// supply is negative.
    pub fn checked_sub(&mut self, price: Gms) -> bool {
        if self.minerals < price.minerals
            || self.gas < price.gas
            || (price.supply > 0 && self.supply < price.supply)
        {
            return false;
        }
        *self -= price;
        true
    }
}

impl Mul<i32> for Gms {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Gms {
            minerals: self.minerals * rhs,
            gas: self.gas * rhs,
            supply: self.supply * rhs,
        }
    }
}

impl Mul<Gms> for i32 {
    type Output = Gms;

    fn mul(self, rhs: Gms) -> Self::Output {
        rhs * self
    }
}

pub trait Price {
    fn price(&self) -> Gms;
}

impl Price for Ability {
    /// Cost of issuing the ability once. Morphs only list what they add on top of the unit
    /// they consume. Leveled research is priced at level 1, see `research_price`.
    fn price(&self) -> Gms {
        use Ability::*;
        match self {
            Build_Hatchery => Gms::new(300, 0, 0),
            Build_Extractor => Gms::new(25, 0, 0),
            Build_Spawning_Pool => Gms::new(200, 0, 0),
            Build_Evolution_Chamber => Gms::new(75, 0, 0),
            Build_Roach_Warren => Gms::new(150, 0, 0),
            Build_Hydralisk_Den => Gms::new(100, 100, 0),
            Build_Baneling_Nest => Gms::new(100, 50, 0),
            Build_Spire => Gms::new(200, 200, 0),
            Build_Infestation_Pit => Gms::new(100, 100, 0),
            Build_Ultralisk_Cavern => Gms::new(150, 200, 0),
            Morph_Lair => Gms::new(150, 100, 0),
            Morph_Hive => Gms::new(200, 150, 0),
            Morph_Lurker_Den => Gms::new(100, 150, 0),
            Morph_Greater_Spire => Gms::new(100, 150, 0),
            Morph_Overseer => Gms::new(50, 50, 0),
            Morph_Ravager => Gms::new(25, 75, 1),
            Morph_Lurker => Gms::new(50, 100, 1),
            Morph_Brood_Lord => Gms::new(150, 150, 2),
            Train_Baneling => Gms::new(25, 25, 0),
            Train_Drone => Gms::new(50, 0, 1),
            Train_Overlord => Gms::new(100, 0, 0),
            Train_Zergling => Gms::new(50, 0, 1),
            Train_Queen => Gms::new(150, 0, 2),
            Train_Roach => Gms::new(75, 25, 2),
            Train_Hydralisk => Gms::new(100, 50, 2),
            Train_Infestor => Gms::new(100, 150, 2),
            Train_Swarm_Host => Gms::new(100, 75, 3),
            Train_Ultralisk => Gms::new(275, 200, 6),
            Train_Viper => Gms::new(100, 200, 3),
            Train_Corruptor => Gms::new(150, 100, 2),
            Train_Mutalisk => Gms::new(100, 100, 2),
            Research_Metabolic_Boost => Gms::new(100, 100, 0),
            Research_Adrenal_Glands => Gms::new(200, 200, 0),
            Research_Pneumatized_Carapace => Gms::new(100, 100, 0),
            Research_Centrifugal_Hooks => Gms::new(100, 100, 0),
            Research_Muscular_Augments => Gms::new(100, 100, 0),
            Research_Glial_Reconstitution => Gms::new(100, 100, 0),
            Research_Chitinous_Plating => Gms::new(150, 150, 0),
            Research_Zerg_Missile_Weapons | Research_Zerg_Melee_Weapons => Gms::new(100, 100, 0),
            Research_Zerg_Flyer_Attack => Gms::new(100, 100, 0),
            Research_Zerg_Ground_Armor | Research_Zerg_Flyer_Armor => Gms::new(150, 150, 0),
            _ => Gms::default(),
        }
    }
}

/// Price of researching `level` (1 based) of a leveled upgrade
pub fn research_price(ability: Ability, level: usize) -> Gms {
    use Ability::*;
    let step = match ability {
        Research_Zerg_Missile_Weapons | Research_Zerg_Melee_Weapons => Gms::new(50, 50, 0),
        Research_Zerg_Flyer_Attack | Research_Zerg_Ground_Armor | Research_Zerg_Flyer_Armor => {
            Gms::new(75, 75, 0)
        }
        _ => Gms::default(),
    };
    ability.price() + step * (level.max(1) as i32 - 1)
}
