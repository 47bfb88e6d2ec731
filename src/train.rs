use crate::classify::is_town_hall;
use crate::*;
use log::trace;

// Below this supply only one overlord is made at a time
const EARLY_GAME_SUPPLY: i32 = 30;
const MAX_SUPPLY: i32 = 200;
// Start the next overlord this close to the cap
const SUPPLY_MARGIN: i32 = 4;
const ARMY_FOOD_PER_BASE: i32 = 25;
const INJECT_ENERGY: f32 = 25.0;

impl<'a> Bot<'a> {
    /// Uses an idle, completed `producer` for `ability`.
    pub fn try_build_unit(
        &mut self,
        ability: Ability,
        producer: UnitType,
    ) -> Result<(), FailureReason> {
        let game = self.game;
        if game.food_used() >= game.food_cap() && !ability.provides_supply() {
            return Err(FailureReason::InsufficientResources);
        }
        let producers: Vec<_> = game
            .mine(|u| u.unit_type == producer && u.idle() && u.completed())
            .into_iter()
            .filter(|u| self.tracker.is_available(u.tag))
            .collect();
        let unit = self
            .pick(&producers)
            .ok_or(FailureReason::InsufficientResources)?;
        if !self.tracker.pay(ability, ability.price()) {
            return Err(FailureReason::InsufficientResources);
        }
        self.issue(unit.tag, ability, Target::None);
        Ok(())
    }

    pub fn try_build_drone(&mut self) -> Result<(), FailureReason> {
        let game = self.game;
        let workers = game.count_total(
            &[UnitType::Zerg_Drone],
            &[UnitType::Zerg_Egg],
            Ability::Train_Drone,
        );
        if workers >= self.state.max_worker_count {
            return Err(FailureReason::InsufficientResources);
        }
        if workers as i32 > self.expected_worker_demand() {
            return Err(FailureReason::NoValidTarget);
        }
        if game.food_used() >= game.food_cap() {
            return Err(FailureReason::InsufficientResources);
        }
        let needs_workers = game.town_halls().iter().any(|base| {
            base.completed() && base.assigned_harvesters < base.ideal_harvesters
        });
        if !needs_workers {
            return Err(FailureReason::NoValidTarget);
        }
        self.try_build_unit(Ability::Train_Drone, UnitType::Zerg_Larva)
    }

    pub fn try_build_overlord(&mut self) -> Result<(), FailureReason> {
        let game = self.game;
        if game.food_cap() >= MAX_SUPPLY
            || game.food_used() < game.food_cap() - SUPPLY_MARGIN
            || game.minerals() < Ability::Train_Overlord.price().minerals
        {
            return Err(FailureReason::InsufficientResources);
        }
        if game.food_used() < EARLY_GAME_SUPPLY
            && game.of_type(UnitType::Zerg_Egg).iter().any(|egg| {
                egg.first_ability()
                    .map_or(true, |ability| ability == Ability::Train_Overlord)
            })
        {
            return Err(FailureReason::AlreadyInProgress);
        }
        self.try_build_unit(Ability::Train_Overlord, UnitType::Zerg_Larva)
    }

    /// One queen per base
    pub fn train_queen(&mut self) -> Result<(), FailureReason> {
        let game = self.game;
        let town_halls = [
            UnitType::Zerg_Hatchery,
            UnitType::Zerg_Lair,
            UnitType::Zerg_Hive,
        ];
        let queens = game.count_total(&[UnitType::Zerg_Queen], &town_halls, Ability::Train_Queen);
        if queens >= game.town_halls().len() {
            return Err(FailureReason::NoValidTarget);
        }
        if game.count(UnitType::Zerg_Spawning_Pool) == 0 {
            return Err(FailureReason::InsufficientResources);
        }
        for producer in town_halls {
            match self.try_build_unit(Ability::Train_Queen, producer) {
                Ok(()) => return Ok(()),
                Err(reason) => trace!("No queen from {:?}: {}", producer, reason),
            }
        }
        Err(FailureReason::InsufficientResources)
    }

    pub fn train_overseer(&mut self) -> Result<(), FailureReason> {
        let game = self.game;
        if !self.tech().lair_tech {
            return Err(FailureReason::InsufficientResources);
        }
        if game.count_any(&[UnitType::Zerg_Overseer, UnitType::Zerg_Overlord_Cocoon]) > 0 {
            return Err(FailureReason::NoValidTarget);
        }
        self.try_build_unit(Ability::Morph_Overseer, UnitType::Zerg_Overlord)
    }

    /// Works through the army table of the active composition, top to bottom.
    pub fn build_army(&mut self) {
        let game = self.game;
        let composition = self.state.composition;
        for row in ARMY_TARGETS {
            let Some(target) = row.target(composition) else {
                continue;
            };
            if !row.requires.is_empty()
                && game
                    .mine(|u| row.requires.contains(&u.unit_type) && u.completed())
                    .is_empty()
            {
                continue;
            }
            let count = game.count_total(row.counted_as, row.in_production(), row.ability);
            if count >= target {
                continue;
            }
            if let Err(reason) = self.try_build_unit(row.ability, row.producer) {
                trace!("{:?} not trained: {}", row.ability, reason);
            }
            if row.saves_for_first && count == 0 {
                return;
            }
        }
    }

    /// Every queen with energy injects one completed base, in order.
    pub fn inject_larva(&mut self) {
        let game = self.game;
        let queens = game.of_type(UnitType::Zerg_Queen);
        let bases = game.mine(|u| is_town_hall(u) && u.completed());
        for (queen, base) in queens.into_iter().zip(bases) {
            if queen.energy >= INJECT_ENERGY
                && queen.idle()
                && self.tracker.is_available(queen.tag)
            {
                self.issue(queen.tag, Ability::Effect_Inject_Larva, Target::Tag(base.tag));
            }
        }
    }

    /// Rules run in priority order. Drones, overlords and extractors end training for the tick.
    pub fn train_units(&mut self) {
        if self.try_build_drone().is_ok() {
            return;
        }
        if self.try_build_overlord().is_ok() {
            return;
        }
        let game = self.game;
        if game.food_army() < game.town_halls().len() as i32 * ARMY_FOOD_PER_BASE {
            if let Err(reason) = self.train_queen() {
                trace!("No queen: {}", reason);
            }
            if let Err(reason) = self.train_overseer() {
                trace!("No overseer: {}", reason);
            }
            self.build_army();
        }
        if self.build_extractor().is_ok() {
            return;
        }
        if let Err(reason) = self.try_build_expansion_hatch() {
            trace!("Not expanding: {}", reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testkit::*;
    use crate::*;

    fn larvae(game: &mut GameSnapshot, count: u64) {
        for tag in 0..count {
            game.units
                .push(own(60 + tag, UnitType::Zerg_Larva, 48.0, 48.0));
        }
    }

    fn queen_game(minerals: i32, food_used: i32, food_cap: i32) -> GameSnapshot {
        let mut game = base_game();
        game.units.retain(|u| !classify::is_vespene_geyser(u));
        game.units[0] = game.units[0].clone().with_harvesters(16, 16);
        game.units
            .push(own(30, UnitType::Zerg_Spawning_Pool, 45.0, 58.0));
        larvae(&mut game, 2);
        game.minerals = minerals;
        game.food_used = food_used;
        game.food_cap = food_cap;
        game
    }

    fn queen_order() -> Command {
        Command {
            unit: Tag(1),
            ability: Ability::Train_Queen,
            target: Target::None,
        }
    }

    #[test]
    fn queen_comes_from_the_base_and_larvae_get_the_rest() {
        let game = queen_game(200, 30, 60);
        let mut env = Env::new(&game);
        env.bot().train_units();
        let commands = &env.commands.commands;
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], queen_order());
        assert_eq!(commands[1].ability, Ability::Train_Zergling);
        assert!([Tag(60), Tag(61)].contains(&commands[1].unit));
        assert_eq!(env.commands.of_ability(Ability::Train_Queen).len(), 1);
        assert_eq!(env.tracker.available_gms.minerals, 0);
    }

    #[test]
    fn queen_spending_the_minerals_leaves_larvae_idle() {
        let game = queen_game(150, 30, 60);
        let mut env = Env::new(&game);
        env.bot().train_units();
        assert_eq!(env.commands.commands, vec![queen_order()]);
        assert!(env
            .tracker
            .unrealized
            .iter()
            .any(|i| i.ability == Ability::Train_Zergling));
    }

    #[test]
    fn queen_takes_the_last_supply() {
        let game = queen_game(200, 198, 200);
        let mut env = Env::new(&game);
        env.bot().train_units();
        assert_eq!(env.commands.commands, vec![queen_order()]);
        assert!(env
            .tracker
            .unrealized
            .iter()
            .any(|i| i.ability == Ability::Train_Zergling));
    }

    #[test]
    fn queens_in_production_count() {
        let mut game = base_game();
        game.units[0] = game.units[0]
            .clone()
            .with_order(Ability::Train_Queen, Target::None);
        game.units
            .push(own(30, UnitType::Zerg_Spawning_Pool, 45.0, 58.0));
        game.minerals = 500;
        let mut env = Env::new(&game);
        assert_eq!(env.bot().train_queen(), Err(FailureReason::NoValidTarget));
    }

    #[test]
    fn drones_never_exceed_the_worker_cap() {
        for drones in 10..16 {
            let mut game = base_game();
            game.minerals = 1000;
            game.food_cap = 100;
            for tag in 0..drones {
                game.units
                    .push(own(100 + tag, UnitType::Zerg_Drone, 50.0, 45.0));
            }
            // One more on the way
            game.units.push(
                own(99, UnitType::Zerg_Egg, 48.0, 48.0).with_order(Ability::Train_Drone, Target::None),
            );
            larvae(&mut game, 3);
            let mut env = Env::new(&game);
            env.state.max_worker_count = 13;
            let result = env.bot().try_build_drone();
            let trained = env.commands.of_ability(Ability::Train_Drone).len() as u64;
            assert!(drones + 1 + trained <= 13, "{} drones", drones);
            assert_eq!(result.is_ok(), drones + 1 < 13);
        }
    }

    #[test]
    fn drones_only_for_undersaturated_bases() {
        let mut game = base_game();
        game.minerals = 1000;
        game.units[0] = game.units[0].clone().with_harvesters(16, 16);
        larvae(&mut game, 1);
        let mut env = Env::new(&game);
        assert_eq!(env.bot().try_build_drone(), Err(FailureReason::NoValidTarget));
    }

    #[test]
    fn one_overlord_at_a_time_early() {
        let mut game = base_game();
        game.minerals = 300;
        game.food_used = 12;
        game.food_cap = 14;
        larvae(&mut game, 2);
        let mut env = Env::new(&game);
        env.bot().try_build_overlord().unwrap();

        game.units.push(
            own(99, UnitType::Zerg_Egg, 48.0, 48.0).with_order(Ability::Train_Overlord, Target::None),
        );
        let mut env = Env::new(&game);
        assert_eq!(
            env.bot().try_build_overlord(),
            Err(FailureReason::AlreadyInProgress)
        );

        game.food_used = 40;
        game.food_cap = 44;
        let mut env = Env::new(&game);
        env.bot().try_build_overlord().unwrap();
    }

    #[test]
    fn no_overlords_with_room_or_at_max() {
        let mut game = base_game();
        game.minerals = 300;
        larvae(&mut game, 2);
        game.food_used = 20;
        game.food_cap = 30;
        let mut env = Env::new(&game);
        assert!(env.bot().try_build_overlord().is_err());
        game.food_used = 200;
        game.food_cap = 200;
        let mut env = Env::new(&game);
        assert!(env.bot().try_build_overlord().is_err());
        assert!(env.commands.is_empty());
    }

    #[test]
    fn ultralisks_hold_back_the_rest_of_the_table() {
        let mut game = base_game();
        game.minerals = 100;
        game.vespene = 500;
        game.food_cap = 100;
        game.units
            .push(own(30, UnitType::Zerg_Spawning_Pool, 45.0, 58.0));
        game.units
            .push(own(31, UnitType::Zerg_Ultralisk_Cavern, 56.0, 42.0));
        larvae(&mut game, 3);
        let mut env = Env::new(&game);
        env.bot().build_army();
        assert!(env.commands.is_empty(), "Saving for the first ultralisk");

        game.units
            .push(own(40, UnitType::Zerg_Ultralisk, 60.0, 60.0));
        let mut env = Env::new(&game);
        env.bot().build_army();
        assert_eq!(env.commands.of_ability(Ability::Train_Zergling).len(), 1);
    }

    #[test]
    fn zergling_eggs_count_double() {
        let mut game = base_game();
        game.minerals = 1000;
        game.food_cap = 100;
        game.units
            .push(own(30, UnitType::Zerg_Spawning_Pool, 45.0, 58.0));
        for tag in 0..10 {
            game.units.push(
                own(70 + tag, UnitType::Zerg_Egg, 48.0, 48.0)
                    .with_order(Ability::Train_Zergling, Target::None),
            );
        }
        larvae(&mut game, 3);
        let mut env = Env::new(&game);
        env.bot().build_army();
        assert!(env.commands.is_empty());
    }

    #[test]
    fn queens_inject_completed_bases_in_order() {
        let mut game = base_game();
        game.units.push(
            own(2, UnitType::Zerg_Hatchery, 90.0, 50.0).with_build_progress(0.3),
        );
        game.units
            .push(own(3, UnitType::Zerg_Lair, 50.0, 120.0));
        game.units
            .push(own(40, UnitType::Zerg_Queen, 50.0, 53.0).with_energy(30.0));
        game.units
            .push(own(41, UnitType::Zerg_Queen, 50.0, 117.0).with_energy(50.0));
        game.units
            .push(own(42, UnitType::Zerg_Queen, 90.0, 53.0).with_energy(50.0));
        let mut env = Env::new(&game);
        env.bot().inject_larva();
        assert_eq!(
            env.commands.commands,
            vec![
                Command {
                    unit: Tag(40),
                    ability: Ability::Effect_Inject_Larva,
                    target: Target::Tag(Tag(1)),
                },
                Command {
                    unit: Tag(41),
                    ability: Ability::Effect_Inject_Larva,
                    target: Target::Tag(Tag(3)),
                },
            ]
        );
    }

    #[test]
    fn tired_or_busy_queens_do_not_inject() {
        let mut game = base_game();
        game.units
            .push(own(40, UnitType::Zerg_Queen, 50.0, 53.0).with_energy(20.0));
        let mut env = Env::new(&game);
        env.bot().inject_larva();
        assert!(env.commands.is_empty());

        game.units[5] = own(40, UnitType::Zerg_Queen, 50.0, 53.0)
            .with_energy(40.0)
            .with_order(Ability::Attack, Target::None);
        let mut env = Env::new(&game);
        env.bot().inject_larva();
        assert!(env.commands.is_empty());
    }
}
