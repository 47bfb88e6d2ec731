use crate::classify::is_attackable;
use crate::*;
use glam::Vec2;
use log::trace;

// Close enough to the enemy start to look elsewhere
const START_LOCATION_REACHED: f32 = 20.0;
// Used when the map reports no playable area
const DEFAULT_MAP_SIZE: Vec2 = Vec2::new(236.0, 228.0);
const MAX_LOCATION_TRIES: usize = 10;

impl<'a> Bot<'a> {
    /// Sends an idle unit looking for the enemy: their start location first, known enemies when
    /// there are any, random places on the map once there is nothing left to see. Without a
    /// reachable random place the unit stays on the enemy start.
    pub fn scout(&mut self, unit: &UnitSnapshot) -> Result<(), FailureReason> {
        if !unit.idle() {
            return Err(FailureReason::AlreadyInProgress);
        }
        let game = self.game;
        let Some(target) = game.game_info().enemy_start_locations.first().copied() else {
            return self.scout_randomly(unit);
        };
        if let Some(&enemy) = game.units(Alliance::Enemy, is_attackable).first() {
            self.issue(unit.tag, Ability::Attack, Target::Tag(enemy.tag));
            return Ok(());
        }
        if unit.distance(target) < START_LOCATION_REACHED && self.scout_randomly(unit).is_ok() {
            return Ok(());
        }
        self.issue(unit.tag, Ability::Smart, Target::Pos(target));
        Ok(())
    }

    fn scout_randomly(&mut self, unit: &UnitSnapshot) -> Result<(), FailureReason> {
        let location = self
            .random_pathable_location(unit)
            .ok_or(FailureReason::Unreachable)?;
        trace!("{} scouting {}", unit.tag, location);
        self.issue(unit.tag, Ability::Smart, Target::Pos(location));
        Ok(())
    }

    /// Some point in the playable area the unit can walk to
    pub fn random_pathable_location(&mut self, unit: &UnitSnapshot) -> Option<Vec2> {
        let info = self.game.game_info();
        let (min, mut size) = (info.playable_min, info.playable_max - info.playable_min);
        if size.x <= 0.0 || size.y <= 0.0 {
            size = DEFAULT_MAP_SIZE;
        }
        for _ in 0..MAX_LOCATION_TRIES {
            let candidate =
                min + Vec2::new(self.rng.rand_float() * size.x, self.rng.rand_float() * size.y);
            if query::is_reachable(self.query, unit.tag, candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::testkit::*;
    use crate::*;
    use glam::Vec2;

    fn enemy_start() -> Vec2 {
        Vec2::new(ENEMY_START.0, ENEMY_START.1)
    }

    #[test]
    fn scouts_head_for_the_enemy_start() {
        let game = base_game();
        let mutalisk = own(100, UnitType::Zerg_Mutalisk, 60.0, 60.0).flying();
        let busy = own(101, UnitType::Zerg_Mutalisk, 60.0, 60.0)
            .flying()
            .with_order(Ability::Move, Target::Pos(Vec2::ZERO));
        let mut env = Env::new(&game);
        env.bot().scout(&mutalisk).unwrap();
        assert_eq!(
            env.bot().scout(&busy),
            Err(FailureReason::AlreadyInProgress)
        );
        assert_eq!(
            env.commands.commands,
            vec![Command {
                unit: Tag(100),
                ability: Ability::Smart,
                target: Target::Pos(enemy_start()),
            }]
        );
    }

    #[test]
    fn known_enemies_are_attacked_before_exploring() {
        let mut game = base_game();
        // Overlords are not worth the trip
        game.units
            .push(enemy(200, UnitType::Zerg_Overlord, 90.0, 90.0).flying());
        game.units.push(
            enemy(201, UnitType::Terran_Supply_Depot, 120.0, 120.0)
                .with_display(DisplayType::Snapshot),
        );
        let roach = own(100, UnitType::Zerg_Roach, 148.0, 148.0);
        let mut env = Env::new(&game);
        env.bot().scout(&roach).unwrap();
        assert_eq!(
            env.commands.commands[0].target,
            Target::Tag(Tag(201))
        );
    }

    #[test]
    fn explored_start_location_leads_to_random_points_on_the_map() {
        let game = base_game();
        let roach = own(100, UnitType::Zerg_Roach, 148.0, 148.0);
        let mut env = Env::with_seed(&game, 7);
        env.bot().scout(&roach).unwrap();
        let Target::Pos(p) = env.commands.commands[0].target else {
            panic!("Expected a position");
        };
        assert!((0.0..200.0).contains(&p.x) && (0.0..200.0).contains(&p.y));
        assert_eq!(env.commands.commands[0].ability, Ability::Smart);
    }

    #[test]
    fn degenerate_bounds_fall_back_to_a_default_map() {
        let mut game = base_game();
        game.game_info.playable_max = Vec2::ZERO;
        game.game_info.enemy_start_locations.clear();
        let roach = own(100, UnitType::Zerg_Roach, 50.0, 50.0);
        let mut env = Env::new(&game);
        for _ in 0..20 {
            let p = env.bot().random_pathable_location(&roach).unwrap();
            assert!((0.0..236.0).contains(&p.x) && (0.0..228.0).contains(&p.y));
        }
    }

    #[test]
    fn unreachable_map_yields_no_location() {
        struct Walled;
        impl QueryService for Walled {
            fn pathing_distance(&self, _unit: Tag, _to: Vec2) -> f32 {
                0.0
            }
            fn placement_valid(&self, _ability: Ability, _at: Vec2) -> bool {
                true
            }
            fn abilities_available(&self, _unit: Tag) -> Vec<Ability> {
                vec![]
            }
        }
        let game = base_game();
        let roach = own(100, UnitType::Zerg_Roach, 50.0, 50.0);
        let mut env = Env::new(&game);
        let mut rng = oorandom::Rand32::new(1);
        let mut bot = Bot::new(
            env.game,
            &Walled,
            &mut env.commands,
            &mut env.state,
            &mut env.tracker,
            &mut rng,
            &env.config,
        );
        assert_eq!(bot.random_pathable_location(&roach), None);
        assert_eq!(
            bot.scout_randomly(&roach),
            Err(FailureReason::Unreachable)
        );

        let scout = own(101, UnitType::Zerg_Roach, 148.0, 148.0);
        bot.scout(&scout).unwrap();
        assert_eq!(
            env.commands.commands,
            vec![Command {
                unit: Tag(101),
                ability: Ability::Smart,
                target: Target::Pos(enemy_start()),
            }]
        );
    }
}
