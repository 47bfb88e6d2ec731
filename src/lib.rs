//! Decision core of a StarCraft II Zerg bot. Every tick the host hands in a snapshot of the game,
//! the bot answers with commands. The only state carried over between ticks lives in
//! [`AgentState`].
mod action;
mod alert;
mod build;
mod build_order;
pub mod classify;
mod config;
mod duration;
mod expansion;
mod game;
mod gathering;
mod gms;
mod ids;
pub mod logging;
mod micro;
mod query;
mod sbase;
mod scouting;
mod squad;
mod strat;
mod sunit;
mod tactics;
mod tech;
#[cfg(test)]
mod testkit;
mod tracker;
mod train;
mod upgrade;
mod util;

pub use action::*;
pub use alert::*;
pub use config::*;
pub use duration::Duration;
pub use game::*;
pub use gms::*;
pub use ids::*;
pub use query::*;
pub use sbase::*;
pub use strat::*;
pub use sunit::*;
pub use tactics::*;
pub use tech::*;
pub use tracker::*;

use derive_more::Display;
use glam::{Vec2, Vec3};
use log::{debug, info, trace};
use oorandom::Rand32;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum FailureReason {
    // Minerals, gas, supply or a free producer
    #[display(fmt = "insufficient resources")]
    InsufficientResources,
    #[display(fmt = "no valid target")]
    NoValidTarget,
    #[display(fmt = "already in progress")]
    AlreadyInProgress,
    #[display(fmt = "unreachable")]
    Unreachable,
    #[display(fmt = "not placeable")]
    NotPlaceable,
}

/// What the host provides for one callback.
pub struct Frame<'a> {
    pub game: &'a dyn GameState,
    pub query: &'a dyn QueryService,
    pub actions: &'a mut dyn ActionSink,
}

pub trait AiModule {
    fn on_game_start(&mut self, frame: Frame);
    fn on_tick(&mut self, frame: Frame);
    fn on_unit_idle(&mut self, frame: Frame, unit: Tag);
    fn on_alert_detected(&mut self, frame: Frame);
}

#[derive(Clone, Debug, Serialize)]
pub struct AgentState {
    pub nuke_alert: NukeAlert,
    // Where idle army waits, drifts towards new bases
    pub staging_location: Vec3,
    pub start_location: Vec3,
    pub expansions: ExpansionSites,
    pub composition: Composition,
    pub max_worker_count: usize,
}

impl AgentState {
    pub fn new(config: &Config) -> Self {
        Self {
            nuke_alert: NukeAlert::new(Duration::from_loops(config.alert_duration)),
            staging_location: Vec3::ZERO,
            start_location: Vec3::ZERO,
            expansions: ExpansionSites::default(),
            composition: config.composition,
            max_worker_count: config.max_worker_count,
        }
    }
}

/// The agent while handling one callback. All rules are implemented on this.
pub struct Bot<'a> {
    pub game: Snapshot<'a>,
    pub query: &'a dyn QueryService,
    actions: &'a mut dyn ActionSink,
    pub state: &'a mut AgentState,
    pub tracker: &'a mut Tracker,
    pub rng: &'a mut Rand32,
    pub config: &'a Config,
}

impl<'a> Bot<'a> {
    pub fn new(
        game: &'a dyn GameState,
        query: &'a dyn QueryService,
        actions: &'a mut dyn ActionSink,
        state: &'a mut AgentState,
        tracker: &'a mut Tracker,
        rng: &'a mut Rand32,
        config: &'a Config,
    ) -> Self {
        Self {
            game: Snapshot::new(game),
            query,
            actions,
            state,
            tracker,
            rng,
            config,
        }
    }

    pub fn issue(&mut self, unit: Tag, ability: Ability, target: Target) {
        debug!("{} {:?} -> {:?}", unit, ability, target);
        self.tracker.reserve_unit(unit);
        self.tracker.record(unit, ability);
        self.actions.issue(unit, ability, target);
    }

    /// Uniformly picks one of `units`.
    pub fn pick<'u>(&mut self, units: &[&'u UnitSnapshot]) -> Option<&'u UnitSnapshot> {
        util::random_index(self.rng, units.len()).map(|i| units[i])
    }

    pub fn start_location(&self) -> Vec2 {
        self.state.start_location.truncate()
    }

    pub fn staging_location(&self) -> Vec2 {
        self.state.staging_location.truncate()
    }

    pub fn tech(&self) -> TechState {
        TechState::of(self.game)
    }

    /// Starts a fresh budget from the snapshot, forgetting what earlier callbacks reserved.
    pub fn reset_tracker(&mut self) {
        let game = self.game;
        self.tracker.reset(Gms {
            minerals: game.minerals(),
            gas: game.vespene(),
            supply: game.food_cap() - game.food_used(),
        });
    }

    pub fn step(&mut self) {
        let game = self.game;
        self.reset_tracker();

        if self.state.nuke_alert.check(game.game_loop()) {
            let home = self.start_location();
            for unit in game.army() {
                self.retreat(unit, home);
            }
        } else {
            self.manage_army();
        }

        self.build_order();
        self.manage_upgrades();
        self.inject_larva();
        self.train_units();

        self.detect_imbalance().ok();
        self.mine_idle_workers();

        debug!(
            "Loop {}: {} commands issued",
            game.game_loop(),
            self.tracker.issued_count()
        );
        if !self.tracker.unrealized.is_empty() {
            trace!("Unrealized: {:?}", self.tracker.unrealized);
        }
    }
}

pub struct Agent {
    pub state: AgentState,
    pub config: Config,
    rng: Rand32,
    tracker: Tracker,
}

impl Agent {
    pub fn new(config: Config) -> Self {
        Self {
            state: AgentState::new(&config),
            rng: Rand32::new(config.seed),
            tracker: Tracker::default(),
            config,
        }
    }

    /// Only every n-th game loop is processed
    pub fn frame_skip(&self, game: &dyn GameState) -> u32 {
        if game.food_used() >= game.food_cap() {
            self.config.frame_skip_supply_blocked.max(1)
        } else {
            self.config.frame_skip.max(1)
        }
    }

    fn bot<'b>(
        &'b mut self,
        game: &'b dyn GameState,
        query: &'b dyn QueryService,
        actions: &'b mut dyn ActionSink,
    ) -> Bot<'b> {
        Bot::new(
            game,
            query,
            actions,
            &mut self.state,
            &mut self.tracker,
            &mut self.rng,
            &self.config,
        )
    }
}

impl AiModule for Agent {
    fn on_game_start(&mut self, frame: Frame) {
        let info = frame.game.game_info();
        self.state.start_location = info.start_location;
        self.state.staging_location = info.start_location;
        self.state.expansions = ExpansionSites::new(frame.game.expansion_locations());
        info!(
            "Game start at {}, {} expansion sites, {:?} composition",
            self.state.start_location,
            self.state.expansions.len(),
            self.state.composition
        );
    }

    fn on_tick(&mut self, frame: Frame) {
        let game_loop = frame.game.game_loop();
        if game_loop % self.frame_skip(frame.game) != 0 {
            return;
        }
        self.bot(frame.game, frame.query, frame.actions).step();
    }

    fn on_unit_idle(&mut self, frame: Frame, unit: Tag) {
        let mut bot = self.bot(frame.game, frame.query, frame.actions);
        bot.reset_tracker();
        let Some(worker) = bot.game.get_unit(unit) else {
            return;
        };
        if worker.alliance == Alliance::Own && worker.unit_type == UnitType::Zerg_Drone {
            if let Err(reason) = bot.rebalance(worker) {
                trace!("Idle drone {} stays idle: {}", unit, reason);
            }
        }
    }

    fn on_alert_detected(&mut self, frame: Frame) {
        self.state.nuke_alert.raise(frame.game.game_loop());
    }
}
