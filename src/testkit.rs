//! Fixtures shared by the unit tests.
use crate::*;
use ahash::AHashMap;
use glam::{Vec2, Vec3};
use oorandom::Rand32;

pub const START: (f32, f32) = (50.0, 50.0);
pub const ENEMY_START: (f32, f32) = (150.0, 150.0);
// Closest mineral to the main hatchery
pub const NEAR_MINERAL: u64 = 10;
pub const GEYSER: u64 = 20;

pub fn own(tag: u64, unit_type: UnitType, x: f32, y: f32) -> UnitSnapshot {
    UnitSnapshot::new(tag, unit_type, Alliance::Own, Vec3::new(x, y, 10.0))
}

pub fn enemy(tag: u64, unit_type: UnitType, x: f32, y: f32) -> UnitSnapshot {
    UnitSnapshot::new(tag, unit_type, Alliance::Enemy, Vec3::new(x, y, 10.0))
}

pub fn neutral(tag: u64, unit_type: UnitType, x: f32, y: f32) -> UnitSnapshot {
    UnitSnapshot::new(tag, unit_type, Alliance::Neutral, Vec3::new(x, y, 10.0))
}

pub fn start() -> Vec2 {
    Vec2::new(START.0, START.1)
}

/// One completed hatchery with 12 of 16 workers, three minerals and a geyser. Nothing else.
pub fn base_game() -> GameSnapshot {
    let (x, y) = START;
    GameSnapshot {
        units: vec![
            own(1, UnitType::Zerg_Hatchery, x, y).with_harvesters(12, 16),
            neutral(NEAR_MINERAL, UnitType::Neutral_Mineral_Field, x, y - 7.0),
            neutral(11, UnitType::Neutral_Mineral_Field, x + 8.0, y),
            neutral(12, UnitType::Neutral_Mineral_Field_750, x - 8.0, y - 8.0),
            neutral(GEYSER, UnitType::Neutral_Vespene_Geyser, x + 7.0, y + 7.0)
                .with_vespene(2250),
        ],
        minerals: 50,
        vespene: 0,
        food_used: 12,
        food_cap: 14,
        food_army: 0,
        food_workers: 12,
        game_loop: 0,
        upgrades: vec![],
        creep: vec![(start(), 12.0)],
        unit_type_data: AHashMap::new(),
        game_info: GameInfo {
            playable_min: Vec2::ZERO,
            playable_max: Vec2::new(200.0, 200.0),
            start_location: Vec3::new(x, y, 10.0),
            enemy_start_locations: vec![Vec2::new(ENEMY_START.0, ENEMY_START.1)],
        },
        expansions: vec![
            Vec3::new(x, y, 10.0),
            Vec3::new(90.0, 50.0, 10.0),
            Vec3::new(50.0, 120.0, 10.0),
            Vec3::new(ENEMY_START.0, ENEMY_START.1, 10.0),
        ],
    }
}

/// Answers like an open map unless told otherwise.
#[derive(Default)]
pub struct FakeQuery {
    // Points no unit can walk to
    pub unreachable: Vec<Vec2>,
    // Points where nothing can be placed
    pub blocked: Vec<Vec2>,
    pub abilities: AHashMap<Tag, Vec<Ability>>,
}

impl FakeQuery {
    pub fn with_abilities(mut self, unit: u64, abilities: &[Ability]) -> Self {
        self.abilities.insert(Tag(unit), abilities.to_vec());
        self
    }

    pub fn blocking(mut self, at: Vec2) -> Self {
        self.blocked.push(at);
        self
    }
}

impl QueryService for FakeQuery {
    fn pathing_distance(&self, _unit: Tag, to: Vec2) -> f32 {
        if self.unreachable.iter().any(|p| p.distance(to) < 0.5) {
            0.0
        } else {
            10.0
        }
    }

    fn placement_valid(&self, _ability: Ability, at: Vec2) -> bool {
        !self.blocked.iter().any(|p| p.distance(at) < 0.5)
    }

    fn abilities_available(&self, unit: Tag) -> Vec<Ability> {
        self.abilities.get(&unit).cloned().unwrap_or_default()
    }
}

/// Everything a `Bot` borrows, for calling single rules.
pub struct Env<'g> {
    pub game: &'g GameSnapshot,
    pub query: FakeQuery,
    pub commands: CommandBuffer,
    pub state: AgentState,
    pub tracker: Tracker,
    pub rng: Rand32,
    pub config: Config,
}

impl<'g> Env<'g> {
    pub fn new(game: &'g GameSnapshot) -> Self {
        Self::with_seed(game, 1)
    }

    pub fn with_seed(game: &'g GameSnapshot, seed: u64) -> Self {
        let config = Config {
            seed,
            ..Config::default()
        };
        let mut state = AgentState::new(&config);
        state.start_location = game.game_info.start_location;
        state.staging_location = game.game_info.start_location;
        state.expansions = ExpansionSites::new(game.expansions.clone());
        let mut tracker = Tracker::default();
        tracker.reset(Gms::new(
            game.minerals,
            game.vespene,
            game.food_cap - game.food_used,
        ));
        Self {
            game,
            query: FakeQuery::default(),
            commands: CommandBuffer::default(),
            state,
            tracker,
            rng: Rand32::new(seed),
            config,
        }
    }

    pub fn bot(&mut self) -> Bot<'_> {
        Bot::new(
            self.game,
            &self.query,
            &mut self.commands,
            &mut self.state,
            &mut self.tracker,
            &mut self.rng,
            &self.config,
        )
    }
}

pub fn started_agent(game: &GameSnapshot) -> Agent {
    let mut agent = Agent::new(Config::default());
    agent.on_game_start(Frame {
        game,
        query: &FakeQuery::default(),
        actions: &mut CommandBuffer::default(),
    });
    agent
}

pub fn tick(agent: &mut Agent, game: &GameSnapshot, query: &FakeQuery) -> CommandBuffer {
    let mut commands = CommandBuffer::default();
    agent.on_tick(Frame {
        game,
        query,
        actions: &mut commands,
    });
    commands
}

pub fn alert(agent: &mut Agent, game: &GameSnapshot) {
    agent.on_alert_detected(Frame {
        game,
        query: &FakeQuery::default(),
        actions: &mut CommandBuffer::default(),
    });
}
