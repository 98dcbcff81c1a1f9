//! Game state and core simulation types
//!
//! Everything one run needs lives in `GameState`, which the tick owns exclusively.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::scenery::{Tree, TreeSpawner};
use super::scroll::RoadMarkings;
use super::traffic::{Difficulty, TrafficCar, TrafficSpawner};
use super::vehicle::{CarColor, PlayerCar, VehicleClass};
use crate::consts::TRAFFIC_BASE_INTERVAL;

/// Run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    /// Driving
    Active,
    /// Hit traffic; terminal until the run is reset
    Crashed,
}

/// Things that happened during a tick, for collaborators to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Gear changed (new gear)
    GearShifted(u8),
    /// Engine hum level for this tick, 0-1
    EngineVolume(f32),
    /// A traffic car left the screen at its far edge
    TrafficPassed,
    /// Player hit traffic
    Collided,
    /// Crash produced a new session best
    NewBest(u64),
}

/// Per-run choices read from settings at reset time
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub difficulty: Difficulty,
    pub vehicle: VehicleClass,
    pub color: CarColor,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub config: RunConfig,
    pub status: RunStatus,
    pub score: u64,
    /// Best score seen this session (survives `reset`)
    pub best_score: u64,
    /// Simulation ticks elapsed in this run
    pub time_ticks: u64,
    pub player: PlayerCar,
    pub markings: RoadMarkings,
    /// Active traffic (ordered by spawn)
    pub traffic: Vec<TrafficCar>,
    pub trees: Vec<Tree>,
    pub traffic_spawner: TrafficSpawner,
    pub tree_spawner: TreeSpawner,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, config: RunConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            status: RunStatus::Active,
            score: 0,
            best_score: 0,
            time_ticks: 0,
            player: PlayerCar::new(config.vehicle, config.color),
            markings: RoadMarkings::new(),
            traffic: Vec::new(),
            trees: Vec::new(),
            traffic_spawner: TrafficSpawner::new(TRAFFIC_BASE_INTERVAL, config.difficulty),
            tree_spawner: TreeSpawner::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Start a fresh run, keeping the session best and the RNG stream
    pub fn reset(&mut self, config: RunConfig) {
        self.config = config;
        self.status = RunStatus::Active;
        self.score = 0;
        self.time_ticks = 0;
        self.player = PlayerCar::new(config.vehicle, config.color);
        self.markings = RoadMarkings::new();
        self.traffic.clear();
        self.trees.clear();
        self.traffic_spawner = TrafficSpawner::new(TRAFFIC_BASE_INTERVAL, config.difficulty);
        self.tree_spawner = TreeSpawner::default();
        self.events.clear();
    }

    pub fn is_active(&self) -> bool {
        self.status == RunStatus::Active
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// End the run and fold the score into the session best.
    ///
    /// Returns true if the score is a new best.
    pub(crate) fn crash(&mut self) -> bool {
        self.status = RunStatus::Crashed;
        if self.score > self.best_score {
            self.best_score = self.score;
            true
        } else {
            false
        }
    }
}
