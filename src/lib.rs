//! Road Racer - A top-down scrolling road racer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, gearing, scrolling, traffic, scoring)
//! - `renderer`: Procedural scene building (vertex lists, no assets)
//! - `audio`: Event-driven sound dispatch with a silent fallback
//! - `session`: Fixed-timestep driver tying input, simulation and collaborators together
//! - `settings` / `config`: Player preferences and runner options

pub mod audio;
pub mod config;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use config::{Config, ConfigError};
pub use session::{RunSummary, Session};
pub use settings::{BackgroundMode, CarColor, Difficulty, Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Road geometry
    pub const ROAD_WIDTH: f32 = 400.0;
    pub const ROAD_X: f32 = (SCREEN_WIDTH - ROAD_WIDTH) / 2.0;
    pub const LANE_COUNT: u32 = 2;
    pub const LANE_WIDTH: f32 = ROAD_WIDTH / LANE_COUNT as f32;

    /// Lane markings
    pub const MARKING_WIDTH: f32 = 10.0;
    pub const MARKING_HEIGHT: f32 = 50.0;
    pub const MARKING_GAP: f32 = 30.0;

    /// Speed lost per tick while coasting
    pub const FRICTION: f32 = 0.05;

    /// Traffic
    pub const TRAFFIC_WIDTH: f32 = 40.0;
    pub const TRAFFIC_HEIGHT: f32 = 70.0;
    pub const TRAFFIC_MIN_SPEED: f32 = 1.0;
    pub const TRAFFIC_MAX_SPEED: f32 = 3.0;
    /// How far off-screen new traffic appears
    pub const TRAFFIC_SPAWN_MARGIN: f32 = 100.0;
    /// Ticks between traffic spawns before difficulty scaling
    pub const TRAFFIC_BASE_INTERVAL: u32 = 120;

    /// Roadside trees
    pub const TREE_INTERVAL: u32 = 60;
    pub const TREE_SPAWN_Y: f32 = -50.0;
    pub const TREE_SPEED: f32 = 2.0;
    pub const TREE_MARGIN: f32 = 50.0;
    pub const TREE_ROAD_CLEARANCE: f32 = 20.0;

    /// Scoring
    pub const PASS_BONUS: u64 = 10;
    pub const SPEED_SCORE_DIVISOR: f32 = 10.0;
}

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Unit direction for a heading in degrees.
///
/// Heading 0 points up the screen; positive headings turn left (counter-clockwise).
/// Returns `(-sin, cos)`, the per-unit-speed lateral and scroll components.
#[inline]
pub fn heading_components(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(-rad.sin(), rad.cos())
}
