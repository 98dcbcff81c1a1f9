//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Side effects leave as `GameEvent`s, never as direct I/O

pub mod autopilot;
pub mod collision;
pub mod gearbox;
pub mod scenery;
pub mod score;
pub mod scroll;
pub mod state;
pub mod tick;
pub mod traffic;
pub mod vehicle;

pub use autopilot::autopilot_input;
pub use collision::{first_overlap, player_bounds, rotated_bounds};
pub use gearbox::{GEAR_CEILINGS, GearBox, MAX_GEAR, MIN_GEAR};
pub use scenery::{Tree, TreeSpawner};
pub use score::{pass_points, speed_points};
pub use scroll::{RoadMarkings, scroll_delta, wrap_marking};
pub use state::{GameEvent, GameState, RunConfig, RunStatus};
pub use tick::{TickInput, tick};
pub use traffic::{Difficulty, TrafficCar, TrafficSpawner, TravelDirection, spawn_interval};
pub use vehicle::{CarColor, DriveControls, PlayerCar, VehicleClass, VehicleProfile};
