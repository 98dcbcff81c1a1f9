//! Demo driver: derives controls from the current state
//!
//! Holds the throttle, climbs through the gears and steers back to the strip
//! between the two traffic lanes, which neither lane's cars ever enter.

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::*;

/// Steering gain: degrees of heading per pixel off the target line
const LATERAL_GAIN: f32 = 0.5;
/// Never aim for more than this heading while correcting
const MAX_CORRECTION_DEG: f32 = 15.0;

/// x the autopilot keeps the car's left edge at
pub fn cruise_line(car_width: f32) -> f32 {
    ROAD_X + ROAD_WIDTH / 2.0 - car_width / 2.0
}

pub fn autopilot_input(state: &GameState) -> TickInput {
    let car = &state.player;
    let mut input = TickInput {
        accelerate: true,
        ..Default::default()
    };

    // Upshift once the current gear is nearly used up
    let near_ceiling = car.speed >= car.gearbox.ceiling() - car.profile.acceleration;
    if near_ceiling && car.gearbox.ceiling() < car.profile.top_speed {
        input.shift_up = true;
    }

    // Positive heading moves the car toward smaller x
    let offset = car.pos.x - cruise_line(car.profile.width);
    let target = (offset * LATERAL_GAIN).clamp(-MAX_CORRECTION_DEG, MAX_CORRECTION_DEG);
    let slack = car.profile.turn_rate / 2.0;
    if car.heading < target - slack {
        input.steer_left = true;
    } else if car.heading > target + slack {
        input.steer_right = true;
    }

    input
}
