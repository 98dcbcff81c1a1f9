//! Bounding-box collision between the player and traffic
//!
//! No physics response: the first overlap ends the run.

use glam::Vec2;

use super::traffic::TrafficCar;
use super::vehicle::PlayerCar;
use crate::Rect;

/// Axis-aligned bounds of a `size` rectangle rotated by `heading_deg` about `center`
pub fn rotated_bounds(center: Vec2, size: Vec2, heading_deg: f32) -> Rect {
    let rad = heading_deg.to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
    let extent = Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos);
    Rect {
        min: center - extent * 0.5,
        size: extent,
    }
}

/// The player's collision box, grown to cover the rotated body
pub fn player_bounds(car: &PlayerCar) -> Rect {
    let body = car.body();
    if car.heading == 0.0 {
        return body;
    }
    rotated_bounds(body.center(), body.size, car.heading)
}

/// Index of the first traffic car overlapping `player`
pub fn first_overlap(player: &Rect, traffic: &[TrafficCar]) -> Option<usize> {
    traffic.iter().position(|car| player.overlaps(&car.bounds()))
}
