//! World scrolling: the player stays put vertically and everything else moves

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading_components;

/// Vertical world offset for this tick given the car's heading and speed.
///
/// Positive values move the world down the screen (the car is driving forward).
#[inline]
pub fn scroll_delta(heading_deg: f32, speed: f32) -> f32 {
    heading_components(heading_deg).y * speed
}

/// Recycling set of centre-line segments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadMarkings {
    /// Top y of each segment
    pub offsets: Vec<f32>,
}

impl Default for RoadMarkings {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadMarkings {
    pub fn new() -> Self {
        let period = MARKING_HEIGHT + MARKING_GAP;
        let count = (SCREEN_HEIGHT / period) as i32;
        let mut offsets: Vec<f32> = (-1..=count + 1).map(|i| i as f32 * period).collect();
        // Segments laid out past either edge get folded back in straight away
        for offset in &mut offsets {
            *offset = wrap_marking(*offset);
        }
        Self { offsets }
    }

    pub fn advance(&mut self, delta: f32) {
        for offset in &mut self.offsets {
            *offset = wrap_marking(*offset + delta);
        }
    }
}

/// Past the bottom edge -> just above the top, above the top -> bottom edge
#[inline]
pub fn wrap_marking(offset: f32) -> f32 {
    if offset > SCREEN_HEIGHT {
        -MARKING_HEIGHT
    } else if offset < -MARKING_HEIGHT {
        SCREEN_HEIGHT
    } else {
        offset
    }
}
