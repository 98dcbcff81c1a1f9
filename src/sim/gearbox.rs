//! Five-speed gearbox capping the car's speed

use serde::{Deserialize, Serialize};

pub const MIN_GEAR: u8 = 1;
pub const MAX_GEAR: u8 = 5;

/// Speed ceiling per gear, indexed by `gear - 1`
pub const GEAR_CEILINGS: [f32; MAX_GEAR as usize] = [5.0, 8.0, 12.0, 16.0, 20.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearBox {
    gear: u8,
}

impl Default for GearBox {
    fn default() -> Self {
        Self { gear: MIN_GEAR }
    }
}

impl GearBox {
    pub fn gear(&self) -> u8 {
        self.gear
    }

    pub fn ceiling(&self) -> f32 {
        GEAR_CEILINGS[(self.gear - MIN_GEAR) as usize]
    }

    /// Returns true if the gear changed
    pub fn shift_up(&mut self) -> bool {
        if self.gear < MAX_GEAR {
            self.gear += 1;
            true
        } else {
            false
        }
    }

    /// Returns true if the gear changed
    pub fn shift_down(&mut self) -> bool {
        if self.gear > MIN_GEAR {
            self.gear -= 1;
            true
        } else {
            false
        }
    }

    /// Pin `speed` to the cap of this gear and `top_speed`, keeping its sign.
    ///
    /// This is a hard pin: a downshift at speed snaps straight to the new ceiling.
    pub fn clamp_speed(&self, speed: f32, top_speed: f32) -> f32 {
        let cap = self.ceiling().min(top_speed);
        if speed.abs() > cap {
            cap.copysign(speed)
        } else {
            speed
        }
    }
}
