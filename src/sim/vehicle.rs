//! Player vehicle: catalog profiles and per-tick kinematics

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::gearbox::GearBox;
use crate::consts::*;
use crate::{Rect, heading_components};

/// Selectable vehicle classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VehicleClass {
    #[default]
    Sedan,
    Sports,
    Suv,
}

/// Physical profile of a vehicle class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub width: f32,
    pub height: f32,
    /// Speed gained per tick with the throttle held
    pub acceleration: f32,
    /// Absolute speed cap regardless of gear
    pub top_speed: f32,
    /// Heading change per tick (degrees) while steering
    pub turn_rate: f32,
}

const PROFILES: [VehicleProfile; 3] = [
    VehicleProfile {
        width: 40.0,
        height: 70.0,
        acceleration: 0.1,
        top_speed: 20.0,
        turn_rate: 3.0,
    },
    VehicleProfile {
        width: 40.0,
        height: 65.0,
        acceleration: 0.15,
        top_speed: 25.0,
        turn_rate: 4.0,
    },
    VehicleProfile {
        width: 45.0,
        height: 80.0,
        acceleration: 0.08,
        top_speed: 18.0,
        turn_rate: 2.0,
    },
];

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Sedan, VehicleClass::Sports, VehicleClass::Suv];

    pub fn profile(self) -> VehicleProfile {
        PROFILES[self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Sedan => "Sedan",
            VehicleClass::Sports => "Sports",
            VehicleClass::Suv => "SUV",
        }
    }

    /// Next class in the picker (wraps)
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Previous class in the picker (wraps)
    pub fn prev(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Body paint, shared by the player picker and traffic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CarColor {
    #[default]
    Red,
    Blue,
    Green,
    Yellow,
    Orange,
    Purple,
}

impl CarColor {
    /// Colors offered in the player picker
    pub const PLAYER: [CarColor; 6] = [
        CarColor::Red,
        CarColor::Blue,
        CarColor::Green,
        CarColor::Yellow,
        CarColor::Orange,
        CarColor::Purple,
    ];

    /// Colors traffic is painted in
    pub const TRAFFIC: [CarColor; 5] = [
        CarColor::Red,
        CarColor::Blue,
        CarColor::Green,
        CarColor::Yellow,
        CarColor::Purple,
    ];

    pub fn rgb(self) -> [u8; 3] {
        match self {
            CarColor::Red => [255, 0, 0],
            CarColor::Blue => [0, 0, 255],
            CarColor::Green => [0, 255, 0],
            CarColor::Yellow => [255, 255, 0],
            CarColor::Orange => [255, 165, 0],
            CarColor::Purple => [128, 0, 128],
        }
    }

    pub fn next(self) -> Self {
        Self::PLAYER[(self as usize + 1) % Self::PLAYER.len()]
    }

    pub fn prev(self) -> Self {
        Self::PLAYER[(self as usize + Self::PLAYER.len() - 1) % Self::PLAYER.len()]
    }
}

/// Held driving controls for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveControls {
    pub accelerate: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

/// The player's car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCar {
    pub class: VehicleClass,
    pub color: CarColor,
    pub profile: VehicleProfile,
    /// Top-left corner; y never changes during a run
    pub pos: Vec2,
    /// Heading in degrees (0 = straight up the road, positive = left)
    pub heading: f32,
    /// Signed speed (negative = reversing)
    pub speed: f32,
    pub gearbox: GearBox,
}

impl PlayerCar {
    pub fn new(class: VehicleClass, color: CarColor) -> Self {
        let profile = class.profile();
        // Whole-pixel placement, centred horizontally and 3/4 down the screen
        let x = (SCREEN_WIDTH / 2.0).floor() - (profile.width / 2.0).floor();
        let y = (SCREEN_HEIGHT * 3.0 / 4.0).floor() - (profile.height / 2.0).floor();
        Self {
            class,
            color,
            profile,
            pos: Vec2::new(x, y),
            heading: 0.0,
            speed: 0.0,
            gearbox: GearBox::default(),
        }
    }

    /// Speed cap for the current gear and vehicle
    pub fn speed_cap(&self) -> f32 {
        self.gearbox.ceiling().min(self.profile.top_speed)
    }

    /// Apply throttle, brake or coasting friction
    pub fn apply_throttle(&mut self, controls: &DriveControls) {
        if controls.accelerate {
            self.speed += self.profile.acceleration;
        } else if controls.brake {
            self.speed -= self.profile.acceleration;
        } else {
            if self.speed > 0.0 {
                self.speed -= FRICTION;
            } else if self.speed < 0.0 {
                self.speed += FRICTION;
            }
            if self.speed.abs() < FRICTION {
                self.speed = 0.0;
            }
        }
    }

    /// Rotate the car; a stationary car cannot turn
    pub fn steer(&mut self, controls: &DriveControls) {
        if self.speed == 0.0 {
            return;
        }
        if controls.steer_left {
            self.heading += self.profile.turn_rate;
        }
        if controls.steer_right {
            self.heading -= self.profile.turn_rate;
        }
    }

    /// Move sideways along the heading and keep the car on the road
    pub fn update_lateral(&mut self) {
        let dir = heading_components(self.heading);
        self.pos.x += dir.x * self.speed;
        self.pos.x = self.pos.x.clamp(ROAD_X, ROAD_X + ROAD_WIDTH - self.profile.width);
    }

    /// Full kinematics step: throttle, gear clamp, steering, lateral motion
    pub fn drive(&mut self, controls: &DriveControls) {
        self.apply_throttle(controls);
        self.speed = self.gearbox.clamp_speed(self.speed, self.profile.top_speed);
        self.steer(controls);
        self.update_lateral();
    }

    /// Unrotated body rectangle
    pub fn body(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.profile.width, self.profile.height)
    }

    /// Engine hum volume in [0, 1]
    pub fn engine_volume(&self) -> f32 {
        (self.speed.abs() / self.profile.top_speed).min(1.0)
    }
}
