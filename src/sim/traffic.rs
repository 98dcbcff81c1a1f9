//! Traffic: two-lane spawning, scrolling and far-edge culling

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::vehicle::CarColor;
use crate::Rect;
use crate::consts::*;

/// Difficulty level; the numeric level divides the traffic spawn interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub fn level(self) -> u32 {
        self as u32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "1" => Some(Difficulty::Easy),
            "medium" | "med" | "2" => Some(Difficulty::Medium),
            "hard" | "3" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Settings-menu cycle: Easy -> Medium -> Hard -> Easy
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Ticks between spawns; integer division, so 120 gives 120/60/40
pub fn spawn_interval(base_interval: u32, difficulty: Difficulty) -> u32 {
    base_interval / difficulty.level()
}

/// Which way a traffic car travels relative to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TravelDirection {
    /// Oncoming: enters at the top and drives down the screen (left lane)
    Approaching,
    /// Same direction as the player: enters at the bottom and drives up (right lane)
    Departing,
}

impl TravelDirection {
    /// Each direction owns one lane
    pub fn lane(self) -> u32 {
        match self {
            TravelDirection::Approaching => 0,
            TravelDirection::Departing => 1,
        }
    }

    /// +1 for down the screen, -1 for up
    pub fn sign(self) -> f32 {
        match self {
            TravelDirection::Approaching => 1.0,
            TravelDirection::Departing => -1.0,
        }
    }

    fn spawn_y(self) -> f32 {
        match self {
            TravelDirection::Approaching => -TRAFFIC_SPAWN_MARGIN,
            TravelDirection::Departing => SCREEN_HEIGHT + TRAFFIC_SPAWN_MARGIN,
        }
    }
}

/// x of a car centred in `lane`
pub fn lane_x(lane: u32) -> f32 {
    ROAD_X + lane as f32 * LANE_WIDTH + LANE_WIDTH / 2.0 - TRAFFIC_WIDTH / 2.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficCar {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub direction: TravelDirection,
    /// Own speed along y; sign matches `direction`
    pub speed: f32,
    pub color: CarColor,
}

impl TrafficCar {
    pub fn bounds(&self) -> Rect {
        Rect {
            min: self.pos,
            size: self.size,
        }
    }

    /// Move by own speed plus the world scroll
    pub fn advance(&mut self, scroll: f32) {
        self.pos.y += self.speed + scroll;
    }

    /// Has the car left the screen on the side it was heading for?
    pub fn past_far_edge(&self) -> bool {
        match self.direction {
            TravelDirection::Approaching => self.pos.y > SCREEN_HEIGHT,
            TravelDirection::Departing => self.pos.y < -self.size.y,
        }
    }
}

/// Countdown-driven traffic generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSpawner {
    timer: u32,
    interval: u32,
    base_interval: u32,
    difficulty: Difficulty,
}

impl TrafficSpawner {
    /// The first spawn of a run waits the full base interval; difficulty applies after that
    pub fn new(base_interval: u32, difficulty: Difficulty) -> Self {
        Self {
            timer: 0,
            interval: base_interval,
            base_interval,
            difficulty,
        }
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Count one tick; returns true when a car should spawn this tick
    pub fn tick(&mut self) -> bool {
        self.timer += 1;
        if self.timer >= self.interval {
            self.timer = 0;
            self.interval = spawn_interval(self.base_interval, self.difficulty);
            true
        } else {
            false
        }
    }

    /// Build a new car with random direction, speed and paint
    pub fn spawn<R: Rng>(rng: &mut R, id: u32) -> TrafficCar {
        let direction = if rng.random_bool(0.5) {
            TravelDirection::Approaching
        } else {
            TravelDirection::Departing
        };
        let speed = rng.random_range(TRAFFIC_MIN_SPEED..TRAFFIC_MAX_SPEED) * direction.sign();
        let color = *CarColor::TRAFFIC.choose(rng).unwrap_or(&CarColor::Red);

        TrafficCar {
            id,
            pos: Vec2::new(lane_x(direction.lane()), direction.spawn_y()),
            size: Vec2::new(TRAFFIC_WIDTH, TRAFFIC_HEIGHT),
            direction,
            speed,
            color,
        }
    }
}

/// Advance every car and drop the ones past their far edge.
///
/// Returns how many cars were culled.
pub fn advance_and_cull(cars: &mut Vec<TrafficCar>, scroll: f32) -> u32 {
    let before = cars.len();
    cars.retain_mut(|car| {
        car.advance(scroll);
        !car.past_far_edge()
    });
    (before - cars.len()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_interval_by_difficulty() {
        assert_eq!(spawn_interval(120, Difficulty::Easy), 120);
        assert_eq!(spawn_interval(120, Difficulty::Medium), 60);
        assert_eq!(spawn_interval(120, Difficulty::Hard), 40);
        // Truncating division
        assert_eq!(spawn_interval(100, Difficulty::Hard), 33);
    }

    #[test]
    fn test_first_spawn_waits_base_interval() {
        let mut spawner = TrafficSpawner::new(120, Difficulty::Hard);
        let mut ticks = Vec::new();
        for t in 1..=200 {
            if spawner.tick() {
                ticks.push(t);
            }
        }
        assert_eq!(ticks, vec![120, 160, 200]);
        assert_eq!(spawner.interval(), 40);
    }

    #[test]
    fn test_lane_follows_direction() {
        let mut rng = Pcg32::seed_from_u64(7);
        for id in 0..50 {
            let car = TrafficSpawner::spawn(&mut rng, id);
            match car.direction {
                TravelDirection::Approaching => {
                    assert_eq!(car.pos.x, 280.0);
                    assert_eq!(car.pos.y, -100.0);
                    assert!(car.speed >= 1.0 && car.speed < 3.0);
                }
                TravelDirection::Departing => {
                    assert_eq!(car.pos.x, 480.0);
                    assert_eq!(car.pos.y, SCREEN_HEIGHT + 100.0);
                    assert!(car.speed <= -1.0 && car.speed > -3.0);
                }
            }
            assert!(CarColor::TRAFFIC.contains(&car.color));
        }
    }

    #[test]
    fn test_cull_at_far_edge() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut down = TrafficSpawner::spawn(&mut rng, 1);
        down.direction = TravelDirection::Approaching;
        down.speed = 2.0;
        down.pos.y = SCREEN_HEIGHT - 1.0;

        let mut up = down.clone();
        up.id = 2;
        up.direction = TravelDirection::Departing;
        up.speed = -2.0;
        up.pos.y = -TRAFFIC_HEIGHT + 1.0;

        let mut stay = down.clone();
        stay.id = 3;
        stay.pos.y = 100.0;

        let mut cars = vec![down, up, stay];
        let culled = advance_and_cull(&mut cars, 0.0);
        assert_eq!(culled, 2);
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].id, 3);
        assert_eq!(cars[0].pos.y, 102.0);
    }

    #[test]
    fn test_approaching_car_not_culled_at_top() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut car = TrafficSpawner::spawn(&mut rng, 1);
        car.direction = TravelDirection::Approaching;
        car.speed = 1.0;
        car.pos.y = -500.0;
        let mut cars = vec![car];
        // Player reversing hard: the car drifts further up but is not "passed"
        assert_eq!(advance_and_cull(&mut cars, -8.0), 0);
        assert_eq!(cars.len(), 1);
    }

    #[test]
    fn test_difficulty_cycle() {
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        assert_eq!(Difficulty::from_str("MED"), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_str("insane"), None);
    }
}
