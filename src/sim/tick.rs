//! Fixed timestep simulation tick
//!
//! Core game loop that advances the run by one step. Order within a tick:
//! gear shifts, kinematics + gear clamp, scroll delta, spawning, entity
//! advance and culling, collision, passive scoring.

use super::autopilot::autopilot_input;
use super::collision::{first_overlap, player_bounds};
use super::scenery::{TreeSpawner, advance_trees};
use super::score::{pass_points, speed_points};
use super::scroll::scroll_delta;
use super::state::{GameEvent, GameState};
use super::traffic::{TrafficSpawner, advance_and_cull};
use super::vehicle::DriveControls;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held: throttle
    pub accelerate: bool,
    /// Held: brake / reverse
    pub brake: bool,
    /// Held: turn left
    pub steer_left: bool,
    /// Held: turn right
    pub steer_right: bool,
    /// One-shot: gear up
    pub shift_up: bool,
    /// One-shot: gear down
    pub shift_down: bool,
    /// Demo mode - the autopilot drives
    pub autopilot: bool,
}

impl TickInput {
    pub fn controls(&self) -> DriveControls {
        DriveControls {
            accelerate: self.accelerate,
            brake: self.brake,
            steer_left: self.steer_left,
            steer_right: self.steer_right,
        }
    }
}

/// Advance the game state by one fixed timestep.
///
/// Events for this tick replace the previous tick's in `state.events`.
/// A crashed run is left untouched.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    if !state.is_active() {
        return;
    }

    let autopilot;
    let input = if input.autopilot {
        autopilot = autopilot_input(state);
        &autopilot
    } else {
        input
    };

    state.time_ticks += 1;

    // Gear changes first so this tick's clamp uses the new ceiling
    if input.shift_up && state.player.gearbox.shift_up() {
        log::debug!("Shifted up to gear {}", state.player.gearbox.gear());
        state.events.push(GameEvent::GearShifted(state.player.gearbox.gear()));
    }
    if input.shift_down && state.player.gearbox.shift_down() {
        log::debug!("Shifted down to gear {}", state.player.gearbox.gear());
        state.events.push(GameEvent::GearShifted(state.player.gearbox.gear()));
    }

    state.player.drive(&input.controls());
    state
        .events
        .push(GameEvent::EngineVolume(state.player.engine_volume()));

    let scroll = scroll_delta(state.player.heading, state.player.speed);
    state.markings.advance(scroll);

    if state.traffic_spawner.tick() {
        let id = state.next_entity_id();
        let car = TrafficSpawner::spawn(state.rng(), id);
        log::debug!(
            "Spawned traffic #{} ({:?}, speed {:.2}), next in {} ticks",
            car.id,
            car.direction,
            car.speed,
            state.traffic_spawner.interval()
        );
        state.traffic.push(car);
    }
    if state.tree_spawner.tick() {
        let tree = TreeSpawner::spawn(state.rng());
        state.trees.push(tree);
    }

    let passed = advance_and_cull(&mut state.traffic, scroll);
    state.score += pass_points(passed);
    for _ in 0..passed {
        state.events.push(GameEvent::TrafficPassed);
    }
    advance_trees(&mut state.trees, scroll);

    let player_box = player_bounds(&state.player);
    if let Some(idx) = first_overlap(&player_box, &state.traffic) {
        log::info!(
            "Crashed into traffic #{} after {} ticks, score {}",
            state.traffic[idx].id,
            state.time_ticks,
            state.score
        );
        state.events.push(GameEvent::Collided);
        if state.crash() {
            log::info!("New session best: {}", state.best_score);
            state.events.push(GameEvent::NewBest(state.best_score));
        }
        return;
    }

    state.score += speed_points(state.player.speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{RunConfig, RunStatus};
    use crate::sim::traffic::{Difficulty, TrafficCar, TravelDirection};
    use crate::sim::vehicle::CarColor;
    use glam::Vec2;

    fn parked_car_ahead(state: &GameState) -> TrafficCar {
        TrafficCar {
            id: 99,
            pos: state.player.pos + Vec2::new(5.0, 10.0),
            size: Vec2::new(TRAFFIC_WIDTH, TRAFFIC_HEIGHT),
            direction: TravelDirection::Approaching,
            speed: 0.0,
            color: CarColor::Green,
        }
    }

    #[test]
    fn test_collision_crashes_run() {
        let mut state = GameState::new(12345, RunConfig::default());
        state.score = 50;
        let car = parked_car_ahead(&state);
        state.traffic.push(car);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.status, RunStatus::Crashed);
        assert_eq!(state.best_score, 50);
        assert!(state.events.contains(&GameEvent::Collided));
        assert!(state.events.contains(&GameEvent::NewBest(50)));
    }

    #[test]
    fn test_crashed_run_is_frozen() {
        let mut state = GameState::new(12345, RunConfig::default());
        state.player.speed = 3.0;
        let car = parked_car_ahead(&state);
        state.traffic.push(car);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.status, RunStatus::Crashed);

        let snapshot = (state.score, state.time_ticks, state.player.pos, state.player.speed);
        let input = TickInput {
            accelerate: true,
            shift_up: true,
            ..Default::default()
        };
        for _ in 0..30 {
            tick(&mut state, &input);
        }
        assert_eq!(
            snapshot,
            (state.score, state.time_ticks, state.player.pos, state.player.speed)
        );
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_gear_shift_events() {
        let mut state = GameState::new(1, RunConfig::default());
        let up = TickInput {
            shift_up: true,
            ..Default::default()
        };
        tick(&mut state, &up);
        assert_eq!(state.player.gearbox.gear(), 2);
        assert!(state.events.contains(&GameEvent::GearShifted(2)));

        let down = TickInput {
            shift_down: true,
            ..Default::default()
        };
        tick(&mut state, &down);
        tick(&mut state, &down);
        assert_eq!(state.player.gearbox.gear(), 1);
        // Second downshift was a no-op
        assert!(
            !state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::GearShifted(_)))
        );
    }

    #[test]
    fn test_speed_pinned_to_first_gear() {
        let mut state = GameState::new(1, RunConfig::default());
        state.player.speed = 7.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.speed, 5.0);
    }

    #[test]
    fn test_passive_score_only_moving_forward() {
        let mut state = GameState::new(1, RunConfig::default());
        for _ in 0..4 {
            state.player.gearbox.shift_up();
        }
        state.player.speed = 15.0;
        let hold = TickInput {
            accelerate: true,
            ..Default::default()
        };
        tick(&mut state, &hold);
        assert_eq!(state.score, 1);

        state.player.speed = -4.0;
        let before = state.score;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, before);
    }

    #[test]
    fn test_world_scrolls_in_lockstep() {
        let mut state = GameState::new(1, RunConfig::default());
        state.player.speed = 4.95;
        state.trees.push(crate::sim::scenery::Tree {
            pos: Vec2::new(100.0, 100.0),
            speed: TREE_SPEED,
        });
        let mut car = parked_car_ahead(&state);
        car.pos.y = 100.0;
        car.speed = 1.5;
        state.traffic.push(car);
        let marking_before = state.markings.offsets[3];

        let hold = TickInput {
            accelerate: true,
            ..Default::default()
        };
        tick(&mut state, &hold);
        // Speed capped at 5 in first gear, heading straight => scroll 5
        assert_eq!(state.player.speed, 5.0);
        assert!((state.trees[0].pos.y - 105.0).abs() < 1e-4);
        assert!((state.traffic[0].pos.y - 106.5).abs() < 1e-4);
        assert!((state.markings.offsets[3] - (marking_before + 5.0)).abs() < 1e-4);
    }

    #[test]
    fn test_hard_traffic_spawns_faster() {
        let mut easy = GameState::new(3, RunConfig::default());
        let mut hard = GameState::new(
            3,
            RunConfig {
                difficulty: Difficulty::Hard,
                ..Default::default()
            },
        );
        // Stationary player: cars come and go on their own
        for _ in 0..120 {
            tick(&mut easy, &TickInput::default());
            tick(&mut hard, &TickInput::default());
        }
        assert_eq!(easy.traffic_spawner.interval(), 120);
        assert_eq!(hard.traffic_spawner.interval(), 40);
    }

    #[test]
    fn test_autopilot_survives_and_scores() {
        let mut state = GameState::new(2024, RunConfig::default());
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..3000 {
            tick(&mut state, &input);
        }
        assert_eq!(state.status, RunStatus::Active);
        assert!(state.score > 0);
        assert_eq!(state.player.gearbox.gear(), 5);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, RunConfig::default());
        let mut state2 = GameState::new(99999, RunConfig::default());

        let inputs = [
            TickInput {
                accelerate: true,
                ..Default::default()
            },
            TickInput {
                accelerate: true,
                steer_left: true,
                ..Default::default()
            },
            TickInput {
                shift_up: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.traffic.len(), state2.traffic.len());
        assert_eq!(state1.trees.len(), state2.trees.len());
        assert!((state1.player.pos.x - state2.player.pos.x).abs() < 0.0001);
    }
}
