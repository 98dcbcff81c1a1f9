//! Procedural scene building
//!
//! Turns a `GameState` into a flat list of coloured triangles. Drawing them
//! is left to a `Renderer` backend; the simulation never waits on it.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, as_bytes, colors};

use glam::Vec2;

use crate::consts::*;
use crate::settings::BackgroundMode;
use crate::sim::{GameState, RunStatus, TrafficCar, TravelDirection, Tree};
use vertex::rgb;

/// Consumes finished frames
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Everything a backend needs for one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub hud: HudReadout,
}

/// HUD values (layout and text are the backend's business)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudReadout {
    pub speed_kmh: u32,
    pub gear: u8,
    pub score: u64,
    pub best_score: u64,
    pub crashed: bool,
}

impl HudReadout {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            speed_kmh: (state.player.speed * 10.0).trunc().abs() as u32,
            gear: state.player.gearbox.gear(),
            score: state.score,
            best_score: state.best_score,
            crashed: state.status == RunStatus::Crashed,
        }
    }
}

/// Renderer for headless runs: keeps only frame statistics
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub last_vertex_count: usize,
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames += 1;
        self.last_vertex_count = frame.vertices.len();
        log::trace!(
            "frame {}: {} vertices ({} bytes), score {}",
            self.frames,
            frame.vertices.len(),
            as_bytes(&frame.vertices).len(),
            frame.hud.score
        );
    }
}

fn grass_color(background: BackgroundMode) -> [f32; 4] {
    match background {
        BackgroundMode::Day => rgb([34, 139, 34]),
        BackgroundMode::Sunset => rgb([20, 80, 20]),
        BackgroundMode::Night => rgb([10, 30, 10]),
    }
}

/// Build the frame for the current state: grass, trees, road, traffic, player
pub fn build_frame(state: &GameState, background: BackgroundMode) -> Frame {
    let mut out = Vec::with_capacity(256 + state.traffic.len() * 60 + state.trees.len() * 60);

    shapes::rect(
        &mut out,
        Vec2::ZERO,
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        grass_color(background),
    );
    for tree in &state.trees {
        push_tree(&mut out, tree, background);
    }

    shapes::rect(
        &mut out,
        Vec2::new(ROAD_X, 0.0),
        Vec2::new(ROAD_WIDTH, SCREEN_HEIGHT),
        colors::ROAD,
    );
    let marking_color = if background == BackgroundMode::Night {
        colors::MARKING_NIGHT
    } else {
        colors::MARKING_DAY
    };
    let marking_x = SCREEN_WIDTH / 2.0 - MARKING_WIDTH / 2.0;
    for &y in &state.markings.offsets {
        shapes::rect(
            &mut out,
            Vec2::new(marking_x, y),
            Vec2::new(MARKING_WIDTH, MARKING_HEIGHT),
            marking_color,
        );
    }
    let edge = Vec2::new(5.0, SCREEN_HEIGHT);
    shapes::rect(&mut out, Vec2::new(ROAD_X, 0.0), edge, colors::ROAD_EDGE);
    shapes::rect(
        &mut out,
        Vec2::new(ROAD_X + ROAD_WIDTH - edge.x, 0.0),
        edge,
        colors::ROAD_EDGE,
    );

    for car in &state.traffic {
        push_traffic(&mut out, car);
    }

    let player = &state.player;
    let body = player.body();
    shapes::rotated_rect(
        &mut out,
        body.center(),
        body.size,
        player.heading,
        rgb(player.color.rgb()),
    );
    // Windscreen hint so the heading reads on screen
    let dir = crate::heading_components(player.heading);
    let forward = Vec2::new(dir.x, -dir.y);
    let nose = body.center() + forward * (body.size.y * 0.3);
    shapes::rotated_rect(
        &mut out,
        nose,
        Vec2::new(body.size.x - 10.0, 15.0),
        player.heading,
        colors::WINDOW,
    );

    Frame {
        vertices: out,
        hud: HudReadout::from_state(state),
    }
}

fn push_tree(out: &mut Vec<Vertex>, tree: &Tree, background: BackgroundMode) {
    let (trunk, foliage) = match background {
        BackgroundMode::Day => ([139, 69, 19], [0, 100, 0]),
        BackgroundMode::Sunset => ([100, 50, 10], [0, 80, 0]),
        BackgroundMode::Night => ([60, 30, 10], [0, 40, 0]),
    };
    let trunk_size = Vec2::new(10.0, 30.0);
    shapes::rect(out, tree.pos, trunk_size, rgb(trunk));
    shapes::circle(
        out,
        tree.pos + Vec2::new(trunk_size.x / 2.0, -15.0),
        25.0,
        rgb(foliage),
    );
}

fn push_traffic(out: &mut Vec<Vertex>, car: &TrafficCar) {
    shapes::rect(out, car.pos, car.size, rgb(car.color.rgb()));
    // Headlights face the direction of travel
    let (front_y, rear_y) = match car.direction {
        TravelDirection::Approaching => (car.pos.y + car.size.y - 5.0, car.pos.y + 5.0),
        TravelDirection::Departing => (car.pos.y + 5.0, car.pos.y + car.size.y - 5.0),
    };
    for x in [car.pos.x + 5.0, car.pos.x + car.size.x - 5.0] {
        shapes::circle(out, Vec2::new(x, front_y), 3.0, colors::HEADLIGHT);
        shapes::circle(out, Vec2::new(x, rear_y), 3.0, colors::TAILLIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{RunConfig, TickInput, tick};

    #[test]
    fn test_frame_grows_with_entities() {
        let mut state = GameState::new(11, RunConfig::default());
        let empty = build_frame(&state, BackgroundMode::Day).vertices.len();

        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..300 {
            tick(&mut state, &input);
        }
        assert!(!state.trees.is_empty());
        let busy = build_frame(&state, BackgroundMode::Night).vertices.len();
        assert!(busy > empty);
    }

    #[test]
    fn test_hud_readout() {
        let mut state = GameState::new(1, RunConfig::default());
        state.player.speed = -3.27;
        state.score = 42;
        let hud = HudReadout::from_state(&state);
        assert_eq!(hud.speed_kmh, 32);
        assert_eq!(hud.gear, 1);
        assert_eq!(hud.score, 42);
        assert!(!hud.crashed);
    }

    #[test]
    fn test_headless_renderer_counts() {
        let state = GameState::new(1, RunConfig::default());
        let mut renderer = HeadlessRenderer::default();
        let frame = build_frame(&state, BackgroundMode::Sunset);
        renderer.draw(&frame);
        assert_eq!(renderer.frames, 1);
        assert_eq!(renderer.last_vertex_count, frame.vertices.len());
    }
}
