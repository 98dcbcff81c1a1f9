//! Session driver
//!
//! Owns the simulation state and its collaborators. Runs the fixed-timestep
//! accumulator, consumes edge-triggered input once, and forwards each tick's
//! events to audio after the tick has finished.

use serde::Serialize;

use crate::audio::{AudioManager, SoundClip};
use crate::consts::*;
use crate::renderer::{Renderer, build_frame};
use crate::settings::{Difficulty, Settings, VehicleClass};
use crate::sim::{DriveControls, GameState, RunStatus, TickInput, tick};

/// End-of-run report
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run: u32,
    pub seed: u64,
    pub vehicle: VehicleClass,
    pub difficulty: Difficulty,
    pub score: u64,
    pub best_score: u64,
    pub ticks: u64,
    pub crashed: bool,
}

pub struct Session {
    state: GameState,
    settings: Settings,
    audio: AudioManager,
    accumulator: f32,
    input: TickInput,
    /// Cleared by `request_quit`; the loop stops after the current tick
    running: bool,
    /// False after leaving a run (back to the menu) until `restart`
    in_run: bool,
    runs_started: u32,
    last_status: RunStatus,
}

impl Session {
    pub fn new(seed: u64, settings: Settings, audio: AudioManager) -> Self {
        let state = GameState::new(seed, settings.run_config());
        let mut session = Self {
            state,
            settings,
            audio,
            accumulator: 0.0,
            input: TickInput::default(),
            running: true,
            in_run: true,
            runs_started: 1,
            last_status: RunStatus::Active,
        };
        session.apply_audio_settings();
        log::info!(
            "Run 1 started (seed {}, {} on {})",
            seed,
            session.settings.vehicle.as_str(),
            session.settings.difficulty.as_str()
        );
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn in_run(&self) -> bool {
        self.in_run
    }

    /// Held controls, sampled every tick until changed
    pub fn set_controls(&mut self, controls: DriveControls) {
        self.input.accelerate = controls.accelerate;
        self.input.brake = controls.brake;
        self.input.steer_left = controls.steer_left;
        self.input.steer_right = controls.steer_right;
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.input.autopilot = on;
    }

    /// Edge-triggered; consumed by the next tick
    pub fn press_shift_up(&mut self) {
        self.input.shift_up = true;
    }

    /// Edge-triggered; consumed by the next tick
    pub fn press_shift_down(&mut self) {
        self.input.shift_down = true;
    }

    pub fn request_quit(&mut self) {
        if self.running {
            log::info!("Quit requested");
        }
        self.running = false;
        self.audio.stop_engine();
    }

    /// Swap in new preferences; gameplay choices apply from the next run
    pub fn apply_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.apply_audio_settings();
    }

    fn apply_audio_settings(&mut self) {
        self.audio.set_master_volume(self.settings.master_volume);
        self.audio.set_muted(!self.settings.sound_enabled);
    }

    /// Next backdrop palette
    pub fn cycle_background(&mut self) {
        self.settings.background = self.settings.background.next();
        self.audio.play(SoundClip::MenuSelect, 1.0);
    }

    /// Leave the current run without recording it (back to the menu)
    pub fn abandon_run(&mut self) {
        if self.in_run {
            log::info!("Left run {} at score {}", self.runs_started, self.state.score);
        }
        self.in_run = false;
        self.audio.stop_engine();
    }

    /// Start a fresh run with the current settings
    pub fn restart(&mut self) {
        self.audio.stop_engine();
        self.state.reset(self.settings.run_config());
        self.accumulator = 0.0;
        let autopilot = self.input.autopilot;
        self.input = TickInput {
            autopilot,
            ..Default::default()
        };
        self.in_run = true;
        self.runs_started += 1;
        self.last_status = RunStatus::Active;
        log::info!(
            "Run {} started ({} on {}, best so far {})",
            self.runs_started,
            self.settings.vehicle.as_str(),
            self.settings.difficulty.as_str(),
            self.state.best_score
        );
    }

    /// Run exactly one simulation tick and dispatch its events.
    ///
    /// Returns false if nothing ran (quit, out of a run, or crashed).
    pub fn step(&mut self) -> bool {
        if !self.running || !self.in_run || !self.state.is_active() {
            return false;
        }
        tick(&mut self.state, &self.input);
        self.audio.handle_events(&self.state.events);

        // Clear one-shot inputs after processing
        self.input.shift_up = false;
        self.input.shift_down = false;

        if self.state.status != self.last_status {
            log::info!(
                "Run {} over: score {}, best {}",
                self.runs_started,
                self.state.score,
                self.state.best_score
            );
            self.last_status = self.state.status;
        }
        true
    }

    /// Advance by a frame's worth of wall time; returns the ticks run
    pub fn update(&mut self, dt: f32) -> u32 {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            if !self.step() {
                self.accumulator = 0.0;
                break;
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }

    /// Hand the current frame to a renderer
    pub fn render(&self, renderer: &mut dyn Renderer) {
        let frame = build_frame(&self.state, self.settings.background);
        renderer.draw(&frame);
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            run: self.runs_started,
            seed: self.state.seed,
            vehicle: self.state.config.vehicle,
            difficulty: self.state.config.difficulty,
            score: self.state.score,
            best_score: self.state.best_score,
            ticks: self.state.time_ticks,
            crashed: self.state.status == RunStatus::Crashed,
        }
    }
}
