//! Road Racer - headless runner
//!
//! Plays autopilot runs through the full session loop (simulation, audio
//! dispatch, scene building) and prints a JSON summary line per run.

use std::thread;
use std::time::{Duration, Instant};

use road_racer::audio::{AudioManager, TraceSink};
use road_racer::consts::SIM_DT;
use road_racer::renderer::HeadlessRenderer;
use road_racer::{Config, Session, Settings};

fn main() {
    env_logger::init();
    log::info!("Road Racer (headless) starting...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    log::info!(
        "seed {}, {} run(s) of up to {} ticks{}",
        config.seed,
        config.runs,
        config.max_ticks,
        if config.realtime { ", realtime" } else { "" }
    );

    let settings = Settings::load(config.settings_path.as_deref());
    let audio = AudioManager::new(Some(Box::new(TraceSink::default())));
    let mut session = Session::new(config.seed, settings, audio);
    session.set_autopilot(true);
    let mut renderer = HeadlessRenderer::default();

    for run in 0..config.runs {
        if run > 0 {
            session.restart();
        }
        if config.realtime {
            run_realtime(&mut session, &mut renderer, config.max_ticks);
        } else {
            while session.state().time_ticks < config.max_ticks && session.step() {
                session.render(&mut renderer);
            }
        }

        match serde_json::to_string(&session.summary()) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("Failed to serialize run summary: {}", e),
        }
    }

    session.request_quit();
    log::info!(
        "Done: {} frames built, best score {}",
        renderer.frames,
        session.state().best_score
    );
}

/// Wall-clock paced loop feeding frame deltas through the accumulator
fn run_realtime(session: &mut Session, renderer: &mut HeadlessRenderer, max_ticks: u64) {
    let frame = Duration::from_secs_f32(SIM_DT);
    let mut last = Instant::now();

    while session.state().time_ticks < max_ticks && session.state().is_active() {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        session.update(dt);
        session.render(renderer);

        if let Some(rest) = frame.checked_sub(now.elapsed()) {
            thread::sleep(rest);
        }
    }
}
