//! Runner configuration - environment variable parsing

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Options for the headless runner, loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// RNG seed for the session
    pub seed: u64,
    /// Stop a run after this many ticks even if nobody crashed
    pub max_ticks: u64,
    /// Number of runs to play back to back
    pub runs: u32,
    /// Pace the loop at the tick rate instead of running flat out
    pub realtime: bool,
    /// Optional settings JSON file
    pub settings_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("ROAD_RACER_SEED") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("ROAD_RACER_SEED"))?,
            None => clock_seed(),
        };

        let max_ticks = match lookup("ROAD_RACER_TICKS") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("ROAD_RACER_TICKS"))?,
            None => 3600,
        };

        let runs = match lookup("ROAD_RACER_RUNS") {
            Some(v) => match v.trim().parse() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid("ROAD_RACER_RUNS")),
            },
            None => 1,
        };

        let realtime = match lookup("ROAD_RACER_REALTIME").as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(_) => return Err(ConfigError::Invalid("ROAD_RACER_REALTIME")),
        };

        Ok(Self {
            seed,
            max_ticks,
            runs,
            realtime,
            settings_path: lookup("ROAD_RACER_SETTINGS").map(PathBuf::from),
        })
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
