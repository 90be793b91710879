//! Runtime configuration, read from `TETRIS_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

pub const DEFAULT_GRAVITY_MS: u32 = 800;
pub const DEFAULT_TICK_MS: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Fixed seed; None means derive one from the wall clock per game.
    pub seed: Option<u32>,
    /// Gravity interval in ms; 0 disables gravity.
    pub gravity_ms: u32,
    /// Frame / input poll interval in ms.
    pub tick_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            gravity_ms: DEFAULT_GRAVITY_MS,
            tick_ms: DEFAULT_TICK_MS,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Missing or unparseable values keep their
    /// defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            seed: var("TETRIS_SEED").and_then(|s| s.parse().ok()),
            gravity_ms: var("TETRIS_GRAVITY_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.gravity_ms),
            tick_ms: var("TETRIS_TICK_MS")
                .and_then(|s| s.parse().ok())
                .filter(|&ms| ms > 0)
                .unwrap_or(defaults.tick_ms),
            log_path: var("TETRIS_LOG_PATH").map(PathBuf::from),
            log_level: var("TETRIS_LOG")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    /// None when gravity is disabled.
    pub fn gravity(&self) -> Option<Duration> {
        (self.gravity_ms > 0).then(|| Duration::from_millis(self.gravity_ms as u64))
    }
}
