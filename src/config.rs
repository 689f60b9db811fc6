//! Runtime configuration read from `MCTETRIS_*` environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::input::ControlScheme;
use crate::types::TICK_MS;

/// Settings for one run of the terminal game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Control scheme active when the menu first appears.
    pub scheme: ControlScheme,
    /// Seed for the piece source.
    pub seed: u32,
    /// Frame interval in milliseconds (at least 1).
    pub tick_ms: u32,
    /// Where to write logs; no logger is installed when unset.
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scheme: ControlScheme::default(),
            seed: clock_seed(),
            tick_ms: TICK_MS,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unparseable values fall back to
    /// their defaults with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let scheme = var("MCTETRIS_SCHEME")
            .and_then(|s| {
                let parsed = ControlScheme::from_str(&s);
                if parsed.is_none() {
                    log::warn!("ignoring MCTETRIS_SCHEME={s:?}; expected wasd, arrows or numpad");
                }
                parsed
            })
            .unwrap_or_default();

        let seed = var("MCTETRIS_SEED")
            .and_then(|s| parse_or_warn::<u32>("MCTETRIS_SEED", &s))
            .unwrap_or_else(clock_seed);

        let tick_ms = var("MCTETRIS_TICK_MS")
            .and_then(|s| parse_or_warn::<u32>("MCTETRIS_TICK_MS", &s))
            .unwrap_or(TICK_MS)
            .max(1);

        let log_path = var("MCTETRIS_LOG_PATH");

        Self {
            scheme,
            seed,
            tick_ms,
            log_path,
        }
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    let parsed = value.parse().ok();
    if parsed.is_none() {
        log::warn!("ignoring {key}={value:?}; not a valid number");
    }
    parsed
}

/// Seed derived from the wall clock, for runs without `MCTETRIS_SEED`.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
