//! Demo configuration, read from the environment.

use core::fmt::Display;
use core::str::FromStr;

pub const ACCELERATE_DELTA_ENV: &str = "AUTOLOT_ACCELERATE_DELTA";
pub const BRAKE_DELTA_ENV: &str = "AUTOLOT_BRAKE_DELTA";

pub const DEFAULT_ACCELERATE_DELTA: i32 = 35;
pub const DEFAULT_BRAKE_DELTA: i32 = 10;

/// Step sizes used by the accelerate and brake actions (km/h).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    pub accelerate_delta: i32,
    pub brake_delta: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            accelerate_delta: DEFAULT_ACCELERATE_DELTA,
            brake_delta: DEFAULT_BRAKE_DELTA,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparsable values are logged and
    /// replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            accelerate_delta: parse_or(&lookup, ACCELERATE_DELTA_ENV, DEFAULT_ACCELERATE_DELTA),
            brake_delta: parse_or(&lookup, BRAKE_DELTA_ENV, DEFAULT_BRAKE_DELTA),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        tracing::warn!(key, value = %raw, error = %e, %default, "invalid setting; using default");
        default
    })
}
