use std::time::Duration;
use thiserror::Error;

pub const ROWS_VAR: &str = "LIFE_ROWS";
pub const COLS_VAR: &str = "LIFE_COLS";
pub const STEP_MS_VAR: &str = "LIFE_STEP_MS";
pub const CELL_SIZE_VAR: &str = "LIFE_CELL_SIZE";

/// Largest accepted grid side, in cells
pub const MAX_SIDE: usize = 1000;

/// Errors raised while reading configuration overrides.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{key}={value:?} is not a valid number")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    ZeroDimension { key: &'static str },
    #[error("{key}={value} exceeds the maximum of {max}")]
    TooLarge { key: &'static str, value: usize, max: usize },
    #[error("LIFE_STEP_MS must be greater than zero")]
    ZeroInterval,
    #[error("LIFE_CELL_SIZE must be a positive finite size, got {0}")]
    InvalidCellSize(f32),
}

/// Knobs the simulation and window read at startup
#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Delay between two scheduled steps while running
    pub step_interval: Duration,
    /// Cell edge length in pixels
    pub cell_size: f32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            step_interval: Duration::from_millis(400),
            cell_size: 20.0,
        }
    }
}

impl LifeConfig {
    /// Defaults overridden by `LIFE_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let rows = parse_side(&lookup, ROWS_VAR, defaults.rows)?;
        let cols = parse_side(&lookup, COLS_VAR, defaults.cols)?;

        let default_ms = defaults.step_interval.as_millis() as u64;
        let step_ms: u64 = parse_or(&lookup, STEP_MS_VAR, default_ms)?;
        if step_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        let cell_size: f32 = parse_or(&lookup, CELL_SIZE_VAR, defaults.cell_size)?;
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(cell_size));
        }

        Ok(Self {
            rows,
            cols,
            step_interval: Duration::from_millis(step_ms),
            cell_size,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}

/// Grid side length in `1..=MAX_SIDE`
fn parse_side(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    match parse_or(lookup, key, default)? {
        0 => Err(ConfigError::ZeroDimension { key }),
        value if value > MAX_SIDE => Err(ConfigError::TooLarge { key, value, max: MAX_SIDE }),
        value => Ok(value),
    }
}
