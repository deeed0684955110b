//! Scene configuration.
//!
//! Every tuning knob lives here with a default taken from
//! `space_garbage_types`. A config file only needs to list what it changes:
//!
//! ```
//! use space_garbage_core::Config;
//!
//! let config = Config::from_json_str(r#"{ "seed": 7, "ship": { "fading": 0.9 } }"#).unwrap();
//! assert_eq!(config.seed, Some(7));
//! assert_eq!(config.ship.fading, 0.9);
//! assert_eq!(config.tick_ms, 100);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use space_garbage_types::{
    DEBRIS_SPEED, GUN_UNLOCK_YEAR, PROJECTILE_SPEED, SHIP_CONTROLS_PER_FRAME, SHIP_FADING,
    SHIP_SPEED_LIMIT, STAR_DENSITY, STAR_SYMBOLS, START_YEAR, TICKS_PER_YEAR, TICK_MS,
};

use crate::epoch::SpawnCadence;
use crate::error::CoreError;
use crate::physics::SpeedLimits;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Scheduler pass interval in milliseconds. Zero runs passes back to back.
    pub tick_ms: u64,
    /// RNG seed; a random one is drawn (and logged) when absent.
    pub seed: Option<u64>,
    /// Stars per interior cell, must be > 0.
    pub star_density: f64,
    pub star_symbols: Vec<char>,
    pub start_year: i32,
    pub ticks_per_year: u32,
    pub gun_unlock_year: i32,
    pub ship: ShipConfig,
    /// Rows per tick, must be > 0.
    pub debris_speed: f64,
    /// Rows per tick along the vertical axis, must be non-zero.
    pub projectile_speed: f64,
    pub cadence: SpawnCadence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShipConfig {
    pub x_speed_limit: f64,
    pub y_speed_limit: f64,
    pub fading: f64,
    pub controls_per_frame: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: None,
            star_density: STAR_DENSITY,
            star_symbols: STAR_SYMBOLS.to_vec(),
            start_year: START_YEAR,
            ticks_per_year: TICKS_PER_YEAR,
            gun_unlock_year: GUN_UNLOCK_YEAR,
            ship: ShipConfig::default(),
            debris_speed: DEBRIS_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            cadence: SpawnCadence::default(),
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            x_speed_limit: SHIP_SPEED_LIMIT,
            y_speed_limit: SHIP_SPEED_LIMIT,
            fading: SHIP_FADING,
            controls_per_frame: SHIP_CONTROLS_PER_FRAME,
        }
    }
}

impl ShipConfig {
    pub fn limits(&self) -> SpeedLimits {
        SpeedLimits::new(self.x_speed_limit, self.y_speed_limit)
    }
}

impl Config {
    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> Result<Self, CoreError> {
        let config: Config = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.star_density.is_finite() && self.star_density > 0.0) {
            return Err(CoreError::invalid_config(format!(
                "star_density must be greater than 0, got {}",
                self.star_density
            )));
        }
        if self.star_symbols.is_empty() {
            return Err(CoreError::invalid_config("star_symbols must not be empty"));
        }
        if self.ticks_per_year == 0 {
            return Err(CoreError::invalid_config("ticks_per_year must be positive"));
        }
        if !(0.0..=1.0).contains(&self.ship.fading) {
            return Err(CoreError::invalid_config(format!(
                "ship.fading must be between 0 and 1, got {}",
                self.ship.fading
            )));
        }
        for (label, limit) in [
            ("ship.x_speed_limit", self.ship.x_speed_limit),
            ("ship.y_speed_limit", self.ship.y_speed_limit),
        ] {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(CoreError::invalid_config(format!(
                    "{label} must be greater than 0, got {limit}"
                )));
            }
        }
        if self.ship.controls_per_frame == 0 {
            return Err(CoreError::invalid_config(
                "ship.controls_per_frame must be positive",
            ));
        }
        if !(self.debris_speed.is_finite() && self.debris_speed > 0.0) {
            return Err(CoreError::invalid_config(format!(
                "debris_speed must be greater than 0, got {}",
                self.debris_speed
            )));
        }
        if !(self.projectile_speed.is_finite() && self.projectile_speed != 0.0) {
            return Err(CoreError::invalid_config(format!(
                "projectile_speed must be non-zero, got {}",
                self.projectile_speed
            )));
        }
        self.cadence.validate()
    }
}
