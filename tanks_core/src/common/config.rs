//! Construction time tuning for Tanks and their drawing

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{
    SLOW_MOTION_MULTIPLIER, TANK_BARREL_MOVE_INTERVAL, TANK_BARREL_TURN_SPEED, TANK_MIN_SPEED,
    TANK_SCALE_FACTOR, TANK_SPAWN_BAND, TANK_SPEED_RANGE, TANK_TREAD_ANIMATION_SPEED,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse tank config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be greater than zero, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("`barrel_move_interval` must be at least one frame")]
    ZeroInterval,
    #[error("`spawn_band` must lie in (0, 1], got {0}")]
    SpawnBand(f64),
}

/// Tuning numbers shared by the Spawner and the Animator
///
/// Missing fields fall back to the defaults when deserialized, so a host can
/// override a single value:
///
/// ```
/// use tanks_core::common::config::TankConfig;
///
/// let config = TankConfig::from_json(r#"{ "tread_speed": 2.0 }"#).unwrap();
/// assert_eq!(config.tread_speed, 2.0);
/// assert_eq!(config.barrel_move_interval, 100);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TankConfig {
    pub scale: f64,
    /// Radians per frame
    pub barrel_turn_speed: f64,
    /// Frames between barrel retargets
    pub barrel_move_interval: u32,
    pub tread_speed: f64,
    pub slow_motion_multiplier: f64,
    pub min_speed: f64,
    pub speed_range: f64,
    /// Centered fraction of the canvas height used for spawning
    pub spawn_band: f64,
}

impl Default for TankConfig {
    fn default() -> Self {
        Self {
            scale: TANK_SCALE_FACTOR,
            barrel_turn_speed: TANK_BARREL_TURN_SPEED,
            barrel_move_interval: TANK_BARREL_MOVE_INTERVAL,
            tread_speed: TANK_TREAD_ANIMATION_SPEED,
            slow_motion_multiplier: SLOW_MOTION_MULTIPLIER,
            min_speed: TANK_MIN_SPEED,
            speed_range: TANK_SPEED_RANGE,
            spawn_band: TANK_SPAWN_BAND,
        }
    }
}

impl TankConfig {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("scale", self.scale),
            ("barrel_turn_speed", self.barrel_turn_speed),
            ("tread_speed", self.tread_speed),
            ("slow_motion_multiplier", self.slow_motion_multiplier),
        ] {
            // written so that NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.barrel_move_interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        if !(self.spawn_band > 0.0 && self.spawn_band <= 1.0) {
            return Err(ConfigError::SpawnBand(self.spawn_band));
        }

        Ok(())
    }

    /// The animation multiplier for the current game speed
    pub fn speed_multiplier(&self, slow_motion: bool) -> f64 {
        match slow_motion {
            true => self.slow_motion_multiplier,
            false => 1.0,
        }
    }
}

/// Colors used by the Renderer, as CSS color strings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TankPalette {
    pub body: String,
    pub shadow: String,
    /// Tread housing and the darker tread segments
    pub tread_housing: String,
    pub tread_light: String,
    pub gun_metal: String,
    pub gun_highlight: String,
    pub outline: String,
    /// Outer glow and glints
    pub reflection: String,
}

impl Default for TankPalette {
    fn default() -> Self {
        Self {
            body: String::from("#FF7C00"),
            shadow: String::from("#803000"),
            tread_housing: String::from("#4A3A2D"),
            tread_light: String::from("#604030"),
            gun_metal: String::from("#555555"),
            gun_highlight: String::from("#FF9900"),
            outline: String::from("#002E6D"),
            reflection: String::from("#0C6FEF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_multiplier_follows_flag() {
        let config = TankConfig::default();
        assert_eq!(config.speed_multiplier(false), 1.0);
        assert_eq!(config.speed_multiplier(true), 0.4);
    }

    #[test]
    fn nan_scale_is_rejected() {
        let config = TankConfig {
            scale: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "scale", .. })
        ));
    }
}
