//! Simulation rules and driver settings
//!
//! Loaded from JSON; every field is optional and falls back to the reference
//! behavior in [`crate::consts`].

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunables that change simulation outcomes. All durations are in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub screen_width: i32,
    pub screen_height: i32,
    pub ground_offset: f32,
    pub base_inset: f32,
    pub spawn_probability: f64,
    pub missile_ease_divisor: f32,
    pub missile_fall_speed: f32,
    pub base_hit_range: f32,
    pub shot_travel_ticks: u32,
    pub explosion_radius: u32,
    pub blast_half_extent: f32,
    pub kill_reward: u64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_offset: GROUND_OFFSET,
            base_inset: BASE_INSET,
            spawn_probability: SPAWN_PROBABILITY,
            missile_ease_divisor: MISSILE_EASE_DIVISOR,
            missile_fall_speed: MISSILE_FALL_SPEED,
            base_hit_range: BASE_HIT_RANGE,
            shot_travel_ticks: SHOT_TRAVEL_TICKS,
            explosion_radius: EXPLOSION_RADIUS,
            blast_half_extent: BLAST_HALF_EXTENT,
            kill_reward: KILL_REWARD,
        }
    }
}

impl Rules {
    /// Y coordinate missiles descend to (and where the bases stand)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.screen_height as f32 - self.ground_offset
    }

    /// Base positions, left to right
    pub fn base_positions(&self) -> [Vec2; BASE_COUNT] {
        let y = self.ground_y();
        let width = self.screen_width as f32;
        [
            Vec2::new(self.base_inset, y),
            Vec2::new((self.screen_width / 2) as f32, y),
            Vec2::new(width - self.base_inset, y),
        ]
    }

    /// Check the rules describe a playable game
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(SettingsError::invalid(
                "rules.spawn_probability",
                "must be within 0.0..=1.0",
            ));
        }
        if self.shot_travel_ticks == 0 {
            return Err(SettingsError::invalid(
                "rules.shot_travel_ticks",
                "must be at least 1",
            ));
        }
        if self.explosion_radius == 0 {
            return Err(SettingsError::invalid(
                "rules.explosion_radius",
                "must be at least 1",
            ));
        }
        // Divisors below 1 push missiles past their target column
        if !(self.missile_ease_divisor >= 1.0) {
            return Err(SettingsError::invalid(
                "rules.missile_ease_divisor",
                "must be at least 1.0",
            ));
        }
        if !(self.missile_fall_speed > 0.0) {
            return Err(SettingsError::invalid(
                "rules.missile_fall_speed",
                "must be positive",
            ));
        }
        if self.screen_height <= 0 || self.ground_y() <= 0.0 {
            return Err(SettingsError::invalid(
                "rules.screen_height",
                "ground line must lie inside the screen",
            ));
        }
        if self.base_inset < 0.0 || self.screen_width as f32 <= 2.0 * self.base_inset {
            return Err(SettingsError::invalid(
                "rules.screen_width",
                "too narrow for the base layout",
            ));
        }
        Ok(())
    }
}

/// Options for the headless frame driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical ticks per second
    pub tick_rate_hz: u32,
    /// Run seed; taken from the clock when absent
    pub seed: Option<u64>,
    /// Ticks to simulate before the driver stops
    pub max_ticks: u64,
    /// Let the autopilot play; otherwise missiles fall unopposed
    pub autopilot: bool,
    /// Pace ticks against the wall clock instead of running flat out
    pub realtime: bool,
    /// Simulation rules
    pub rules: Rules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            seed: None,
            max_ticks: 60 * TICK_RATE_HZ as u64,
            autopilot: true,
            realtime: false,
            rules: Rules::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json).map_err(SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(SettingsError::Io)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate_hz == 0 {
            return Err(SettingsError::invalid("tick_rate_hz", "must be at least 1"));
        }
        if self.tick_rate_hz != TICK_RATE_HZ {
            log::warn!(
                "Tick rate {} Hz differs from {} Hz; rules are in tick units and may need retuning",
                self.tick_rate_hz,
                TICK_RATE_HZ
            );
        }
        self.rules.validate()
    }
}

/// Failure to load settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl SettingsError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read settings: {e}"),
            Self::Parse(e) => write!(f, "malformed settings: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate_hz, 30);
        assert!(settings.validate().is_ok());

        let bases = settings.rules.base_positions();
        assert_eq!(bases[0], Vec2::new(20.0, 110.0));
        assert_eq!(bases[1], Vec2::new(80.0, 110.0));
        assert_eq!(bases[2], Vec2::new(140.0, 110.0));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{ "seed": 7, "rules": { "spawn_probability": 0.5 } }"#)
                .unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.rules.spawn_probability, 0.5);
        assert_eq!(settings.rules.shot_travel_ticks, SHOT_TRAVEL_TICKS);
        assert_eq!(settings.max_ticks, Settings::default().max_ticks);
    }

    #[test]
    fn test_rejects_bad_rules() {
        let err = Settings::from_json(r#"{ "rules": { "spawn_probability": 1.5 } }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "rules.spawn_probability",
                ..
            }
        ));

        let err = Settings::from_json(r#"{ "rules": { "shot_travel_ticks": 0 } }"#).unwrap_err();
        assert!(err.to_string().contains("shot_travel_ticks"));

        let err =
            Settings::from_json(r#"{ "rules": { "missile_ease_divisor": 0.5 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/missile-command.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
    }
}
