//! Game configuration
//!
//! Every tunable constant of a simulated game lives here. The defaults give
//! the standard rules: 90 ticks per quarter, kickoffs from the 35, returns
//! spotted at the 25 and extra points always converted.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Ticks in one quarter
pub const QUARTER_TICKS: u32 = 90;

/// In-game seconds represented by one tick
pub const SECONDS_PER_TICK: u32 = 15;

/// Remaining time at which the two-minute warning sounds
pub const TWO_MINUTE_WARNING_SECS: u32 = 120;

pub const KICKOFF_SPOT: i32 = 35;
pub const KICKOFF_RETURN_SPOT: i32 = 25;
pub const PAT_SPOT: i32 = 97;
pub const TOUCHBACK_SPOT: i32 = 20;
pub const SAFETY_POINTS: u32 = 2;

/// How the ExtraPoint phase scores a touchdown's conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExtraPointMode {
    /// Touchdown is worth 7 and the conversion is never played.
    #[default]
    Automatic,
    /// Touchdown is worth 6; the offense kicks (1) or goes for two (2).
    Attempted,
}

impl ExtraPointMode {
    pub fn touchdown_points(&self) -> u32 {
        match self {
            ExtraPointMode::Automatic => 7,
            ExtraPointMode::Attempted => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub quarter_ticks: u32,
    pub seconds_per_tick: u32,
    pub two_minute_warning_secs: u32,
    /// Spot the kicking team kicks off from
    pub kickoff_spot: i32,
    /// Spot the receiving team takes over after a kickoff
    pub kickoff_return_spot: i32,
    /// Spot conversion attempts are snapped from
    pub pat_spot: i32,
    /// Spot a team takes over after a touchback
    pub touchback_spot: i32,
    pub extra_point: ExtraPointMode,
    pub safety_points: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            quarter_ticks: QUARTER_TICKS,
            seconds_per_tick: SECONDS_PER_TICK,
            two_minute_warning_secs: TWO_MINUTE_WARNING_SECS,
            kickoff_spot: KICKOFF_SPOT,
            kickoff_return_spot: KICKOFF_RETURN_SPOT,
            pat_spot: PAT_SPOT,
            touchback_spot: TOUCHBACK_SPOT,
            extra_point: ExtraPointMode::Automatic,
            safety_points: SAFETY_POINTS,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.quarter_ticks == 0 {
            return Err(GameError::InvalidConfig(
                "quarter_ticks must be positive".to_string(),
            ));
        }
        if self.seconds_per_tick == 0 {
            return Err(GameError::InvalidConfig(
                "seconds_per_tick must be positive".to_string(),
            ));
        }
        if self.quarter_ticks.checked_mul(self.seconds_per_tick).is_none()
            || self.quarter_ticks > i32::MAX as u32
        {
            return Err(GameError::InvalidConfig(format!(
                "quarter of {} ticks x {}s does not fit the clock",
                self.quarter_ticks, self.seconds_per_tick
            )));
        }

        let spots = [
            ("kickoff_spot", self.kickoff_spot),
            ("kickoff_return_spot", self.kickoff_return_spot),
            ("pat_spot", self.pat_spot),
            ("touchback_spot", self.touchback_spot),
        ];
        for (name, spot) in spots {
            if !(1..=99).contains(&spot) {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be within 1..=99, got {spot}"
                )));
            }
        }

        Ok(())
    }

    /// Ticks remaining at which the two-minute warning fires. Zero (never)
    /// when ticks have no length.
    pub fn two_minute_warning_ticks(&self) -> u32 {
        self.two_minute_warning_secs
            .checked_div(self.seconds_per_tick)
            .unwrap_or(0)
    }

    pub fn quarter_seconds(&self) -> u32 {
        self.quarter_ticks * self.seconds_per_tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.quarter_ticks, 90);
        assert_eq!(config.two_minute_warning_ticks(), 8);
        assert_eq!(config.quarter_seconds(), 1350);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{"seconds_per_tick": 10, "extra_point": "attempted"}"#)
            .unwrap();
        assert_eq!(config.seconds_per_tick, 10);
        assert_eq!(config.extra_point, ExtraPointMode::Attempted);
        assert_eq!(config.kickoff_spot, KICKOFF_SPOT);
        assert_eq!(config.quarter_seconds(), 900);
    }

    #[test]
    fn test_rejects_zero_length_quarter() {
        let err = GameConfig::from_json(r#"{"quarter_ticks": 0}"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_spot_off_the_field() {
        let config = GameConfig {
            touchback_spot: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, GameError::Serialization(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_warning_ticks_without_tick_length() {
        let config = GameConfig {
            seconds_per_tick: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.two_minute_warning_ticks(), 0);
    }

    #[test]
    fn test_touchdown_points_by_mode() {
        assert_eq!(ExtraPointMode::Automatic.touchdown_points(), 7);
        assert_eq!(ExtraPointMode::Attempted.touchdown_points(), 6);
    }
}
