//! Transport controller configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the controller writes a new media position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeekMode {
    /// Keyframe-aligned seek, cheaper on constrained devices
    Fast,
    /// Exact position write
    #[default]
    Precise,
}

/// What the play control does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayButtonMode {
    /// Raise `HostSignal::PlayTogglePressed` and let the host decide
    #[default]
    Signal,
    /// Toggle the attached media element directly
    Toggle,
}

/// Transport controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Step applied by taps and every repeat tick (seconds)
    pub seek_increment_secs: f64,
    /// Auto-repeat period while a seek button is held (milliseconds)
    pub repeat_interval_ms: u64,
    /// Distance from the end that arms the end-of-media watchdog (seconds)
    pub watchdog_threshold_secs: f64,
    /// Slack added past the expected end before the watchdog fires (seconds)
    pub watchdog_grace_secs: f64,
    /// Position write used for every seek
    pub seek_mode: SeekMode,
    /// Play control behaviour
    pub play_button: PlayButtonMode,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            seek_increment_secs: 10.0,
            repeat_interval_ms: 1000,
            watchdog_threshold_secs: 1.0,
            watchdog_grace_secs: 0.5,
            seek_mode: SeekMode::Precise,
            play_button: PlayButtonMode::Signal,
        }
    }
}

impl TransportConfig {
    /// Parse a JSON configuration and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        if !self.seek_increment_secs.is_finite() || self.seek_increment_secs <= 0.0 {
            return Err(Error::config(format!(
                "seek_increment_secs must be a positive number, got {}",
                self.seek_increment_secs
            )));
        }
        if self.repeat_interval_ms == 0 {
            return Err(Error::config("repeat_interval_ms must be non-zero"));
        }
        check_watchdog_secs("watchdog_threshold_secs", self.watchdog_threshold_secs)?;
        check_watchdog_secs("watchdog_grace_secs", self.watchdog_grace_secs)?;
        Ok(())
    }

    pub fn repeat_interval(&self) -> Duration {
        Duration::from_millis(self.repeat_interval_ms)
    }
}

/// Watchdog values must be representable as a timer delay
fn check_watchdog_secs(name: &str, secs: f64) -> Result<()> {
    if secs < 0.0 || Duration::try_from_secs_f64(secs).is_err() {
        return Err(Error::config(format!(
            "{} must be a non-negative number of seconds, got {}",
            name, secs
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TransportConfig::default();
        assert_eq!(config.seek_increment_secs, 10.0);
        assert_eq!(config.repeat_interval(), Duration::from_secs(1));
        assert_eq!(config.watchdog_threshold_secs, 1.0);
        assert_eq!(config.watchdog_grace_secs, 0.5);
        assert_eq!(config.seek_mode, SeekMode::Precise);
        assert_eq!(config.play_button, PlayButtonMode::Signal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = TransportConfig::from_json(r#"{"seek_mode": "fast", "seek_increment_secs": 5}"#)
            .unwrap();
        assert_eq!(config.seek_mode, SeekMode::Fast);
        assert_eq!(config.seek_increment_secs, 5.0);
        assert_eq!(config.repeat_interval_ms, 1000);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = TransportConfig::from_json(r#"{"repeat_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = TransportConfig::from_json(r#"{"seek_increment_secs": -1}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = TransportConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_watchdog_values_must_fit_a_timer() {
        let config = TransportConfig {
            watchdog_grace_secs: 1e20,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = TransportConfig {
            watchdog_threshold_secs: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = TransportConfig {
            watchdog_threshold_secs: 3600.0,
            watchdog_grace_secs: 2.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_play_button_mode_names() {
        let config = TransportConfig::from_json(r#"{"play_button": "toggle"}"#).unwrap();
        assert_eq!(config.play_button, PlayButtonMode::Toggle);
    }
}
