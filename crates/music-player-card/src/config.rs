use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::progress::{is_usable_step, MAX_PROGRESS};
use crate::volume::MAX_VOLUME;

/// The timing table for loading, ticking and the simulated track length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub loading_delay_ms: u64,
    pub tick_interval_ms: u64,
    pub progress_step: f32,
    pub track_duration_secs: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            loading_delay_ms: 500,
            tick_interval_ms: 1000,
            progress_step: 0.5,
            track_duration_secs: 225,
        }
    }
}

impl Timing {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackInfo {
    pub title: String,
    pub artist: String,
}

impl Default for TrackInfo {
    fn default() -> Self {
        Self {
            title: "Awesome Song Title".to_owned(),
            artist: "Amazing Artist".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub timing: Timing,
    pub track: TrackInfo,
    pub initial_progress: f32,
    pub initial_volume: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            track: TrackInfo::default(),
            initial_progress: 35.0,
            initial_volume: 70,
        }
    }
}

impl PlayerConfig {
    /// Parses and validates a config; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or the first
    /// validation failure from [`PlayerConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Zero durations, a step outside `[0.01, 100]`, or initial values
    /// outside `[0, 100]`.
    pub fn validate(&self) -> Result<()> {
        let t = &self.timing;
        if t.loading_delay_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "timing.loading_delay_ms",
            });
        }
        if t.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "timing.tick_interval_ms",
            });
        }
        if t.track_duration_secs == 0 {
            return Err(ConfigError::ZeroDuration {
                field: "timing.track_duration_secs",
            });
        }
        if !is_usable_step(t.progress_step) {
            return Err(ConfigError::OutOfRange {
                field: "timing.progress_step",
                value: t.progress_step,
            });
        }
        if !(0.0..=MAX_PROGRESS).contains(&self.initial_progress) {
            return Err(ConfigError::OutOfRange {
                field: "initial_progress",
                value: self.initial_progress,
            });
        }
        if self.initial_volume > MAX_VOLUME {
            return Err(ConfigError::OutOfRange {
                field: "initial_volume",
                value: f32::from(self.initial_volume),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = PlayerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timing.loading_delay(), Duration::from_millis(500));
        assert_eq!(config.timing.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = PlayerConfig::from_json(
            r#"{ "initial_volume": 20, "timing": { "progress_step": 1.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.initial_volume, 20);
        assert_eq!(config.initial_progress, 35.0);
        assert_eq!(config.timing.progress_step, 1.0);
        assert_eq!(config.timing.loading_delay_ms, 500);
        assert_eq!(config.track, TrackInfo::default());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = PlayerConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn zero_delay_is_rejected() {
        let err =
            PlayerConfig::from_json(r#"{ "timing": { "loading_delay_ms": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ZeroDuration {
                field: "timing.loading_delay_ms"
            }
        ));
        assert_eq!(
            err.to_string(),
            "timing.loading_delay_ms must be greater than zero"
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = PlayerConfig::from_json(r#"{ "initial_volume": 101 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "initial_volume", .. }));

        let err = PlayerConfig::from_json(r#"{ "initial_progress": 100.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "initial_progress", .. }));

        let err =
            PlayerConfig::from_json(r#"{ "timing": { "progress_step": -1.0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "timing.progress_step",
                ..
            }
        ));
    }

    #[test]
    fn step_lost_to_rounding_is_rejected() {
        let err =
            PlayerConfig::from_json(r#"{ "timing": { "progress_step": 0.004 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "timing.progress_step",
                ..
            }
        ));
        assert!(PlayerConfig::from_json(r#"{ "timing": { "progress_step": 0.01 } }"#).is_ok());
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let config = PlayerConfig {
            initial_progress: f32::NAN,
            ..PlayerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PlayerConfig {
            timing: Timing {
                progress_step: f32::INFINITY,
                ..Timing::default()
            },
            ..PlayerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
