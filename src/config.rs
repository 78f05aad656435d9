//! Configuration file support for pickers.
//!
//! A picker can be described in JSON and applied to a [`NumberPicker`]:
//!
//! ```
//! use numpick::config::PickerConfig;
//! use numpick_ui::NumberPicker;
//!
//! let config = PickerConfig::from_json(r#"{ "start": 0, "end": 50, "step": 5 }"#).unwrap();
//! let mut picker = NumberPicker::new();
//! config.apply(&mut picker);
//! assert_eq!(picker.state().end, 50.0);
//! ```

use std::path::Path;

use numpick_ui::constants::{
    epsilon_for_precision, DEFAULT_END, DEFAULT_PRECISION, DEFAULT_SPEED_MS, DEFAULT_START,
    DEFAULT_STEP, UNBOUNDED_END, UNBOUNDED_END_SENTINEL,
};
use numpick_ui::{NumberPicker, Widget};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Most decimal places a configuration may ask for.
pub const MAX_PRECISION: u32 = 15;

/// Picker configuration that can be loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Version of the configuration file format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Inclusive lower bound
    #[serde(default = "default_start")]
    pub start: f64,

    /// Inclusive upper bound; `null` or `-1` means no maximum
    #[serde(default = "default_end")]
    pub end: Option<f64>,

    /// Initial value, defaults to `start`
    #[serde(default)]
    pub current: Option<f64>,

    /// Increment/decrement delta
    #[serde(default = "default_step")]
    pub step: f64,

    /// Decimal places shown
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Long-press repeat interval in milliseconds
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,

    /// Whether the picker accepts input
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_start() -> f64 {
    DEFAULT_START
}

fn default_end() -> Option<f64> {
    Some(DEFAULT_END)
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

fn default_speed_ms() -> u64 {
    DEFAULT_SPEED_MS
}

fn default_enabled() -> bool {
    true
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            start: default_start(),
            end: default_end(),
            current: None,
            step: default_step(),
            precision: default_precision(),
            speed_ms: default_speed_ms(),
            enabled: default_enabled(),
            log_level: LogLevel::default(),
        }
    }
}

impl PickerConfig {
    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;

        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded picker configuration from {:?}", path);
        Ok(config)
    }

    /// Upper bound as the picker stores it
    pub fn effective_end(&self) -> f64 {
        let epsilon = epsilon_for_precision(self.precision.min(MAX_PRECISION) as i32);
        match self.end {
            Some(end) if (end - UNBOUNDED_END_SENTINEL as f64).abs() >= epsilon => end,
            _ => UNBOUNDED_END,
        }
    }

    /// Check bounds, step and initial value.
    pub fn validate(&self) -> Result<()> {
        if !self.start.is_finite() {
            return Err(ConfigError::NonFinite("start"));
        }
        if let Some(end) = self.end {
            if !end.is_finite() {
                return Err(ConfigError::NonFinite("end"));
            }
        }
        if let Some(current) = self.current {
            if !current.is_finite() {
                return Err(ConfigError::NonFinite("current"));
            }
        }

        let end = self.effective_end();
        if self.start > end {
            return Err(ConfigError::InvalidRange {
                start: self.start,
                end,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        if let Some(current) = self.current {
            if current < self.start || current > end {
                return Err(ConfigError::CurrentOutOfRange {
                    current,
                    start: self.start,
                    end,
                });
            }
        }
        Ok(())
    }

    /// Configure a picker. Listeners are not notified.
    pub fn apply(&self, picker: &mut NumberPicker) {
        picker.set_precision(self.precision.min(MAX_PRECISION) as i32);
        match self.end {
            Some(end) => picker.set_float_range(self.start, end),
            None => picker.set_float_range(self.start, UNBOUNDED_END_SENTINEL as f64),
        }
        if let Some(current) = self.current {
            picker.set_float_current(current);
        }
        picker.set_step(self.step);
        picker.set_speed(self.speed_ms);
        picker.set_enabled(self.enabled);
        log::debug!("Applied picker configuration: {:?}", self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.end, Some(10.0));
        assert_eq!(config.speed_ms, 300);
    }

    #[test]
    fn test_null_end_is_unbounded() {
        let config = PickerConfig::from_json(r#"{ "start": 1, "end": null }"#).unwrap();
        assert_eq!(config.end, None);

        let mut picker = NumberPicker::new();
        config.apply(&mut picker);
        assert!(picker.state().is_unbounded());
    }

    #[test]
    fn test_minus_one_end_is_unbounded() {
        let config = PickerConfig::from_json(r#"{ "end": -1 }"#).unwrap();
        assert_eq!(config.effective_end(), UNBOUNDED_END);

        let json = r#"{ "start": -5, "end": -1, "current": 3 }"#;
        let config = PickerConfig::from_json(json).unwrap();
        let mut picker = NumberPicker::new();
        config.apply(&mut picker);
        assert!(picker.state().is_unbounded());
        assert_eq!(picker.text(), "3");
    }

    #[test]
    fn test_negative_end_near_sentinel_is_bounded() {
        let config = PickerConfig::from_json(r#"{ "start": -5, "end": -1.5, "precision": 1 }"#)
            .unwrap();
        assert_eq!(config.effective_end(), -1.5);
        let err = PickerConfig::from_json(r#"{ "start": -5, "end": -2, "current": 3 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::CurrentOutOfRange { .. }));
    }

    #[test]
    fn test_apply() {
        let json = r#"{
            "start": 0.5,
            "end": 2.5,
            "current": 1.5,
            "step": 0.25,
            "precision": 2,
            "speed_ms": 150,
            "log_level": "debug"
        }"#;
        let config = PickerConfig::from_json(json).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        let mut picker = NumberPicker::new();
        config.apply(&mut picker);
        assert_eq!(picker.text(), "1.50");
        assert_eq!(picker.state().start, 0.5);
        assert_eq!(picker.state().end, 2.5);
        assert_eq!(picker.state().step, 0.25);
        assert_eq!(picker.state().speed.as_millis(), 150);
        assert!(picker.is_enabled());
    }

    #[test]
    fn test_disabled_config() {
        let config = PickerConfig::from_json(r#"{ "enabled": false }"#).unwrap();
        let mut picker = NumberPicker::new();
        config.apply(&mut picker);
        assert!(!picker.is_enabled());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = PickerConfig::from_json(r#"{ "start": 5, "end": 2 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange { .. }));
    }

    #[test]
    fn test_rejects_bad_step() {
        let err = PickerConfig::from_json(r#"{ "step": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep(_)));
        let err = PickerConfig::from_json(r#"{ "step": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStep(_)));
    }

    #[test]
    fn test_rejects_excessive_precision() {
        let err = PickerConfig::from_json(r#"{ "precision": 40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrecision { precision: 40, .. }));
    }

    #[test]
    fn test_rejects_current_out_of_range() {
        let err = PickerConfig::from_json(r#"{ "current": 11 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::CurrentOutOfRange { .. }));
    }

    #[test]
    fn test_rejects_newer_version() {
        let err = PickerConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::VersionTooNew { .. }));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = PickerConfig::from_json("{ start: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse configuration"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = PickerConfig::load("/nonexistent/numpick.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = PickerConfig {
            end: None,
            precision: 1,
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(PickerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::default().to_level_filter(), log::LevelFilter::Info);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
    }
}
