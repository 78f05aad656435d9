use thiserror::Error;

/// Errors that can occur when loading or applying picker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: f64, end: f64 },

    #[error("Invalid step {0}: must be a positive finite number")]
    InvalidStep(f64),

    #[error("Precision {precision} exceeds the maximum of {max} decimal places")]
    InvalidPrecision { precision: u32, max: u32 },

    #[error("Current value {current} is outside [{start}, {end}]")]
    CurrentOutOfRange { current: f64, start: f64, end: f64 },

    #[error("Field '{0}' must be a finite number")]
    NonFinite(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
