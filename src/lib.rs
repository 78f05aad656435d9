//! numpick - configurable numeric picker
//!
//! Wraps the [`numpick_ui`] widget core with JSON configuration, typed
//! configuration errors and a wall-clock driver for long-press repeat.

pub mod config;
pub mod driver;
pub mod error;

pub use config::{LogLevel, PickerConfig};
pub use driver::RealTimeDriver;
pub use error::{ConfigError, Result};
pub use numpick_ui;
