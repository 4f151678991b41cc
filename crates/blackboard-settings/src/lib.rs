//! Blackboard Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;

pub use config::{BoardSettings, Config, LoggingSettings, UiSettings, LOG_LEVELS};
pub use error::{SettingsError, SettingsResult};
