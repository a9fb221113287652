//! SashKit Settings Crate
//!
//! Loads window configurations from JSON or TOML, validates them, and resolves
//! them into the fully populated `WindowSpec` the geometry engine consumes.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, BarSettings, BaseSettings, MuntinSettings, PositionSettings,
    WindowConfig,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
