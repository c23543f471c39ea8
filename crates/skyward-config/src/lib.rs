//! Configuration system for the Skyward scene runtime.
//!
//! Provides runtime-configurable settings that persist to disk as RON files,
//! with CLI overrides via clap and hot-reload detection.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DayNightConfig, DebugConfig, EffectsConfig, OverlayConfig,
    TelemetryConfig, WeatherConfig,
};
pub use error::ConfigError;

/// Default config directory: the platform config dir plus `skyward`, falling
/// back to the working directory when the platform dir is unavailable.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("skyward"))
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}
