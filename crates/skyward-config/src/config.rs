//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Weather transition settings.
    pub weather: WeatherConfig,
    /// Time-of-day transition settings.
    pub daynight: DayNightConfig,
    /// Flight camera tuning.
    pub camera: CameraConfig,
    /// Rising-light effect tuning.
    pub effects: EffectsConfig,
    /// Performance telemetry settings.
    pub telemetry: TelemetryConfig,
    /// Overlay startup visibility.
    pub overlay: OverlayConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Weather transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeatherConfig {
    /// Seconds a weather transition takes.
    pub change_seconds: f32,
    /// Preset index applied at startup (1–4).
    pub initial_preset: i32,
}

/// Time-of-day transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DayNightConfig {
    /// Seconds a time-of-day transition takes.
    pub change_seconds: f32,
}

/// Flight camera tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Base movement speed in meters per second.
    pub move_speed: f32,
    /// Speed multiplier while sprinting.
    pub sprint_multiplier: f32,
    /// Degrees of look rotation per point of mouse movement.
    pub mouse_sensitivity: f32,
    /// Roll speed in degrees per second.
    pub roll_speed: f32,
}

/// Rising-light effect tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    /// Seconds between light spawns.
    pub spawn_interval: f32,
    /// Orbit speed in degrees per second.
    pub spiral_speed: f32,
    /// Orbit radius in meters.
    pub spiral_radius: f32,
    /// Climb speed in meters per second.
    pub upward_speed: f32,
    /// Seconds until a spawned light expires.
    pub lifetime: f32,
    /// Seed for start-angle randomness (reproducible runs).
    pub seed: u64,
}

/// Performance telemetry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Seconds between FPS overlay refreshes.
    pub refresh_seconds: f32,
}

/// Overlay startup visibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    /// Show the performance overlay at startup.
    pub telemetry_visible: bool,
    /// Show the controls-help overlay at startup.
    pub controls_visible: bool,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            change_seconds: 10.0,
            initial_preset: 1,
        }
    }
}

impl Default for DayNightConfig {
    fn default() -> Self {
        Self { change_seconds: 5.0 }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            sprint_multiplier: 3.0,
            mouse_sensitivity: 2.0,
            roll_speed: 30.0,
        }
    }
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            spawn_interval: 2.0,
            spiral_speed: 90.0,
            spiral_radius: 3.0,
            upward_speed: 1.5,
            lifetime: 12.0,
            seed: 0,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: 0.5,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("change_seconds: 10.0"));
        assert!(ron_str.contains("initial_preset: 1"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `effects` section entirely
        let ron_str = "(weather: (), daynight: (), camera: (), overlay: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.effects, EffectsConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.weather.change_seconds = 4.0;
        config.camera.move_speed = 25.0;
        config.debug.log_level = "debug".to_string();

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.daynight.change_seconds = 2.5;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().daynight.change_seconds, 2.5);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }
}
