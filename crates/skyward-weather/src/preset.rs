//! The weather preset table.
//!
//! Presets are process-constant: created once, never mutated. Target values
//! the transition engine cannot read from a preset directly (fog floor
//! height, rain spawn rate) are derived from its flags.

use tracing::warn;

/// Fixed target values defining one weather condition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeatherPreset {
    /// Fog volume density.
    pub fog_density: f32,
    /// Whether the skybox stays visible, or fog is raised to bury it.
    pub skybox_visible: bool,
    /// Sun color temperature in kelvin.
    pub sun_temperature: f32,
    /// Whether rain particles spawn.
    pub raining: bool,
    /// Minimum scene brightness at which the lens flare shows.
    pub flare_min_brightness: f32,
    /// Lens flare spillover intensity.
    pub flare_spillover: f32,
}

impl WeatherPreset {
    /// Fog floor height target: low enough to keep the sky when the skybox
    /// is visible, raised far above the scene when it is not.
    pub fn fog_floor_height(&self) -> f32 {
        if self.skybox_visible { 1450.0 } else { 8000.0 }
    }

    /// Rain spawn rate target, particles per second.
    pub fn rain_spawn_rate(&self) -> i32 {
        if self.raining { 300_000 } else { 0 }
    }
}

/// The closed set of selectable weather conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherKind {
    /// Light haze, visible sky, warm sun.
    ClearSkies,
    /// Dense fog burying the skybox.
    Fog,
    /// Rain under a visible sky.
    Rain,
    /// Fog and rain combined.
    FogRain,
    /// Neutral "off" sentinel used when an unknown index is selected.
    /// Its values are intentionally inert, not a realistic condition.
    Neutral,
}

impl WeatherKind {
    /// Map a UI index to a preset. Indices 1–4 are the defined conditions;
    /// anything else resolves to [`WeatherKind::Neutral`].
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => WeatherKind::ClearSkies,
            2 => WeatherKind::Fog,
            3 => WeatherKind::Rain,
            4 => WeatherKind::FogRain,
            other => {
                warn!(index = other, "unknown weather index, using neutral preset");
                WeatherKind::Neutral
            }
        }
    }

    /// The fixed target values for this condition.
    pub fn preset(self) -> WeatherPreset {
        match self {
            WeatherKind::ClearSkies => WeatherPreset {
                fog_density: 1.0,
                skybox_visible: true,
                sun_temperature: 5000.0,
                raining: false,
                flare_min_brightness: 3.0,
                flare_spillover: 14.0,
            },
            WeatherKind::Fog => WeatherPreset {
                fog_density: 1.5,
                skybox_visible: false,
                sun_temperature: 8000.0,
                raining: false,
                flare_min_brightness: 5.0,
                flare_spillover: 17.0,
            },
            WeatherKind::Rain => WeatherPreset {
                fog_density: 2.0,
                skybox_visible: true,
                sun_temperature: 8000.0,
                raining: true,
                flare_min_brightness: 25.0,
                flare_spillover: 16.0,
            },
            WeatherKind::FogRain => WeatherPreset {
                fog_density: 2.0,
                skybox_visible: false,
                sun_temperature: 9000.0,
                raining: true,
                flare_min_brightness: 3.0,
                flare_spillover: 14.0,
            },
            WeatherKind::Neutral => WeatherPreset {
                fog_density: 0.0,
                skybox_visible: false,
                sun_temperature: 0.0,
                raining: false,
                flare_min_brightness: 100.0,
                flare_spillover: 0.0,
            },
        }
    }
}
