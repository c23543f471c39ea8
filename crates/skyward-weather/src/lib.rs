//! Weather state table and controller.
//!
//! A closed set of weather presets, each a fixed bundle of target values for
//! fog, sun temperature, rain, and lens-flare parameters. Selecting a preset
//! captures the sink's current values as the start snapshot and drives a
//! timed transition toward the preset's targets.

pub mod preset;

pub use preset::{WeatherKind, WeatherPreset};

use skyward_transition::params;
use skyward_transition::{ParamSink, Transition, TransitionDriver};

/// Drives weather transitions against a scene sink.
///
/// One transition at a time: selecting a new preset mid-transition pre-empts
/// the old one, starting from whatever the sink currently holds.
#[derive(Debug)]
pub struct WeatherController {
    driver: TransitionDriver,
    selected: Option<WeatherKind>,
    change_duration: f32,
}

impl WeatherController {
    /// Create a controller whose transitions last `change_duration` seconds.
    pub fn new(change_duration: f32) -> Self {
        Self {
            driver: TransitionDriver::new(),
            selected: None,
            change_duration,
        }
    }

    /// Select a weather preset by UI index (1–4).
    ///
    /// Any other index resolves to the neutral fallback preset so the trigger
    /// surface never errors.
    pub fn select(&mut self, index: i32, sink: &impl ParamSink) {
        self.select_kind(WeatherKind::from_index(index), sink);
    }

    /// Select a weather preset directly.
    pub fn select_kind(&mut self, kind: WeatherKind, sink: &impl ParamSink) {
        let preset = kind.preset();
        let transition = Transition::new(self.change_duration)
            .with_scalar(
                params::FOG_FLOOR_HEIGHT,
                sink.scalar(params::FOG_FLOOR_HEIGHT),
                preset.fog_floor_height(),
            )
            .with_scalar(
                params::FOG_DENSITY,
                sink.scalar(params::FOG_DENSITY),
                preset.fog_density,
            )
            .with_scalar(
                params::SUN_COLOR_TEMPERATURE,
                sink.scalar(params::SUN_COLOR_TEMPERATURE),
                preset.sun_temperature,
            )
            .with_scalar(
                params::FLARE_MIN_BRIGHTNESS,
                sink.scalar(params::FLARE_MIN_BRIGHTNESS),
                preset.flare_min_brightness,
            )
            .with_scalar(
                params::FLARE_SPILLOVER,
                sink.scalar(params::FLARE_SPILLOVER),
                preset.flare_spillover,
            )
            .with_int(
                params::RAIN_SPAWN_RATE,
                sink.int(params::RAIN_SPAWN_RATE),
                preset.rain_spawn_rate(),
            );

        tracing::info!(?kind, duration_s = self.change_duration, "weather change");
        self.selected = Some(kind);
        self.driver.begin(transition);
    }

    /// Advance the active transition. Returns `true` on the completing tick.
    pub fn tick(&mut self, dt: f32, sink: &mut impl ParamSink) -> bool {
        self.driver.tick(dt, sink)
    }

    /// The most recently selected preset, if any.
    pub fn selected(&self) -> Option<WeatherKind> {
        self.selected
    }

    /// Returns `true` while a weather transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        !self.driver.is_idle()
    }
}
