//! Scene wiring: one sink, the controllers that write it, and the per-frame
//! update order.
//!
//! The [`MemorySink`] stands in for the host engine's material, light, and
//! effect bindings. Everything that mutates the scene goes through it, so the
//! whole scene runs headless.

use glam::{EulerRot, Quat, Vec3};
use tracing::info;

use skyward_camera::{CameraInput, CameraTuning, FlightCamera};
use skyward_config::Config;
use skyward_daynight::{DAY_TONE, DayNightController};
use skyward_effects::{EffectTuning, LightSpawner};
use skyward_telemetry::FrameStats;
use skyward_transition::{MemorySink, ParamSink, params};
use skyward_weather::{WeatherController, WeatherKind};

use crate::overlay::OverlayState;

/// Sun pitch the scene starts at (mid-morning).
const START_SUN_ANGLE: f32 = 50.0;

/// The whole headless scene.
pub struct Scene {
    /// Host-engine stand-in holding every tracked parameter.
    pub sink: MemorySink,
    /// Weather transition controller.
    pub weather: WeatherController,
    /// Time-of-day transition controller.
    pub daynight: DayNightController,
    /// Rising-light effect.
    pub spawner: LightSpawner,
    /// Free-fly camera.
    pub camera: FlightCamera,
    /// FPS telemetry.
    pub stats: FrameStats,
    /// Menu/overlay visibility.
    pub overlay: OverlayState,
}

impl Scene {
    /// Build the scene from config: seed the sink with settled clear-skies
    /// daytime values, then start the configured initial weather transition.
    pub fn new(config: &Config) -> Self {
        let mut sink = MemorySink::new();
        seed_sink(&mut sink);

        let mut weather = WeatherController::new(config.weather.change_seconds);
        weather.select(config.weather.initial_preset, &sink);

        let camera = FlightCamera::new(
            Vec3::ZERO,
            CameraTuning {
                move_speed: config.camera.move_speed,
                sprint_multiplier: config.camera.sprint_multiplier,
                mouse_sensitivity: config.camera.mouse_sensitivity,
                roll_speed: config.camera.roll_speed,
            },
        );

        let spawner = LightSpawner::new(
            Vec3::ZERO,
            EffectTuning {
                spawn_interval: config.effects.spawn_interval,
                spiral_speed: config.effects.spiral_speed,
                spiral_radius: config.effects.spiral_radius,
                upward_speed: config.effects.upward_speed,
                lifetime: config.effects.lifetime,
            },
            config.effects.seed,
        );

        Self {
            sink,
            weather,
            daynight: DayNightController::new(config.daynight.change_seconds),
            spawner,
            camera,
            stats: FrameStats::new(config.telemetry.refresh_seconds),
            overlay: OverlayState::new(
                config.overlay.telemetry_visible,
                config.overlay.controls_visible,
            ),
        }
    }

    /// Select a weather preset by UI index.
    pub fn select_weather(&mut self, index: i32) {
        self.weather.select(index, &self.sink);
    }

    /// Select a sun pitch angle (270 = night).
    pub fn select_sun_angle(&mut self, angle_deg: f32) {
        self.daynight.select_sun_angle(angle_deg, &self.sink);
    }

    /// Advance the whole scene one frame.
    pub fn tick(&mut self, dt: f32, input: &CameraInput) {
        self.camera.look_enabled = !self.overlay.in_menu();
        self.camera.tick(input, dt);

        self.weather.tick(dt, &mut self.sink);
        if self.daynight.tick(dt, &mut self.sink) {
            info!(night = self.daynight.is_night(), "time-of-day settled");
        }
        self.spawner.tick(dt);

        if self.stats.tick(dt).is_some() && self.overlay.telemetry_visible() {
            info!("{}", self.stats.overlay_line());
        }
    }
}

/// Seed every tracked parameter with settled clear-skies daytime values.
///
/// Transitions capture their start snapshots from the sink, so every key must
/// exist before the first `select`.
fn seed_sink(sink: &mut MemorySink) {
    let clear = WeatherKind::ClearSkies.preset();
    sink.set_scalar(params::FOG_DENSITY, clear.fog_density);
    sink.set_scalar(params::FOG_FLOOR_HEIGHT, clear.fog_floor_height());
    sink.set_scalar(params::SUN_COLOR_TEMPERATURE, clear.sun_temperature);
    sink.set_scalar(params::FLARE_MIN_BRIGHTNESS, clear.flare_min_brightness);
    sink.set_scalar(params::FLARE_SPILLOVER, clear.flare_spillover);
    sink.set_int(params::RAIN_SPAWN_RATE, clear.rain_spawn_rate());

    sink.set_scalar(params::TONE_BALANCE, DAY_TONE.balance);
    sink.set_scalar(params::TONE_GAIN, DAY_TONE.gain);
    sink.set_scalar(params::TONE_LIFT, DAY_TONE.lift);
    sink.set_rotation(Quat::from_euler(
        EulerRot::YXZ,
        0.0,
        START_SUN_ANGLE.to_radians(),
        0.0,
    ));
}
