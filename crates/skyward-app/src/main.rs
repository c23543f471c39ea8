//! Skyward — headless flight-scene runtime demo.
//!
//! Builds the full scene against an in-memory sink, runs the fixed-timestep
//! loop for a configurable stretch of scene time, and applies weather and
//! time-of-day changes from the command line so every transition is visible
//! in the log.
//!
//! Run with: `cargo run -p skyward-app -- --weather 3 --sun-angle 270`

mod frame_loop;
mod overlay;
mod scene;

use clap::Parser;
use tracing::info;

use skyward_camera::CameraInput;
use skyward_config::{CliArgs, Config};
use skyward_transition::{ParamSink, params};

use frame_loop::FrameLoop;
use scene::Scene;

/// Scene time at which a CLI-requested weather change is applied.
const WEATHER_TRIGGER_AT: f64 = 1.0;

/// Scene time at which a CLI-requested sun-angle change is applied.
const SUN_TRIGGER_AT: f64 = 2.0;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(skyward_config::default_config_dir);
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config unavailable ({err}), using defaults");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    skyward_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    info!("Skyward scene runtime");
    info!(
        "Weather transition: {:.1}s | Time-of-day transition: {:.1}s",
        config.weather.change_seconds, config.daynight.change_seconds
    );

    let mut scene = Scene::new(&config);
    let mut frame_loop = FrameLoop::new();

    let mut weather_request = args.weather;
    let mut sun_request = args.sun_angle;
    let input = CameraInput::default();

    // Scripted run: feed fixed frame times so the demo finishes immediately
    // regardless of wall clock.
    let frames = (args.run_seconds as f64 / frame_loop::FIXED_DT).ceil() as u64;
    for _ in 0..frames {
        frame_loop.advance(frame_loop::FIXED_DT, |dt, sim_time| {
            if sim_time >= WEATHER_TRIGGER_AT
                && let Some(index) = weather_request.take()
            {
                scene.select_weather(index);
            }
            if sim_time >= SUN_TRIGGER_AT
                && let Some(angle) = sun_request.take()
            {
                scene.select_sun_angle(angle);
            }
            scene.tick(dt as f32, &input);
        });
    }

    info!(
        "Ran {:.1}s of scene time in {} updates",
        frame_loop.total_sim_time(),
        frame_loop.update_count()
    );
    info!(
        "Final state: weather={:?} night={} fog_density={:.3} rain={}/s sun_temp={:.0}K",
        scene.weather.selected(),
        scene.daynight.is_night(),
        scene.sink.scalar(params::FOG_DENSITY),
        scene.sink.int(params::RAIN_SPAWN_RATE),
        scene.sink.scalar(params::SUN_COLOR_TEMPERATURE),
    );
    info!(
        "Rising lights live: {} | Camera at {:?}",
        scene.spawner.lights().len(),
        scene.camera.position,
    );
}
