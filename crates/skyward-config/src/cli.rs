//! Command-line argument parsing for the Skyward demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Skyward command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "skyward", about = "Skyward scene runtime")]
pub struct CliArgs {
    /// Weather preset to select after startup (1 = clear, 2 = fog,
    /// 3 = rain, 4 = fog + rain).
    #[arg(long)]
    pub weather: Option<i32>,

    /// Sun pitch angle to select after startup (270 = night).
    #[arg(long)]
    pub sun_angle: Option<f32>,

    /// Weather transition duration in seconds.
    #[arg(long)]
    pub weather_seconds: Option<f32>,

    /// Time-of-day transition duration in seconds.
    #[arg(long)]
    pub daynight_seconds: Option<f32>,

    /// Seed for the rising-light effect.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds of scene time to simulate before exiting.
    #[arg(long, default_value_t = 30.0)]
    pub run_seconds: f32,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ws) = args.weather_seconds {
            self.weather.change_seconds = ws;
        }
        if let Some(ds) = args.daynight_seconds {
            self.daynight.change_seconds = ds;
        }
        if let Some(seed) = args.seed {
            self.effects.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
