//! Fixed parameter keys for the scene sink.
//!
//! These identify the host-side material, light, and effect properties a
//! transition writes to. The sink must hold a value for every key a
//! transition tracks before the transition begins.

/// Fog volume density.
pub const FOG_DENSITY: &str = "fog_density";

/// Height below which fog reaches full density. Low when the skybox should
/// stay visible, raised to bury the sky when it should not.
pub const FOG_FLOOR_HEIGHT: &str = "fog_floor_height";

/// Sun color temperature in kelvin.
pub const SUN_COLOR_TEMPERATURE: &str = "sun_color_temperature";

/// Rain particle spawn rate, particles per second. Integer on the sink side.
pub const RAIN_SPAWN_RATE: &str = "rain_spawn_rate";

/// Minimum scene brightness at which the lens flare starts to show.
pub const FLARE_MIN_BRIGHTNESS: &str = "flare_min_brightness";

/// Lens flare spillover intensity.
pub const FLARE_SPILLOVER: &str = "flare_spillover";

/// Split-tone balance of the color grade.
pub const TONE_BALANCE: &str = "tone_balance";

/// Color-grade gain (applied to the master channel).
pub const TONE_GAIN: &str = "tone_gain";

/// Color-grade lift (applied to the master channel).
pub const TONE_LIFT: &str = "tone_lift";
