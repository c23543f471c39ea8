//! Pure interpolation helpers.
//!
//! `t` is deliberately not clamped here: callers own the `[0, 1]` contract,
//! and out-of-range input extrapolates linearly. Rotation interpolation lives
//! on [`glam::Quat::slerp`] directly, which takes the shortest arc.

/// Linear interpolation between two scalars.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Linear interpolation between two integer endpoints, rounded to nearest.
///
/// Used for parameters that are integral on the sink side (e.g. a particle
/// spawn rate) but still sweep smoothly during a transition.
pub fn lerp_round(start: i32, end: i32, t: f32) -> i32 {
    lerp(start as f32, end as f32, t).round() as i32
}
