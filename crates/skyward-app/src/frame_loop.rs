//! Fixed-timestep frame loop.
//!
//! Converts variable frame times into simulation updates at a fixed 60 Hz
//! using an accumulator, clamping pathological frame times so a hitch causes
//! slowdown instead of a catch-up spiral.

use std::time::Instant;
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame time accepted before clamping.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep loop state.
///
/// Call [`tick`](Self::tick) once per frame for wall-clock operation, or
/// [`advance`](Self::advance) with explicit frame times to run scripted or
/// faster than real time.
pub struct FrameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    update_count: u64,
}

impl FrameLoop {
    /// Creates a loop starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            update_count: 0,
        }
    }

    /// Measure elapsed wall-clock time and run the due simulation steps.
    ///
    /// `update_fn(fixed_dt, total_sim_time)` runs zero or more times.
    pub fn tick(&mut self, update_fn: impl FnMut(f64, f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.advance(frame_time, update_fn);
    }

    /// Run the simulation steps due after an explicit `frame_time` seconds.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64, f64)) {
        let mut frame_time = frame_time;
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }
    }

    /// Total simulation time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }

    /// Total simulation update steps executed.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_consumes_accumulator() {
        let mut frame_loop = FrameLoop::new();
        let mut updates = 0u32;
        frame_loop.advance(FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 1);
    }

    #[test]
    fn test_multiple_steps_per_long_frame() {
        let mut frame_loop = FrameLoop::new();
        let mut updates = 0u32;
        frame_loop.advance(3.0 * FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 3);
        assert!((frame_loop.total_sim_time() - 3.0 * FIXED_DT).abs() < 1e-12);
    }

    #[test]
    fn test_partial_frame_runs_no_update() {
        let mut frame_loop = FrameLoop::new();
        let mut updates = 0u32;
        frame_loop.advance(0.5 * FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 0);
        // The remainder carries into the next frame.
        frame_loop.advance(0.5 * FIXED_DT, |_, _| updates += 1);
        assert_eq!(updates, 1);
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut frame_loop = FrameLoop::new();
        let mut updates = 0u32;
        frame_loop.advance(10.0, |_, _| updates += 1);
        let max_updates = (MAX_FRAME_TIME / FIXED_DT).ceil() as u32;
        assert!(
            updates <= max_updates,
            "Expected at most {max_updates} updates, got {updates}"
        );
        assert!(updates > 0);
    }

    #[test]
    fn test_sim_time_tracks_update_count() {
        let mut frame_loop = FrameLoop::new();
        for _ in 0..10 {
            frame_loop.advance(FIXED_DT * 2.0, |_, _| {});
        }
        let expected = frame_loop.update_count() as f64 * FIXED_DT;
        assert!((frame_loop.total_sim_time() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_update_receives_sim_time() {
        let mut frame_loop = FrameLoop::new();
        let mut seen = Vec::new();
        frame_loop.advance(3.0 * FIXED_DT, |_, sim_time| seen.push(sim_time));
        assert_eq!(seen.len(), 3);
        assert!((seen[0] - 0.0).abs() < 1e-12);
        assert!((seen[1] - FIXED_DT).abs() < 1e-12);
        assert!((seen[2] - 2.0 * FIXED_DT).abs() < 1e-12);
    }
}
