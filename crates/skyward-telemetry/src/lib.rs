//! Frame-rate telemetry for the performance overlay.
//!
//! Instantaneous frame rates are accumulated and averaged over a fixed
//! refresh interval, so the displayed number is stable instead of flickering
//! with every frame.

/// Interval-averaged frames-per-second counter.
#[derive(Clone, Debug)]
pub struct FrameStats {
    refresh_interval: f32,
    time_left: f32,
    accumulated_rate: f32,
    frames: u32,
    fps: f32,
}

impl FrameStats {
    /// Create a counter that publishes a new average every
    /// `refresh_interval` seconds.
    pub fn new(refresh_interval: f32) -> Self {
        Self {
            refresh_interval,
            time_left: refresh_interval,
            accumulated_rate: 0.0,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Record one frame of `dt` seconds.
    ///
    /// Returns `Some(fps)` on the frame that closes a refresh interval, with
    /// the published average; `None` otherwise. Zero-length frames are
    /// counted but contribute no rate.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        self.time_left -= dt;
        if dt > 0.0 {
            self.accumulated_rate += 1.0 / dt;
        }
        self.frames += 1;

        if self.time_left <= 0.0 {
            self.fps = if self.frames > 0 {
                self.accumulated_rate / self.frames as f32
            } else {
                0.0
            };
            self.time_left = self.refresh_interval;
            self.accumulated_rate = 0.0;
            self.frames = 0;
            return Some(self.fps);
        }
        None
    }

    /// The most recently published average, 0.0 before the first interval.
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Overlay line for the published average, e.g. `FPS: 60`.
    pub fn overlay_line(&self) -> String {
        format!("FPS: {:.0}", self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publishes_only_on_interval_boundary() {
        let mut stats = FrameStats::new(0.5);
        // 24 frames at 50 Hz is 0.48s: still inside the interval.
        for _ in 0..24 {
            assert_eq!(stats.tick(0.02), None);
        }
        // The next frame crosses 0.5s.
        assert!(stats.tick(0.05).is_some());
    }

    #[test]
    fn test_steady_frame_rate_averages_exactly() {
        let mut stats = FrameStats::new(0.5);
        let mut published = None;
        for _ in 0..40 {
            if let Some(fps) = stats.tick(1.0 / 60.0) {
                published = Some(fps);
            }
        }
        let fps = published.expect("interval should have closed");
        assert!((fps - 60.0).abs() < 0.01, "expected ~60, got {fps}");
    }

    #[test]
    fn test_mixed_frame_times_average() {
        let mut stats = FrameStats::new(0.25);
        // Three frames at 10 Hz close the 0.25s interval.
        stats.tick(0.1);
        stats.tick(0.1);
        let fps = stats.tick(0.1).expect("0.25s interval closed");
        assert!((fps - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_counters_reset_between_intervals() {
        let mut stats = FrameStats::new(0.2);
        stats.tick(0.2); // publishes 5 Hz
        assert!((stats.fps() - 5.0).abs() < 1e-3);

        // Next interval is measured fresh, unpolluted by the slow frame.
        let fps = stats.tick(0.2).expect("second interval");
        assert!((fps - 5.0).abs() < 1e-3);
        let fps = stats.tick(0.25).expect("third interval");
        assert!((fps - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_fps_is_zero_before_first_publish() {
        let stats = FrameStats::new(0.5);
        assert_eq!(stats.fps(), 0.0);
        assert_eq!(stats.overlay_line(), "FPS: 0");
    }

    #[test]
    fn test_zero_dt_does_not_divide() {
        let mut stats = FrameStats::new(0.1);
        stats.tick(0.0);
        let fps = stats.tick(0.1).expect("interval closed");
        assert!(fps.is_finite());
    }

    #[test]
    fn test_overlay_line_rounds() {
        let mut stats = FrameStats::new(0.01);
        // One ~59.7 Hz frame closes the short interval.
        stats.tick(1.0 / 59.7);
        assert_eq!(stats.overlay_line(), "FPS: 60");
    }
}
