//! Transition driver: elapsed-time accounting and per-tick application.
//!
//! The driver owns at most one [`Transition`]. Each tick it converts elapsed
//! time into a progress value `t` in `[0, 1]`, writes every track at `t`, and
//! on the completing tick writes the exact target values so floating-point
//! drift never leaves the sink at 0.9999 of a target.

use glam::Quat;
use tracing::debug;

use crate::interp::{lerp, lerp_round};
use crate::sink::ParamSink;

/// One interpolated scalar parameter.
#[derive(Clone, Copy, Debug)]
pub struct ScalarTrack {
    /// Sink parameter key.
    pub key: &'static str,
    /// Value captured from the sink when the transition began.
    pub start: f32,
    /// Value the sink holds when the transition completes.
    pub target: f32,
}

/// One interpolated integer parameter. Swept as a float, written rounded.
#[derive(Clone, Copy, Debug)]
pub struct IntTrack {
    /// Sink parameter key.
    pub key: &'static str,
    /// Value captured from the sink when the transition began.
    pub start: i32,
    /// Value the sink holds when the transition completes.
    pub target: i32,
}

/// The primary rotation, interpolated by shortest-arc slerp.
#[derive(Clone, Copy, Debug)]
pub struct RotationTrack {
    /// Rotation captured from the sink when the transition began.
    pub start: Quat,
    /// Rotation the sink holds when the transition completes.
    pub target: Quat,
}

/// An in-progress interpolation from a start snapshot to target values.
///
/// Built with the `with_*` methods, then handed to
/// [`TransitionDriver::begin`]. Start values are whatever the caller read
/// from the sink at build time; the driver never re-reads them.
#[derive(Clone, Debug)]
pub struct Transition {
    scalars: Vec<ScalarTrack>,
    ints: Vec<IntTrack>,
    rotation: Option<RotationTrack>,
    duration: f32,
    elapsed: f32,
}

impl Transition {
    /// Create an empty transition lasting `duration` seconds.
    ///
    /// A duration of zero or less means "apply the targets on the first
    /// tick" rather than an error.
    pub fn new(duration: f32) -> Self {
        Self {
            scalars: Vec::new(),
            ints: Vec::new(),
            rotation: None,
            duration,
            elapsed: 0.0,
        }
    }

    /// Track a scalar parameter from `start` to `target`.
    pub fn with_scalar(mut self, key: &'static str, start: f32, target: f32) -> Self {
        self.scalars.push(ScalarTrack { key, start, target });
        self
    }

    /// Track an integer parameter from `start` to `target`.
    pub fn with_int(mut self, key: &'static str, start: i32, target: i32) -> Self {
        self.ints.push(IntTrack { key, start, target });
        self
    }

    /// Track the primary rotation from `start` to `target`.
    pub fn with_rotation(mut self, start: Quat, target: Quat) -> Self {
        self.rotation = Some(RotationTrack { start, target });
        self
    }

    /// Number of tracks of any kind.
    pub fn track_count(&self) -> usize {
        self.scalars.len() + self.ints.len() + usize::from(self.rotation.is_some())
    }

    /// Progress in `[0, 1]`. A non-positive duration completes immediately.
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    fn finished(&self) -> bool {
        self.duration <= 0.0 || self.elapsed >= self.duration
    }

    /// Write every track interpolated at `t`.
    fn apply(&self, t: f32, sink: &mut impl ParamSink) {
        for track in &self.scalars {
            sink.set_scalar(track.key, lerp(track.start, track.target, t));
        }
        for track in &self.ints {
            sink.set_int(track.key, lerp_round(track.start, track.target, t));
        }
        if let Some(rot) = &self.rotation {
            sink.set_rotation(rot.start.slerp(rot.target, t));
        }
    }

    /// Write the exact target values, bypassing interpolation.
    fn apply_targets(&self, sink: &mut impl ParamSink) {
        for track in &self.scalars {
            sink.set_scalar(track.key, track.target);
        }
        for track in &self.ints {
            sink.set_int(track.key, track.target);
        }
        if let Some(rot) = &self.rotation {
            sink.set_rotation(rot.target);
        }
    }
}

/// Drives one transition at a time against a sink.
///
/// State machine: idle → transitioning → idle. [`begin`](Self::begin) from
/// any state starts a fresh transition, pre-empting an in-flight one without
/// rollback — the sink keeps the last values written. [`tick`](Self::tick)
/// while idle is a no-op, so the driver is reusable indefinitely.
#[derive(Debug, Default)]
pub struct TransitionDriver {
    active: Option<Transition>,
}

impl TransitionDriver {
    /// Create an idle driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when no transition is in flight.
    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Start `transition`, cancelling any transition already in flight.
    ///
    /// No value is written until the next [`tick`](Self::tick); the sink
    /// stays wherever the previous transition left it.
    pub fn begin(&mut self, transition: Transition) {
        if self.active.is_some() {
            debug!("pre-empting in-flight transition");
        }
        debug!(
            tracks = transition.track_count(),
            duration_s = transition.duration,
            "transition started"
        );
        self.active = Some(transition);
    }

    /// Advance the active transition by `dt` seconds and write the sink.
    ///
    /// Returns `true` exactly once per transition: on the tick that applied
    /// the final target values. Idle ticks return `false`.
    pub fn tick(&mut self, dt: f32, sink: &mut impl ParamSink) -> bool {
        let Some(transition) = self.active.as_mut() else {
            return false;
        };

        transition.elapsed += dt;

        if transition.finished() {
            transition.apply_targets(sink);
            debug!("transition complete");
            self.active = None;
            return true;
        }

        let t = transition.progress();
        transition.apply(t, sink);
        false
    }
}
