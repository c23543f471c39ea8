//! Time-of-day controller: sun rotation with a day/night color grade.
//!
//! Selecting a sun pitch angle slerps the sun from its current rotation to
//! the target. The color-grade tone parameters (split balance, gain, lift)
//! ride along only when the selection crosses the day/night boundary; a
//! day-to-day change rotates the sun and leaves the grade untouched. The
//! committed day/night status flips when the crossing transition completes.

use glam::{EulerRot, Quat};
use tracing::info;

use skyward_transition::params;
use skyward_transition::{ParamSink, Transition, TransitionDriver};

/// Sun pitch angle that means "night". Every other angle is a day target.
pub const NIGHT_SUN_ANGLE: f32 = 270.0;

/// Color-grade targets for one side of the day/night boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneTargets {
    /// Split-tone balance.
    pub balance: f32,
    /// Master-channel gain.
    pub gain: f32,
    /// Master-channel lift.
    pub lift: f32,
}

/// Daytime color grade.
pub const DAY_TONE: ToneTargets = ToneTargets {
    balance: 100.0,
    gain: -0.1,
    lift: -0.05,
};

/// Nighttime color grade.
pub const NIGHT_TONE: ToneTargets = ToneTargets {
    balance: 30.0,
    gain: 0.0,
    lift: 0.1,
};

/// Drives sun rotation and day/night grading against a scene sink.
#[derive(Debug)]
pub struct DayNightController {
    driver: TransitionDriver,
    is_night: bool,
    /// Day/night status to commit when the in-flight transition completes.
    /// `None` when the transition does not cross the boundary.
    pending_night: Option<bool>,
    change_duration: f32,
}

impl DayNightController {
    /// Create a controller starting in daytime, with transitions lasting
    /// `change_duration` seconds.
    pub fn new(change_duration: f32) -> Self {
        Self {
            driver: TransitionDriver::new(),
            is_night: false,
            pending_night: None,
            change_duration,
        }
    }

    /// Committed day/night status. Unchanged while a crossing is in flight.
    pub fn is_night(&self) -> bool {
        self.is_night
    }

    /// Returns `true` while a time-of-day transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        !self.driver.is_idle()
    }

    /// Start a transition of the sun to `angle_deg` pitch.
    ///
    /// The target rotation keeps the sun's current yaw and roll. Tone
    /// parameters are tracked only when the target's day/night status differs
    /// from the committed status; their start values are captured from the
    /// sink, so a pre-empted crossing resumes from wherever the grade was
    /// left, not from the opposite extreme.
    pub fn select_sun_angle(&mut self, angle_deg: f32, sink: &impl ParamSink) {
        let target_is_night = angle_deg == NIGHT_SUN_ANGLE;
        let crosses_boundary = target_is_night != self.is_night;

        let current = sink.rotation();
        let (yaw, _pitch, roll) = current.to_euler(EulerRot::YXZ);
        let target = Quat::from_euler(EulerRot::YXZ, yaw, angle_deg.to_radians(), roll);

        let mut transition =
            Transition::new(self.change_duration).with_rotation(current, target);

        if crosses_boundary {
            let tone = if target_is_night { NIGHT_TONE } else { DAY_TONE };
            transition = transition
                .with_scalar(
                    params::TONE_BALANCE,
                    sink.scalar(params::TONE_BALANCE),
                    tone.balance,
                )
                .with_scalar(params::TONE_GAIN, sink.scalar(params::TONE_GAIN), tone.gain)
                .with_scalar(params::TONE_LIFT, sink.scalar(params::TONE_LIFT), tone.lift);
        }

        info!(
            angle_deg,
            night = target_is_night,
            crosses_boundary,
            "time-of-day change"
        );
        self.pending_night = crosses_boundary.then_some(target_is_night);
        self.driver.begin(transition);
    }

    /// Advance the active transition. Returns `true` on the completing tick;
    /// that is also when a boundary crossing commits the new status.
    pub fn tick(&mut self, dt: f32, sink: &mut impl ParamSink) -> bool {
        let completed = self.driver.tick(dt, sink);
        if completed && let Some(night) = self.pending_night.take() {
            self.is_night = night;
            info!(night, "day/night status committed");
        }
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyward_transition::MemorySink;

    fn day_sink() -> MemorySink {
        let mut sink = MemorySink::new();
        sink.set_scalar(params::TONE_BALANCE, DAY_TONE.balance);
        sink.set_scalar(params::TONE_GAIN, DAY_TONE.gain);
        sink.set_scalar(params::TONE_LIFT, DAY_TONE.lift);
        sink.set_rotation(Quat::from_euler(
            EulerRot::YXZ,
            0.0,
            50.0_f32.to_radians(),
            0.0,
        ));
        sink
    }

    #[test]
    fn test_night_angle_crosses_boundary() {
        let mut sink = day_sink();
        let mut time = DayNightController::new(4.0);

        time.select_sun_angle(NIGHT_SUN_ANGLE, &sink);
        assert!(!time.is_night(), "status commits only on completion");

        assert!(time.tick(4.0, &mut sink));
        assert!(time.is_night());
        assert_eq!(sink.scalar(params::TONE_BALANCE), NIGHT_TONE.balance);
        assert_eq!(sink.scalar(params::TONE_GAIN), NIGHT_TONE.gain);
        assert_eq!(sink.scalar(params::TONE_LIFT), NIGHT_TONE.lift);
    }

    #[test]
    fn test_day_to_day_leaves_tone_untouched() {
        let mut sink = day_sink();
        let mut time = DayNightController::new(4.0);

        time.select_sun_angle(90.0, &sink);
        let start_rotation = sink.rotation();
        time.tick(2.0, &mut sink);

        // Primary rotation interpolates...
        assert!(
            (sink.rotation() - start_rotation).length() > 1e-4,
            "sun should be moving"
        );
        // ...while the secondary tone set is untouched.
        assert_eq!(sink.scalar(params::TONE_BALANCE), DAY_TONE.balance);
        assert_eq!(sink.scalar(params::TONE_GAIN), DAY_TONE.gain);
        assert_eq!(sink.scalar(params::TONE_LIFT), DAY_TONE.lift);

        time.tick(2.0, &mut sink);
        assert!(!time.is_night(), "90 degrees is a day target");
    }

    #[test]
    fn test_tone_interpolates_midway_through_crossing() {
        let mut sink = day_sink();
        let mut time = DayNightController::new(10.0);

        time.select_sun_angle(NIGHT_SUN_ANGLE, &sink);
        time.tick(5.0, &mut sink);

        let expected_balance = (DAY_TONE.balance + NIGHT_TONE.balance) / 2.0;
        assert!(
            (sink.scalar(params::TONE_BALANCE) - expected_balance).abs() < 1e-4,
            "balance at t=0.5 should be {expected_balance}, got {}",
            sink.scalar(params::TONE_BALANCE)
        );
        assert!(!time.is_night(), "crossing not committed at t=0.5");
    }

    #[test]
    fn test_sun_reaches_target_pitch_exactly() {
        let mut sink = day_sink();
        let mut time = DayNightController::new(3.0);

        time.select_sun_angle(90.0, &sink);
        time.tick(3.0, &mut sink);

        let expected = Quat::from_euler(EulerRot::YXZ, 0.0, 90.0_f32.to_radians(), 0.0);
        assert!(
            (sink.rotation() - expected).length() < 1e-5
                || (sink.rotation() + expected).length() < 1e-5,
            "final rotation should be the exact target"
        );
    }

    #[test]
    fn test_target_preserves_yaw_and_roll() {
        let mut sink = day_sink();
        let yaw = 30.0_f32.to_radians();
        let roll = 10.0_f32.to_radians();
        sink.set_rotation(Quat::from_euler(EulerRot::YXZ, yaw, 0.3, roll));

        let mut time = DayNightController::new(1.0);
        time.select_sun_angle(45.0, &sink);
        time.tick(1.0, &mut sink);

        let (got_yaw, got_pitch, got_roll) = sink.rotation().to_euler(EulerRot::YXZ);
        assert!((got_yaw - yaw).abs() < 1e-4, "yaw drifted: {got_yaw}");
        assert!((got_pitch - 45.0_f32.to_radians()).abs() < 1e-4);
        assert!((got_roll - roll).abs() < 1e-4, "roll drifted: {got_roll}");
    }

    #[test]
    fn test_reselect_mid_crossing_resumes_from_sink_tone() {
        let mut sink = day_sink();
        let mut time = DayNightController::new(10.0);

        time.select_sun_angle(NIGHT_SUN_ANGLE, &sink);
        time.tick(5.0, &mut sink); // balance now 65.0, halfway to night

        // Abort the crossing: back to a day angle. Still a crossing relative
        // to the committed (day) status? No — day to day, but the grade was
        // mid-flight. The original behavior re-evaluates against the
        // committed status, so this is NOT a crossing and tone freezes where
        // it is.
        time.select_sun_angle(90.0, &sink);
        let frozen = sink.scalar(params::TONE_BALANCE);
        time.tick(10.0, &mut sink);
        assert_eq!(
            sink.scalar(params::TONE_BALANCE),
            frozen,
            "aborted crossing leaves the grade at its partial value"
        );
        assert!(!time.is_night());
    }

    #[test]
    fn test_night_to_day_restores_day_tone() {
        let mut sink = day_sink();
        let mut time = DayNightController::new(2.0);

        time.select_sun_angle(NIGHT_SUN_ANGLE, &sink);
        time.tick(2.0, &mut sink);
        assert!(time.is_night());

        time.select_sun_angle(90.0, &sink);
        time.tick(2.0, &mut sink);
        assert!(!time.is_night());
        assert_eq!(sink.scalar(params::TONE_BALANCE), DAY_TONE.balance);
        assert_eq!(sink.scalar(params::TONE_LIFT), DAY_TONE.lift);
    }

    #[test]
    fn test_night_to_night_does_not_retrigger_grade() {
        let mut sink = day_sink();
        let mut time = DayNightController::new(1.0);

        time.select_sun_angle(NIGHT_SUN_ANGLE, &sink);
        time.tick(1.0, &mut sink);

        // Perturb the grade externally, then select night again: no crossing,
        // so the grade must stay perturbed.
        sink.set_scalar(params::TONE_BALANCE, 55.5);
        time.select_sun_angle(NIGHT_SUN_ANGLE, &sink);
        time.tick(1.0, &mut sink);
        assert_eq!(sink.scalar(params::TONE_BALANCE), 55.5);
        assert!(time.is_night());
    }
}
