//! Free-fly flight camera: mouse look, Q/E roll, planar WASD movement with a
//! sprint modifier, and vertical movement on separate inputs.
//!
//! The controller is host-agnostic: the embedder collects input into a
//! [`CameraInput`] snapshot each frame and calls [`FlightCamera::tick`] with
//! the frame's delta time. No windowing or input-polling dependency.

use glam::{EulerRot, Quat, Vec3};

/// Per-frame input snapshot for the camera.
#[derive(Clone, Copy, Debug, Default)]
pub struct CameraInput {
    /// Mouse movement this frame, in points. +x right, +y down.
    pub mouse_delta: glam::Vec2,
    /// Strafe axis in `[-1, 1]`. +1 is right.
    pub strafe: f32,
    /// Forward axis in `[-1, 1]`. +1 is forward.
    pub forward: f32,
    /// Move straight up this frame.
    pub ascend: bool,
    /// Move straight down this frame.
    pub descend: bool,
    /// Sprint modifier held.
    pub sprint: bool,
    /// Roll counter-clockwise.
    pub roll_left: bool,
    /// Roll clockwise.
    pub roll_right: bool,
}

/// Camera tuning. All speeds are per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTuning {
    /// Base movement speed in meters per second.
    pub move_speed: f32,
    /// Speed multiplier while sprinting.
    pub sprint_multiplier: f32,
    /// Degrees of look rotation per point of mouse movement.
    pub mouse_sensitivity: f32,
    /// Roll speed in degrees per second.
    pub roll_speed: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            sprint_multiplier: 3.0,
            mouse_sensitivity: 2.0,
            roll_speed: 30.0,
        }
    }
}

/// Free-fly camera state. Angles are stored in degrees.
#[derive(Clone, Debug)]
pub struct FlightCamera {
    /// World-space position.
    pub position: Vec3,
    /// Tuning parameters, adjustable at runtime.
    pub tuning: CameraTuning,
    /// When `false` (menu open), mouse look is suppressed; movement and roll
    /// still tick.
    pub look_enabled: bool,
    yaw: f32,
    pitch: f32,
    roll: f32,
}

impl FlightCamera {
    /// Create a camera at `position`, looking down −Z.
    pub fn new(position: Vec3, tuning: CameraTuning) -> Self {
        Self {
            position,
            tuning,
            look_enabled: true,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }

    /// Current yaw in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees, always within ±90.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current roll in degrees, always within ±90.
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Camera orientation, built yaw → pitch → roll.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Advance the camera one frame.
    pub fn tick(&mut self, input: &CameraInput, dt: f32) {
        self.apply_look(input);
        self.apply_roll(input, dt);
        self.apply_movement(input, dt);
    }

    fn apply_look(&mut self, input: &CameraInput) {
        if !self.look_enabled {
            return;
        }
        self.yaw += self.tuning.mouse_sensitivity * input.mouse_delta.x;
        self.pitch -= self.tuning.mouse_sensitivity * input.mouse_delta.y;
        // Clamp pitch so the view never flips over the poles.
        self.pitch = self.pitch.clamp(-90.0, 90.0);
    }

    fn apply_roll(&mut self, input: &CameraInput, dt: f32) {
        if input.roll_left {
            self.roll = (self.roll - self.tuning.roll_speed * dt).clamp(-90.0, 90.0);
        } else if input.roll_right {
            self.roll = (self.roll + self.tuning.roll_speed * dt).clamp(-90.0, 90.0);
        }
    }

    fn apply_movement(&mut self, input: &CameraInput, dt: f32) {
        let speed = self.tuning.move_speed
            * if input.sprint {
                self.tuning.sprint_multiplier
            } else {
                1.0
            };

        // Rotate the input axes into the camera frame, then flatten: planar
        // movement holds altitude no matter where the camera looks.
        let mut movement = self.rotation() * Vec3::new(input.strafe, 0.0, -input.forward);
        movement.y = 0.0;
        self.position += movement * speed * dt;

        if input.ascend {
            self.position += Vec3::Y * speed * dt;
        } else if input.descend {
            self.position -= Vec3::Y * speed * dt;
        }
    }
}

impl Default for FlightCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, CameraTuning::default())
    }
}
