//! Rising-light effect: a spawner emits lights at a fixed interval, and each
//! light spirals around the spawner while climbing until its lifetime runs
//! out.
//!
//! Light positions are pure functions of accumulated state, so the effect
//! carries no scene-graph handles and runs headless. The spawner owns its
//! lights and removes expired ones during its tick.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Tuning for the spawner and the lights it emits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectTuning {
    /// Seconds between spawns.
    pub spawn_interval: f32,
    /// Orbit speed around the spawner in degrees per second.
    pub spiral_speed: f32,
    /// Orbit radius in meters.
    pub spiral_radius: f32,
    /// Climb speed in meters per second.
    pub upward_speed: f32,
    /// Seconds until an emitted light expires.
    pub lifetime: f32,
}

impl Default for EffectTuning {
    fn default() -> Self {
        Self {
            spawn_interval: 2.0,
            spiral_speed: 90.0,
            spiral_radius: 3.0,
            upward_speed: 1.5,
            lifetime: 12.0,
        }
    }
}

/// One emitted light, spiraling upward around its spawner.
#[derive(Clone, Copy, Debug)]
pub struct RisingLight {
    angle_deg: f32,
    climbed: f32,
    remaining: f32,
}

impl RisingLight {
    /// Create a light at `start_angle_deg` around the spawner.
    pub fn new(start_angle_deg: f32, lifetime: f32) -> Self {
        Self {
            angle_deg: start_angle_deg,
            climbed: 0.0,
            remaining: lifetime,
        }
    }

    /// Advance the spiral and the lifetime clock.
    pub fn tick(&mut self, tuning: &EffectTuning, dt: f32) {
        self.remaining -= dt;
        self.angle_deg += tuning.spiral_speed * dt;
        self.climbed += tuning.upward_speed * dt;
    }

    /// Returns `true` once the lifetime has run out.
    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// World position: orbit offset in the XZ plane plus total climb.
    pub fn position(&self, origin: Vec3, tuning: &EffectTuning) -> Vec3 {
        let radians = self.angle_deg.to_radians();
        origin
            + Vec3::new(
                radians.cos() * tuning.spiral_radius,
                self.climbed,
                radians.sin() * tuning.spiral_radius,
            )
    }
}

/// Emits [`RisingLight`]s at a fixed interval and owns them until expiry.
#[derive(Debug)]
pub struct LightSpawner {
    /// World position lights orbit around.
    pub origin: Vec3,
    tuning: EffectTuning,
    timer: f32,
    rng: ChaCha8Rng,
    lights: Vec<RisingLight>,
}

impl LightSpawner {
    /// Create a spawner at `origin`. The seed makes start angles — and
    /// therefore entire runs — reproducible.
    pub fn new(origin: Vec3, tuning: EffectTuning, seed: u64) -> Self {
        Self {
            origin,
            tuning,
            timer: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            lights: Vec::new(),
        }
    }

    /// Advance the spawn timer and every live light; drop expired lights.
    ///
    /// At most one light spawns per tick: the timer resets to zero on spawn
    /// rather than carrying a remainder, so a long frame does not burst.
    pub fn tick(&mut self, dt: f32) {
        self.timer += dt;
        if self.timer >= self.tuning.spawn_interval {
            let angle = self.rng.random_range(0.0..360.0);
            self.lights.push(RisingLight::new(angle, self.tuning.lifetime));
            self.timer = 0.0;
            debug!(live = self.lights.len(), "spawned rising light");
        }

        for light in &mut self.lights {
            light.tick(&self.tuning, dt);
        }
        self.lights.retain(|light| !light.expired());
    }

    /// Live lights, in spawn order.
    pub fn lights(&self) -> &[RisingLight] {
        &self.lights
    }

    /// World positions of all live lights.
    pub fn positions(&self) -> Vec<Vec3> {
        self.lights
            .iter()
            .map(|light| light.position(self.origin, &self.tuning))
            .collect()
    }
}
