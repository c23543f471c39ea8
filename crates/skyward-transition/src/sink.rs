//! Sink adapter: the narrow surface through which interpolated values reach
//! the host scene.
//!
//! The transition engine never touches engine resources directly. Everything
//! goes through [`ParamSink`], so the engine stays host-agnostic and tests run
//! against [`MemorySink`].

use std::collections::HashMap;

use glam::Quat;

/// Get/set access to named scene parameters and the primary rotation.
///
/// Reading a key the sink does not hold is a wiring bug, not a runtime
/// condition: implementations panic rather than invent a default. The embedder
/// seeds every tracked key before the first transition begins.
pub trait ParamSink {
    /// Current value of a scalar parameter.
    fn scalar(&self, key: &str) -> f32;

    /// Write a scalar parameter.
    fn set_scalar(&mut self, key: &str, value: f32);

    /// Current value of an integer parameter.
    fn int(&self, key: &str) -> i32;

    /// Write an integer parameter.
    fn set_int(&mut self, key: &str, value: i32);

    /// Current primary rotation (e.g. the sun transform).
    fn rotation(&self) -> Quat;

    /// Write the primary rotation.
    fn set_rotation(&mut self, rotation: Quat);
}

/// In-memory sink: the host-engine stand-in for the demo binary and the test
/// double for everything else.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    scalars: HashMap<String, f32>,
    ints: HashMap<String, i32>,
    rotation: Quat,
}

impl MemorySink {
    /// Create an empty sink with identity rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the sink holds a scalar for `key`.
    pub fn has_scalar(&self, key: &str) -> bool {
        self.scalars.contains_key(key)
    }
}

impl ParamSink for MemorySink {
    fn scalar(&self, key: &str) -> f32 {
        match self.scalars.get(key) {
            Some(v) => *v,
            None => panic!("sink has no scalar parameter {key:?}"),
        }
    }

    fn set_scalar(&mut self, key: &str, value: f32) {
        self.scalars.insert(key.to_string(), value);
    }

    fn int(&self, key: &str) -> i32 {
        match self.ints.get(key) {
            Some(v) => *v,
            None => panic!("sink has no integer parameter {key:?}"),
        }
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.ints.insert(key.to_string(), value);
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }
}
