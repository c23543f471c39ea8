//! Timed state transitions for scene parameters.
//!
//! A [`TransitionDriver`] advances at most one [`Transition`] at a time,
//! interpolating a set of named scalar, integer, and rotation tracks from a
//! captured start snapshot to fixed target values over a duration, and writing
//! each interpolated value to a [`ParamSink`] every tick. Starting a new
//! transition pre-empts the one in flight; the sink keeps whatever was last
//! written.

pub mod driver;
pub mod interp;
pub mod params;
pub mod sink;

pub use driver::{IntTrack, RotationTrack, ScalarTrack, Transition, TransitionDriver};
pub use interp::{lerp, lerp_round};
pub use sink::{MemorySink, ParamSink};
