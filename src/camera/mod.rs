//! Perspective camera, GPU uniform, and the animated flight rig.

/// Camera state and GPU uniform layout.
pub mod core;
/// Cyclic flight path plus pointer easing.
pub mod rig;

pub use self::core::{Camera, CameraUniform};
pub use self::rig::{CameraRig, FlightPath, PointerEase};
