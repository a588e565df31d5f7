use serde::{Deserialize, Serialize};

/// Camera projection and flight-path parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Forward travel speed along the depth axis, world units per second.
    pub travel_speed: f32,
    /// Fraction of the remaining pointer distance closed per tick.
    pub ease_fraction: f32,
    /// Pixels-to-world-units scale for the pointer target.
    pub pointer_scale: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 30.0,
            znear: 1.0,
            zfar: 3000.0,
            travel_speed: 30.0,
            ease_fraction: 0.01,
            pointer_scale: 0.25,
        }
    }
}
