use serde::{Deserialize, Serialize};

/// Fog material parameters.
///
/// One material uniform buffer is shared by both cloud layer draw calls,
/// so edits here affect the near and far layer simultaneously.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FogOptions {
    /// Fog color as normalized sRGB.
    pub color: [f32; 3],
    /// View-space depth where fog blending begins.
    pub near: f32,
    /// View-space depth where fragments are fully fog-colored.
    pub far: f32,
    /// Exponent applied to the screen-space depth for the opacity
    /// falloff (higher = clouds fade out closer to the camera).
    pub falloff_exponent: f32,
    /// Global opacity multiplier applied after fog blending.
    pub opacity: f32,
}

impl Default for FogOptions {
    fn default() -> Self {
        Self {
            // #4584b4, the classic hazy sky blue
            color: [0.271, 0.518, 0.706],
            near: -100.0,
            far: 3000.0,
            falloff_exponent: 20.0,
            opacity: 1.0,
        }
    }
}
