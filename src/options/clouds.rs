use serde::{Deserialize, Serialize};

/// Cloud field generation parameters.
///
/// The field is generated once at startup; changing these at runtime has
/// no effect on an existing engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudOptions {
    /// Number of sprite quads merged into the field.
    pub count: usize,
    /// Side length of each (unscaled) sprite quad in world units.
    pub quad_size: f32,
    /// Horizontal spread: x is sampled uniformly over
    /// `[-x_spread/2, x_spread/2)`.
    pub x_spread: f32,
    /// Vertical scale of the horizon-biased y distribution.
    pub y_scale: f32,
    /// Downward offset applied to every sprite's y position.
    pub y_offset: f32,
    /// Scale distribution multiplier (`u*u * scale_spread + scale_base`).
    pub scale_spread: f32,
    /// Minimum sprite scale.
    pub scale_base: f32,
    /// Depth of one loop of the field; the far layer is shifted back by
    /// this amount and the camera path wraps on it.
    pub loop_depth: f32,
    /// RNG seed for sprite placement (generation is deterministic given
    /// the seed).
    pub seed: u64,
    /// Draw the far layer (same geometry shifted back by `loop_depth`).
    pub far_layer: bool,
}

impl Default for CloudOptions {
    fn default() -> Self {
        Self {
            count: 8000,
            quad_size: 64.0,
            x_spread: 1000.0,
            y_scale: 200.0,
            y_offset: 15.0,
            scale_spread: 1.5,
            scale_base: 0.5,
            loop_depth: 8000.0,
            seed: 0x00C1_BB05,
            far_layer: true,
        }
    }
}
