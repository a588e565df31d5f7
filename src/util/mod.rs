//! Small shared utilities.

/// First-order easing and cyclic wrapping helpers.
pub mod easing;
/// Frame timing with smoothed FPS.
pub mod frame_timing;
