use serde::{Deserialize, Serialize};

/// Background gradient colors.
///
/// The gradient runs from `top_color` at the top of the window to
/// `horizon_color` at half height, then stays constant below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackgroundOptions {
    /// Sky color at the top edge, normalized sRGB.
    pub top_color: [f32; 3],
    /// Sky color at (and below) the horizon line, normalized sRGB.
    pub horizon_color: [f32; 3],
}

impl Default for BackgroundOptions {
    fn default() -> Self {
        Self {
            // #1e4877 -> #4584b4
            top_color: [0.118, 0.282, 0.467],
            horizon_color: [0.271, 0.518, 0.706],
        }
    }
}
