use serde::{Deserialize, Serialize};

/// Debug configuration.
///
/// Replaces what used to be a separately maintained debug build: one
/// binary, toggled here or with the `--debug` flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugOptions {
    /// Show the floating matcap-shaded title mesh.
    pub show_title: bool,
    /// Title text (A-Z, 0-9 and space; other characters are skipped).
    pub title_text: String,
    /// Log the smoothed FPS once per second.
    pub log_fps: bool,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            show_title: false,
            title_text: "CIRRUS".to_owned(),
            log_fps: false,
        }
    }
}
