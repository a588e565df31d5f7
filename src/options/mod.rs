//! Centralized scene options with TOML preset support.
//!
//! All tweakable settings (cloud field shape, fog material, camera path,
//! background gradient, debug toggles) are consolidated here. Options
//! serialize to/from TOML for presets stored in `presets/`.

mod background;
mod camera;
mod clouds;
mod debug;
mod fog;

use std::path::Path;

pub use background::BackgroundOptions;
pub use camera::CameraOptions;
pub use clouds::CloudOptions;
pub use debug::DebugOptions;
pub use fog::FogOptions;
use serde::{Deserialize, Serialize};

use crate::error::CirrusError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[fog]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Cloud field generation parameters.
    pub clouds: CloudOptions,
    /// Fog material parameters shared by both cloud layers.
    pub fog: FogOptions,
    /// Camera projection and flight-path parameters.
    pub camera: CameraOptions,
    /// Background gradient colors.
    pub background: BackgroundOptions,
    /// Debug configuration (title mesh, FPS logging).
    pub debug: DebugOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CirrusError> {
        let content = std::fs::read_to_string(path).map_err(CirrusError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CirrusError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CirrusError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CirrusError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CirrusError::Io)?;
        }
        std::fs::write(path, content).map_err(CirrusError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[fog]
falloff_exponent = 12.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.fog.falloff_exponent, 12.0);
        // Everything else should be default
        assert_eq!(opts.fog.near, -100.0);
        assert_eq!(opts.clouds.count, 8000);
        assert!(opts.clouds.far_layer);
    }

    #[test]
    fn debug_section_defaults_off() {
        let opts = Options::default();
        assert!(!opts.debug.show_title);
        assert!(!opts.debug.log_fps);
        assert_eq!(opts.debug.title_text, "CIRRUS");
    }

    #[test]
    fn loop_depth_matches_sprite_count_by_default() {
        // The flight path wraps exactly once per field depth, so the
        // defaults must agree for a seamless loop.
        let opts = Options::default();
        assert_eq!(opts.clouds.loop_depth, opts.clouds.count as f32);
    }
}
