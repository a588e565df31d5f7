use std::path::{Path, PathBuf};

use cirrus::{Options, Viewer};

/// Where downloaded textures are cached between runs.
const TEXTURES_DIR: &str = "assets/textures";
/// The cloud sprite from the original WebGL clouds demo.
const SPRITE_URL: &str =
    "https://mrdoob.com/lab/javascript/webgl/clouds/cloud10.png";
/// Presets shipped next to the binary.
const PRESETS_DIR: &str = "presets";

/// Find the cloud sprite on disk, downloading into the cache on first run.
fn resolve_sprite_path() -> Result<PathBuf, String> {
    let textures_dir = Path::new(TEXTURES_DIR);
    let local_path = textures_dir.join("cloud10.png");
    if local_path.exists() {
        return Ok(local_path);
    }

    if !textures_dir.exists() {
        std::fs::create_dir_all(textures_dir).map_err(|e| {
            format!("Failed to create textures directory: {}", e)
        })?;
    }

    log::info!("Downloading cloud sprite...");
    let bytes = ureq::get(SPRITE_URL)
        .call()
        .map_err(|e| format!("Failed to download cloud sprite: {}", e))?
        .into_body()
        .read_to_vec()
        .map_err(|e| format!("Failed to read response: {}", e))?;

    std::fs::write(&local_path, &bytes)
        .map_err(|e| format!("Failed to save cloud sprite: {}", e))?;

    log::info!("Downloaded to {}", local_path.display());
    Ok(local_path)
}

/// Resolve a preset argument: a TOML path as-is, otherwise a name under
/// the presets directory.
fn resolve_options(preset: &str) -> Result<Options, String> {
    let direct = Path::new(preset);
    let path = if direct.exists() {
        direct.to_path_buf()
    } else {
        let named = Path::new(PRESETS_DIR).join(format!("{}.toml", preset));
        if !named.exists() {
            let available = Options::list_presets(Path::new(PRESETS_DIR));
            return Err(if available.is_empty() {
                format!("Preset not found: {}", preset)
            } else {
                format!(
                    "Preset not found: {} (available: {})",
                    preset,
                    available.join(", ")
                )
            });
        }
        named
    };
    Options::load(&path).map_err(|e| format!("Failed to load preset: {}", e))
}

fn main() {
    env_logger::init();

    let mut preset: Option<String> = None;
    let mut debug = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--debug" => debug = true,
            "--help" | "-h" => {
                log::error!("Usage: cirrus [preset|options.toml] [--debug]");
                return;
            }
            other => preset = Some(other.to_string()),
        }
    }

    let mut options = match preset {
        Some(name) => match resolve_options(&name) {
            Ok(o) => o,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if debug {
        options.debug.show_title = true;
        options.debug.log_fps = true;
    }

    let sprite_path = match resolve_sprite_path() {
        Ok(path) => Some(path),
        Err(e) => {
            // The scene still runs, just with a blank placeholder sprite.
            log::warn!("{}", e);
            None
        }
    };
    let matcap_path = Path::new(TEXTURES_DIR).join("matcap.jpg");

    let mut builder = Viewer::builder()
        .with_title("Cirrus")
        .with_options(options);
    if let Some(path) = sprite_path {
        builder = builder.with_sprite_path(path);
    }
    if matcap_path.exists() {
        builder = builder.with_matcap_path(matcap_path);
    }

    if let Err(e) = builder.build().run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
