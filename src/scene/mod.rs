//! CPU-side scene construction: geometry is generated once at startup
//! and baked into flat vertex/index arrays ready for GPU upload.

pub mod cloud_field;
pub mod title;

use crate::options::Options;
use crate::scene::cloud_field::CloudGeometry;
use crate::scene::title::TitleGeometry;

/// Everything the renderers draw: the merged cloud field and, in the
/// debug configuration, the floating title mesh.
pub struct Scene {
    /// Merged cloud sprite geometry (immutable after build).
    pub clouds: CloudGeometry,
    /// Extruded title mesh, present only when `debug.show_title` is set.
    pub title: Option<TitleGeometry>,
}

impl Scene {
    /// Build the scene from options. Deterministic given the cloud seed.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let clouds = cloud_field::build(&options.clouds);
        let title = options.debug.show_title.then(|| {
            title::build_title(
                &options.debug.title_text,
                title::DEFAULT_CELL_SIZE,
                title::DEFAULT_DEPTH,
            )
        });
        Self { clouds, title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_absent_unless_debug() {
        let opts = Options::default();
        let scene = Scene::from_options(&opts);
        assert!(scene.title.is_none());

        let mut debug_opts = Options::default();
        debug_opts.debug.show_title = true;
        let scene = Scene::from_options(&debug_opts);
        assert!(scene.title.is_some());
    }
}
