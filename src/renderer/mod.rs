//! Render passes for the cloud scene.
//!
//! All passes draw into the swapchain in a single render pass with no
//! depth buffer: backdrop first, then the cloud field back-to-front,
//! then the optional debug title.

pub mod background;
pub mod cloud;
pub mod title;

pub use background::BackgroundRenderer;
pub use cloud::CloudRenderer;
pub use title::TitleRenderer;
