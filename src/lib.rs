//! Animated 3D cloud-scene backdrop renderer built on wgpu.
//!
//! Cirrus renders an endlessly looping flythrough of a procedurally
//! generated cloud field: thousands of randomly transformed sprite quads
//! baked into a single merged mesh, drawn twice (near and far layer) with
//! a depth-falloff fog shader over a vertical-gradient backdrop. The
//! camera travels a cyclic depth path while easing toward the pointer.
//!
//! # Key entry points
//!
//! - [`engine::CloudSceneEngine`] - the rendering engine
//! - [`options::Options`] - runtime configuration (clouds, fog, camera,
//!   background, debug)
//! - `Viewer` (feature `viewer`) - standalone winit window
//!
//! # Architecture
//!
//! Everything runs on the render thread. The cloud field and the debug
//! title mesh are generated on the CPU at startup; sprite and matcap
//! textures decode on short-lived background threads and are delivered
//! through mpsc channels polled once per frame. Until a texture resolves,
//! a 1x1 placeholder is bound and the scene renders in a degraded state
//! rather than erroring.

pub mod assets;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::CloudSceneEngine;
pub use error::CirrusError;
pub use input::{InputEvent, PointerTarget};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
