//! GPU plumbing: device/surface ownership, texture upload, pipeline
//! helpers, and WGSL shader composition.

/// Shared bind-group-layout and pipeline boilerplate.
pub mod pipeline_helpers;
/// Core wgpu resource ownership (device, queue, surface).
pub mod render_context;
/// naga_oil-backed shader composition with `#import` support.
pub mod shader_composer;
/// Texture upload from decoded pixels.
pub mod texture;
