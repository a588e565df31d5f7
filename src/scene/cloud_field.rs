//! Cloud field builder: N randomly transformed sprite quads merged into
//! one static vertex/index buffer.
//!
//! Each sprite's transform is baked into its vertices at build time; no
//! per-instance state survives to render time. The merge is a one-time
//! concatenation, deterministic given the RNG seed. Depth ordering comes
//! from placement: sprite `i` sits at `z = i`, so drawing in index order
//! is back-to-front for a camera flying toward decreasing z.

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::CloudOptions;

/// Vertex format for the merged cloud mesh.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CloudVertex {
    /// World-space position (transform already baked in).
    pub position: [f32; 3],
    /// Sprite texture coordinate.
    pub uv: [f32; 2],
}

impl CloudVertex {
    /// Vertex buffer layout for the cloud pipeline.
    pub const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

    /// Describe this vertex format to a render pipeline.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// One sprite's sampled placement, before baking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteTransform {
    /// World-space position.
    pub position: Vec3,
    /// Rotation around the depth axis, radians.
    pub rot_z: f32,
    /// Uniform in-plane scale.
    pub scale: f32,
}

/// The merged cloud geometry: `4 * count` vertices, `6 * count` indices.
pub struct CloudGeometry {
    /// Baked world-space vertices.
    pub vertices: Vec<CloudVertex>,
    /// Triangle-list indices (two triangles per sprite).
    pub indices: Vec<u32>,
}

/// Sample sprite placements from a seeded RNG.
///
/// - x: uniform over `[-x_spread/2, x_spread/2)`
/// - y: `-(u*u) * y_scale - y_offset` — the product of two uniform draws
///   biases sprites toward y = 0, denser near the horizon
/// - z: the sprite index (monotonic depth ordering across the batch)
/// - rotation: uniform over a half-turn
/// - scale: `u*u * scale_spread + scale_base` (same product bias)
#[must_use]
pub fn generate_sprites(options: &CloudOptions) -> Vec<SpriteTransform> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut sprites = Vec::with_capacity(options.count);

    for i in 0..options.count {
        let x = rng.random::<f32>() * options.x_spread - options.x_spread / 2.0;
        let y = -(rng.random::<f32>() * rng.random::<f32>()) * options.y_scale
            - options.y_offset;
        let z = i as f32;
        let rot_z = rng.random::<f32>() * std::f32::consts::PI;
        let scale = rng.random::<f32>() * rng.random::<f32>()
            * options.scale_spread
            + options.scale_base;

        sprites.push(SpriteTransform {
            position: Vec3::new(x, y, z),
            rot_z,
            scale,
        });
    }

    sprites
}

/// Bake every sprite transform into quad vertices and concatenate into a
/// single mesh.
#[must_use]
pub fn merge_sprites(
    sprites: &[SpriteTransform],
    quad_size: f32,
) -> CloudGeometry {
    let half = quad_size / 2.0;
    // Quad corners in local space, CCW from bottom-left; v flipped so the
    // sprite reads upright.
    let corners = [
        (Vec3::new(-half, -half, 0.0), [0.0, 1.0]),
        (Vec3::new(half, -half, 0.0), [1.0, 1.0]),
        (Vec3::new(half, half, 0.0), [1.0, 0.0]),
        (Vec3::new(-half, half, 0.0), [0.0, 0.0]),
    ];

    let mut vertices = Vec::with_capacity(sprites.len() * 4);
    let mut indices = Vec::with_capacity(sprites.len() * 6);

    for (i, sprite) in sprites.iter().enumerate() {
        let transform = Mat4::from_translation(sprite.position)
            * Mat4::from_rotation_z(sprite.rot_z)
            * Mat4::from_scale(Vec3::new(sprite.scale, sprite.scale, 1.0));

        for (corner, uv) in corners {
            let position = transform.transform_point3(corner);
            vertices.push(CloudVertex {
                position: position.to_array(),
                uv,
            });
        }

        let base = (i * 4) as u32;
        indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base,
            base + 2,
            base + 3,
        ]);
    }

    CloudGeometry { vertices, indices }
}

/// Generate and merge the full field in one step.
#[must_use]
pub fn build(options: &CloudOptions) -> CloudGeometry {
    merge_sprites(&generate_sprites(options), options.quad_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_options(seed: u64) -> CloudOptions {
        CloudOptions {
            count: 500,
            seed,
            ..CloudOptions::default()
        }
    }

    #[test]
    fn sprite_z_equals_generation_index() {
        let sprites = generate_sprites(&small_options(7));
        for (i, sprite) in sprites.iter().enumerate() {
            assert_eq!(sprite.position.z, i as f32);
        }
    }

    #[test]
    fn merged_counts_are_invariant_under_seed() {
        for seed in [0, 1, 42, u64::MAX] {
            let opts = small_options(seed);
            let geometry = build(&opts);
            assert_eq!(geometry.vertices.len(), opts.count * 4);
            assert_eq!(geometry.indices.len(), opts.count * 6);
        }
    }

    #[test]
    fn generation_is_deterministic_given_seed() {
        let a = generate_sprites(&small_options(99));
        let b = generate_sprites(&small_options(99));
        assert_eq!(a, b);

        let c = generate_sprites(&small_options(100));
        assert_ne!(a, c);
    }

    #[test]
    fn sampled_ranges_match_distributions() {
        let opts = small_options(3);
        for sprite in generate_sprites(&opts) {
            let p = sprite.position;
            assert!(p.x >= -opts.x_spread / 2.0 && p.x < opts.x_spread / 2.0);
            // y is biased toward the offset line, never above it
            assert!(p.y <= -opts.y_offset);
            assert!(p.y >= -(opts.y_scale + opts.y_offset));
            assert!(sprite.rot_z >= 0.0 && sprite.rot_z < std::f32::consts::PI);
            assert!(sprite.scale >= opts.scale_base);
            assert!(sprite.scale < opts.scale_base + opts.scale_spread);
        }
    }

    #[test]
    fn y_distribution_is_horizon_biased() {
        // The u*u product should land most sprites in the upper quarter
        // of the [-y_scale-offset, -offset] band, unlike a uniform draw.
        let opts = CloudOptions {
            count: 4000,
            ..CloudOptions::default()
        };
        let sprites = generate_sprites(&opts);
        let quarter_line = -(opts.y_scale / 4.0) - opts.y_offset;
        let near_horizon = sprites
            .iter()
            .filter(|s| s.position.y >= quarter_line)
            .count();
        assert!(near_horizon as f32 / opts.count as f32 > 0.6);
    }

    #[test]
    fn indices_reference_valid_vertices() {
        let geometry = build(&small_options(1));
        let max = geometry.vertices.len() as u32;
        assert!(geometry.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn baked_quad_center_matches_sprite_position() {
        let sprites = generate_sprites(&small_options(5));
        let geometry = merge_sprites(&sprites, 64.0);
        for (i, sprite) in sprites.iter().enumerate() {
            let quad = &geometry.vertices[i * 4..i * 4 + 4];
            let center = quad.iter().fold(Vec3::ZERO, |acc, v| {
                acc + Vec3::from_array(v.position)
            }) / 4.0;
            assert!((center - sprite.position).length() < 1e-3);
        }
    }
}
