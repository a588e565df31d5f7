//! Animated camera rig: a cyclic depth flight path combined with
//! pointer-chasing easing on x/y, plus the GPU uniform plumbing.
//!
//! The path and easing are plain state machines with no GPU types so the
//! animation semantics are testable without a device.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::input::PointerTarget;
use crate::options::CameraOptions;
use crate::util::easing;

/// Cyclic forward travel along the depth axis.
///
/// The depth value starts at `period`, decreases by `speed` world units
/// per second, and wraps back to `period` — one seamless loop through the
/// cloud field, which re-enters from behind via the far layer.
#[derive(Debug, Clone, Copy)]
pub struct FlightPath {
    /// Loop length in world units.
    pub period: f32,
    /// Travel speed in world units per second.
    pub speed: f32,
    elapsed: f32,
}

impl FlightPath {
    /// Create a path at the start of its loop.
    #[must_use]
    pub fn new(period: f32, speed: f32) -> Self {
        Self {
            period,
            speed,
            elapsed: 0.0,
        }
    }

    /// Advance elapsed time by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Current depth position.
    #[must_use]
    pub fn depth(&self) -> f32 {
        self.depth_at(self.elapsed)
    }

    /// Depth position at an arbitrary elapsed time. Periodic:
    /// `depth_at(t) == depth_at(t + period / speed)`.
    #[must_use]
    pub fn depth_at(&self, elapsed: f32) -> f32 {
        self.period - easing::wrap(elapsed * self.speed, self.period)
    }
}

/// First-order easing of the camera x/y toward the pointer target.
///
/// Per tick each axis closes a fixed fraction of the remaining distance;
/// y chases the negated target so the camera leans away from the pointer
/// vertically.
#[derive(Debug, Clone, Copy)]
pub struct PointerEase {
    /// Current eased x position.
    pub x: f32,
    /// Current eased y position.
    pub y: f32,
    fraction: f32,
}

impl PointerEase {
    /// Create an ease state resting at the origin.
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            fraction,
        }
    }

    /// Apply one tick of easing toward `(target_x, -target_y)`.
    pub fn tick(&mut self, target_x: f32, target_y: f32) {
        self.x = easing::approach(self.x, target_x, self.fraction);
        self.y = easing::approach(self.y, -target_y, self.fraction);
    }
}

/// Camera rig owning the animated camera and its GPU binding.
pub struct CameraRig {
    /// The perspective camera driven by this rig.
    pub camera: Camera,
    /// CPU copy of the camera uniform.
    pub uniform: CameraUniform,
    /// GPU uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 of every scene pipeline).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group for the camera uniform.
    pub bind_group: wgpu::BindGroup,
    path: FlightPath,
    ease: PointerEase,
}

impl CameraRig {
    /// Create the rig at the start of the flight loop.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        options: &CameraOptions,
        loop_depth: f32,
    ) -> Self {
        let path = FlightPath::new(loop_depth, options.travel_speed);
        let ease = PointerEase::new(options.ease_fraction);

        let eye = Vec3::new(0.0, 0.0, path.depth());
        let camera = Camera {
            eye,
            target: eye + Vec3::NEG_Z,
            up: Vec3::Y,
            aspect: context.config.width as f32
                / context.config.height.max(1) as f32,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            path,
            ease,
        }
    }

    /// Advance one tick: move along the flight path by `dt` seconds and
    /// apply one step of pointer easing.
    pub fn advance(&mut self, dt: f32, pointer: &PointerTarget) {
        self.path.advance(dt);
        self.ease.tick(pointer.x, pointer.y);

        self.camera.eye =
            Vec3::new(self.ease.x, self.ease.y, self.path.depth());
        self.camera.target = self.camera.eye + Vec3::NEG_Z;
    }

    /// Upload the current camera state to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.camera);
        queue.write_buffer(
            &self.buffer,
            0,
            bytemuck::cast_slice(&[self.uniform]),
        );
    }

    /// Recompute the projection aspect for a new viewport.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_path_is_periodic() {
        let path = FlightPath::new(8000.0, 30.0);
        let cycle = path.period / path.speed;
        for t in [0.0, 1.5, 77.7, 200.0] {
            let a = path.depth_at(t);
            let b = path.depth_at(t + cycle);
            assert!((a - b).abs() < 0.5, "depth at {t} not periodic: {a} vs {b}");
        }
    }

    #[test]
    fn flight_path_moves_forward() {
        let mut path = FlightPath::new(8000.0, 30.0);
        let start = path.depth();
        path.advance(1.0);
        assert!((start - path.depth() - 30.0).abs() < 1e-3);
    }

    #[test]
    fn flight_path_wraps_inside_loop() {
        let path = FlightPath::new(8000.0, 30.0);
        // Sample a couple of full cycles; depth must stay in (0, period].
        for i in 0..2000 {
            let d = path.depth_at(i as f32 * 0.4);
            assert!(d > 0.0 && d <= 8000.0);
        }
    }

    #[test]
    fn easing_converges_to_held_target() {
        let mut ease = PointerEase::new(0.01);
        let mut prev_distance = f32::MAX;
        for _ in 0..1000 {
            ease.tick(120.0, -40.0);
            let distance =
                ((ease.x - 120.0).powi(2) + (ease.y - 40.0).powi(2)).sqrt();
            assert!(distance <= prev_distance);
            prev_distance = distance;
        }
        assert!((ease.x - 120.0).abs() < 6.0);
        assert!((ease.y - 40.0).abs() < 2.0);
    }

    #[test]
    fn easing_decay_is_geometric() {
        let mut ease = PointerEase::new(0.01);
        let target = 500.0;
        let mut remaining = target;
        for _ in 0..50 {
            ease.tick(target, 0.0);
            let next_remaining = target - ease.x;
            assert!((next_remaining / remaining - 0.99).abs() < 1e-4);
            remaining = next_remaining;
        }
    }

    #[test]
    fn centered_pointer_converges_to_origin() {
        // End-to-end scenario: pointer at center, 1000 ticks, camera x/y
        // settle at 0 and the path covers at least one full loop.
        let mut path = FlightPath::new(8000.0, 30.0);
        let mut ease = PointerEase::new(0.01);
        ease.x = 250.0;
        ease.y = -90.0;

        let cycle = path.period / path.speed;
        let dt = cycle / 900.0;
        let mut seen_low = false;
        for _ in 0..1000 {
            path.advance(dt);
            ease.tick(0.0, 0.0);
            if path.depth() < 100.0 {
                seen_low = true;
            }
        }
        assert!(ease.x.abs() < 1.0e-2);
        assert!(ease.y.abs() < 1.0e-2);
        assert!(seen_low, "path never approached the loop boundary");
    }
}
