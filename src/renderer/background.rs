//! Sky backdrop — a vertical gradient stretched across the frame.
//!
//! The gradient is a 1xH strip built on the CPU and sampled by a
//! fullscreen triangle, so changing the colors or window height just
//! rebuilds a tiny texture. The top color fades to the horizon color
//! over the upper half of the frame; the lower half stays at the
//! horizon color, matching the fog the clouds dissolve into.

use crate::gpu::pipeline_helpers;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::GpuTexture;
use crate::options::BackgroundOptions;

/// Build the RGBA strip for a frame of the given height.
fn gradient_pixels(options: &BackgroundOptions, height: u32) -> Vec<u8> {
    let half = (f64::from(height) / 2.0).max(1.0);
    let mut pixels = Vec::with_capacity(height as usize * 4);
    for y in 0..height {
        let t = (f64::from(y) / half).min(1.0) as f32;
        for channel in 0..3 {
            let top = options.top_color[channel];
            let horizon = options.horizon_color[channel];
            let value = top + (horizon - top) * t;
            pixels.push((value * 255.0).round().clamp(0.0, 255.0) as u8);
        }
        pixels.push(255);
    }
    pixels
}

pub struct BackgroundRenderer {
    pipeline: wgpu::RenderPipeline,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
    options: BackgroundOptions,
    height: u32,
}

impl BackgroundRenderer {
    pub fn new(
        context: &RenderContext,
        composer: &mut ShaderComposer,
        options: &BackgroundOptions,
    ) -> Self {
        let device = &context.device;

        let layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Background Layout"),
                entries: &[
                    pipeline_helpers::texture_2d(0),
                    pipeline_helpers::filtering_sampler(1),
                ],
            },
        );
        let sampler =
            pipeline_helpers::linear_sampler(device, "Background Sampler");

        let height = context.config.height.max(1);
        let bind_group = Self::create_bind_group(
            context, &layout, &sampler, options, height,
        );

        let shader = composer.compose(
            device,
            "Background Shader",
            include_str!("../../assets/shaders/gradient.wgsl"),
            "gradient.wgsl",
        );

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Background Pipeline Layout"),
                bind_group_layouts: &[&layout],
                immediate_size: 0,
            });

        let pipeline = device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Background Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: None,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            },
        );

        Self {
            pipeline,
            layout,
            bind_group,
            sampler,
            options: options.clone(),
            height,
        }
    }

    fn create_bind_group(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        options: &BackgroundOptions,
        height: u32,
    ) -> wgpu::BindGroup {
        let pixels = gradient_pixels(options, height);
        let strip = GpuTexture::from_rgba8(
            &context.device,
            &context.queue,
            "Background Gradient",
            1,
            height,
            &pixels,
        );
        context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Background Bind Group"),
                layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(
                            &strip.view,
                        ),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            })
    }

    /// Rebuild the strip when the frame height changes.
    pub fn resize(&mut self, context: &RenderContext, height: u32) {
        let height = height.max(1);
        if height == self.height {
            return;
        }
        self.height = height;
        self.bind_group = Self::create_bind_group(
            context,
            &self.layout,
            &self.sampler,
            &self.options,
            height,
        );
    }

    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> BackgroundOptions {
        BackgroundOptions::default()
    }

    #[test]
    fn strip_has_one_rgba_texel_per_row() {
        let pixels = gradient_pixels(&options(), 240);
        assert_eq!(pixels.len(), 240 * 4);
    }

    #[test]
    fn top_row_matches_top_color() {
        let o = options();
        let pixels = gradient_pixels(&o, 100);
        let expected: Vec<u8> = o
            .top_color
            .iter()
            .map(|c| (c * 255.0).round() as u8)
            .collect();
        assert_eq!(&pixels[0..3], &expected[..]);
    }

    #[test]
    fn lower_half_is_constant_horizon_color() {
        let o = options();
        let pixels = gradient_pixels(&o, 100);
        let mid = &pixels[50 * 4..50 * 4 + 3];
        let bottom = &pixels[99 * 4..99 * 4 + 3];
        assert_eq!(mid, bottom);
        let expected: Vec<u8> = o
            .horizon_color
            .iter()
            .map(|c| (c * 255.0).round() as u8)
            .collect();
        assert_eq!(bottom, &expected[..]);
    }

    #[test]
    fn rows_are_opaque() {
        let pixels = gradient_pixels(&options(), 16);
        assert!(pixels.chunks(4).all(|px| px[3] == 255));
    }
}
