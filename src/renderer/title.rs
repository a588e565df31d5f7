//! Debug title renderer — the extruded glyph mesh, matcap shaded.
//!
//! The mesh floats at a fixed distance in front of the camera eye and
//! follows it along the flight path, so it stays readable while the
//! scene scrolls past.

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::gpu::pipeline_helpers;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::GpuTexture;
use crate::scene::title::{TitleGeometry, TitleVertex};

/// Distance from the camera eye to the title, along the travel axis.
const TITLE_DISTANCE: f32 = 600.0;
/// Height of the title above the flight line.
const TITLE_HEIGHT: f32 = 40.0;

/// Model matrix uniform — must match the WGSL struct.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct TitlePlacement {
    model: [[f32; 4]; 4],
}

pub struct TitleRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,

    placement_buffer: wgpu::Buffer,
    layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
}

impl TitleRenderer {
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        composer: &mut ShaderComposer,
        geometry: &TitleGeometry,
    ) -> Self {
        let device = &context.device;

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Title Vertex Buffer"),
                contents: bytemuck::cast_slice(&geometry.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Title Index Buffer"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let placement = TitlePlacement {
            model: Mat4::IDENTITY.to_cols_array_2d(),
        };
        let placement_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Title Placement Buffer"),
                contents: bytemuck::cast_slice(&[placement]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Title Layout"),
                entries: &[
                    pipeline_helpers::uniform_buffer(
                        0,
                        wgpu::ShaderStages::VERTEX,
                    ),
                    pipeline_helpers::texture_2d(1),
                    pipeline_helpers::filtering_sampler(2),
                ],
            },
        );
        let sampler =
            pipeline_helpers::linear_sampler(device, "Title Matcap Sampler");

        // Neutral gray matcap until (and unless) a real one is loaded.
        let placeholder = GpuTexture::placeholder(
            device,
            &context.queue,
            "Title Matcap",
            [180, 180, 190, 255],
        );
        let bind_group = Self::create_bind_group(
            context,
            &layout,
            &placement_buffer,
            &placeholder.view,
            &sampler,
        );

        let shader = composer.compose(
            device,
            "Title Shader",
            include_str!("../../assets/shaders/title.wgsl"),
            "title.wgsl",
        );

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Title Pipeline Layout"),
                bind_group_layouts: &[camera_layout, &layout],
                immediate_size: 0,
            });

        let pipeline = device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Title Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[TitleVertex::layout()],
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
                primitive: wgpu::PrimitiveState {
                    cull_mode: Some(wgpu::Face::Back),
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            },
        );

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: geometry.indices.len() as u32,
            placement_buffer,
            layout,
            bind_group,
            sampler,
        }
    }

    fn create_bind_group(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        placement_buffer: &wgpu::Buffer,
        matcap_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Title Bind Group"),
                layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: placement_buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(
                            matcap_view,
                        ),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            })
    }

    /// Swap in the decoded matcap texture.
    pub fn set_matcap_texture(
        &mut self,
        context: &RenderContext,
        texture: &GpuTexture,
    ) {
        self.bind_group = Self::create_bind_group(
            context,
            &self.layout,
            &self.placement_buffer,
            &texture.view,
            &self.sampler,
        );
    }

    /// Re-anchor the title in front of the camera eye.
    pub fn update_placement(&self, queue: &wgpu::Queue, eye: Vec3) {
        let model = Mat4::from_translation(Vec3::new(
            eye.x,
            eye.y + TITLE_HEIGHT,
            eye.z - TITLE_DISTANCE,
        ));
        queue.write_buffer(
            &self.placement_buffer,
            0,
            bytemuck::cast_slice(&[TitlePlacement {
                model: model.to_cols_array_2d(),
            }]),
        );
    }

    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bind_group, &[]);
        pass.set_bind_group(1, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
