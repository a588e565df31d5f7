//! Cloud field renderer — one merged quad mesh drawn once per depth layer.
//!
//! The camera travels a fixed loop along -z; drawing the same mesh a
//! second time shifted one loop further back fills the horizon so the
//! field never visibly ends. Sprites blend with premultiplied-free
//! alpha, no depth buffer, back-to-front by construction (sprite z is
//! its generation index).

use wgpu::util::DeviceExt;

use crate::gpu::pipeline_helpers;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::GpuTexture;
use crate::options::{CloudOptions, FogOptions};
use crate::scene::cloud_field::{CloudGeometry, CloudVertex};

/// Fragment material parameters — must match the WGSL struct.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CloudMaterial {
    pub fog_color: [f32; 3],
    pub fog_near: f32,
    pub fog_far: f32,
    pub falloff_exponent: f32,
    pub opacity: f32,
    pub _pad: f32,
}

impl CloudMaterial {
    fn from_options(fog: &FogOptions) -> Self {
        Self {
            fog_color: fog.color,
            fog_near: fog.near,
            fog_far: fog.far,
            falloff_exponent: fog.falloff_exponent,
            opacity: fog.opacity,
            _pad: 0.0,
        }
    }
}

/// Per-layer world offset — must match the WGSL struct.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct LayerOffset {
    offset: [f32; 3],
    _pad: f32,
}

/// One draw of the shared mesh at a fixed world offset.
struct Layer {
    bind_group: wgpu::BindGroup,
}

impl Layer {
    fn new(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        offset: [f32; 3],
        label: &str,
    ) -> Self {
        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&[LayerOffset {
                    offset,
                    _pad: 0.0,
                }]),
                usage: wgpu::BufferUsages::UNIFORM,
            },
        );
        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some(label),
                    layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });
        Self { bind_group }
    }
}

pub struct CloudRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,

    pub material: CloudMaterial,
    material_buffer: wgpu::Buffer,
    material_layout: wgpu::BindGroupLayout,
    material_bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,

    near_layer: Layer,
    far_layer: Option<Layer>,
}

impl CloudRenderer {
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        composer: &mut ShaderComposer,
        geometry: &CloudGeometry,
        clouds: &CloudOptions,
        fog: &FogOptions,
    ) -> Self {
        let device = &context.device;

        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cloud Vertex Buffer"),
                contents: bytemuck::cast_slice(&geometry.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cloud Index Buffer"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        let material = CloudMaterial::from_options(fog);
        let material_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Cloud Material Buffer"),
                contents: bytemuck::cast_slice(&[material]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let material_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Cloud Material Layout"),
                entries: &[
                    pipeline_helpers::uniform_buffer(
                        0,
                        wgpu::ShaderStages::FRAGMENT,
                    ),
                    pipeline_helpers::texture_2d(1),
                    pipeline_helpers::filtering_sampler(2),
                ],
            },
        );
        let layer_layout = device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Cloud Layer Layout"),
                entries: &[pipeline_helpers::uniform_buffer(
                    0,
                    wgpu::ShaderStages::VERTEX,
                )],
            },
        );

        let sampler =
            pipeline_helpers::linear_sampler(device, "Cloud Sprite Sampler");

        // Start from a placeholder; the decoded sprite arrives from the
        // asset loader a few frames in.
        let placeholder = GpuTexture::placeholder(
            device,
            &context.queue,
            "Cloud Sprite",
            [255, 255, 255, 0],
        );
        let material_bind_group = Self::create_material_bind_group(
            context,
            &material_layout,
            &material_buffer,
            &placeholder.view,
            &sampler,
        );

        let near_layer = Layer::new(
            context,
            &layer_layout,
            [0.0, 0.0, 0.0],
            "Cloud Near Layer",
        );
        let far_layer = clouds.far_layer.then(|| {
            Layer::new(
                context,
                &layer_layout,
                [0.0, 0.0, -clouds.loop_depth],
                "Cloud Far Layer",
            )
        });

        let shader = composer.compose(
            device,
            "Cloud Shader",
            include_str!("../../assets/shaders/cloud.wgsl"),
            "cloud.wgsl",
        );

        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Cloud Pipeline Layout"),
                bind_group_layouts: &[
                    camera_layout,
                    &material_layout,
                    &layer_layout,
                ],
                immediate_size: 0,
            });

        let pipeline = device.create_render_pipeline(
            &wgpu::RenderPipelineDescriptor {
                label: Some("Cloud Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[CloudVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState::default(),
                // No depth buffer: sprites are emitted back-to-front and
                // blend over the backdrop.
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
            material,
            material_buffer,
            material_layout,
            material_bind_group,
            sampler,
            near_layer,
            far_layer,
        }
    }

    fn create_material_bind_group(
        context: &RenderContext,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
        texture_view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        context
            .device
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Cloud Material Bind Group"),
                layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::TextureView(
                            texture_view,
                        ),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            })
    }

    /// Swap in the decoded sprite texture once the asset loader delivers it.
    pub fn set_sprite_texture(
        &mut self,
        context: &RenderContext,
        texture: &GpuTexture,
    ) {
        self.material_bind_group = Self::create_material_bind_group(
            context,
            &self.material_layout,
            &self.material_buffer,
            &texture.view,
            &self.sampler,
        );
    }

    /// Push edits made to `self.material` to the GPU.
    pub fn write_material(&self, queue: &wgpu::Queue) {
        queue.write_buffer(
            &self.material_buffer,
            0,
            bytemuck::cast_slice(&[self.material]),
        );
    }

    /// Record both layer draws. Far layer first so near sprites blend
    /// over it.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera_bind_group: &wgpu::BindGroup,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera_bind_group, &[]);
        pass.set_bind_group(1, &self.material_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );

        if let Some(far) = &self.far_layer {
            pass.set_bind_group(2, &far.bind_group, &[]);
            pass.draw_indexed(0..self.index_count, 0, 0..1);
        }
        pass.set_bind_group(2, &self.near_layer.bind_group, &[]);
        pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}
