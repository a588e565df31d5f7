//! The cloud scene engine: owns the GPU context, the camera rig, and the
//! render passes, and drives one frame per `update` + `render` pair.

use std::path::PathBuf;
use std::time::Duration;

use log::info;
use web_time::Instant;

use crate::assets::{AssetKind, AssetLoader};
use crate::camera::CameraRig;
use crate::error::CirrusError;
use crate::gpu::render_context::RenderContext;
use crate::gpu::shader_composer::ShaderComposer;
use crate::gpu::texture::GpuTexture;
use crate::input::{InputEvent, PointerTarget};
use crate::options::Options;
use crate::renderer::{BackgroundRenderer, CloudRenderer, TitleRenderer};
use crate::scene::Scene;
use crate::util::frame_timing::FrameTiming;

const FPS_LOG_INTERVAL: Duration = Duration::from_secs(1);

pub struct CloudSceneEngine {
    pub context: RenderContext,
    options: Options,

    camera_rig: CameraRig,
    pointer: PointerTarget,

    background_renderer: BackgroundRenderer,
    cloud_renderer: CloudRenderer,
    title_renderer: Option<TitleRenderer>,

    asset_loader: AssetLoader,
    pub frame_timing: FrameTiming,
    last_fps_log: Instant,
}

impl CloudSceneEngine {
    /// Create the engine: initialize the GPU context, generate the scene
    /// geometry, and build all render passes.
    ///
    /// # Errors
    ///
    /// Returns [`CirrusError::Gpu`] if surface, adapter, or device setup
    /// fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: Options,
    ) -> Result<Self, CirrusError> {
        let context = RenderContext::new(window, size).await?;
        let mut composer = ShaderComposer::new();

        let scene = Scene::from_options(&options);
        info!(
            "cloud field: {} sprites, {} vertices",
            options.clouds.count,
            scene.clouds.vertices.len()
        );

        let camera_rig = CameraRig::new(
            &context,
            &options.camera,
            options.clouds.loop_depth,
        );
        let pointer =
            PointerTarget::new(size.0, size.1, options.camera.pointer_scale);

        let background_renderer = BackgroundRenderer::new(
            &context,
            &mut composer,
            &options.background,
        );
        let cloud_renderer = CloudRenderer::new(
            &context,
            &camera_rig.layout,
            &mut composer,
            &scene.clouds,
            &options.clouds,
            &options.fog,
        );
        let title_renderer = scene.title.as_ref().map(|title| {
            TitleRenderer::new(
                &context,
                &camera_rig.layout,
                &mut composer,
                title,
            )
        });

        Ok(Self {
            context,
            options,
            camera_rig,
            pointer,
            background_renderer,
            cloud_renderer,
            title_renderer,
            asset_loader: AssetLoader::new(),
            frame_timing: FrameTiming::new(),
            last_fps_log: Instant::now(),
        })
    }

    /// Kick off background decoding of the cloud sprite texture.
    pub fn load_sprite_texture(&self, path: PathBuf) {
        self.asset_loader.request(AssetKind::CloudSprite, path);
    }

    /// Kick off background decoding of the title matcap texture.
    pub fn load_matcap_texture(&self, path: PathBuf) {
        self.asset_loader.request(AssetKind::Matcap, path);
    }

    /// Advance the simulation by `dt` seconds: upload any freshly decoded
    /// textures, move the camera along its loop, and ease toward the
    /// pointer.
    pub fn update(&mut self, dt: f32) {
        while let Some(decoded) = self.asset_loader.poll() {
            let texture = GpuTexture::from_rgba8(
                &self.context.device,
                &self.context.queue,
                "Decoded Asset",
                decoded.width,
                decoded.height,
                &decoded.pixels,
            );
            match decoded.kind {
                AssetKind::CloudSprite => self
                    .cloud_renderer
                    .set_sprite_texture(&self.context, &texture),
                AssetKind::Matcap => {
                    if let Some(title) = &mut self.title_renderer {
                        title.set_matcap_texture(&self.context, &texture);
                    }
                }
            }
        }

        self.camera_rig.advance(dt, &self.pointer);
        self.camera_rig.update_gpu(&self.context.queue);

        if let Some(title) = &self.title_renderer {
            title.update_placement(
                &self.context.queue,
                self.camera_rig.camera.eye,
            );
        }

        if self.options.debug.log_fps {
            let now = Instant::now();
            if now.duration_since(self.last_fps_log) >= FPS_LOG_INTERVAL {
                info!("fps: {:.1}", self.frame_timing.fps());
                self.last_fps_log = now;
            }
        }
    }

    /// Render one frame: backdrop, cloud layers, optional title.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired; the caller resizes and retries on `Lost`/`Outdated`.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_encoder();
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Scene Pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view: &view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

            self.background_renderer.draw(&mut pass);
            self.cloud_renderer
                .draw(&mut pass, &self.camera_rig.bind_group);
            if let Some(title) = &self.title_renderer {
                title.draw(&mut pass, &self.camera_rig.bind_group);
            }
        }

        self.context.submit(encoder);
        frame.present();
        self.frame_timing.end_frame();
        Ok(())
    }

    /// Resize the surface, camera aspect, pointer mapping, and backdrop.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(width, height);
        self.camera_rig.resize(width, height);
        self.pointer.resize(width, height);
        self.background_renderer.resize(&self.context, height);
    }

    /// Feed a pointer event into the scene. Returns true if the event
    /// changed the easing target.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.pointer.apply(event)
    }

    /// Current configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
