use crate::core::{CameraUniforms, FrameOutput, OrbitCamera};
use web_sys as web;

mod backdrop;
mod dither;
mod helpers;

use backdrop::BackdropResources;
use dither::DitherResources;

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    camera_buffer: wgpu::Buffer,
    camera_bg: wgpu::BindGroup,
    #[allow(dead_code)] // owns the storage behind depth_view
    depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    dither: DitherResources,
    backdrop: BackdropResources,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        particle_count: usize,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Palette colors are authored in display space, so prefer a non-sRGB target
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let camera_bgl = helpers::uniform_layout(
            &device,
            "camera_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let camera_buffer = helpers::create_uniform_buffer(
            &device,
            "camera_uniforms",
            &OrbitCamera::default().uniforms(0.0),
        );
        let camera_bg = helpers::uniform_bind_group(&device, "camera_bg", &camera_bgl, &camera_buffer);
        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let dither = DitherResources::new(&device, &camera_bgl, format, particle_count);
        let backdrop = BackdropResources::new(&device, &camera_bgl, format, seed);
        log::info!("[render] WebGPU ready {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            camera_buffer,
            camera_bg,
            depth_tex,
            depth_view,
            dither,
            backdrop,
            width,
            height,
            // #0a0a0a page background
            clear_color: wgpu::Color {
                r: 0.039,
                g: 0.039,
                b: 0.039,
                a: 1.0,
            },
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        let (tex, view) = helpers::create_depth_texture(&self.device, self.width, self.height);
        self.depth_tex = tex;
        self.depth_view = view;
    }

    pub fn render(
        &mut self,
        camera: &OrbitCamera,
        frame: &FrameOutput<'_>,
    ) -> Result<(), wgpu::SurfaceError> {
        let cam: CameraUniforms = camera.uniforms(frame.time.elapsed);
        self.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&cam));
        self.dither
            .write(&self.queue, &frame.orb, &frame.debris, frame.instances);

        let surface_tex = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.reconfigure();
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.camera_bg, &[]);
            self.backdrop.draw(&mut rpass);
            self.dither.draw(&mut rpass);
        }

        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
