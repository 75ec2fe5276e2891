use glam::{Mat4, Vec3};

use super::helpers::{self, PipelineSpec};
use crate::core::geometry::{self, BackdropVertex};
use crate::core::{
    GRID_CENTER_COLOR, GRID_DIVISIONS, GRID_LINE_COLOR, GRID_SIZE, GRID_Y_OFFSET, STAR_COUNT,
    STAR_DEPTH, STAR_RADIUS,
};

const ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

/// Background grid (line list) and star field (point list).
pub(crate) struct BackdropResources {
    grid_pipeline: wgpu::RenderPipeline,
    star_pipeline: wgpu::RenderPipeline,
    grid_buffer: wgpu::Buffer,
    grid_count: u32,
    star_buffer: wgpu::Buffer,
    star_count: u32,
}

impl BackdropResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        camera_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
        seed: u64,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("backdrop_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::BACKDROP_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("backdrop_pl"),
            bind_group_layouts: &[camera_bgl],
            push_constant_ranges: &[],
        });
        let buffers = [wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BackdropVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRS,
        }];
        let pipeline = |label: &str, topology: wgpu::PrimitiveTopology| {
            helpers::make_scene_pipeline(
                device,
                &PipelineSpec {
                    label,
                    layout: &layout,
                    shader: &shader,
                    vs_entry: "vs_backdrop",
                    fs_entry: "fs_backdrop",
                    buffers: &buffers,
                    topology,
                    cull_mode: None,
                    color_format,
                },
            )
        };
        let grid_pipeline = pipeline("grid_pipeline", wgpu::PrimitiveTopology::LineList);
        let star_pipeline = pipeline("star_pipeline", wgpu::PrimitiveTopology::PointList);

        // Grid is authored in XZ, then stood up around X and dropped below the orb.
        let grid_transform = Mat4::from_translation(Vec3::new(0.0, GRID_Y_OFFSET, 0.0))
            * Mat4::from_rotation_x(std::f32::consts::FRAC_PI_2);
        let grid = geometry::grid_lines(
            GRID_SIZE,
            GRID_DIVISIONS,
            GRID_CENTER_COLOR,
            GRID_LINE_COLOR,
            grid_transform,
        );
        let stars = geometry::star_field(STAR_COUNT, STAR_RADIUS, STAR_DEPTH, seed);

        Self {
            grid_pipeline,
            star_pipeline,
            grid_buffer: helpers::create_vertex_buffer(device, "grid_vertices", &grid),
            grid_count: grid.len() as u32,
            star_buffer: helpers::create_vertex_buffer(device, "star_vertices", &stars),
            star_count: stars.len() as u32,
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.star_pipeline);
        rpass.set_vertex_buffer(0, self.star_buffer.slice(..));
        rpass.draw(0..self.star_count, 0..1);

        rpass.set_pipeline(&self.grid_pipeline);
        rpass.set_vertex_buffer(0, self.grid_buffer.slice(..));
        rpass.draw(0..self.grid_count, 0..1);
    }
}
