use glam::Mat4;

use super::helpers::{self, PipelineSpec};
use crate::core::geometry::{self, Mesh, Vertex};
use crate::core::{DitherUniforms, ORB_DETAIL, ORB_RADIUS, PARTICLE_SIZE};

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    2 => Float32x4, 3 => Float32x4, 4 => Float32x4, 5 => Float32x4
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[[f32; 4]; 4]>() as u64,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRS,
    }
}

pub(crate) struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    fn new(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        Self {
            vertex_buffer: helpers::create_vertex_buffer(device, label, &mesh.vertices),
            index_buffer: helpers::create_index_buffer(device, label, &mesh.indices),
            index_count: mesh.indices.len() as u32,
        }
    }
}

pub(crate) struct Material {
    pub(crate) uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl Material {
    fn new(device: &wgpu::Device, label: &str, layout: &wgpu::BindGroupLayout) -> Self {
        let zeroed: DitherUniforms = bytemuck::Zeroable::zeroed();
        let uniform_buffer = helpers::create_uniform_buffer(device, label, &zeroed);
        let bind_group = helpers::uniform_bind_group(device, label, layout, &uniform_buffer);
        Self {
            uniform_buffer,
            bind_group,
        }
    }
}

/// Orb and debris share one shader; they differ in vertex entry point and the
/// debris' per-instance matrices.
pub(crate) struct DitherResources {
    orb_pipeline: wgpu::RenderPipeline,
    debris_pipeline: wgpu::RenderPipeline,
    orb_mesh: MeshBuffers,
    debris_mesh: MeshBuffers,
    pub(crate) orb_material: Material,
    pub(crate) debris_material: Material,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instance_count: u32,
}

impl DitherResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        camera_bgl: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
        particle_count: usize,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("dither_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::DITHER_WGSL.into()),
        });
        let material_bgl = helpers::uniform_layout(
            device,
            "dither_material_bgl",
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        );
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("dither_pl"),
            bind_group_layouts: &[camera_bgl, &material_bgl],
            push_constant_ranges: &[],
        });

        let orb_buffers = [vertex_layout()];
        let orb_pipeline = helpers::make_scene_pipeline(
            device,
            &PipelineSpec {
                label: "orb_pipeline",
                layout: &layout,
                shader: &shader,
                vs_entry: "vs_orb",
                fs_entry: "fs_dither",
                buffers: &orb_buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                color_format,
            },
        );
        let debris_buffers = [vertex_layout(), instance_layout()];
        let debris_pipeline = helpers::make_scene_pipeline(
            device,
            &PipelineSpec {
                label: "debris_pipeline",
                layout: &layout,
                shader: &shader,
                vs_entry: "vs_debris",
                fs_entry: "fs_dither",
                buffers: &debris_buffers,
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                color_format,
            },
        );

        let orb = geometry::icosphere(ORB_RADIUS, ORB_DETAIL);
        let debris = geometry::octahedron(PARTICLE_SIZE);
        log::info!(
            "[render] orb triangles={} debris triangles={} instances={}",
            orb.triangle_count(),
            debris.triangle_count(),
            particle_count
        );

        let capacity = particle_count.max(1);
        let instances = vec![Mat4::IDENTITY.to_cols_array_2d(); capacity];
        Self {
            orb_pipeline,
            debris_pipeline,
            orb_mesh: MeshBuffers::new(device, "orb_mesh", &orb),
            debris_mesh: MeshBuffers::new(device, "debris_mesh", &debris),
            orb_material: Material::new(device, "orb_material", &material_bgl),
            debris_material: Material::new(device, "debris_material", &material_bgl),
            instance_buffer: helpers::create_vertex_buffer(device, "debris_instances", &instances),
            instance_capacity: capacity,
            instance_count: 0,
        }
    }

    /// Upload this frame's uniforms and instance matrices.
    pub(crate) fn write(
        &mut self,
        queue: &wgpu::Queue,
        orb: &DitherUniforms,
        debris: &DitherUniforms,
        instances: &[Mat4],
    ) {
        queue.write_buffer(&self.orb_material.uniform_buffer, 0, bytemuck::bytes_of(orb));
        queue.write_buffer(&self.debris_material.uniform_buffer, 0, bytemuck::bytes_of(debris));
        let n = instances.len().min(self.instance_capacity);
        self.instance_count = n as u32;
        if n == 0 {
            return;
        }
        let packed: Vec<[[f32; 4]; 4]> = instances[..n]
            .iter()
            .map(|m| m.to_cols_array_2d())
            .collect();
        queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&packed));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.orb_pipeline);
        rpass.set_bind_group(1, &self.orb_material.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.orb_mesh.vertex_buffer.slice(..));
        rpass.set_index_buffer(self.orb_mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.orb_mesh.index_count, 0, 0..1);

        if self.instance_count == 0 {
            return;
        }
        // All debris in one instanced draw
        rpass.set_pipeline(&self.debris_pipeline);
        rpass.set_bind_group(1, &self.debris_material.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.debris_mesh.vertex_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        rpass.set_index_buffer(
            self.debris_mesh.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        rpass.draw_indexed(0..self.debris_mesh.index_count, 0, 0..self.instance_count);
    }
}
