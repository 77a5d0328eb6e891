//! GPU resources for the cube scene.
//!
//! Created once against a device and target formats; each frame the host
//! calls [`CubeRenderer::prepare`] to upload a [`FrameData`] and
//! [`CubeRenderer::paint`] to record the instanced draw into its render pass.

use wgpu::util::DeviceExt;

use crate::error::RenderError;
use crate::mesh::{CUBE_VERTEX_COUNT, CUBE_VERTICES, Vertex};
use crate::shader::{self, ProgramDesc, ShaderProgram};
use crate::uniforms::{FrameData, FrameUniforms, InstanceRaw};

pub const VERTEX_SHADER: &str = include_str!("shaders/cube_vertex.wgsl");
pub const FRAGMENT_SHADER: &str = include_str!("shaders/cube_fragment.wgsl");

pub struct CubeRenderer {
    program: ShaderProgram,
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_capacity: usize,
    instance_count: u32,
}

impl CubeRenderer {
    /// Build the pipeline and buffers. `instance_capacity` bounds the number
    /// of cubes a single frame may draw.
    pub fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        depth_format: Option<wgpu::TextureFormat>,
        instance_capacity: usize,
    ) -> Result<Self, RenderError> {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("cube frame uniforms"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let program = shader::create_shader_program(device, &ProgramDesc {
            label: "cube",
            vertex_source: VERTEX_SHADER,
            fragment_source: FRAGMENT_SHADER,
            vertex_buffers: &[Vertex::layout(), InstanceRaw::layout()],
            bind_group_layouts: &[&bind_group_layout],
            color_format,
            depth_format,
        })?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube vertices"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cube instances"),
            size: (instance_capacity * std::mem::size_of::<InstanceRaw>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("cube frame uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube frame uniforms"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        log::info!("cube renderer ready ({instance_capacity} instances, {color_format:?})");

        Ok(Self {
            program,
            vertex_buffer,
            instance_buffer,
            uniform_buffer,
            bind_group,
            instance_capacity,
            instance_count: 0,
        })
    }

    /// Upload this frame's uniforms and instance matrices.
    ///
    /// On failure nothing is drawn until the next successful upload.
    pub fn prepare(&mut self, queue: &wgpu::Queue, frame: &FrameData) -> Result<(), RenderError> {
        let count = frame.instances.len();
        if count > self.instance_capacity {
            self.instance_count = 0;
            return Err(RenderError::TooManyCubes { count, capacity: self.instance_capacity });
        }
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&frame.uniforms));
        if count > 0 {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&frame.instances));
        }
        self.instance_count = count as u32;
        Ok(())
    }

    /// Cubes the next `paint` will draw.
    pub fn instance_count(&self) -> u32 { self.instance_count }

    /// Record the draw for the last prepared frame.
    pub fn paint(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 {
            return;
        }
        pass.set_pipeline(&self.program.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        pass.draw(0..CUBE_VERTEX_COUNT, 0..self.instance_count);
    }
}
