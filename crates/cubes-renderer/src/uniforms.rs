//! GPU-side data layouts.
//!
//! `FrameUniforms` mirrors the `Frame` struct in both WGSL stages;
//! `InstanceRaw` is the per-cube vertex stream at locations 3..=9.

use bytemuck::{Pod, Zeroable};
use cubes_math::{Mat3, Matrix4, Vec3};

/// Per-frame uniforms. Vectors are padded to `vec4` for uniform alignment.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_pos: [f32; 4],
    pub view_pos: [f32; 4],
    pub light_color: [f32; 4],
    pub object_color: [f32; 4],
}

impl FrameUniforms {
    pub fn new(
        view: &Matrix4,
        projection: &Matrix4,
        light_pos: Vec3,
        view_pos: Vec3,
        light_color: Vec3,
        object_color: Vec3,
    ) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            light_pos: pad(light_pos),
            view_pos: pad(view_pos),
            light_color: pad(light_color),
            object_color: pad(object_color),
        }
    }
}

fn pad(v: Vec3) -> [f32; 4] { [v[0], v[1], v[2], 1.0] }

/// One cube instance: model matrix and the matching normal matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub normal: [[f32; 3]; 3],
}

impl InstanceRaw {
    const ATTRIBUTES: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x3,
        8 => Float32x3,
        9 => Float32x3
    ];

    pub fn new(model: &Matrix4, normal: &Mat3) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal: [
                [normal[0], normal[1], normal[2]],
                [normal[3], normal[4], normal[5]],
                [normal[6], normal[7], normal[8]],
            ],
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Everything the renderer uploads for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub uniforms: FrameUniforms,
    pub instances: Vec<InstanceRaw>,
}
