//! Per-frame scene state.
//!
//! Nothing here is global: the host builds a [`SceneParams`] every frame
//! from the elapsed time and the viewport size, and [`Scene::build_frame`]
//! turns it into the matrices the GPU needs.

use cubes_math::{MathError, Matrix4, Vec3, vec3};

use crate::config::DemoConfig;
use crate::uniforms::{FrameData, FrameUniforms, InstanceRaw};

// ─── Camera / light ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    pub fn view(&self) -> Result<Matrix4, MathError> {
        Matrix4::look_at(self.position, vec3::add(self.position, self.front), self.up)
    }

    pub fn projection(&self, aspect: f32) -> Result<Matrix4, MathError> {
        Matrix4::perspective(self.fov_y_degrees, aspect, self.near, self.far)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
}

/// Light position on its orbit at time `t` seconds.
pub fn orbit_light(t: f32, radius: f32, height: f32) -> Vec3 {
    [t.sin() * radius, (t / 2.0).sin() * height, t.cos() * radius]
}

// ─── SceneParams ──────────────────────────────────────────────────────────────

/// Inputs to a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    /// Seconds since the demo started.
    pub time: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub camera: Camera,
    pub light: Light,
}

// ─── Scene ────────────────────────────────────────────────────────────────────

/// The static part of the demo: where the cubes are and how they spin.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub cubes: Vec<Vec3>,
    pub spin_axis: Vec3,
    pub spin_rate: f32,
    pub spin_phase: f32,
    pub object_color: Vec3,
    camera: Camera,
    light_color: Vec3,
    light_orbit: (f32, f32),
}

impl Scene {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            cubes: config.cube_positions.clone(),
            spin_axis: config.spin_axis,
            spin_rate: config.spin_rate,
            spin_phase: config.spin_phase,
            object_color: config.object_color,
            camera: Camera {
                position: config.camera_position,
                front: config.camera_front,
                up: config.camera_up,
                fov_y_degrees: config.fov_y_degrees,
                near: config.near,
                far: config.far,
            },
            light_color: config.light_color,
            light_orbit: (config.light_orbit_radius, config.light_orbit_height),
        }
    }

    /// Frame inputs at `time` for a viewport with the given aspect ratio.
    pub fn params(&self, time: f32, aspect: f32) -> SceneParams {
        let (radius, height) = self.light_orbit;
        SceneParams {
            time,
            aspect,
            camera: self.camera,
            light: Light { position: orbit_light(time, radius, height), color: self.light_color },
        }
    }

    /// Spin angle of cube `index` at `time`, in degrees.
    pub fn spin_angle(&self, index: usize, time: f32) -> f32 {
        self.spin_phase * index as f32 + time * self.spin_rate
    }

    /// Move cube `index` into place, then spin it about its own center.
    pub fn model_matrix(&self, index: usize, time: f32) -> Result<Matrix4, MathError> {
        let [x, y, z] = *self.cubes.get(index)
            .ok_or(MathError::InvalidArgument("cube index out of range"))?;
        let [ax, ay, az] = self.spin_axis;
        Matrix4::identity()
            .translate(x, y, z)
            .rotate(self.spin_angle(index, time), ax, ay, az)
    }

    pub fn build_frame(&self, params: &SceneParams) -> Result<FrameData, MathError> {
        let view = params.camera.view()?;
        let projection = params.camera.projection(params.aspect)?;

        let instances = (0..self.cubes.len())
            .map(|i| {
                let model = self.model_matrix(i, params.time)?;
                Ok(InstanceRaw::new(&model, &model.normal_matrix()?))
            })
            .collect::<Result<Vec<_>, MathError>>()?;

        let uniforms = FrameUniforms::new(
            &view,
            &projection,
            params.light.position,
            params.camera.position,
            params.light.color,
            self.object_color,
        );
        Ok(FrameData { uniforms, instances })
    }
}
