//! Demo constants, gathered in one place so the app and tests share them.

use cubes_math::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    /// Initial window inner size in logical pixels.
    pub window_size: [f32; 2],
    pub clear_color: Vec3,

    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,

    pub camera_position: Vec3,
    pub camera_front: Vec3,
    pub camera_up: Vec3,

    pub light_color: Vec3,
    /// Horizontal radius and vertical amplitude of the light's orbit.
    pub light_orbit_radius: f32,
    pub light_orbit_height: f32,

    pub object_color: Vec3,
    pub cube_positions: Vec<Vec3>,
    pub spin_axis: Vec3,
    /// Degrees per second.
    pub spin_rate: f32,
    /// Extra degrees of rotation per cube index.
    pub spin_phase: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: String::from("Lit Cubes"),
            window_size: [800.0, 600.0],
            clear_color: [0.1, 0.1, 0.1],

            fov_y_degrees: 45.0,
            near: 0.1,
            far: 100.0,

            camera_position: [0.0, 0.0, 3.0],
            camera_front: [0.0, 0.0, -1.0],
            camera_up: [0.0, 1.0, 0.0],

            light_color: [1.0, 1.0, 1.0],
            light_orbit_radius: 2.0,
            light_orbit_height: 1.0,

            object_color: [1.0, 0.5, 0.0],
            cube_positions: vec![
                [ 0.0,  0.0,   0.0],
                [ 2.0,  5.0, -15.0],
                [-1.5, -2.2,  -2.5],
                [-3.8, -2.0, -12.3],
                [ 2.4, -0.4,  -3.5],
            ],
            spin_axis: [1.0, 0.3, 0.5],
            spin_rate: 25.0,
            spin_phase: 20.0,
        }
    }
}
