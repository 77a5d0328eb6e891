//! Lit cube scene on top of `cubes-math`.
//!
//! Pure parts (mesh, config, scene, uniform layouts) are usable without a
//! GPU; [`CubeRenderer`] owns the wgpu pipeline and buffers.

pub mod config;
pub mod error;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod shader;
pub mod uniforms;

pub use config::DemoConfig;
pub use error::{RenderError, ShaderError};
pub use renderer::CubeRenderer;
pub use scene::{Camera, Light, Scene, SceneParams};
pub use shader::{ProgramDesc, ShaderProgram, ShaderStage};
pub use uniforms::{FrameData, FrameUniforms, InstanceRaw};
