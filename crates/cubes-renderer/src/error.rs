//! Error types for the renderer crate

use cubes_math::MathError;
use thiserror::Error;

use crate::shader::ShaderStage;

/// Failures from the shader compile-and-link helper. `log` carries the
/// compiler or validation diagnostic verbatim.
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("{stage} shader compilation failed:\n{log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program linking failed:\n{log}")]
    Link { log: String },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// Camera, projection or model parameters were degenerate this frame.
    #[error("frame transform failed: {0}")]
    Math(#[from] MathError),

    #[error("scene has {count} cubes but the instance buffer holds {capacity}")]
    TooManyCubes { count: usize, capacity: usize },
}
