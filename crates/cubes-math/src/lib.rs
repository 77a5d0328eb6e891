//! Column-major 4x4 matrix math for a column-vector, right-multiply pipeline.
//!
//! All constructors are pure value transforms. Inputs that would divide by
//! zero (zero axes, coincident eye/center, empty clip ranges) or overflow
//! `f32` are rejected with [`MathError::InvalidArgument`] instead of
//! producing NaN or infinity. `translate` is the exception: it never fails.

pub mod error;
pub mod mat4;
pub mod vec3;

#[cfg(test)]
mod tests;

pub use error::MathError;
pub use mat4::{Mat3, Matrix4};
pub use vec3::Vec3;
