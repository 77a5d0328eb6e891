//! 4x4 transform matrices for the GPU pipeline.
//! Column-major storage: element at (row, col) = m[col * 4 + row].
//!
//! Column-vector convention: `a * b` applies `b` first. `translate` and
//! `rotate` compose on the right, so `identity().translate(p).rotate(..)`
//! spins the object in place and then moves it to `p`.

use std::f32::consts::PI;
use std::ops::Mul;

use crate::error::MathError;
use crate::vec3::{self, Vec3};

/// Upper-left 3x3 block, column-major: element at (row, col) = m[col * 3 + row].
pub type Mat3 = [f32; 9];

// ─── Matrix4 ──────────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    m: [f32; 16],
}

impl Default for Matrix4 {
    fn default() -> Self { Self::identity() }
}

impl Matrix4 {
    pub const IDENTITY: Self = Self {
        m: [1., 0., 0., 0.,
            0., 1., 0., 0.,
            0., 0., 1., 0.,
            0., 0., 0., 1.],
    };

    pub fn identity() -> Self { Self::IDENTITY }

    pub fn from_cols_array(m: [f32; 16]) -> Self { Self { m } }

    pub fn to_cols_array(&self) -> [f32; 16] { self.m }

    /// Layout expected by `mat4x4<f32>` uniforms: one inner array per column.
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        let m = &self.m;
        [
            [m[ 0], m[ 1], m[ 2], m[ 3]],
            [m[ 4], m[ 5], m[ 6], m[ 7]],
            [m[ 8], m[ 9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ]
    }

    pub fn as_array(&self) -> &[f32; 16] { &self.m }

    #[inline] pub fn at(&self, row: usize, col: usize) -> f32 { self.m[col * 4 + row] }

    pub fn col(&self, col: usize) -> [f32; 4] {
        let i = col * 4;
        [self.m[i], self.m[i + 1], self.m[i + 2], self.m[i + 3]]
    }

    pub fn translation(&self) -> Vec3 { [self.m[12], self.m[13], self.m[14]] }

    /// Returns `self * T(x, y, z)`.
    ///
    /// Only the translation column changes, so it is recomputed directly as
    /// `col0 * x + col1 * y + col2 * z + col3` instead of running a full
    /// 4x4 product. Non-finite inputs propagate into the translation column.
    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        let m = &self.m;
        let mut out = self.m;
        for row in 0..4 {
            out[12 + row] = m[row] * x + m[4 + row] * y + m[8 + row] * z + m[12 + row];
        }
        Self { m: out }
    }

    /// Returns `self * R`, where `R` rotates `angle_degrees` counter-clockwise
    /// (right-hand rule) about the axis `(x, y, z)`.
    ///
    /// The axis is renormalized unless its length is exactly `1.0`. A zero or
    /// non-finite axis, or a non-finite angle, is rejected. The translation
    /// column of `self` passes through unchanged.
    pub fn rotate(self, angle_degrees: f32, x: f32, y: f32, z: f32) -> Result<Self, MathError> {
        if !angle_degrees.is_finite() {
            return Err(MathError::InvalidArgument("rotation angle is not finite"));
        }
        let axis = [x, y, z];
        if !vec3::is_finite(axis) {
            return Err(MathError::InvalidArgument("rotation axis is not finite"));
        }
        let norm = vec3::length(axis);
        if norm == 0.0 {
            return Err(MathError::InvalidArgument("rotation axis has zero length"));
        }
        if !norm.is_finite() {
            return Err(MathError::InvalidArgument("rotation axis length overflows"));
        }
        let [x, y, z] = if norm != 1.0 { [x / norm, y / norm, z / norm] } else { axis };

        let radians = angle_degrees * PI / 180.0;
        let (s, c) = radians.sin_cos();
        let t = 1.0 - c;

        // Rodrigues, expanded. Columns of R.
        let r: Mat3 = [
            x * x * t + c,     x * y * t + z * s, x * z * t - y * s,
            x * y * t - z * s, y * y * t + c,     y * z * t + x * s,
            x * z * t + y * s, y * z * t - x * s, z * z * t + c,
        ];

        let m = &self.m;
        let mut out = self.m;
        for col in 0..3 {
            let (r0, r1, r2) = (r[col * 3], r[col * 3 + 1], r[col * 3 + 2]);
            for row in 0..4 {
                out[col * 4 + row] = m[row] * r0 + m[4 + row] * r1 + m[8 + row] * r2;
            }
        }
        Ok(Self { m: out })
    }

    /// OpenGL-style right-handed perspective projection.
    ///
    /// View-space `z = -near` maps to NDC `-1` and `z = -far` to `+1` after
    /// the homogeneous divide; `m[11] = -1` copies `-z` into `w`.
    pub fn perspective(fovy_degrees: f32, aspect: f32, near: f32, far: f32) -> Result<Self, MathError> {
        if ![fovy_degrees, aspect, near, far].iter().all(|v| v.is_finite()) {
            return Err(MathError::InvalidArgument("perspective parameters must be finite"));
        }
        if fovy_degrees <= 0.0 || fovy_degrees >= 180.0 {
            return Err(MathError::InvalidArgument("field of view must be within (0, 180) degrees"));
        }
        if aspect <= 0.0 {
            return Err(MathError::InvalidArgument("aspect ratio must be positive"));
        }
        if near <= 0.0 || far <= near {
            return Err(MathError::InvalidArgument("clip planes must satisfy 0 < near < far"));
        }

        let tan_half_fovy = (fovy_degrees * PI / 360.0).tan();
        let depth = far - near;

        let mut m = [0.0f32; 16];
        m[0]  = 1.0 / (aspect * tan_half_fovy);
        m[5]  = 1.0 / tan_half_fovy;
        m[10] = -(far + near) / depth;
        m[11] = -1.0;
        m[14] = -(2.0 * far * near) / depth;
        if !m.iter().all(|v| v.is_finite()) {
            return Err(MathError::InvalidArgument("perspective parameters overflow"));
        }
        Ok(Self { m })
    }

    /// View matrix for a camera at `eye` looking at `center`.
    ///
    /// Rows of the rotation block are the right (`s`), up (`u`) and back
    /// (`-f`) axes; the translation re-expresses `eye` as the origin.
    /// Coincident `eye`/`center` and an `up` that is zero or parallel to
    /// the view direction are rejected.
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Result<Self, MathError> {
        if !(vec3::is_finite(eye) && vec3::is_finite(center) && vec3::is_finite(up)) {
            return Err(MathError::InvalidArgument("look_at vectors must be finite"));
        }
        let dir = vec3::sub(center, eye);
        if !vec3::length(dir).is_finite() {
            return Err(MathError::InvalidArgument("eye and center are too far apart"));
        }
        let f = vec3::normalize(dir)
            .ok_or(MathError::InvalidArgument("eye and center coincide"))?;
        let s = vec3::normalize(vec3::cross(f, up))
            .ok_or(MathError::InvalidArgument("up is zero or parallel to the view direction"))?;
        // s and f are unit and perpendicular, so u is already unit length.
        let u = vec3::cross(s, f);

        let m = [
            s[0], u[0], -f[0], 0.,
            s[1], u[1], -f[1], 0.,
            s[2], u[2], -f[2], 0.,
            -vec3::dot(s, eye), -vec3::dot(u, eye), vec3::dot(f, eye), 1.,
        ];
        if !m.iter().all(|v| v.is_finite()) {
            return Err(MathError::InvalidArgument("eye is too far from the origin"));
        }
        Ok(Self { m })
    }

    pub fn transpose(&self) -> Self {
        let mut t = [0.0f32; 16];
        for row in 0..4 {
            for col in 0..4 {
                t[row * 4 + col] = self.m[col * 4 + row];
            }
        }
        Self { m: t }
    }

    pub fn mul_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let m = &self.m;
        let mut out = [0.0f32; 4];
        for (row, o) in out.iter_mut().enumerate() {
            *o = m[row] * v[0] + m[4 + row] * v[1] + m[8 + row] * v[2] + m[12 + row] * v[3];
        }
        out
    }

    /// Inverse-transpose of the upper-left 3x3 block, for transforming normals.
    ///
    /// Singularity is judged relative to the largest entry of the block, so
    /// a uniform scale of any finite size is invertible.
    pub fn normal_matrix(&self) -> Result<Mat3, MathError> {
        let a = |row: usize, col: usize| self.m[col * 4 + row];
        let largest = [0, 1, 2, 4, 5, 6, 8, 9, 10]
            .iter()
            .fold(0.0f32, |acc, &i| acc.max(self.m[i].abs()));

        let cof = [
            [  a(1,1) * a(2,2) - a(1,2) * a(2,1),
             -(a(1,0) * a(2,2) - a(1,2) * a(2,0)),
               a(1,0) * a(2,1) - a(1,1) * a(2,0) ],
            [-(a(0,1) * a(2,2) - a(0,2) * a(2,1)),
               a(0,0) * a(2,2) - a(0,2) * a(2,0),
             -(a(0,0) * a(2,1) - a(0,1) * a(2,0)) ],
            [  a(0,1) * a(1,2) - a(0,2) * a(1,1),
             -(a(0,0) * a(1,2) - a(0,2) * a(1,0)),
               a(0,0) * a(1,1) - a(0,1) * a(1,0) ],
        ];
        let det = a(0,0) * cof[0][0] + a(0,1) * cof[0][1] + a(0,2) * cof[0][2];
        if !det.is_finite() || det.abs() <= f32::EPSILON * largest * largest * largest {
            return Err(MathError::Singular);
        }

        // (A^-1)^T = cofactor(A) / det
        let mut out = [0.0f32; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[col * 3 + row] = cof[row][col] / det;
            }
        }
        if !out.iter().all(|v| v.is_finite()) {
            return Err(MathError::Singular);
        }
        Ok(out)
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        let (a, b) = (&self.m, &rhs.m);
        let mut c = [0.0f32; 16];
        for col in 0..4 {
            for row in 0..4 {
                for k in 0..4 {
                    c[col * 4 + row] += a[k * 4 + row] * b[col * 4 + k];
                }
            }
        }
        Matrix4 { m: c }
    }
}
