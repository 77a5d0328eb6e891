//! Plain `[f32; 3]` helpers used by the matrix constructors and the scene.

pub type Vec3 = [f32; 3];

#[inline] pub fn add(a: Vec3, b: Vec3) -> Vec3 { [a[0] + b[0], a[1] + b[1], a[2] + b[2]] }

#[inline] pub fn sub(a: Vec3, b: Vec3) -> Vec3 { [a[0] - b[0], a[1] - b[1], a[2] - b[2]] }

#[inline] pub fn scale(v: Vec3, s: f32) -> Vec3 { [v[0] * s, v[1] * s, v[2] * s] }

#[inline] pub fn dot(a: Vec3, b: Vec3) -> f32 { a[0] * b[0] + a[1] * b[1] + a[2] * b[2] }

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline] pub fn length(v: Vec3) -> f32 { dot(v, v).sqrt() }

pub fn is_finite(v: Vec3) -> bool { v.iter().all(|c| c.is_finite()) }

/// Unit vector in the direction of `v`, or `None` when its length is zero
/// or does not fit in an `f32`.
pub fn normalize(v: Vec3) -> Option<Vec3> {
    let len = length(v);
    if len > 0.0 && len.is_finite() { Some(scale(v, 1.0 / len)) } else { None }
}
