//! Small transform helpers on top of cgmath, plus the flattening uniforms
//! expect.
//!
//! Matrices built here are handed to [`Program::set_uniform`] via
//! [`as_uniform`], which lays the values out row-major; the upload path
//! transposes, so the device ends up with the standard column-major layout.
//!
//! [`Program::set_uniform`]: ../program/struct.Program.html#method.set_uniform
//! [`as_uniform`]: fn.as_uniform.html

use cgmath::prelude::*;
use cgmath::{Deg, Matrix4, Vector3};

pub use cgmath::{Deg as Degrees, Matrix4 as Mat4, Vector3 as Vec3};

#[inline]
pub fn identity() -> Matrix4<f32> {
    Matrix4::identity()
}

/// A right-handed perspective projection with a vertical field of view in
/// degrees.
pub fn perspective(fovy: f32, aspect: f32, near: f32, far: f32) -> Matrix4<f32> {
    cgmath::perspective(Deg(fovy), aspect, near, far)
}

pub fn translate(m: Matrix4<f32>, v: Vector3<f32>) -> Matrix4<f32> {
    m * Matrix4::from_translation(v)
}

/// Rotates around an arbitrary axis by an angle in degrees. The axis does
/// not have to be normalized.
pub fn rotate(m: Matrix4<f32>, angle: f32, axis: Vector3<f32>) -> Matrix4<f32> {
    m * Matrix4::from_axis_angle(axis.normalize(), Deg(angle))
}

pub fn scale(m: Matrix4<f32>, v: Vector3<f32>) -> Matrix4<f32> {
    m * Matrix4::from_nonuniform_scale(v.x, v.y, v.z)
}

#[inline]
pub fn cross(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    a.cross(b)
}

#[inline]
pub fn dot(a: Vector3<f32>, b: Vector3<f32>) -> f32 {
    a.dot(b)
}

#[inline]
pub fn normalize(v: Vector3<f32>) -> Vector3<f32> {
    v.normalize()
}

/// Flattens a matrix to the row-major float array `set_uniform` expects.
pub fn as_uniform(m: &Matrix4<f32>) -> [f32; 16] {
    [
        m.x.x, m.y.x, m.z.x, m.w.x, //
        m.x.y, m.y.y, m.z.y, m.w.y, //
        m.x.z, m.y.z, m.z.z, m.w.z, //
        m.x.w, m.y.w, m.z.w, m.w.w,
    ]
}
