//! The graphics backend layer.
//!
//! All GPU work funnels through the [`Visitor`] trait so that the program
//! builder and the drawable sets never touch raw GL calls directly. The
//! default implementation drives a real OpenGL 3.2+ context; the headless
//! implementation records nothing and succeeds at everything, which keeps
//! the higher layers testable on machines without a GPU.

pub mod gl;
pub mod headless;

use crate::errors::Result;
use crate::variables::{BaseType, ShaderStage};

/// The low-level device interface.
///
/// Every method is `unsafe` since implementations issue raw graphics calls
/// that require a live context on the current thread.
pub trait Visitor {
    /// Compiles one shader object from source. On compile failure the
    /// shader object is released before the error is returned.
    unsafe fn create_shader(&mut self, stage: ShaderStage, source: &str) -> Result<u32>;
    unsafe fn delete_shader(&mut self, shader: u32) -> Result<()>;

    /// Links the shader objects into a program. On link failure the program
    /// object is released before the error is returned.
    unsafe fn link_program(&mut self, shaders: &[u32]) -> Result<u32>;
    unsafe fn delete_program(&mut self, program: u32) -> Result<()>;
    unsafe fn bind_program(&mut self, program: u32) -> Result<()>;

    unsafe fn attribute_location(&mut self, program: u32, name: &str) -> Result<i32>;
    unsafe fn uniform_location(&mut self, program: u32, name: &str) -> Result<i32>;

    unsafe fn create_buffer(&mut self) -> Result<u32>;
    unsafe fn update_buffer(&mut self, buffer: u32, data: &[u8]) -> Result<()>;
    unsafe fn delete_buffer(&mut self, buffer: u32) -> Result<()>;

    unsafe fn create_vertex_array(&mut self) -> Result<u32>;
    unsafe fn bind_vertex_array(&mut self, vao: u32) -> Result<()>;
    unsafe fn delete_vertex_array(&mut self, vao: u32) -> Result<()>;

    /// Points an attribute location at a buffer of tightly packed values.
    unsafe fn bind_attribute(
        &mut self,
        buffer: u32,
        location: i32,
        components: u32,
        base: BaseType,
    ) -> Result<()>;
    unsafe fn enable_attribute(&mut self, location: i32) -> Result<()>;
    unsafe fn disable_attribute(&mut self, location: i32) -> Result<()>;

    /// Uploads `count` matrices of `cols` x `rows` floats to a uniform
    /// location. Vectors go through the same path as single-row matrices.
    unsafe fn set_uniform_matrix(
        &mut self,
        location: i32,
        cols: u32,
        rows: u32,
        count: u32,
        transpose: bool,
        data: &[f32],
    ) -> Result<()>;

    unsafe fn draw_triangles(&mut self, vertices: u32) -> Result<()>;

    /// Drains the device error queue, returning the first error found.
    unsafe fn check_errors(&mut self) -> Result<()>;
}

/// Creates a visitor driving the OpenGL context current on this thread.
pub unsafe fn new() -> Result<Box<dyn Visitor>> {
    Ok(Box::new(self::gl::GLVisitor::new()?))
}

/// Creates a no-op visitor for tests and headless environments.
pub fn new_headless() -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new())
}
