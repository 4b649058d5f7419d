use std::ffi::CString;
use std::ptr;

use gl;
use gl::types::*;

use crate::errors::{Error, Result};
use crate::variables::{BaseType, ShaderStage};

use super::super::Visitor;

/// The OpenGL 3.2+ implementation of [`Visitor`](../trait.Visitor.html).
///
/// Expects a context to be current on the calling thread and the function
/// pointers to be loaded, which [`Window::new`](../../window/struct.Window.html)
/// takes care of.
#[derive(Debug)]
pub struct GLVisitor {
    binded_program: Option<u32>,
    binded_vao: Option<u32>,
}

impl GLVisitor {
    pub unsafe fn new() -> Result<Self> {
        let visitor = GLVisitor {
            binded_program: None,
            binded_vao: None,
        };

        check()?;
        Ok(visitor)
    }
}

impl Visitor for GLVisitor {
    unsafe fn create_shader(&mut self, stage: ShaderStage, source: &str) -> Result<u32> {
        let shader = gl::CreateShader(GLenum::from(stage));
        if shader == 0 {
            return Err(Error::CreationFailure("shader"));
        }

        let source = CString::new(source.as_bytes())
            .map_err(|_| Error::CompileFailure(stage, "Source contains a nul byte.".into()))?;
        gl::ShaderSource(shader, 1, &source.as_ptr(), ptr::null());
        gl::CompileShader(shader);

        let mut status = gl::FALSE as GLint;
        gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
        if status != gl::TRUE as GLint {
            let mut len = 0;
            gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);

            let mut buf = vec![0u8; len as usize];
            gl::GetShaderInfoLog(shader, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
            gl::DeleteShader(shader);

            let log = String::from_utf8_lossy(&buf)
                .trim_end_matches('\0')
                .to_string();
            error!("{:?} shader failed to compile:\n{}", stage, log);
            return Err(Error::CompileFailure(stage, log));
        }

        check()?;
        Ok(shader)
    }

    unsafe fn delete_shader(&mut self, shader: u32) -> Result<()> {
        gl::DeleteShader(shader);
        check()
    }

    unsafe fn link_program(&mut self, shaders: &[u32]) -> Result<u32> {
        let program = gl::CreateProgram();
        if program == 0 {
            return Err(Error::CreationFailure("program"));
        }

        for &shader in shaders {
            gl::AttachShader(program, shader);
        }

        gl::LinkProgram(program);

        let mut status = gl::FALSE as GLint;
        gl::GetProgramiv(program, gl::LINK_STATUS, &mut status);
        if status != gl::TRUE as GLint {
            let mut len = 0;
            gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);

            let mut buf = vec![0u8; len as usize];
            gl::GetProgramInfoLog(program, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
            gl::DeleteProgram(program);

            let log = String::from_utf8_lossy(&buf)
                .trim_end_matches('\0')
                .to_string();
            error!("Program failed to link:\n{}", log);
            return Err(Error::LinkFailure(log));
        }

        check()?;
        Ok(program)
    }

    unsafe fn delete_program(&mut self, program: u32) -> Result<()> {
        if self.binded_program == Some(program) {
            self.binded_program = None;
            gl::UseProgram(0);
        }

        gl::DeleteProgram(program);
        check()
    }

    unsafe fn bind_program(&mut self, program: u32) -> Result<()> {
        if self.binded_program != Some(program) {
            gl::UseProgram(program);
            self.binded_program = Some(program);
        }

        check()
    }

    unsafe fn attribute_location(&mut self, program: u32, name: &str) -> Result<i32> {
        let name = CString::new(name.as_bytes())
            .map_err(|_| Error::Backend("Attribute name contains a nul byte.".into()))?;
        let location = gl::GetAttribLocation(program, name.as_ptr());

        check()?;
        Ok(location)
    }

    unsafe fn uniform_location(&mut self, program: u32, name: &str) -> Result<i32> {
        let name = CString::new(name.as_bytes())
            .map_err(|_| Error::Backend("Uniform name contains a nul byte.".into()))?;
        let location = gl::GetUniformLocation(program, name.as_ptr());

        check()?;
        Ok(location)
    }

    unsafe fn create_buffer(&mut self) -> Result<u32> {
        let mut buffer = 0;
        gl::GenBuffers(1, &mut buffer);
        if buffer == 0 {
            return Err(Error::CreationFailure("buffer"));
        }

        check()?;
        Ok(buffer)
    }

    unsafe fn update_buffer(&mut self, buffer: u32, data: &[u8]) -> Result<()> {
        gl::BindBuffer(gl::ARRAY_BUFFER, buffer);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            data.len() as isize,
            data.as_ptr() as *const ::std::os::raw::c_void,
            gl::STATIC_DRAW,
        );

        check()
    }

    unsafe fn delete_buffer(&mut self, buffer: u32) -> Result<()> {
        gl::DeleteBuffers(1, &buffer);
        check()
    }

    unsafe fn create_vertex_array(&mut self) -> Result<u32> {
        let mut vao = 0;
        gl::GenVertexArrays(1, &mut vao);
        if vao == 0 {
            return Err(Error::CreationFailure("vertex array"));
        }

        check()?;
        Ok(vao)
    }

    unsafe fn bind_vertex_array(&mut self, vao: u32) -> Result<()> {
        if self.binded_vao != Some(vao) {
            gl::BindVertexArray(vao);
            self.binded_vao = Some(vao);
        }

        check()
    }

    unsafe fn delete_vertex_array(&mut self, vao: u32) -> Result<()> {
        if self.binded_vao == Some(vao) {
            self.binded_vao = None;
            gl::BindVertexArray(0);
        }

        gl::DeleteVertexArrays(1, &vao);
        check()
    }

    unsafe fn bind_attribute(
        &mut self,
        buffer: u32,
        location: i32,
        components: u32,
        base: BaseType,
    ) -> Result<()> {
        gl::BindBuffer(gl::ARRAY_BUFFER, buffer);
        gl::VertexAttribPointer(
            location as GLuint,
            components as GLint,
            GLenum::from(base),
            gl::FALSE,
            0,
            ptr::null(),
        );

        check()
    }

    unsafe fn enable_attribute(&mut self, location: i32) -> Result<()> {
        gl::EnableVertexAttribArray(location as GLuint);
        check()
    }

    unsafe fn disable_attribute(&mut self, location: i32) -> Result<()> {
        gl::DisableVertexAttribArray(location as GLuint);
        check()
    }

    unsafe fn set_uniform_matrix(
        &mut self,
        location: i32,
        cols: u32,
        rows: u32,
        count: u32,
        transpose: bool,
        data: &[f32],
    ) -> Result<()> {
        let n = count as GLsizei;
        let transpose = if transpose { gl::TRUE } else { gl::FALSE };
        let ptr = data.as_ptr();

        match (cols, rows) {
            (2, 2) => gl::UniformMatrix2fv(location, n, transpose, ptr),
            (2, 3) => gl::UniformMatrix2x3fv(location, n, transpose, ptr),
            (2, 4) => gl::UniformMatrix2x4fv(location, n, transpose, ptr),
            (3, 2) => gl::UniformMatrix3x2fv(location, n, transpose, ptr),
            (3, 3) => gl::UniformMatrix3fv(location, n, transpose, ptr),
            (3, 4) => gl::UniformMatrix3x4fv(location, n, transpose, ptr),
            (4, 2) => gl::UniformMatrix4x2fv(location, n, transpose, ptr),
            (4, 3) => gl::UniformMatrix4x3fv(location, n, transpose, ptr),
            (4, 4) => gl::UniformMatrix4fv(location, n, transpose, ptr),
            _ => {
                return Err(Error::Backend(format!(
                    "No matrix upload for {}x{} dimensions.",
                    cols, rows
                )));
            }
        }

        check()
    }

    unsafe fn draw_triangles(&mut self, vertices: u32) -> Result<()> {
        gl::DrawArrays(gl::TRIANGLES, 0, vertices as GLsizei);
        check()
    }

    unsafe fn check_errors(&mut self) -> Result<()> {
        check()
    }
}

unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),

        gl::INVALID_ENUM => Err(Error::Backend(
            "An unacceptable value is specified for an enumerated argument.".into(),
        )),

        gl::INVALID_VALUE => Err(Error::Backend(
            "A numeric argument is out of range.".into(),
        )),

        gl::INVALID_OPERATION => Err(Error::Backend(
            "The specified operation is not allowed in the current state.".into(),
        )),

        gl::INVALID_FRAMEBUFFER_OPERATION => Err(Error::Backend(
            "The framebuffer object is not complete.".into(),
        )),

        gl::OUT_OF_MEMORY => Err(Error::Backend(
            "There is not enough memory left to execute the command.".into(),
        )),

        _ => Err(Error::Backend("Oops, Unknown OpenGL error.".into())),
    }
}
