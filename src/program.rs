//! Builds GLSL programs and exposes the variable tables discovered in their
//! sources.

use std::fs;
use std::path::Path;

use crate::backends::Visitor;
use crate::errors::{Error, Result};
use crate::parser::Scanner;
use crate::variables::{BaseType, InputVariable, ShaderStage, UniformVariable};

/// A linked GLSL program together with the `in` and `uniform` variables
/// discovered while scanning its sources.
#[derive(Debug)]
pub struct Program {
    id: u32,
    shaders: Vec<u32>,
    inputs: Vec<InputVariable>,
    uniforms: Vec<UniformVariable>,
}

impl Program {
    /// Compiles the listed source files, scans them for variable
    /// declarations, links the program and resolves every discovered
    /// variable to its location. The stage of each file is inferred from
    /// its suffix.
    ///
    /// On any failure every object created so far is released before the
    /// error is returned.
    pub fn build<P: AsRef<Path>>(visitor: &mut dyn Visitor, files: &[P]) -> Result<Program> {
        let mut shaders = Vec::new();
        let mut program = None;

        let rv = Self::try_build(visitor, files, &mut shaders, &mut program);
        if rv.is_err() {
            unsafe {
                for shader in shaders.drain(..) {
                    let _ = visitor.delete_shader(shader);
                }

                if let Some(id) = program.take() {
                    let _ = visitor.delete_program(id);
                }
            }
        }

        rv
    }

    fn try_build<P: AsRef<Path>>(
        visitor: &mut dyn Visitor,
        files: &[P],
        shaders: &mut Vec<u32>,
        program: &mut Option<u32>,
    ) -> Result<Program> {
        let mut scanner = Scanner::new();

        for file in files {
            let path = file.as_ref();
            let stage = ShaderStage::from_path(path)?;
            let source =
                fs::read_to_string(path).map_err(|_| Error::FileNotFound(path.to_owned()))?;

            let shader = unsafe { visitor.create_shader(stage, &source)? };
            shaders.push(shader);

            // Sources that fail to compile never reach the variable tables.
            scanner.scan_source(stage, &source);
        }

        let id = unsafe { visitor.link_program(shaders)? };
        *program = Some(id);

        unsafe {
            visitor.bind_program(id)?;
        }

        let (mut inputs, mut uniforms) = scanner.finish();
        for v in &mut inputs {
            v.location = unsafe { visitor.attribute_location(id, &v.name)? };
        }

        for v in &mut uniforms {
            v.location = unsafe { visitor.uniform_location(id, &v.name)? };
        }

        info!(
            "Linked program {} with {} input(s) and {} uniform(s).",
            id,
            inputs.len(),
            uniforms.len()
        );

        Ok(Program {
            id,
            shaders: shaders.drain(..).collect(),
            inputs,
            uniforms,
        })
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn inputs(&self) -> &[InputVariable] {
        &self.inputs
    }

    #[inline]
    pub fn uniforms(&self) -> &[UniformVariable] {
        &self.uniforms
    }

    /// Looks up a discovered vertex input by name.
    pub fn input(&self, name: &str) -> Option<&InputVariable> {
        self.inputs.iter().find(|v| v.name == name)
    }

    /// Looks up a discovered uniform by name.
    pub fn uniform(&self, name: &str) -> Option<&UniformVariable> {
        self.uniforms.iter().find(|v| v.name == name)
    }

    /// Makes this the active program.
    pub fn bind(&self, visitor: &mut dyn Visitor) -> Result<()> {
        unsafe { visitor.bind_program(self.id) }
    }

    /// Uploads float data to a uniform by name.
    ///
    /// Vectors and matrices of floats are supported; `data` holds the whole
    /// array for array uniforms, in row-major order when the uniform is a
    /// matrix. Unknown names and unsupported shapes are diagnosed and
    /// skipped rather than failing the frame.
    pub fn set_uniform(&self, visitor: &mut dyn Visitor, name: &str, data: &[f32]) -> Result<()> {
        let v = match self.uniform(name) {
            Some(v) => v,
            None => {
                warn!("No uniform named [{}] in program {}.", name, self.id);
                return Ok(());
            }
        };

        if v.base != BaseType::Float {
            warn!("Uniform [{}] does not take float data.", name);
            return Ok(());
        }

        // The upload reads the full declared shape, so short slices must
        // never reach the device.
        let len = (v.components * v.rows.max(1) * v.count) as usize;
        if data.len() < len {
            warn!(
                "Uniform [{}] needs {} float(s), slice holds {}.",
                name,
                len,
                data.len()
            );
            return Ok(());
        }

        match (v.components, v.rows) {
            (cols @ 2..=4, 0) => unsafe {
                // Vectors ride the single-row matrix upload path.
                visitor.set_uniform_matrix(v.location, cols, cols, v.count, v.transpose, data)
            },
            (cols @ 2..=4, rows @ 2..=4) => unsafe {
                visitor.set_uniform_matrix(v.location, cols, rows, v.count, v.transpose, data)
            },
            _ => {
                warn!(
                    "Uniform [{}] has unsupported dimensions {}x{}.",
                    name, v.components, v.rows
                );
                Ok(())
            }
        }
    }

    /// Releases the program and its shader objects.
    pub fn delete(mut self, visitor: &mut dyn Visitor) -> Result<()> {
        unsafe {
            for shader in self.shaders.drain(..) {
                visitor.delete_shader(shader)?;
            }

            visitor.delete_program(self.id)
        }
    }
}
