//! Assembles per-line declarations into the variable tables of a program.

use crate::variables::{InputVariable, ShaderStage, UniformVariable};

use super::{parse_line, Declaration, Qualifier};

/// Accumulates variable declarations across the source of every stage fed to
/// it. Source may arrive in arbitrary chunks; lines split across chunk
/// boundaries are reassembled before parsing.
#[derive(Debug, Default)]
pub struct Scanner {
    inputs: Vec<InputVariable>,
    uniforms: Vec<UniformVariable>,
    pending: String,
}

impl Scanner {
    pub fn new() -> Scanner {
        Scanner::default()
    }

    /// Scans a sequence of source chunks belonging to `stage`. Any trailing
    /// partial line is flushed at the end, so one call covers one complete
    /// shader source.
    pub fn scan(&mut self, stage: ShaderStage, chunks: &[&str]) {
        let vertex = stage == ShaderStage::Vertex;

        for chunk in chunks {
            for c in chunk.chars() {
                if c == '\n' {
                    self.flush_line(vertex);
                } else {
                    self.pending.push(c);
                }
            }
        }

        if !self.pending.is_empty() {
            self.flush_line(vertex);
        }
    }

    /// Scans one complete shader source held in a single string.
    pub fn scan_source(&mut self, stage: ShaderStage, source: &str) {
        self.scan(stage, &[source]);
    }

    pub fn inputs(&self) -> &[InputVariable] {
        &self.inputs
    }

    pub fn uniforms(&self) -> &[UniformVariable] {
        &self.uniforms
    }

    /// Consumes the scanner, yielding the accumulated variable tables.
    pub fn finish(self) -> (Vec<InputVariable>, Vec<UniformVariable>) {
        (self.inputs, self.uniforms)
    }

    fn flush_line(&mut self, vertex: bool) {
        if let Some(v) = parse_line(&self.pending, vertex) {
            match v.qualifier {
                Qualifier::In => self.append_input(v),
                Qualifier::Uniform => self.append_uniform(v),
            }
        }

        self.pending.clear();
    }

    fn append_input(&mut self, v: Declaration) {
        // Attributes are flat per-vertex scalar runs, so matrix and array
        // dimensions fold into the component count.
        let components = v.components * v.rows.max(1) * v.array_len;

        self.inputs.push(InputVariable {
            name: v.name,
            location: -1,
            base: v.base,
            components,
        });
    }

    fn append_uniform(&mut self, v: Declaration) {
        // A uniform shared between stages shows up once per declaring stage.
        // First one wins; the GLSL linker rejects mismatched redeclarations,
        // so duplicates are known to agree.
        if self.uniforms.iter().any(|u| u.name == v.name) {
            return;
        }

        self.uniforms.push(UniformVariable {
            name: v.name,
            location: -1,
            base: v.base,
            components: v.components,
            rows: v.rows,
            count: v.array_len,
            transpose: true,
        });
    }
}
