//! A recording backend for exercising the higher layers without a GPU.

use shade::prelude::*;

/// Routes diagnostics from the crate into the test harness output.
pub fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One recorded matrix upload.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixUpload {
    pub location: i32,
    pub cols: u32,
    pub rows: u32,
    pub count: u32,
    pub transpose: bool,
    pub data: Vec<f32>,
}

impl MatrixUpload {
    /// The data as the device would see it after the transpose flag is
    /// honored, for square single matrices.
    pub fn column_major(&self) -> Vec<f32> {
        assert_eq!(self.cols, self.rows);
        assert_eq!(self.count, 1);

        if !self.transpose {
            return self.data.clone();
        }

        let n = self.cols as usize;
        let mut out = vec![0.0; n * n];
        for r in 0..n {
            for c in 0..n {
                out[c * n + r] = self.data[r * n + c];
            }
        }

        out
    }
}

/// Records every call and hands out deterministic object ids and locations,
/// with switches to simulate compile, link and draw failures.
#[derive(Default)]
pub struct RecordingVisitor {
    next_object: u32,

    pub shaders_created: u32,
    pub shaders_deleted: u32,
    pub programs_created: u32,
    pub programs_deleted: u32,
    pub buffers_created: u32,
    pub buffers_deleted: u32,
    pub vaos_created: u32,
    pub vaos_deleted: u32,

    /// Names handed to location lookups, in order; the index is the location.
    pub names: Vec<String>,
    /// Names that resolve to -1, as if stripped by the compiler.
    pub unresolved: Vec<String>,
    pub uploads: Vec<(u32, Vec<u8>)>,
    pub matrices: Vec<MatrixUpload>,
    pub enabled: Vec<i32>,
    pub disabled: Vec<i32>,
    pub draws: Vec<u32>,

    pub fail_compile: Option<ShaderStage>,
    pub fail_link: bool,
    pub fail_draw: bool,
}

impl RecordingVisitor {
    pub fn new() -> Self {
        RecordingVisitor::default()
    }

    fn allocate(&mut self) -> u32 {
        self.next_object += 1;
        self.next_object
    }

    fn location_of(&mut self, name: &str) -> i32 {
        if self.unresolved.iter().any(|v| v == name) {
            return -1;
        }

        if let Some(i) = self.names.iter().position(|v| v == name) {
            return i as i32;
        }

        self.names.push(name.to_string());
        (self.names.len() - 1) as i32
    }

    pub fn live_shaders(&self) -> u32 {
        self.shaders_created - self.shaders_deleted
    }

    pub fn live_programs(&self) -> u32 {
        self.programs_created - self.programs_deleted
    }

    pub fn live_buffers(&self) -> u32 {
        self.buffers_created - self.buffers_deleted
    }

    pub fn live_vaos(&self) -> u32 {
        self.vaos_created - self.vaos_deleted
    }
}

impl Visitor for RecordingVisitor {
    unsafe fn create_shader(&mut self, stage: ShaderStage, _: &str) -> Result<u32> {
        if self.fail_compile == Some(stage) {
            return Err(Error::CompileFailure(stage, "0:1(1): syntax error".into()));
        }

        self.shaders_created += 1;
        Ok(self.allocate())
    }

    unsafe fn delete_shader(&mut self, _: u32) -> Result<()> {
        self.shaders_deleted += 1;
        Ok(())
    }

    unsafe fn link_program(&mut self, _: &[u32]) -> Result<u32> {
        if self.fail_link {
            return Err(Error::LinkFailure("unresolved symbol".into()));
        }

        self.programs_created += 1;
        Ok(self.allocate())
    }

    unsafe fn delete_program(&mut self, _: u32) -> Result<()> {
        self.programs_deleted += 1;
        Ok(())
    }

    unsafe fn bind_program(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn attribute_location(&mut self, _: u32, name: &str) -> Result<i32> {
        Ok(self.location_of(name))
    }

    unsafe fn uniform_location(&mut self, _: u32, name: &str) -> Result<i32> {
        Ok(self.location_of(name))
    }

    unsafe fn create_buffer(&mut self) -> Result<u32> {
        self.buffers_created += 1;
        Ok(self.allocate())
    }

    unsafe fn update_buffer(&mut self, buffer: u32, data: &[u8]) -> Result<()> {
        self.uploads.push((buffer, data.to_vec()));
        Ok(())
    }

    unsafe fn delete_buffer(&mut self, _: u32) -> Result<()> {
        self.buffers_deleted += 1;
        Ok(())
    }

    unsafe fn create_vertex_array(&mut self) -> Result<u32> {
        self.vaos_created += 1;
        Ok(self.allocate())
    }

    unsafe fn bind_vertex_array(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn delete_vertex_array(&mut self, _: u32) -> Result<()> {
        self.vaos_deleted += 1;
        Ok(())
    }

    unsafe fn bind_attribute(&mut self, _: u32, _: i32, _: u32, _: BaseType) -> Result<()> {
        Ok(())
    }

    unsafe fn enable_attribute(&mut self, location: i32) -> Result<()> {
        self.enabled.push(location);
        Ok(())
    }

    unsafe fn disable_attribute(&mut self, location: i32) -> Result<()> {
        self.disabled.push(location);
        Ok(())
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
        self.matrices.push(MatrixUpload {
            location,
            cols,
            rows,
            count,
            transpose,
            data: data.to_vec(),
        });

        Ok(())
    }

    unsafe fn draw_triangles(&mut self, vertices: u32) -> Result<()> {
        if self.fail_draw {
            return Err(Error::Backend("Simulated device loss.".into()));
        }

        self.draws.push(vertices);
        Ok(())
    }

    unsafe fn check_errors(&mut self) -> Result<()> {
        Ok(())
    }
}
