//! A headless backend that accepts everything and touches nothing, used for
//! tests and CI environments without a display.

use crate::errors::Result;
use crate::variables::{BaseType, ShaderStage};

use super::Visitor;

pub struct HeadlessVisitor {
    next_object: u32,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor { next_object: 1 }
    }

    fn allocate(&mut self) -> u32 {
        let v = self.next_object;
        self.next_object += 1;
        v
    }
}

impl Default for HeadlessVisitor {
    fn default() -> Self {
        HeadlessVisitor::new()
    }
}

impl Visitor for HeadlessVisitor {
    unsafe fn create_shader(&mut self, _: ShaderStage, _: &str) -> Result<u32> {
        Ok(self.allocate())
    }

    unsafe fn delete_shader(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn link_program(&mut self, _: &[u32]) -> Result<u32> {
        Ok(self.allocate())
    }

    unsafe fn delete_program(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn bind_program(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn attribute_location(&mut self, _: u32, _: &str) -> Result<i32> {
        Ok(0)
    }

    unsafe fn uniform_location(&mut self, _: u32, _: &str) -> Result<i32> {
        Ok(0)
    }

    unsafe fn create_buffer(&mut self) -> Result<u32> {
        Ok(self.allocate())
    }

    unsafe fn update_buffer(&mut self, _: u32, _: &[u8]) -> Result<()> {
        Ok(())
    }

    unsafe fn delete_buffer(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn create_vertex_array(&mut self) -> Result<u32> {
        Ok(self.allocate())
    }

    unsafe fn bind_vertex_array(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn delete_vertex_array(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn bind_attribute(&mut self, _: u32, _: i32, _: u32, _: BaseType) -> Result<()> {
        Ok(())
    }

    unsafe fn enable_attribute(&mut self, _: i32) -> Result<()> {
        Ok(())
    }

    unsafe fn disable_attribute(&mut self, _: i32) -> Result<()> {
        Ok(())
    }

    unsafe fn set_uniform_matrix(
        &mut self,
        _: i32,
        _: u32,
        _: u32,
        _: u32,
        _: bool,
        _: &[f32],
    ) -> Result<()> {
        Ok(())
    }

    unsafe fn draw_triangles(&mut self, _: u32) -> Result<()> {
        Ok(())
    }

    unsafe fn check_errors(&mut self) -> Result<()> {
        Ok(())
    }
}
