//! Binds host-side vertex data to the inputs a program discovered in its
//! sources.

use crate::backends::Visitor;
use crate::errors::Result;
use crate::program::Program;
use crate::variables::BaseType;

/// One vertex buffer wired to one attribute location.
#[derive(Debug)]
struct Drawable {
    buffer: u32,
    location: i32,
    components: u32,
    base: BaseType,
}

/// A vertex array object plus the buffers feeding a program's inputs,
/// drawable as a triangle list.
#[derive(Debug)]
pub struct DrawableSet {
    vao: u32,
    count: u32,
    drawables: Vec<Drawable>,
}

impl DrawableSet {
    /// Uploads `count` vertices worth of data for each named input. Slots
    /// naming an input the program never declared, or carrying fewer bytes
    /// than the input needs, are diagnosed and skipped.
    ///
    /// On failure every buffer and the vertex array created so far are
    /// released before the error is returned.
    pub fn new(
        visitor: &mut dyn Visitor,
        program: &Program,
        count: u32,
        slots: &[(&str, &[u8])],
    ) -> Result<DrawableSet> {
        let mut vao = None;
        let mut drawables = Vec::new();

        let rv = Self::try_new(visitor, program, count, slots, &mut vao, &mut drawables);
        if rv.is_err() {
            unsafe {
                for v in drawables.drain(..) {
                    let _ = visitor.delete_buffer(v.buffer);
                }

                if let Some(vao) = vao.take() {
                    let _ = visitor.delete_vertex_array(vao);
                }
            }
        }

        rv
    }

    /// As [`new`](#method.new), with the vertex data given as floats.
    pub fn with_f32(
        visitor: &mut dyn Visitor,
        program: &Program,
        count: u32,
        slots: &[(&str, &[f32])],
    ) -> Result<DrawableSet> {
        let slots = slots
            .iter()
            .map(|&(name, data)| (name, bytemuck::cast_slice(data)))
            .collect::<Vec<(&str, &[u8])>>();

        Self::new(visitor, program, count, &slots)
    }

    fn try_new(
        visitor: &mut dyn Visitor,
        program: &Program,
        count: u32,
        slots: &[(&str, &[u8])],
        vao: &mut Option<u32>,
        drawables: &mut Vec<Drawable>,
    ) -> Result<DrawableSet> {
        unsafe {
            let id = visitor.create_vertex_array()?;
            *vao = Some(id);
            visitor.bind_vertex_array(id)?;

            for &(name, data) in slots {
                let v = match program.input(name) {
                    Some(v) => v,
                    None => {
                        warn!("No input named [{}] in program {}.", name, program.id());
                        continue;
                    }
                };

                // The compiler strips unused attributes, leaving them without
                // a location.
                if v.location < 0 {
                    warn!("Input [{}] has no location, skipping.", name);
                    continue;
                }

                let len = (v.base.byte_size() * v.components * count) as usize;
                if data.len() < len {
                    warn!(
                        "Slot [{}] holds {} byte(s), {} vertices need {}.",
                        name,
                        data.len(),
                        count,
                        len
                    );
                    continue;
                }

                let buffer = visitor.create_buffer()?;
                drawables.push(Drawable {
                    buffer,
                    location: v.location,
                    components: v.components,
                    base: v.base,
                });

                visitor.update_buffer(buffer, &data[..len])?;
            }

            Ok(DrawableSet {
                vao: id,
                count,
                drawables: drawables.drain(..).collect(),
            })
        }
    }

    #[inline]
    pub fn vertices(&self) -> u32 {
        self.count
    }

    /// Draws the set as triangles with the currently bound program.
    ///
    /// Attributes are enabled around the draw and disabled again afterwards
    /// even when the draw itself fails.
    pub fn draw(&self, visitor: &mut dyn Visitor) -> Result<()> {
        unsafe {
            visitor.bind_vertex_array(self.vao)?;

            for v in &self.drawables {
                visitor.bind_attribute(v.buffer, v.location, v.components, v.base)?;
                visitor.enable_attribute(v.location)?;
            }

            let drawn = visitor.draw_triangles(self.count);

            let mut disabled = Ok(());
            for v in &self.drawables {
                if let Err(err) = visitor.disable_attribute(v.location) {
                    disabled = Err(err);
                }
            }

            drawn?;
            disabled
        }
    }

    /// Releases the buffers and the vertex array.
    pub fn delete(mut self, visitor: &mut dyn Visitor) -> Result<()> {
        unsafe {
            for v in self.drawables.drain(..) {
                visitor.delete_buffer(v.buffer)?;
            }

            visitor.delete_vertex_array(self.vao)
        }
    }
}
