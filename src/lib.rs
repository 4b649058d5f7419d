//! # Shade
//!
//! Shade is a small shader-management and rendering-setup toolkit for modern
//! OpenGL. It compiles and links GLSL programs, scans their sources to
//! auto-discover `in` and `uniform` variable declarations, binds host-side
//! data buffers to the discovered variables, and issues draw calls, without
//! requiring the caller to hand-declare a schema.
//!
//! The usual workflow:
//!
//! 1. Build a [`Program`](program/struct.Program.html) from a list of shader
//!    source files; the stage of every file is inferred from its suffix.
//! 2. Create a [`DrawableSet`](drawable/struct.DrawableSet.html) against the
//!    program's discovered input schema from named host buffers.
//! 3. Bind the program, push uniforms by name, and draw the set every frame.
//!
//! All GPU work goes through the [`Visitor`](backends/trait.Visitor.html)
//! trait, which is implemented for a real OpenGL context as well as a
//! headless no-op backend for tests and CI.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod backends;
pub mod drawable;
pub mod errors;
pub mod math;
pub mod parser;
pub mod program;
pub mod variables;
pub mod window;

pub mod prelude {
    pub use crate::backends::Visitor;
    pub use crate::drawable::DrawableSet;
    pub use crate::errors::{Error, Result};
    pub use crate::program::Program;
    pub use crate::variables::{BaseType, InputVariable, ShaderStage, UniformVariable};
    pub use crate::window::{Window, WindowParams};
}
