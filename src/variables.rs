//! The variable model shared between the parser, the program builder and the
//! drawable sets.

use std::path::Path;

use crate::errors::{Error, Result};

/// The shader stages a program can be assembled from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
}

impl ShaderStage {
    /// Infers the stage from the file suffix, following the usual
    /// `.vert`/`.frag`/`.geom` convention. Unrecognized suffixes are an
    /// error instead of silently defaulting to a stage.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ShaderStage> {
        let path = path.as_ref();
        match path.extension().and_then(|v| v.to_str()) {
            Some("vert") => Ok(ShaderStage::Vertex),
            Some("frag") => Ok(ShaderStage::Fragment),
            Some("geom") => Ok(ShaderStage::Geometry),
            _ => Err(Error::UnknownStageSuffix(path.to_owned())),
        }
    }
}

/// The scalar component types a vertex attribute or uniform can be made of.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BaseType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Half,
    Float,
    Double,
    Packed2_10_10_10,
}

impl BaseType {
    /// Size of one component in bytes.
    pub fn byte_size(self) -> u32 {
        match self {
            BaseType::Byte | BaseType::UnsignedByte => 1,
            BaseType::Short | BaseType::UnsignedShort | BaseType::Half => 2,
            BaseType::Int
            | BaseType::UnsignedInt
            | BaseType::Float
            | BaseType::Packed2_10_10_10 => 4,
            BaseType::Double => 8,
        }
    }
}

/// A vertex-stage `in` declaration discovered while scanning shader source.
///
/// `components` is the total number of scalar values per vertex: the vector
/// width times the array length, with matrices flattened to columns × rows.
#[derive(Debug, Clone, PartialEq)]
pub struct InputVariable {
    pub name: String,
    /// Attribute location, resolved against the linked program.
    pub location: i32,
    pub base: BaseType,
    pub components: u32,
}

/// A `uniform` declaration, deduplicated across all stages of one program.
///
/// `components` holds the number of columns per entry (3 for both `vec3` and
/// `mat3`); `rows` is zero for anything that is not a matrix. Host-provided
/// matrix data is expected in row-major order and transposed on upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformVariable {
    pub name: String,
    /// Uniform location, resolved against the linked program.
    pub location: i32,
    pub base: BaseType,
    pub components: u32,
    pub rows: u32,
    /// Array length, 1 for non-arrays.
    pub count: u32,
    pub transpose: bool,
}
