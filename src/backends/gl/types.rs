use gl::types::GLenum;

use crate::variables::{BaseType, ShaderStage};

impl From<ShaderStage> for GLenum {
    fn from(stage: ShaderStage) -> Self {
        match stage {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
            ShaderStage::Geometry => gl::GEOMETRY_SHADER,
        }
    }
}

impl From<BaseType> for GLenum {
    fn from(base: BaseType) -> Self {
        match base {
            BaseType::Byte => gl::BYTE,
            BaseType::UnsignedByte => gl::UNSIGNED_BYTE,
            BaseType::Short => gl::SHORT,
            BaseType::UnsignedShort => gl::UNSIGNED_SHORT,
            BaseType::Int => gl::INT,
            BaseType::UnsignedInt => gl::UNSIGNED_INT,
            BaseType::Half => gl::HALF_FLOAT,
            BaseType::Float => gl::FLOAT,
            BaseType::Double => gl::DOUBLE,
            BaseType::Packed2_10_10_10 => gl::UNSIGNED_INT_2_10_10_10_REV,
        }
    }
}
