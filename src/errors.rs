use std::path::PathBuf;

use crate::variables::ShaderStage;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Failed to read shader source from {:?}.", _0)]
    FileNotFound(PathBuf),
    #[fail(display = "Unknown shader file suffix on {:?}.", _0)]
    UnknownStageSuffix(PathBuf),
    #[fail(display = "Failed to compile {:?} shader:\n{}", _0, _1)]
    CompileFailure(ShaderStage, String),
    #[fail(display = "Failed to link program:\n{}", _0)]
    LinkFailure(String),
    #[fail(display = "Failed to create {} object.", _0)]
    CreationFailure(&'static str),
    #[fail(display = "Glutin: {}", _0)]
    Glutin(String),
    #[fail(display = "[GL] {}", _0)]
    Backend(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl From<glutin::CreationError> for Error {
    fn from(err: glutin::CreationError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}

impl From<glutin::ContextError> for Error {
    fn from(err: glutin::ContextError) -> Error {
        Error::Glutin(format!("{}", err))
    }
}
