use crate::model::{Geometry, Size};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpaceError {
    #[error("empty bounding region: {0}")]
    EmptyRegion(Geometry),
    #[error("no free rectangle can contain {0}")]
    OutOfSpace(Size),
}

pub type Result<T> = std::result::Result<T, SpaceError>;
