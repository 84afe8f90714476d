// src/error.rs
use crate::types::Point2D;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Invalid bounds: min {min:?} exceeds max {max:?}")]
    InvalidBounds { min: Point2D, max: Point2D },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
