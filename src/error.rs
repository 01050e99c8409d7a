// src/error.rs

//! Error taxonomy for tuple construction and canvas access.
//!
//! Every variant is a local validation failure raised at the point of
//! violation. Nothing here is retried or recovered from inside the crate.

use thiserror::Error;

use crate::geometry::tuple::TUPLE_LEN;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CanvasError {
    /// A `Tuple` was narrowed to a `Vector` or `Point` with the wrong `w`.
    #[error("{kind} must have w entry set to {expected}, got {actual}")]
    InvalidComponent {
        kind: &'static str,
        expected: f64,
        actual: f64,
    },
    #[error("Invalid width and height {width}, {height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("{x} and {y} exceed canvas bounds of {width} and {height}")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: usize,
        height: usize,
    },
    #[error("x and y indexes must be integers, got {x} and {y}")]
    NonIntegerIndex { x: f64, y: f64 },
    #[error("Tuple index {0} out of range 0..{len}", len = TUPLE_LEN)]
    IndexOutOfRange(usize),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
