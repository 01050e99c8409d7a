//! Homogeneous-coordinate tuple algebra and a pixel canvas that encodes to
//! plain-text P3 images.
//!
//! Points and vectors are separate types so the compiler enforces the affine
//! rules (`Point - Point` is a `Vector`, `Point + Point` does not exist).
//! A `Canvas` holds linear `Color`s and is written out through a `TextSink`.

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod sink;

pub use canvas::Canvas;
pub use color::Color;
pub use error::{CanvasError, Result};
pub use geometry::{Point, Tuple, Vector};
