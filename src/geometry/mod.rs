// src/geometry/mod.rs

//! Homogeneous-coordinate algebra.
//!
//! `Tuple` is the raw `(x, y, z, w)` value. `Point` (w = 1) and `Vector`
//! (w = 0) are separate types that only store `x, y, z`, so the operator
//! impls decide the result type:
//!
//! | expression          | result   |
//! |---------------------|----------|
//! | `Point + Vector`    | `Point`  |
//! | `Vector + Point`    | `Point`  |
//! | `Point - Point`     | `Vector` |
//! | `Point - Vector`    | `Point`  |
//! | `Vector ± Vector`   | `Vector` |
//!
//! Narrowing a `Tuple` back into a `Point` or `Vector` goes through
//! `TryFrom` and fails with `CanvasError::InvalidComponent` on the wrong `w`.

pub mod point;
pub mod tuple;
pub mod vector;

pub use point::Point;
pub use tuple::Tuple;
pub use vector::Vector;

#[cfg(test)]
mod tests;
