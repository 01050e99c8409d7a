// src/color.rs

//! Linear RGB color values.
//!
//! Channels are unbounded floats: they may go negative or exceed 1.0 during
//! color math. Clamping into the 0..=255 range only happens when a canvas is
//! encoded (see `crate::canvas::ppm`).

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::geometry::Tuple;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Value of the fourth slot when a color is viewed as a `Tuple`.
    pub const ALPHA: f64 = 1.0;

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn a(&self) -> f64 {
        Self::ALPHA
    }
}

impl From<Color> for Tuple {
    fn from(c: Color) -> Tuple {
        Tuple::new(c.r, c.g, c.b, Color::ALPHA)
    }
}

/// Drops the fourth slot; a color's alpha is always `Color::ALPHA`.
impl From<Tuple> for Color {
    fn from(t: Tuple) -> Color {
        Color::new(t.x(), t.y(), t.z())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

/// Hadamard product, used to blend one color by another.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}
