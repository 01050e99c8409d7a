// src/geometry/tuple.rs

//! The raw four-component value that points, vectors and colors convert to.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{CanvasError, Result};

/// Number of addressable slots in a `Tuple`.
pub const TUPLE_LEN: usize = 4;

/// A homogeneous-coordinate tuple `(x, y, z, w)`.
///
/// All arithmetic returns a new value. Equality is exact, component by
/// component; callers wanting a tolerance compare components themselves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuple {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Tuple {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Reads slot `index`, where 0..4 maps to `x, y, z, w`.
    pub fn get(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(CanvasError::IndexOutOfRange(index)),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: f64) {
        self.y = value;
    }

    pub fn set_z(&mut self, value: f64) {
        self.z = value;
    }

    pub fn set_w(&mut self, value: f64) {
        self.w = value;
    }

    /// Euclidean norm over all four slots.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scales the tuple to unit length.
    ///
    /// The tuple must not be zero: a zero magnitude yields NaN components.
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    pub(crate) fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tuple({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl Add for Tuple {
    type Output = Tuple;

    fn add(self, rhs: Tuple) -> Tuple {
        Tuple::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Tuple {
    type Output = Tuple;

    fn sub(self, rhs: Tuple) -> Tuple {
        Tuple::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Neg for Tuple {
    type Output = Tuple;

    fn neg(self) -> Tuple {
        self.map(|v| -v)
    }
}

impl Mul<f64> for Tuple {
    type Output = Tuple;

    fn mul(self, rhs: f64) -> Tuple {
        self.map(|v| v * rhs)
    }
}

/// Raw IEEE division: dividing by zero yields infinities or NaN, not an error.
impl Div<f64> for Tuple {
    type Output = Tuple;

    fn div(self, rhs: f64) -> Tuple {
        self.map(|v| v / rhs)
    }
}
