// src/geometry/vector.rs

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::tuple::Tuple;
use crate::error::{CanvasError, Result};

/// A direction or displacement. Its homogeneous coordinate is always 0 and
/// is not stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const W: f64 = 0.0;

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Narrows a tuple, failing unless `w == 0`.
    pub fn from_tuple(t: Tuple) -> Result<Self> {
        if !Self::is_vector(&t) {
            return Err(CanvasError::InvalidComponent {
                kind: "Vector",
                expected: Self::W,
                actual: t.w(),
            });
        }
        Ok(Self::new(t.x(), t.y(), t.z()))
    }

    pub fn is_vector(t: &Tuple) -> bool {
        t.w() == Self::W
    }

    #[inline]
    pub fn w(&self) -> f64 {
        Self::W
    }

    pub fn magnitude(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Unit vector in the same direction. Must not be called on the zero
    /// vector (the result would be NaN).
    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl From<Vector> for Tuple {
    fn from(v: Vector) -> Tuple {
        Tuple::new(v.x, v.y, v.z, Vector::W)
    }
}

impl TryFrom<Tuple> for Vector {
    type Error = CanvasError;

    fn try_from(t: Tuple) -> Result<Self> {
        Vector::from_tuple(t)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Translating a point by a vector yields a point.
impl Add<Point> for Vector {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
