// src/geometry/point.rs

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::tuple::Tuple;
use super::vector::Vector;
use crate::error::{CanvasError, Result};

/// A location in affine space. Its homogeneous coordinate is always 1 and
/// is not stored, so no operation can produce a point with any other `w`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const W: f64 = 1.0;

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Narrows a tuple, failing unless `w == 1`.
    pub fn from_tuple(t: Tuple) -> Result<Self> {
        if !Self::is_point(&t) {
            return Err(CanvasError::InvalidComponent {
                kind: "Point",
                expected: Self::W,
                actual: t.w(),
            });
        }
        Ok(Self::new(t.x(), t.y(), t.z()))
    }

    pub fn is_point(t: &Tuple) -> bool {
        t.w() == Self::W
    }

    #[inline]
    pub fn w(&self) -> f64 {
        Self::W
    }
}

impl From<Point> for Tuple {
    fn from(p: Point) -> Tuple {
        Tuple::new(p.x, p.y, p.z, Point::W)
    }
}

impl TryFrom<Tuple> for Point {
    type Error = CanvasError;

    fn try_from(t: Tuple) -> Result<Self> {
        Point::from_tuple(t)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// The displacement between two locations.
impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Negation and scaling act on x, y, z only; w stays pinned at 1.
impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}
