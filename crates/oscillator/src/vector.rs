//! 3D points and vectors exchanged with the rigid-body provider.
//!
//! The oscillator only ever moves along a single axis, but the body it drives
//! lives in 3D space. Positions and velocities come in as [`Point`] and
//! [`Vector`], and the core reduces them to scalar axis components.
//!
//! # Example
//!
//! ```rust
//! use oscillator::{Point, Vector};
//!
//! let body = Point::new(1.0, 2.0, 30.0);
//! assert_eq!(body.component_along(Vector::UP), 30.0);
//!
//! let moved = body + Vector::DOWN * 5.0;
//! assert_eq!(moved.z, 25.0);
//! ```

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A point in 3D space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the origin point (0, 0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Projects the point's position vector onto `axis`.
    ///
    /// `axis` is expected to be a unit vector; the result is the signed
    /// coordinate of the point along that axis.
    #[inline]
    pub fn component_along(&self, axis: Vector) -> f64 {
        self.x * axis.x + self.y * axis.y + self.z * axis.z
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, v: Vector) -> Point {
        Point {
            x: self.x + v.x,
            y: self.y + v.y,
            z: self.z + v.z,
        }
    }
}

impl AddAssign<Vector> for Point {
    #[inline]
    fn add_assign(&mut self, v: Vector) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
    }
}

impl Sub for Point {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Point) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// A vector in 3D space: a force, a velocity or an offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector {
    /// Unit vector pointing up (+Z). The default motion axis.
    pub const UP: Vector = Vector {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Unit vector pointing down (-Z).
    pub const DOWN: Vector = Vector {
        x: 0.0,
        y: 0.0,
        z: -1.0,
    };

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Returns a unit vector with the same direction.
    ///
    /// The zero vector is returned unchanged.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return *self;
        }
        Self {
            x: self.x / mag,
            y: self.y / mag,
            z: self.z / mag,
        }
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, other: Vector) -> Vector {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl AddAssign for Vector {
    #[inline]
    fn add_assign(&mut self, other: Vector) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, other: Vector) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, scalar: f64) -> Vector {
        Vector {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    #[inline]
    fn mul(self, v: Vector) -> Vector {
        v * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_along_axis() {
        let p = Point::new(3.0, -4.0, 12.0);
        assert_eq!(p.component_along(Vector::UP), 12.0);
        assert_eq!(p.component_along(Vector::DOWN), -12.0);
        assert_eq!(p.component_along(Vector::new(1.0, 0.0, 0.0)), 3.0);
    }

    #[test]
    fn test_point_vector_arithmetic() {
        let mut p = Point::origin() + Vector::UP * 10.0;
        assert_eq!(p, Point::new(0.0, 0.0, 10.0));

        p += -Vector::UP * 4.0;
        assert_eq!(p.z, 6.0);

        let d = p - Point::origin();
        assert_eq!(d, Vector::new(0.0, 0.0, 6.0));
    }

    #[test]
    fn test_normalized() {
        let v = Vector::new(0.0, 3.0, 4.0).normalized();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(Vector::zero().normalized(), Vector::zero());
    }

    #[test]
    fn test_scalar_mul_commutes() {
        let v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(2.0 * v, v * 2.0);
    }
}
