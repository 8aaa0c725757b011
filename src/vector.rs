//! Immutable 2D vector for game code
//!
//! Every operation returns a new value. The rendering path itself works in
//! integer pixels and never touches this type.

use std::ops::{Add, Mul};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A 2D vector of floating point components
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean length, `sqrt(x² + y²)`
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.as_dvec2().length()
    }

    /// Unit vector pointing the same way
    ///
    /// Fails with [`Error::ZeroMagnitude`] instead of producing NaN components.
    pub fn normalize(self) -> Result<Self> {
        let m = self.magnitude();
        if m == 0.0 {
            return Err(Error::ZeroMagnitude);
        }
        Ok(Self::new(self.x / m, self.y / m))
    }

    /// Divides by the magnitude unconditionally; a zero vector yields NaN components
    pub fn normalize_or_nan(self) -> Self {
        let m = self.magnitude();
        Self::new(self.x / m, self.y / m)
    }

    pub fn add(self, other: Self) -> Self {
        (self.as_dvec2() + other.as_dvec2()).into()
    }

    pub fn scalar_mul(self, n: f64) -> Self {
        (self.as_dvec2() * n).into()
    }

    pub fn dot_mul(self, other: Self) -> f64 {
        self.as_dvec2().dot(other.as_dvec2())
    }

    /// 2D cross product, the determinant `x1*y2 - y1*x2`
    pub fn cross_mul(self, other: Self) -> f64 {
        self.as_dvec2().perp_dot(other.as_dvec2())
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        v.as_dvec2()
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Self) -> Self::Output {
        Vector2D::add(self, rhs)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scalar_mul(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn almost_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_stores_components() {
        let v = Vector2D::new(1.5, 2.5);
        assert!(almost_equal(v.x, 1.5));
        assert!(almost_equal(v.y, 2.5));
    }

    #[test]
    fn test_magnitude() {
        assert!(almost_equal(Vector2D::new(3.0, 4.0).magnitude(), 5.0));
    }

    #[test]
    fn test_normalize() {
        let v = Vector2D::new(3.0, 4.0).normalize().unwrap();
        assert!(almost_equal(v.x, 0.6));
        assert!(almost_equal(v.y, 0.8));

        let v = Vector2D::new(3.0, 0.0).normalize().unwrap();
        assert!(almost_equal(v.x, 1.0));
        assert!(almost_equal(v.y, 0.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert!(matches!(
            Vector2D::ZERO.normalize(),
            Err(Error::ZeroMagnitude)
        ));

        let v = Vector2D::ZERO.normalize_or_nan();
        assert!(v.x.is_nan());
        assert!(v.y.is_nan());
    }

    #[test]
    fn test_add() {
        let v = Vector2D::new(1.2, 2.3).add(Vector2D::new(3.0, 4.0));
        assert!(almost_equal(v.x, 4.2));
        assert!(almost_equal(v.y, 6.3));

        let w = Vector2D::new(1.2, 2.3) + Vector2D::new(3.0, 4.0);
        assert_eq!(v, w);
    }

    #[test]
    fn test_scalar_mul() {
        let v = Vector2D::new(1.2, 2.3).scalar_mul(2.5);
        assert!(almost_equal(v.x, 3.0));
        assert!(almost_equal(v.y, 5.75));
        assert_eq!(v, Vector2D::new(1.2, 2.3) * 2.5);
    }

    #[test]
    fn test_dot_mul() {
        let p = Vector2D::new(1.2, 2.3).dot_mul(Vector2D::new(3.0, 4.0));
        assert!(almost_equal(p, 12.8));
    }

    #[test]
    fn test_cross_mul() {
        let p = Vector2D::new(1.2, 2.3).cross_mul(Vector2D::new(3.0, 4.0));
        assert!(almost_equal(p, -2.1));
    }

    #[test]
    fn test_operations_do_not_mutate() {
        let v = Vector2D::new(1.0, 2.0);
        let _ = v.add(Vector2D::new(5.0, 5.0));
        let _ = v.scalar_mul(3.0);
        assert_eq!(v, Vector2D::new(1.0, 2.0));
    }
}
