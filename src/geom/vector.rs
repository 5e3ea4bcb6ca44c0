//! 2D point/vector with a lazily cached Euclidean norm

use std::cell::Cell;
use std::fmt;

use glam::DVec2;

use crate::finite_or_zero;

/// A 2D vector whose length is computed on first read and cached until
/// either coordinate is reassigned.
///
/// Non-finite coordinates are coerced to 0 on the way in.
#[derive(Debug, Clone, Default)]
pub struct Vector2 {
    x: f64,
    y: f64,
    /// `None` when dirty
    norm: Cell<Option<f64>>,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
            norm: Cell::new(None),
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

    pub fn set_x(&mut self, x: f64) {
        self.x = finite_or_zero(x);
        self.norm.set(None);
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = finite_or_zero(y);
        self.norm.set(None);
    }

    /// Move by `(dx, dy)`
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.set_x(self.x + dx);
        self.set_y(self.y + dy);
    }

    /// Euclidean norm (cached)
    pub fn length(&self) -> f64 {
        match self.norm.get() {
            Some(n) => n,
            None => {
                let n = self.x.hypot(self.y);
                self.norm.set(Some(n));
                n
            }
        }
    }

    /// Manhattan norm
    #[inline]
    pub fn l1_norm(&self) -> f64 {
        self.x.abs() + self.y.abs()
    }

    /// Chebyshev norm
    #[inline]
    pub fn linf_norm(&self) -> f64 {
        self.x.abs().max(self.y.abs())
    }

    pub fn distance(&self, other: &Vector2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of the two vectors lifted to z = 0
    #[inline]
    pub fn cross(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn to_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[cfg(test)]
    fn norm_cached(&self) -> bool {
        self.norm.get().is_some()
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<&Vector2> for DVec2 {
    fn from(v: &Vector2) -> Self {
        v.to_dvec2()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_length_is_lazy_and_invalidated() {
        let mut v = Vector2::new(3.0, 4.0);
        assert!(!v.norm_cached());
        assert_eq!(v.length(), 5.0);
        assert!(v.norm_cached());

        v.set_x(6.0);
        assert!(!v.norm_cached());
        v.set_y(8.0);
        assert_eq!(v.length(), 10.0);
    }

    #[test]
    fn test_non_finite_coerced_to_zero() {
        let mut v = Vector2::new(f64::NAN, f64::INFINITY);
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
        v.set_x(2.0);
        v.set_y(f64::NEG_INFINITY);
        assert_eq!(v, Vector2::new(2.0, 0.0));
        assert_eq!(v.length(), 2.0);
    }

    #[test]
    fn test_norms() {
        let v = Vector2::new(-3.0, 4.0);
        assert_eq!(v.l1_norm(), 7.0);
        assert_eq!(v.linf_norm(), 4.0);
    }

    #[test]
    fn test_products_and_distance() {
        let a = Vector2::new(1.0, 0.0);
        let b = Vector2::new(0.0, 2.0);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), 2.0);
        assert_eq!(b.cross(&a), -2.0);
        assert!((a.distance(&b) - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn test_translate() {
        let mut v = Vector2::new(1.0, 1.0);
        let _ = v.length();
        v.translate(2.0, 3.0);
        assert!(!v.norm_cached());
        assert_eq!(v.to_dvec2(), DVec2::new(3.0, 4.0));
        assert_eq!(v.length(), 5.0);
    }

    proptest! {
        #[test]
        fn prop_cached_norm_never_stale(
            x in -1e6f64..1e6, y in -1e6f64..1e6,
            nx in -1e6f64..1e6, ny in -1e6f64..1e6,
        ) {
            let mut v = Vector2::new(x, y);
            prop_assert_eq!(v.length(), x.hypot(y));
            v.set_x(nx);
            v.set_y(ny);
            prop_assert_eq!(v.length(), nx.hypot(ny));
        }
    }
}
