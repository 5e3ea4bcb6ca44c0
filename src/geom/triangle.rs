//! Triangle circle metrics

use glam::DVec2;

use crate::consts::MIN_PERIMETER;

/// Inscribed circle of a triangle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Incircle {
    pub center: DVec2,
    pub radius: f64,
    /// Triangle area (Heron)
    pub area: f64,
    pub perimeter: f64,
}

/// Circumradius from side lengths, `abc / √((a+b+c)(−a+b+c)(a−b+c)(a+b−c))`.
///
/// Returns 0 when the sides don't form a proper triangle (all zero,
/// collinear, or violating the triangle inequality).
pub fn triangle_circumradius(a: f64, b: f64, c: f64) -> f64 {
    let product = (a + b + c) * (-a + b + c) * (a - b + c) * (a + b - c);
    if !product.is_finite() || product <= 0.0 {
        return 0.0;
    }
    a * b * c / product.sqrt()
}

/// Incircle of the triangle `abc`.
///
/// Degenerate (all-zero) when the perimeter is below `MIN_PERIMETER`.
pub fn triangle_incircle(a: DVec2, b: DVec2, c: DVec2) -> Incircle {
    // Side lengths opposite each vertex
    let la = b.distance(c);
    let lb = c.distance(a);
    let lc = a.distance(b);
    let perimeter = la + lb + lc;
    if perimeter.is_nan() || perimeter < MIN_PERIMETER {
        return Incircle::default();
    }

    let center = (a * la + b * lb + c * lc) / perimeter;
    let s = perimeter / 2.0;
    let area = (s * (s - la) * (s - lb) * (s - lc)).max(0.0).sqrt();
    Incircle {
        center,
        radius: 2.0 * area / perimeter,
        area,
        perimeter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circumradius_right_triangle() {
        // Hypotenuse is a diameter
        assert!((triangle_circumradius(3.0, 4.0, 5.0) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_circumradius_equilateral() {
        let r = triangle_circumradius(1.0, 1.0, 1.0);
        assert!((r - 1.0 / 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_circumradius_degenerate() {
        assert_eq!(triangle_circumradius(0.0, 0.0, 0.0), 0.0);
        assert_eq!(triangle_circumradius(1.0, 2.0, 3.0), 0.0);
        assert_eq!(triangle_circumradius(1.0, 1.0, 5.0), 0.0);
        assert_eq!(triangle_circumradius(f64::NAN, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_incircle_right_triangle() {
        let inc = triangle_incircle(
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(0.0, 3.0),
        );
        // r = (a + b - c) / 2 for a right triangle
        assert!((inc.radius - 1.0).abs() < 1e-12);
        assert!((inc.center - DVec2::new(1.0, 1.0)).length() < 1e-12);
        assert!((inc.area - 6.0).abs() < 1e-12);
        assert!((inc.perimeter - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_incircle_degenerate() {
        let p = DVec2::new(2.0, 2.0);
        assert_eq!(triangle_incircle(p, p, p), Incircle::default());
    }

    #[test]
    fn test_incircle_collinear_has_zero_radius() {
        let inc = triangle_incircle(
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
        );
        assert!(inc.radius.abs() < 1e-9);
        assert!((inc.perimeter - 4.0).abs() < 1e-12);
    }
}
