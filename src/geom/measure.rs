//! Scalar circle metrics
//!
//! Every function is total: invalid radii (negative, NaN, infinite) give a
//! zero result instead of an error.

use std::f64::consts::{PI, SQRT_2};

use glam::DVec2;

use crate::valid_radius;

/// Chord cut at distance `d` from the center
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Chord {
    /// Chord length
    pub length: f64,
    /// Half the central angle subtended by the chord (`acos(d / r)`)
    pub theta: f64,
    /// Segment area `0.5 r² (θ − sin θ)`
    pub area: f64,
}

/// Circular sector of angle `theta`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sector {
    pub arc_length: f64,
    pub area: f64,
    pub perimeter: f64,
}

/// Equilateral triangle inscribed in a circle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InscribedTriangle {
    pub side: f64,
    pub area: f64,
}

/// πr²
#[inline]
pub fn area(r: f64) -> f64 {
    valid_radius(r).map_or(0.0, |r| PI * r * r)
}

/// 2πr
#[inline]
pub fn circumference(r: f64) -> f64 {
    valid_radius(r).map_or(0.0, |r| 2.0 * PI * r)
}

/// |r·θ|, with a NaN angle read as 0
pub fn arc_length(r: f64, theta: f64) -> f64 {
    let theta = if theta.is_nan() { 0.0 } else { theta };
    valid_radius(r).map_or(0.0, |r| (r * theta).abs())
}

/// Chord metrics for a line at distance `d` from the center.
///
/// `d` is clamped to `[0, r]`.
pub fn chord_params(r: f64, d: f64) -> Chord {
    let Some(r) = valid_radius(r).filter(|r| *r > 0.0) else {
        return Chord::default();
    };
    let d = if d.is_nan() { 0.0 } else { d.clamp(0.0, r) };
    let h = r - d;
    let theta = (d / r).acos();
    Chord {
        length: 2.0 * (h * (2.0 * r - h)).sqrt(),
        theta,
        area: 0.5 * r * r * (theta - theta.sin()),
    }
}

pub fn sector_params(r: f64, theta: f64) -> Sector {
    let (Some(r), true) = (valid_radius(r), theta.is_finite()) else {
        return Sector::default();
    };
    let arc_length = r * theta;
    Sector {
        arc_length,
        area: 0.5 * r * arc_length,
        perimeter: r * (theta + 2.0),
    }
}

/// Point at angle `theta` on the circle centered at `center`
#[inline]
pub fn point_on_circle(center: DVec2, r: f64, theta: f64) -> DVec2 {
    center + r * DVec2::new(theta.cos(), theta.sin())
}

#[inline]
pub fn inscribed_square_side(r: f64) -> f64 {
    valid_radius(r).map_or(0.0, |r| 2.0 * r / SQRT_2)
}

pub fn inscribed_equilateral_triangle(r: f64) -> InscribedTriangle {
    let Some(r) = valid_radius(r) else {
        return InscribedTriangle::default();
    };
    let side = r * 3.0_f64.sqrt();
    InscribedTriangle {
        side,
        area: 0.25 * 3.0_f64.sqrt() * side * side,
    }
}
