//! Circle intersection queries
//!
//! Geometric impossibility (disjoint circles, a point inside the circle for a
//! tangent query, ...) is reported as `Intersection::None` or `Option::None`,
//! never as an error.

use glam::DVec2;

use crate::consts::{COINCIDENT_EPS, TANGENT_EPS, TOUCH_EPS};
use crate::valid_radius;

/// A bare circle: center and radius, no identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: DVec2,
    pub radius: f64,
}

impl Disc {
    pub fn new(center: DVec2, radius: f64) -> Self {
        Self { center, radius }
    }

    fn is_valid(&self) -> bool {
        self.center.is_finite() && valid_radius(self.radius).is_some()
    }
}

/// Result of intersecting a circle with another curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    None,
    /// Single touching point
    Tangent(DVec2),
    /// Two crossing points
    Secant(DVec2, DVec2),
}

impl Intersection {
    pub fn len(&self) -> usize {
        match self {
            Intersection::None => 0,
            Intersection::Tangent(_) => 1,
            Intersection::Secant(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Intersection::None)
    }

    pub fn points(&self) -> Vec<DVec2> {
        match *self {
            Intersection::None => Vec::new(),
            Intersection::Tangent(p) => vec![p],
            Intersection::Secant(p, q) => vec![p, q],
        }
    }
}

/// Closest and farthest point pairs between an outer and an inner circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaps {
    pub min: f64,
    /// (outer point, inner point)
    pub min_points: (DVec2, DVec2),
    pub max: f64,
    /// (outer point, inner point)
    pub max_points: (DVec2, DVec2),
}

/// Intersect two circles using the radical line.
///
/// Coincident circles (centers and radii equal within `COINCIDENT_EPS`)
/// have infinitely many common points and report `None`, as do disjoint
/// and nested circles.
pub fn circle_circle_intersection(c0: Disc, c1: Disc) -> Intersection {
    if !c0.is_valid() || !c1.is_valid() {
        return Intersection::None;
    }
    let (r0, r1) = (c0.radius, c1.radius);
    let d = c0.center.distance(c1.center);

    if d <= COINCIDENT_EPS && (r0 - r1).abs() <= COINCIDENT_EPS {
        return Intersection::None;
    }
    if d > r0 + r1 || d < (r0 - r1).abs() || d == 0.0 {
        return Intersection::None;
    }

    let a = (r0 * r0 - r1 * r1 + d * d) / (2.0 * d);
    let unit = (c1.center - c0.center) / d;
    let mid = c0.center + unit * a;

    let h2 = r0 * r0 - a * a;
    if h2 <= 0.0 {
        return Intersection::Tangent(mid);
    }
    let h = h2.sqrt();
    if h <= TOUCH_EPS * r0.max(r1).max(1.0) {
        return Intersection::Tangent(mid);
    }

    let perp = unit.perp();
    Intersection::Secant(mid + perp * h, mid - perp * h)
}

/// Intersect a circle with the infinite line through `p0` and `p1`.
///
/// Points are not clamped to the segment; callers get extrapolated hits
/// beyond either endpoint.
pub fn circle_segment_intersection(p0: DVec2, p1: DVec2, center: DVec2, r: f64) -> Intersection {
    let Some(r) = valid_radius(r) else {
        return Intersection::None;
    };
    let dir = p1 - p0;
    let len_sq = dir.length_squared();
    if !len_sq.is_finite() || len_sq <= 0.0 || !center.is_finite() {
        return Intersection::None;
    }

    let t = (center - p0).dot(dir) / len_sq;
    let proj = p0 + dir * t;
    let dist = proj.distance(center);

    if (dist - r).abs() <= TANGENT_EPS {
        return Intersection::Tangent(proj);
    }
    if dist < r {
        let delta = (r * r - dist * dist).sqrt() / len_sq.sqrt();
        return Intersection::Secant(p0 + dir * (t - delta), p0 + dir * (t + delta));
    }
    Intersection::None
}

/// Min/max distances between `outer` and `inner`, measured along the line
/// through both centers.
///
/// Requires `outer.radius > inner.radius` and finite centers. Concentric
/// circles are measured along the x axis.
pub fn circle_gaps(outer: Disc, inner: Disc) -> Option<Gaps> {
    if !outer.is_valid() || !inner.is_valid() || outer.radius <= inner.radius {
        return None;
    }

    let toward = if inner.center.distance_squared(outer.center) > 0.0 {
        inner.center
    } else {
        outer.center + DVec2::X
    };
    let outer_pts = circle_segment_intersection(outer.center, toward, outer.center, outer.radius);
    let inner_pts = circle_segment_intersection(outer.center, toward, inner.center, inner.radius);
    if outer_pts.is_empty() || inner_pts.is_empty() {
        return None;
    }

    let mut gaps: Option<Gaps> = None;
    for p in outer_pts.points() {
        for q in inner_pts.points() {
            let dist = p.distance(q);
            match gaps.as_mut() {
                None => {
                    gaps = Some(Gaps {
                        min: dist,
                        min_points: (p, q),
                        max: dist,
                        max_points: (p, q),
                    })
                }
                Some(g) => {
                    if dist < g.min {
                        g.min = dist;
                        g.min_points = (p, q);
                    }
                    if dist > g.max {
                        g.max = dist;
                        g.max_points = (p, q);
                    }
                }
            }
        }
    }
    gaps
}

/// Points where the two lines through `p` touch the circle.
///
/// These are the geometric tangent points: the radius to each one is
/// perpendicular to the line from `p`. Each sits at distance `√(d² − r²)`
/// from `p`, so they are found by intersecting with the circle of that
/// radius centered at `p`, not the circle of radius `d`.
///
/// `None` when `p` is inside or on the circle.
pub fn tangents_from_point(center: DVec2, r: f64, p: DVec2) -> Intersection {
    let Some(r) = valid_radius(r) else {
        return Intersection::None;
    };
    if !p.is_finite() || !center.is_finite() {
        return Intersection::None;
    }
    let d = p.distance(center);
    if d <= r {
        return Intersection::None;
    }
    let reach = (d * d - r * r).sqrt();
    circle_circle_intersection(Disc::new(center, r), Disc::new(p, reach))
}

/// Boundary-inclusive point-in-circle test.
///
/// Rejects on the axis-aligned bounds first; most queries miss, and that
/// check needs no multiplication.
#[inline]
pub fn point_in_circle(p: DVec2, center: DVec2, r: f64) -> bool {
    let dy = p.y - center.y;
    if dy.abs() > r {
        return false;
    }
    let dx = p.x - center.x;
    if dx.abs() > r {
        return false;
    }
    dx * dx + dy * dy <= r * r
}
