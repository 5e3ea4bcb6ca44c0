//! World rectangle and quadrant classification
//!
//! A rectangle may be given in either vertical sense: `top < bottom` (screen,
//! y grows downward) or `top > bottom` (math, y grows upward). "Upper" always
//! means the half adjacent to `top`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One of the four quadrants of a rectangle, numbered 1-4
///
/// 1 = right/upper, 2 = right/lower, 3 = left/lower, 4 = left/upper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quadrant {
    One,
    Two,
    Three,
    Four,
}

impl Quadrant {
    /// Classification order
    pub const ALL: [Quadrant; 4] = [
        Quadrant::One,
        Quadrant::Two,
        Quadrant::Three,
        Quadrant::Four,
    ];

    #[inline]
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based slot, `number() - 1`
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Quadrant::One => 0,
            Quadrant::Two => 1,
            Quadrant::Three => 2,
            Quadrant::Four => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Quadrant::One),
            2 => Some(Quadrant::Two),
            3 => Some(Quadrant::Three),
            4 => Some(Quadrant::Four),
            _ => None,
        }
    }

    #[inline]
    fn is_right(self) -> bool {
        matches!(self, Quadrant::One | Quadrant::Two)
    }

    #[inline]
    fn is_upper(self) -> bool {
        matches!(self, Quadrant::One | Quadrant::Four)
    }
}

/// Numeric form of a classification, 0 when undetermined
#[inline]
pub fn quadrant_number(q: Option<Quadrant>) -> u8 {
    q.map_or(0, Quadrant::number)
}

/// Which way y runs between `top` and `bottom`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalSense {
    /// `top <= bottom`
    Down,
    /// `top > bottom`
    Up,
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    #[inline]
    pub fn vertical_sense(&self) -> VerticalSense {
        if self.top <= self.bottom {
            VerticalSense::Down
        } else {
            VerticalSense::Up
        }
    }

    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).abs()
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }

    /// `(min, max)` of the horizontal extent
    #[inline]
    pub fn x_bounds(&self) -> (f64, f64) {
        ordered(self.left, self.right)
    }

    /// `(min, max)` of the vertical extent, whatever the sense
    #[inline]
    pub fn y_bounds(&self) -> (f64, f64) {
        ordered(self.top, self.bottom)
    }

    /// Inclusive containment
    pub fn contains(&self, p: DVec2) -> bool {
        within(p.x, self.left, self.right) && within(p.y, self.top, self.bottom)
    }

    /// Clamp a point into the rectangle
    pub fn clamp(&self, p: DVec2) -> DVec2 {
        let (x0, x1) = self.x_bounds();
        let (y0, y1) = self.y_bounds();
        DVec2::new(p.x.clamp(x0, x1), p.y.clamp(y0, y1))
    }

    /// Sub-rectangle covered by quadrant `q`, keeping this rectangle's sense
    pub fn quadrant_rect(&self, q: Quadrant) -> Rect {
        let c = self.center();
        let (left, right) = if q.is_right() {
            (c.x, self.right)
        } else {
            (self.left, c.x)
        };
        let (top, bottom) = if q.is_upper() {
            (self.top, c.y)
        } else {
            (c.y, self.bottom)
        };
        Rect::new(left, top, right, bottom)
    }

    /// Whether the axis-aligned square `center ± half` touches this rectangle.
    ///
    /// Touching edges count as overlap.
    pub fn overlaps_square(&self, center: DVec2, half: f64) -> bool {
        let (x0, x1) = self.x_bounds();
        let (y0, y1) = self.y_bounds();
        center.x - half <= x1
            && center.x + half >= x0
            && center.y - half <= y1
            && center.y + half >= y0
    }
}

#[inline]
fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// `v` lies in the closed interval spanned by `a` and `b`, in either order
#[inline]
fn within(v: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = ordered(a, b);
    v >= lo && v <= hi
}

/// Classify `p` into a quadrant of `rect`.
///
/// Dividing lines belong to both neighbours; the first match in the order
/// 1, 2, 3, 4 wins. Points outside the rectangle (or with NaN coordinates)
/// are unclassified.
pub fn classify(p: DVec2, rect: &Rect) -> Option<Quadrant> {
    let c = rect.center();
    let right = within(p.x, c.x, rect.right);
    let left = within(p.x, rect.left, c.x);
    let (upper, lower) = match rect.vertical_sense() {
        VerticalSense::Down => (
            p.y >= rect.top && p.y <= c.y,
            p.y >= c.y && p.y <= rect.bottom,
        ),
        VerticalSense::Up => (
            p.y <= rect.top && p.y >= c.y,
            p.y <= c.y && p.y >= rect.bottom,
        ),
    };

    if right && upper {
        Some(Quadrant::One)
    } else if right && lower {
        Some(Quadrant::Two)
    } else if left && lower {
        Some(Quadrant::Three)
    } else if left && upper {
        Some(Quadrant::Four)
    } else {
        None
    }
}
