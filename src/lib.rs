//! Circle Quad - circle geometry kernel with quadrant-bucketed membership queries
//!
//! Core modules:
//! - `geom`: Pure circle/triangle geometry and the cached-norm `Vector2`
//! - `index`: Quadrant classification, the `QuadMap` bucket index and the
//!   per-step `MembershipEngine`
//! - `sim`: Deterministic random-walk driver feeding the index
//! - `config`: Data-driven simulation tuning

pub mod config;
pub mod error;
pub mod geom;
pub mod index;
pub mod sim;

pub use config::{Density, OffGridPolicy, SimConfig};
pub use error::ConfigError;
pub use geom::{Intersection, Vector2};
pub use index::{MembershipEngine, QuadMap, Quadrant, Rect, classify};
pub use sim::{Circle, CircleId, CircleSet, SimState, StepReport, tick};

/// Geometry tolerances
pub mod consts {
    /// Centers and radii closer than this are treated as the same circle
    pub const COINCIDENT_EPS: f64 = 1e-3;
    /// Line-to-center distance within this of the radius counts as tangent
    pub const TANGENT_EPS: f64 = 1e-4;
    /// Triangles with a smaller perimeter are degenerate
    pub const MIN_PERIMETER: f64 = 1e-8;
    /// Radical-line half chord below this (relative to the larger radius)
    /// collapses to a single point
    pub const TOUCH_EPS: f64 = 1e-6;
}

/// Coerce a non-finite value to 0
#[inline]
pub fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// A radius usable by the geometry functions, if any
#[inline]
pub fn valid_radius(r: f64) -> Option<f64> {
    (r.is_finite() && r >= 0.0).then_some(r)
}
