//! Quadrant-bucketed spatial index
//!
//! `classify` maps a point to a quadrant of the world rectangle, `QuadMap`
//! keeps per-quadrant circle buckets, and `MembershipEngine` answers
//! "which circles contain the point" each step using only one bucket.

pub mod engine;
pub mod quad_map;
pub mod rect;

pub use engine::{Cursor, MembershipEngine};
pub use quad_map::QuadMap;
pub use rect::{Quadrant, Rect, VerticalSense, classify, quadrant_number};
