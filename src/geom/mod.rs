//! Circle geometry kernel
//!
//! Stateless functions over `glam::DVec2` points plus the cached-norm
//! `Vector2` used by the query driver. Invalid input yields a degenerate
//! value (0, empty, `None`) rather than an error.

pub mod intersect;
pub mod measure;
pub mod triangle;
pub mod vector;

pub use intersect::{
    Disc, Gaps, Intersection, circle_circle_intersection, circle_gaps,
    circle_segment_intersection, point_in_circle, tangents_from_point,
};
pub use measure::{
    Chord, InscribedTriangle, Sector, arc_length, area, chord_params, circumference,
    inscribed_equilateral_triangle, inscribed_square_side, point_on_circle, sector_params,
};
pub use triangle::{Incircle, triangle_circumradius, triangle_incircle};
pub use vector::Vector2;
