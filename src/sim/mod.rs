//! Deterministic simulation driver
//!
//! Produces the kernel's inputs each step:
//! - Seeded RNG only
//! - Stable iteration order (by circle id)
//! - Moved circles are re-indexed before the membership query

pub mod state;
pub mod tick;

pub use state::{Circle, CircleId, CircleSet, SimState};
pub use tick::{SimEvent, StepReport, tick};
