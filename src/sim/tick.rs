//! Discrete simulation step
//!
//! One tick: jitter the test point, jitter a random subset of circles and
//! re-index them, then query the engine.

use std::collections::BTreeSet;

use glam::DVec2;
use rand::Rng;

use super::state::{CircleId, SimState};
use crate::index::Quadrant;

/// Membership change for one circle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    /// The point is now inside this circle
    Entered(CircleId),
    /// The point left this circle
    Exited(CircleId),
}

/// Outcome of a single tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub tick: u64,
    pub point: DVec2,
    /// `None` when the point could not be classified
    pub quadrant: Option<Quadrant>,
    /// Circles containing the point this tick
    pub hits: BTreeSet<CircleId>,
    /// Circles that moved this tick
    pub moved: usize,
    pub events: Vec<SimEvent>,
}

/// Uniform offset in `[-max, max]` on each axis
fn jitter<R: Rng>(rng: &mut R, max: f64) -> DVec2 {
    if max <= 0.0 {
        return DVec2::ZERO;
    }
    DVec2::new(rng.random_range(-max..=max), rng.random_range(-max..=max))
}

/// Advance the simulation by one step
pub fn tick(state: &mut SimState) -> StepReport {
    state.time_ticks += 1;
    let world = state.config.world;

    // Random-walk the test point, kept inside the world
    let step = jitter(&mut state.rng, state.config.point_step);
    let next = world.clamp(state.point.to_dvec2() + step);
    state.set_point(next.x, next.y);

    // Move a subset of circles; each one is re-indexed before the query
    let mut moved = 0;
    for circle in state.circles.iter_mut() {
        if !state.rng.random_bool(state.config.moving_fraction) {
            continue;
        }
        let to = world.clamp(circle.center() + jitter(&mut state.rng, state.config.circle_step));
        circle.move_to(to.x, to.y);
        state.engine.update_circle(circle);
        moved += 1;
    }

    let hits = state.engine.step(&state.point, &state.circles);

    let mut events: Vec<SimEvent> = hits
        .difference(&state.hits)
        .cloned()
        .map(SimEvent::Entered)
        .collect();
    events.extend(state.hits.difference(&hits).cloned().map(SimEvent::Exited));
    for event in &events {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
    }
    state.hits = hits.clone();

    StepReport {
        tick: state.time_ticks,
        point: next,
        quadrant: state.engine.quadrant(),
        hits,
        moved,
        events,
    }
}
