//! Per-step membership queries
//!
//! The engine tracks which quadrant the test point is in and keeps that
//! quadrant's bucket as the candidate set. Each step only runs the
//! point-in-circle test against the candidates.

use std::collections::BTreeSet;

use super::quad_map::QuadMap;
use super::rect::{Quadrant, Rect, classify};
use crate::config::OffGridPolicy;
use crate::geom::{Vector2, point_in_circle};
use crate::sim::{Circle, CircleId, CircleSet};

/// Where the test point was at the last step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Never stepped, or last point was unclassifiable
    #[default]
    NoQuadrant,
    InQuadrant(Quadrant),
}

impl Cursor {
    pub fn quadrant(self) -> Option<Quadrant> {
        match self {
            Cursor::NoQuadrant => None,
            Cursor::InQuadrant(q) => Some(q),
        }
    }
}

/// Quadrant-bucketed point membership engine
#[derive(Debug, Clone)]
pub struct MembershipEngine {
    world: Rect,
    policy: OffGridPolicy,
    quad_map: QuadMap,
    cursor: Cursor,
    candidates: Vec<CircleId>,
    /// QuadMap revision the candidates were copied at
    candidates_revision: u64,
}

impl MembershipEngine {
    pub fn new(world: Rect, policy: OffGridPolicy) -> Self {
        Self {
            world,
            policy,
            quad_map: QuadMap::new(),
            cursor: Cursor::NoQuadrant,
            candidates: Vec::new(),
            candidates_revision: 0,
        }
    }

    /// Engine with every circle in `circles` already indexed
    pub fn with_circles(world: Rect, policy: OffGridPolicy, circles: &CircleSet) -> Self {
        let mut engine = Self::new(world, policy);
        engine.quad_map = QuadMap::populate(circles.iter(), &world);
        engine
    }

    /// Re-index a circle after it moved or resized
    pub fn update_circle(&mut self, circle: &Circle) -> bool {
        self.quad_map.assign(circle, &self.world)
    }

    pub fn remove_circle(&mut self, id: &str) -> bool {
        self.quad_map.remove(id)
    }

    /// Forget the cursor and cached candidates
    pub fn reset(&mut self) {
        self.cursor = Cursor::NoQuadrant;
        self.candidates.clear();
    }

    /// Ids of circles containing `point` (boundary inclusive).
    ///
    /// The candidate set is refreshed from the index when the point changes
    /// quadrant or the index changed since the last refresh. An
    /// unclassifiable point yields an empty result under
    /// `OffGridPolicy::Skip` and a linear scan under `FullScan`.
    pub fn step(&mut self, point: &Vector2, circles: &CircleSet) -> BTreeSet<CircleId> {
        let p = point.to_dvec2();
        let Some(q) = classify(p, &self.world) else {
            if self.cursor != Cursor::NoQuadrant {
                log::debug!("point {point} left the world; dropping candidates");
            }
            self.reset();
            return match self.policy {
                OffGridPolicy::Skip => BTreeSet::new(),
                OffGridPolicy::FullScan => circles
                    .iter()
                    .filter(|c| point_in_circle(p, c.center(), c.radius))
                    .map(|c| c.id.clone())
                    .collect(),
            };
        };

        let stale = self.candidates_revision != self.quad_map.revision();
        if self.cursor != Cursor::InQuadrant(q) || stale {
            self.candidates = self.quad_map.bucket(q).iter().cloned().collect();
            self.candidates_revision = self.quad_map.revision();
            log::debug!(
                "quadrant {} -> {}: {} candidates",
                super::rect::quadrant_number(self.cursor.quadrant()),
                q.number(),
                self.candidates.len()
            );
            self.cursor = Cursor::InQuadrant(q);
        }

        self.candidates
            .iter()
            .filter_map(|id| circles.get(id))
            .filter(|c| point_in_circle(p, c.center(), c.radius))
            .map(|c| c.id.clone())
            .collect()
    }

    #[inline]
    pub fn quadrant(&self) -> Option<Quadrant> {
        self.cursor.quadrant()
    }

    #[inline]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn candidates(&self) -> &[CircleId] {
        &self.candidates
    }

    pub fn world(&self) -> &Rect {
        &self.world
    }

    pub fn policy(&self) -> OffGridPolicy {
        self.policy
    }

    pub fn quad_map(&self) -> &QuadMap {
        &self.quad_map
    }
}
