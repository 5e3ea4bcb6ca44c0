//! Quadrant bucket index
//!
//! Each circle id lives in every bucket whose quadrant rectangle its bounding
//! square touches. Over-inclusion is expected: a point classified into
//! quadrant Q can only be inside circles that are members of Q's bucket, so
//! the index never yields a false negative.

use std::collections::BTreeSet;

use super::rect::{Quadrant, Rect};
use crate::sim::{Circle, CircleId};

static EMPTY_BUCKET: BTreeSet<CircleId> = BTreeSet::new();

/// Circle ids per quadrant, addressed by `Quadrant::index()`
#[derive(Debug, Clone, Default)]
pub struct QuadMap {
    buckets: [BTreeSet<CircleId>; 4],
    /// Distinct ids held by at least one bucket
    indexed: usize,
    /// Bumped whenever any bucket's membership changes
    revision: u64,
}

impl QuadMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over `circles`
    pub fn populate<'a>(circles: impl IntoIterator<Item = &'a Circle>, rect: &Rect) -> Self {
        let mut map = Self::new();
        for circle in circles {
            map.assign(circle, rect);
        }
        map
    }

    /// Place `circle` in exactly the buckets its bounding square overlaps.
    ///
    /// Idempotent; call again whenever the circle moves or resizes. Returns
    /// whether any bucket changed.
    pub fn assign(&mut self, circle: &Circle, rect: &Rect) -> bool {
        let center = circle.center();
        let was_indexed = self.holds(&circle.id);
        let mut changed = false;
        for q in Quadrant::ALL {
            let bucket = &mut self.buckets[q.index()];
            let overlaps = rect.quadrant_rect(q).overlaps_square(center, circle.radius);
            changed |= if overlaps {
                if bucket.contains(&circle.id) {
                    false
                } else {
                    bucket.insert(circle.id.clone())
                }
            } else {
                bucket.remove(&circle.id)
            };
        }
        if changed {
            self.revision += 1;
            match (was_indexed, self.holds(&circle.id)) {
                (false, true) => self.indexed += 1,
                (true, false) => self.indexed -= 1,
                _ => {}
            }
        }
        changed
    }

    /// Drop `id` from every bucket
    pub fn remove(&mut self, id: &str) -> bool {
        let mut changed = false;
        for bucket in &mut self.buckets {
            changed |= bucket.remove(id);
        }
        if changed {
            self.revision += 1;
            self.indexed -= 1;
        }
        changed
    }

    pub fn clear(&mut self) {
        if self.buckets.iter().any(|b| !b.is_empty()) {
            self.revision += 1;
        }
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.indexed = 0;
    }

    #[inline]
    pub fn bucket(&self, q: Quadrant) -> &BTreeSet<CircleId> {
        &self.buckets[q.index()]
    }

    /// Bucket for a classification result; unclassified maps to the empty set
    pub fn bucket_for(&self, q: Option<Quadrant>) -> &BTreeSet<CircleId> {
        match q {
            Some(q) => self.bucket(q),
            None => &EMPTY_BUCKET,
        }
    }

    /// Quadrants currently holding `id`
    pub fn quadrants_of(&self, id: &str) -> Vec<Quadrant> {
        Quadrant::ALL
            .into_iter()
            .filter(|q| self.buckets[q.index()].contains(id))
            .collect()
    }

    /// Number of distinct ids indexed; a straddling circle counts once
    #[inline]
    pub fn len(&self) -> usize {
        self.indexed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indexed == 0
    }

    fn holds(&self, id: &str) -> bool {
        self.buckets.iter().any(|b| b.contains(id))
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use proptest::prelude::*;

    use crate::geom::point_in_circle;
    use crate::index::classify;

    fn world() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn test_assign_single_quadrant() {
        let mut map = QuadMap::new();
        let a = Circle::new("A", 75.0, 25.0, 10.0);
        assert!(map.assign(&a, &world()));
        assert_eq!(map.quadrants_of("A"), vec![Quadrant::One]);
        assert!(map.bucket(Quadrant::One).contains("A"));
        assert!(map.bucket(Quadrant::Four).is_empty());
    }

    #[test]
    fn test_assign_straddling_circle() {
        let mut map = QuadMap::new();
        let c = Circle::new("mid", 50.0, 50.0, 5.0);
        map.assign(&c, &world());
        assert_eq!(map.quadrants_of("mid"), Quadrant::ALL.to_vec());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut map = QuadMap::new();
        let c = Circle::new("B", 45.0, 20.0, 8.0);
        assert!(map.assign(&c, &world()));
        let before: Vec<_> = Quadrant::ALL.iter().map(|q| map.bucket(*q).clone()).collect();
        let revision = map.revision();

        assert!(!map.assign(&c, &world()));
        let after: Vec<_> = Quadrant::ALL.iter().map(|q| map.bucket(*q).clone()).collect();
        assert_eq!(before, after);
        assert_eq!(map.revision(), revision);
    }

    #[test]
    fn test_reassign_after_move() {
        let mut map = QuadMap::new();
        let mut c = Circle::new("C", 75.0, 25.0, 5.0);
        map.assign(&c, &world());
        c.move_to(20.0, 80.0);
        assert!(map.assign(&c, &world()));
        assert_eq!(map.quadrants_of("C"), vec![Quadrant::Three]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut map = QuadMap::populate(
            &[Circle::new("a", 10.0, 10.0, 1.0), Circle::new("b", 90.0, 90.0, 1.0)],
            &world(),
        );
        assert_eq!(map.len(), 2);
        assert!(map.remove("a"));
        assert!(!map.remove("a"));
        assert_eq!(map.len(), 1);
        map.clear();
        assert!(map.is_empty());
    }

    #[test]
    fn test_len_follows_circles_leaving_and_entering_world() {
        let mut map = QuadMap::new();
        let mut c = Circle::new("D", 50.0, 50.0, 5.0);
        map.assign(&c, &world());
        map.assign(&Circle::new("E", 10.0, 10.0, 2.0), &world());
        assert_eq!(map.len(), 2);

        c.move_to(500.0, 500.0);
        assert!(map.assign(&c, &world()));
        assert!(map.quadrants_of("D").is_empty());
        assert_eq!(map.len(), 1);

        c.move_to(80.0, 20.0);
        assert!(map.assign(&c, &world()));
        assert_eq!(map.len(), 2);
        assert!(map.remove("D"));
        assert!(map.remove("E"));
        assert_eq!(map.len(), 0);
        assert!(map.is_empty());
    }

    #[test]
    fn test_bucket_for_unclassified_is_empty() {
        let map = QuadMap::populate(&[Circle::new("a", 50.0, 50.0, 50.0)], &world());
        assert!(map.bucket_for(None).is_empty());
        assert_eq!(map.bucket_for(Some(Quadrant::Two)).len(), 1);
    }

    proptest! {
        #[test]
        fn prop_no_false_negatives(
            cx in -20.0f64..120.0, cy in -20.0f64..120.0, r in 0.0f64..40.0,
            px in 0.0f64..=100.0, py in 0.0f64..=100.0,
            y_up in any::<bool>(),
        ) {
            // Same extent in both vertical senses
            let rect = if y_up { Rect::new(0.0, 100.0, 100.0, 0.0) } else { world() };
            let circle = Circle::new("c", cx, cy, r);
            let map = QuadMap::populate([&circle], &rect);
            let p = DVec2::new(px, py);
            if point_in_circle(p, circle.center(), circle.radius) {
                let q = classify(p, &rect);
                prop_assert!(q.is_some());
                prop_assert!(map.bucket_for(q).contains("c"));
            }
        }
    }
}
