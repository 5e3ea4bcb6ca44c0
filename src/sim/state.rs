//! Driver state and the circle entities it owns
//!
//! The driver owns every `Circle`; the index only ever stores ids.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::finite_or_zero;
use crate::geom::{Disc, Vector2, point_in_circle};
use crate::index::MembershipEngine;

pub type CircleId = String;

/// A circle entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: CircleId,
    pub x: f64,
    pub y: f64,
    /// Always `>= 0`; 0 is a point
    pub radius: f64,
}

impl Circle {
    /// Non-finite coordinates become 0, invalid radii become 0
    pub fn new(id: impl Into<CircleId>, x: f64, y: f64, radius: f64) -> Self {
        Self {
            id: id.into(),
            x: finite_or_zero(x),
            y: finite_or_zero(y),
            radius: sanitize_radius(radius),
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = finite_or_zero(x);
        self.y = finite_or_zero(y);
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = sanitize_radius(radius);
    }

    #[inline]
    pub fn disc(&self) -> Disc {
        Disc::new(self.center(), self.radius)
    }

    #[inline]
    pub fn contains(&self, p: DVec2) -> bool {
        point_in_circle(p, self.center(), self.radius)
    }
}

fn sanitize_radius(r: f64) -> f64 {
    if r.is_finite() && r > 0.0 { r } else { 0.0 }
}

/// Circles keyed by id (stable iteration order)
///
/// Don't change a circle's `id` through `get_mut`/`iter_mut`; the key won't
/// follow it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CircleSet {
    circles: BTreeMap<CircleId, Circle>,
}

impl CircleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; returns the previous circle with that id
    pub fn insert(&mut self, circle: Circle) -> Option<Circle> {
        self.circles.insert(circle.id.clone(), circle)
    }

    pub fn get(&self, id: &str) -> Option<&Circle> {
        self.circles.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Circle> {
        self.circles.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Circle> {
        self.circles.remove(id)
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Circle> {
        self.circles.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Circle> {
        self.circles.values_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &CircleId> {
        self.circles.keys()
    }
}

impl FromIterator<Circle> for CircleSet {
    fn from_iter<I: IntoIterator<Item = Circle>>(iter: I) -> Self {
        let mut set = Self::new();
        for circle in iter {
            set.insert(circle);
        }
        set
    }
}

/// Complete driver state (deterministic for a given config)
#[derive(Debug, Clone)]
pub struct SimState {
    pub config: SimConfig,
    pub circles: CircleSet,
    /// Test point
    pub point: Vector2,
    pub engine: MembershipEngine,
    pub rng: Pcg32,
    /// Steps taken so far
    pub time_ticks: u64,
    /// Hits from the previous step
    pub hits: BTreeSet<CircleId>,
}

impl SimState {
    /// Validate `config`, then scatter `config.circle_count` circles and
    /// index them.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let world = config.world;
        let (x0, x1) = world.x_bounds();
        let (y0, y1) = world.y_bounds();

        let circles: CircleSet = (0..config.circle_count)
            .map(|i| {
                let x = rng.random_range(x0..=x1);
                let y = rng.random_range(y0..=y1);
                let r = rng.random_range(config.radius_min..=config.radius_max);
                Circle::new(format!("c{i}"), x, y, r)
            })
            .collect();

        let engine = MembershipEngine::with_circles(world, config.off_grid, &circles);
        log::info!(
            "Spawned {} circles in {:?} (seed {})",
            circles.len(),
            world,
            config.seed
        );

        Ok(Self {
            point: Vector2::from(world.center()),
            circles,
            engine,
            rng,
            time_ticks: 0,
            hits: BTreeSet::new(),
            config,
        })
    }

    /// Add a circle (or replace one with the same id) and index it
    pub fn insert_circle(&mut self, circle: Circle) {
        self.engine.update_circle(&circle);
        self.circles.insert(circle);
    }

    pub fn remove_circle(&mut self, id: &str) -> Option<Circle> {
        self.engine.remove_circle(id);
        self.circles.remove(id)
    }

    /// Teleport the test point
    pub fn set_point(&mut self, x: f64, y: f64) {
        self.point.set_x(x);
        self.point.set_y(y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_sanitizes_input() {
        let c = Circle::new("a", f64::NAN, 3.0, -2.0);
        assert_eq!((c.x, c.y, c.radius), (0.0, 3.0, 0.0));
        let mut c = Circle::new("b", 1.0, 1.0, f64::INFINITY);
        assert_eq!(c.radius, 0.0);
        c.set_radius(4.0);
        c.move_to(2.0, f64::NEG_INFINITY);
        assert_eq!(c.center(), DVec2::new(2.0, 0.0));
        assert!(c.contains(DVec2::new(2.0, 4.0)));
    }

    #[test]
    fn test_circle_disc_feeds_geometry() {
        let a = Circle::new("a", 0.0, 0.0, 5.0);
        let b = Circle::new("b", 8.0, 0.0, 5.0);
        let hit = crate::geom::circle_circle_intersection(a.disc(), b.disc());
        assert_eq!(hit.len(), 2);
    }

    #[test]
    fn test_circle_set_is_keyed_by_id() {
        let mut set: CircleSet = [
            Circle::new("b", 0.0, 0.0, 1.0),
            Circle::new("a", 0.0, 0.0, 1.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.ids().cloned().collect::<Vec<_>>(), vec!["a", "b"]);

        let old = set.insert(Circle::new("a", 5.0, 5.0, 2.0));
        assert_eq!(old.map(|c| c.radius), Some(1.0));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("a").map(|c| c.x), Some(5.0));
        assert!(set.remove("b").is_some());
        assert!(set.get("b").is_none());
    }

    #[test]
    fn test_new_state_spawns_inside_world() {
        let config = SimConfig {
            circle_count: 25,
            ..SimConfig::default()
        };
        let state = SimState::new(config.clone()).unwrap();
        assert_eq!(state.circles.len(), 25);
        assert_eq!(state.engine.quad_map().len(), 25);
        for c in state.circles.iter() {
            assert!(config.world.contains(c.center()));
            assert!(c.radius >= config.radius_min && c.radius <= config.radius_max);
        }
        assert_eq!(state.point.to_dvec2(), config.world.center());
    }

    #[test]
    fn test_insert_and_remove_keep_index_in_sync() {
        let mut state = SimState::new(SimConfig {
            circle_count: 0,
            ..SimConfig::default()
        })
        .unwrap();
        state.insert_circle(Circle::new("x", 100.0, 100.0, 5.0));
        assert_eq!(state.engine.quad_map().len(), 1);
        assert!(state.remove_circle("x").is_some());
        assert!(state.engine.quad_map().is_empty());
    }

    #[test]
    fn test_new_state_rejects_invalid_config() {
        let inverted = SimConfig {
            radius_min: 20.0,
            radius_max: 10.0,
            ..SimConfig::default()
        };
        assert!(matches!(SimState::new(inverted), Err(ConfigError::Invalid { .. })));

        let fraction = SimConfig {
            moving_fraction: 1.5,
            ..SimConfig::default()
        };
        assert!(matches!(SimState::new(fraction), Err(ConfigError::Invalid { .. })));

        let step = SimConfig {
            circle_step: -1.0,
            ..SimConfig::default()
        };
        assert!(SimState::new(step).is_err());
    }
}
