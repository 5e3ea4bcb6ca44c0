//! Simulation configuration
//!
//! Tuning that used to be process-wide constants (circle count, radius
//! bounds, walk step bounds) lives here and is passed into the driver.
//! Persisted as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::index::Rect;

/// How many circles to scatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Density {
    Sparse,
    #[default]
    Medium,
    Dense,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Sparse => "Sparse",
            Density::Medium => "Medium",
            Density::Dense => "Dense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sparse" | "low" => Some(Density::Sparse),
            "medium" | "med" => Some(Density::Medium),
            "dense" | "high" => Some(Density::Dense),
            _ => None,
        }
    }

    /// Circle count for this preset
    pub fn circle_count(&self) -> usize {
        match self {
            Density::Sparse => 10,
            Density::Medium => 40,
            Density::Dense => 200,
        }
    }
}

/// What the engine does when the test point is outside every quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OffGridPolicy {
    /// Report no intersections (fast path only)
    #[default]
    Skip,
    /// Fall back to testing every circle
    FullScan,
}

/// Driver and index configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// World rectangle; either vertical sense
    pub world: Rect,
    pub circle_count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Max per-axis jitter of the test point per tick
    pub point_step: f64,
    /// Max per-axis jitter of a moving circle per tick
    pub circle_step: f64,
    /// Chance (0-1) that a given circle moves on a tick
    pub moving_fraction: f64,
    /// RNG seed
    pub seed: u64,
    pub off_grid: OffGridPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world: Rect::new(0.0, 0.0, 800.0, 600.0),
            circle_count: Density::default().circle_count(),
            radius_min: 10.0,
            radius_max: 60.0,
            point_step: 8.0,
            circle_step: 2.0,
            moving_fraction: 0.25,
            seed: 0x5eed,
            off_grid: OffGridPolicy::Skip,
        }
    }
}

impl SimConfig {
    /// Defaults with the preset's circle count
    pub fn from_preset(preset: Density) -> Self {
        Self {
            circle_count: preset.circle_count(),
            ..Self::default()
        }
    }

    /// Check ranges the driver relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.world.is_finite() {
            return Err(ConfigError::invalid("world bounds must be finite"));
        }
        if self.world.width() == 0.0 || self.world.height() == 0.0 {
            return Err(ConfigError::invalid("world must have non-zero width and height"));
        }
        if !(self.radius_min.is_finite() && self.radius_max.is_finite()) {
            return Err(ConfigError::invalid("radius bounds must be finite"));
        }
        if self.radius_min < 0.0 || self.radius_min > self.radius_max {
            return Err(ConfigError::invalid(format!(
                "radius bounds must satisfy 0 <= min <= max, got [{}, {}]",
                self.radius_min, self.radius_max
            )));
        }
        for (name, step) in [("point_step", self.point_step), ("circle_step", self.circle_step)] {
            if !step.is_finite() || step < 0.0 {
                return Err(ConfigError::invalid(format!(
                    "{name} must be a non-negative number, got {step}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.moving_fraction) {
            return Err(ConfigError::invalid(format!(
                "moving_fraction must be within [0, 1], got {}",
                self.moving_fraction
            )));
        }
        Ok(())
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Write as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Config saved to {}", path.as_ref().display());
        Ok(())
    }
}
