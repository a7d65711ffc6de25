//! Seeded population generator.
//!
//! A scenario owns the planes and records, for every missile, where it starts and
//! which plane it chases. It knows nothing about layouts: every swarm is built from
//! the same scenario, so switching layouts never changes counts, positions or the
//! target assignment.

use std::ops::Range;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use thiserror::Error;

use crate::entity::{Body, Plane};
use crate::math::Vector;

/// Inputs to [`Scenario::generate`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub plane_count: usize,
    pub missile_count: usize,
    /// Range for each position component, planes and missiles alike.
    pub position_range: Range<f32>,
    /// Range for plane speeds.
    pub speed_range: Range<f32>,
    /// Random seed for reproducibility.
    pub seed: u64,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            plane_count: 1_000,
            missile_count: 1_000,
            position_range: -1000.0..1000.0,
            speed_range: 0.0..10.0,
            seed: 5489,
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.plane_count == 0 {
            return Err(ScenarioError::NoPlanes);
        }
        if self.missile_count == 0 {
            return Err(ScenarioError::NoMissiles);
        }
        check_range("position_range", &self.position_range)?;
        check_range("speed_range", &self.speed_range)?;
        if self.speed_range.start < 0.0 {
            return Err(ScenarioError::NegativeSpeed(self.speed_range.start));
        }
        Ok(())
    }
}

fn check_range(name: &'static str, range: &Range<f32>) -> Result<(), ScenarioError> {
    if !(range.start.is_finite() && range.end.is_finite() && range.start < range.end) {
        return Err(ScenarioError::EmptyRange {
            name,
            start: range.start,
            end: range.end,
        });
    }
    // Sampling scales by the span, so it must be representable too.
    if !(range.end - range.start).is_finite() {
        return Err(ScenarioError::RangeOverflow {
            name,
            start: range.start,
            end: range.end,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error("plane_count must be at least 1")]
    NoPlanes,
    #[error("missile_count must be at least 1")]
    NoMissiles,
    #[error("{name} must be a finite, non-empty range (got {start}..{end})")]
    EmptyRange {
        name: &'static str,
        start: f32,
        end: f32,
    },
    #[error("{name} spans more than an f32 can hold (got {start}..{end})")]
    RangeOverflow {
        name: &'static str,
        start: f32,
        end: f32,
    },
    #[error("speed_range must not start below zero (got {0})")]
    NegativeSpeed(f32),
    #[error("missile {missile} targets plane {target} but only {planes} planes exist")]
    TargetOutOfRange {
        missile: usize,
        target: usize,
        planes: usize,
    },
}

/// Starting point and target assignment for one missile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissileSeed {
    pub position: Vector,
    /// Index into the scenario's planes.
    pub target: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    planes: Vec<Plane>,
    missiles: Vec<MissileSeed>,
}

impl Scenario {
    /// Generate planes first, then missiles, from a single seeded stream.
    ///
    /// Per plane: x, y, z, then speed. Per missile: x, y, z, then target index.
    pub fn generate(config: &ScenarioConfig) -> Result<Self, ScenarioError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let planes: Vec<Plane> = (0..config.plane_count)
            .map(|_| {
                let position = random_vector(&mut rng, &config.position_range);
                let speed = rng.gen_range(config.speed_range.clone());
                Plane::radial(position, speed)
            })
            .collect();

        let missiles: Vec<MissileSeed> = (0..config.missile_count)
            .map(|_| MissileSeed {
                position: random_vector(&mut rng, &config.position_range),
                target: rng.gen_range(0..config.plane_count),
            })
            .collect();

        debug!(
            "generated {} planes and {} missiles from seed {}",
            planes.len(),
            missiles.len(),
            config.seed
        );
        Ok(Self { planes, missiles })
    }

    /// Assemble a scenario by hand. Every target index must name an existing plane.
    pub fn from_parts(planes: Vec<Plane>, missiles: Vec<MissileSeed>) -> Result<Self, ScenarioError> {
        if planes.is_empty() {
            return Err(ScenarioError::NoPlanes);
        }
        if missiles.is_empty() {
            return Err(ScenarioError::NoMissiles);
        }
        if let Some((missile, seed)) = missiles
            .iter()
            .enumerate()
            .find(|(_, seed)| seed.target >= planes.len())
        {
            return Err(ScenarioError::TargetOutOfRange {
                missile,
                target: seed.target,
                planes: planes.len(),
            });
        }
        Ok(Self { planes, missiles })
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn missile_seeds(&self) -> &[MissileSeed] {
        &self.missiles
    }

    /// Body of the plane `seed` chases.
    pub fn target_of(&self, seed: &MissileSeed) -> &Body {
        &self.planes[seed.target].body
    }

    /// Advance every plane by `time` seconds. Only possible while no swarm borrows
    /// the planes.
    pub fn advance_planes(&mut self, time: f32) {
        for plane in &mut self.planes {
            plane.update(time);
        }
    }
}

fn random_vector(rng: &mut ChaCha8Rng, range: &Range<f32>) -> Vector {
    let x = rng.gen_range(range.clone());
    let y = rng.gen_range(range.clone());
    let z = rng.gen_range(range.clone());
    Vector::new(x, y, z)
}
