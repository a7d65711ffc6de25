//! Layouts where each missile carries its own target handle.

use std::mem::size_of;

use super::Swarm;
use crate::entity::{Body, Missile, Target};
use crate::math::Vector;
use crate::scenario::Scenario;
use crate::strategy::{LayoutStrategy, LoopStrategy, TickPlan};

/// Target handle that can live inside a missile.
pub trait EmbeddedTarget<'a>: Target + Copy {
    const LAYOUT: LayoutStrategy;

    /// Capture a handle to `body` at creation time.
    fn capture(body: &'a Body) -> Self;
}

impl<'a> EmbeddedTarget<'a> for Vector {
    const LAYOUT: LayoutStrategy = LayoutStrategy::EmbeddedValue;

    fn capture(body: &'a Body) -> Self {
        body.position
    }
}

impl<'a> EmbeddedTarget<'a> for &'a Body {
    const LAYOUT: LayoutStrategy = LayoutStrategy::EmbeddedPointer;

    fn capture(body: &'a Body) -> Self {
        body
    }
}

/// Missiles with a copy of the target position taken at creation.
pub type ValueSwarm = EmbeddedSwarm<Vector>;

/// Missiles with a reference to the live target body.
pub type PointerSwarm<'a> = EmbeddedSwarm<&'a Body>;

pub struct EmbeddedSwarm<T> {
    missiles: Vec<Missile<T>>,
}

impl<T> EmbeddedSwarm<T> {
    pub fn from_scenario<'a>(scenario: &'a Scenario) -> Self
    where
        T: EmbeddedTarget<'a>,
    {
        let missiles = scenario
            .missile_seeds()
            .iter()
            .map(|seed| Missile::new(seed.position, T::capture(scenario.target_of(seed))))
            .collect();
        Self { missiles }
    }

    pub fn missiles(&self) -> &[Missile<T>] {
        &self.missiles
    }
}

impl<'a, T: EmbeddedTarget<'a>> Swarm for EmbeddedSwarm<T> {
    fn layout(&self) -> LayoutStrategy {
        T::LAYOUT
    }

    fn len(&self) -> usize {
        self.missiles.len()
    }

    fn missile_stride(&self) -> usize {
        size_of::<Missile<T>>()
    }

    fn tick(&mut self, time: f32, plan: TickPlan) {
        let ordering = plan.write_ordering;
        match plan.loop_strategy {
            LoopStrategy::Fused => {
                for missile in &mut self.missiles {
                    missile.update(time, ordering);
                }
            }
            LoopStrategy::Split => {
                for missile in &mut self.missiles {
                    missile.update_velocity();
                }
                for missile in &mut self.missiles {
                    missile.update_position(time, ordering);
                }
            }
        }
    }

    fn bodies(&self) -> Vec<Body> {
        self.missiles.iter().map(|missile| missile.body).collect()
    }

    fn aim_points(&self) -> Vec<Vector> {
        self.missiles.iter().map(|missile| missile.aim_point()).collect()
    }
}
