//! Layout where targets live in an array parallel to the missiles.

use std::mem::size_of;

use super::Swarm;
use crate::entity::{Body, Missile};
use crate::math::Vector;
use crate::scenario::Scenario;
use crate::strategy::{LayoutStrategy, LoopStrategy, TickPlan};

/// `targets[i]` is the plane chased by `missiles[i]`. Both vectors are built together
/// and never resized, so the index correspondence holds for the swarm's lifetime.
pub struct DecoupledSwarm<'a> {
    missiles: Vec<Missile>,
    targets: Vec<&'a Body>,
}

impl<'a> DecoupledSwarm<'a> {
    pub fn from_scenario(scenario: &'a Scenario) -> Self {
        let seeds = scenario.missile_seeds();
        let mut missiles = Vec::with_capacity(seeds.len());
        let mut targets = Vec::with_capacity(seeds.len());
        for seed in seeds {
            targets.push(scenario.target_of(seed));
            missiles.push(Missile::untargeted(seed.position));
        }
        Self { missiles, targets }
    }

    pub fn missiles(&self) -> &[Missile] {
        &self.missiles
    }

    pub fn targets(&self) -> &[&'a Body] {
        &self.targets
    }
}

impl Swarm for DecoupledSwarm<'_> {
    fn layout(&self) -> LayoutStrategy {
        LayoutStrategy::DecoupledPointerArray
    }

    fn len(&self) -> usize {
        self.missiles.len()
    }

    fn missile_stride(&self) -> usize {
        size_of::<Missile>()
    }

    fn tick(&mut self, time: f32, plan: TickPlan) {
        let ordering = plan.write_ordering;
        match plan.loop_strategy {
            LoopStrategy::Fused => {
                for (missile, target) in self.missiles.iter_mut().zip(&self.targets) {
                    missile.advance_toward(time, target.position, ordering);
                }
            }
            LoopStrategy::Split => {
                for (missile, target) in self.missiles.iter_mut().zip(&self.targets) {
                    missile.update_velocity_toward(target.position);
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
        self.targets.iter().map(|target| target.position).collect()
    }
}
