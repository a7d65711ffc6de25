//! Missile populations, one per [`LayoutStrategy`].
//!
//! A swarm owns its missiles and borrows the planes of the [`Scenario`] it was built
//! from, so every non-owning reference is bounded by the scenario's lifetime. The
//! layout is picked once through [`build_swarm`]; the per-tick loops inside each
//! swarm are statically dispatched.

pub mod decoupled;
pub mod embedded;

pub use decoupled::DecoupledSwarm;
pub use embedded::{EmbeddedSwarm, EmbeddedTarget, PointerSwarm, ValueSwarm};

use log::debug;

use crate::entity::Body;
use crate::math::Vector;
use crate::scenario::Scenario;
use crate::strategy::{LayoutStrategy, TickPlan};

/// A missile population laid out under one strategy.
pub trait Swarm {
    fn layout(&self) -> LayoutStrategy;

    /// Number of missiles. Fixed for the swarm's lifetime.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes occupied by one missile in the primary array.
    fn missile_stride(&self) -> usize;

    /// Run one full update over every missile.
    fn tick(&mut self, time: f32, plan: TickPlan);

    /// Copy of every missile body, in creation order.
    fn bodies(&self) -> Vec<Body>;

    /// Target position each missile is steering toward, in creation order.
    fn aim_points(&self) -> Vec<Vector>;

    /// Sum of all missile positions. Cheap fingerprint of the swarm state.
    fn checksum(&self) -> Vector {
        self.bodies().iter().map(|body| body.position).sum()
    }
}

/// Build the swarm for `layout` from `scenario`.
pub fn build_swarm<'a>(layout: LayoutStrategy, scenario: &'a Scenario) -> Box<dyn Swarm + 'a> {
    let swarm: Box<dyn Swarm + 'a> = match layout {
        LayoutStrategy::EmbeddedValue => Box::new(ValueSwarm::from_scenario(scenario)),
        LayoutStrategy::EmbeddedPointer => Box::new(PointerSwarm::from_scenario(scenario)),
        LayoutStrategy::DecoupledPointerArray => Box::new(DecoupledSwarm::from_scenario(scenario)),
    };
    debug!(
        "built {} swarm: {} missiles, {} bytes each",
        layout,
        swarm.len(),
        swarm.missile_stride()
    );
    swarm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Plane;
    use crate::scenario::{MissileSeed, ScenarioConfig};
    use crate::strategy::{LoopStrategy, WriteOrdering};

    const DT: f32 = 0.03;

    fn scenario() -> Scenario {
        Scenario::generate(&ScenarioConfig {
            plane_count: 64,
            missile_count: 256,
            seed: 42,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn layouts_share_initial_state() {
        let scenario = scenario();
        let expected_bodies: Vec<Body> = scenario
            .missile_seeds()
            .iter()
            .map(|seed| Body::at_rest(seed.position))
            .collect();
        let expected_aim: Vec<Vector> = scenario
            .missile_seeds()
            .iter()
            .map(|seed| scenario.target_of(seed).position)
            .collect();

        for layout in LayoutStrategy::ALL {
            let swarm = build_swarm(layout, &scenario);
            assert_eq!(swarm.layout(), layout);
            assert_eq!(swarm.len(), 256);
            assert_eq!(swarm.bodies(), expected_bodies, "{layout}");
            assert_eq!(swarm.aim_points(), expected_aim, "{layout}");
        }
    }

    #[test]
    fn fused_and_split_agree_for_every_layout() {
        let scenario = scenario();
        for layout in LayoutStrategy::ALL {
            for write_ordering in WriteOrdering::ALL {
                let mut fused = build_swarm(layout, &scenario);
                let mut split = build_swarm(layout, &scenario);
                for _ in 0..10 {
                    fused.tick(DT, TickPlan::new(LoopStrategy::Fused, write_ordering));
                    split.tick(DT, TickPlan::new(LoopStrategy::Split, write_ordering));
                }
                assert_eq!(fused.bodies(), split.bodies(), "{layout} {write_ordering}");
            }
        }
    }

    #[test]
    fn pointer_layouts_match_each_other() {
        // Planes never move during a tick, so live and frozen targets coincide too.
        let scenario = scenario();
        let plan = TickPlan::new(LoopStrategy::Split, WriteOrdering::WriteAtEnd);
        let mut swarms: Vec<_> = LayoutStrategy::ALL
            .into_iter()
            .map(|layout| build_swarm(layout, &scenario))
            .collect();
        for swarm in &mut swarms {
            for _ in 0..25 {
                swarm.tick(DT, plan);
            }
        }
        assert_eq!(swarms[0].bodies(), swarms[1].bodies());
        assert_eq!(swarms[1].bodies(), swarms[2].bodies());
        assert_eq!(swarms[1].checksum(), swarms[2].checksum());
    }

    #[test]
    fn ticks_accumulate_state() {
        let scenario = scenario();
        let mut swarm = build_swarm(LayoutStrategy::EmbeddedPointer, &scenario);
        let plan = TickPlan::new(LoopStrategy::Fused, WriteOrdering::Immediate);
        swarm.tick(DT, plan);
        let once = swarm.checksum();
        swarm.tick(DT, plan);
        assert_ne!(once, swarm.checksum());
    }

    #[test]
    fn decoupled_swarm_converges_on_stationary_target() {
        let target = Vector::new(60.0, -30.0, 15.0);
        let scenario = Scenario::from_parts(
            vec![Plane::new(target, Vector::ZERO)],
            vec![
                MissileSeed {
                    position: Vector::new(-40.0, 10.0, 0.0),
                    target: 0,
                },
                MissileSeed {
                    position: Vector::new(80.0, 80.0, 80.0),
                    target: 0,
                },
            ],
        )
        .unwrap();
        let mut swarm = build_swarm(LayoutStrategy::DecoupledPointerArray, &scenario);
        let plan = TickPlan::new(LoopStrategy::Split, WriteOrdering::Immediate);
        let step = crate::entity::MISSILE_SPEED * DT;

        let distances = |swarm: &dyn Swarm| -> Vec<f32> {
            swarm.bodies().iter().map(|b| (target - b.position).length()).collect()
        };
        let mut previous = distances(swarm.as_ref());
        for _ in 0..2_000 {
            swarm.tick(DT, plan);
            let current = distances(swarm.as_ref());
            for (before, after) in previous.iter().zip(&current) {
                if *before > step {
                    assert!(after < before, "diverged: {before} -> {after}");
                } else {
                    assert!(*after <= step + 1e-3, "escaped: {after}");
                }
            }
            previous = current;
        }
        assert!(previous.iter().all(|d| *d <= step + 1e-3));
    }
}
