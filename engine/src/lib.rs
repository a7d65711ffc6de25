//! Homing engine.
//!
//! Entities, layouts and the seeded scenario generator for the missile/plane
//! layout benchmark. Timing and statistics live in `homing_bench`.
//!
//! - [`math`]: the vector primitive
//! - [`entity`]: bodies, planes and missiles
//! - [`strategy`]: the layout, loop and write-ordering axes
//! - [`layout`]: missile populations under each layout
//! - [`scenario`]: reproducible population generation
//! - [`logging`]: channel-backed `log` sink

pub mod entity;
pub mod layout;
pub mod logging;
pub mod math;
pub mod scenario;
pub mod strategy;

pub use entity::{Body, MISSILE_SPEED, Missile, Plane};
pub use layout::{Swarm, build_swarm};
pub use math::Vector;
pub use scenario::{MissileSeed, Scenario, ScenarioConfig, ScenarioError};
pub use strategy::{LayoutStrategy, LoopStrategy, TickPlan, WriteOrdering};
