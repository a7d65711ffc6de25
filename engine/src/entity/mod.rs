//! Minimal moving entities. They exist to expose memory access patterns, so each
//! one is a [`Body`] plus the smallest amount of extra state its motion needs.

pub mod body;
pub mod missile;
pub mod plane;

pub use body::Body;
pub use missile::{MISSILE_SPEED, Missile, Target};
pub use plane::Plane;
