//! Vector math shared by planes and missiles.

pub mod vector;

pub use vector::{Vector, direction};
