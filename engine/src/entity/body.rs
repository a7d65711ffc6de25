use crate::math::Vector;

/// Kinematic state shared by every entity (24 bytes).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
}

impl Body {
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self { position, velocity }
    }

    /// A body at `position` with no velocity.
    pub fn at_rest(position: Vector) -> Self {
        Self::new(position, Vector::ZERO)
    }
}
