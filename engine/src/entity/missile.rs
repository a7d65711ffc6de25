//! Homing missile.
//!
//! A missile is generic over how it remembers its target:
//!
//! - `Missile<Vector>` holds a frozen copy of the target position,
//! - `Missile<&Body>` holds a borrowed reference to the live target body,
//! - `Missile` (`Missile<()>`) holds nothing and is handed the target by the caller.
//!
//! The update math is identical for all three. A missile only ever reads its own
//! body and its target's position, so running the velocity step for a whole
//! population before any position step is free of cross-missile hazards.

use super::Body;
use crate::math::{Vector, direction};
use crate::strategy::WriteOrdering;

/// Speed shared by every missile, in units per second.
pub const MISSILE_SPEED: f32 = 12.8;

/// Something a missile can home on.
pub trait Target {
    fn target_position(&self) -> Vector;
}

impl Target for Vector {
    #[inline]
    fn target_position(&self) -> Vector {
        *self
    }
}

impl Target for &Body {
    #[inline]
    fn target_position(&self) -> Vector {
        self.position
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Missile<T = ()> {
    pub body: Body,
    target: T,
}

impl Missile {
    /// A missile that carries no target of its own.
    pub fn untargeted(position: Vector) -> Self {
        Self::new(position, ())
    }
}

impl<T> Missile<T> {
    /// A missile at rest at `position`.
    pub fn new(position: Vector, target: T) -> Self {
        Self {
            body: Body::at_rest(position),
            target,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Velocity that points this missile at `target_position` at full speed.
    #[inline]
    pub fn steer(&self, target_position: Vector) -> Vector {
        direction(self.body.position, target_position) * MISSILE_SPEED
    }

    /// Fused update against an explicitly supplied target position.
    #[inline]
    pub fn advance_toward(&mut self, time: f32, target_position: Vector, ordering: WriteOrdering) {
        match ordering {
            WriteOrdering::Immediate => {
                self.body.velocity = self.steer(target_position);
                self.body.position += self.body.velocity * time;
            }
            WriteOrdering::WriteAtEnd => {
                let velocity = self.steer(target_position);
                let position = self.body.position + velocity * time;
                self.body.position = position;
                self.body.velocity = velocity;
            }
        }
    }

    /// Velocity half of a split update.
    #[inline]
    pub fn update_velocity_toward(&mut self, target_position: Vector) {
        self.body.velocity = self.steer(target_position);
    }

    /// Position half of a split update, using whatever velocity is stored.
    #[inline]
    pub fn update_position(&mut self, time: f32, ordering: WriteOrdering) {
        match ordering {
            WriteOrdering::Immediate => self.body.position += self.body.velocity * time,
            WriteOrdering::WriteAtEnd => {
                self.body.position = self.body.position + self.body.velocity * time
            }
        }
    }
}

impl<T: Target> Missile<T> {
    /// Where this missile believes its target is.
    #[inline]
    pub fn aim_point(&self) -> Vector {
        self.target.target_position()
    }

    /// Fused update against the stored target.
    #[inline]
    pub fn update(&mut self, time: f32, ordering: WriteOrdering) {
        let target_position = self.aim_point();
        self.advance_toward(time, target_position, ordering);
    }

    /// Velocity half of a split update against the stored target.
    #[inline]
    pub fn update_velocity(&mut self) {
        let target_position = self.aim_point();
        self.update_velocity_toward(target_position);
    }
}
