use super::Body;
use crate::math::Vector;

/// Target entity flying at constant velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Plane {
    pub body: Body,
}

impl Plane {
    pub fn new(position: Vector, velocity: Vector) -> Self {
        Self {
            body: Body::new(position, velocity),
        }
    }

    /// A plane at `position` flying radially away from the origin at `speed`.
    /// A plane sitting exactly on the origin does not move.
    pub fn radial(position: Vector, speed: f32) -> Self {
        Self::new(position, position.normalize_or_zero() * speed)
    }

    /// Advance by `time` seconds along the current velocity.
    #[inline]
    pub fn update(&mut self, time: f32) {
        self.body.position += self.body.velocity * time;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_moves_linearly() {
        let velocity = Vector::new(2.0, -4.0, 0.5);
        let mut plane = Plane::new(Vector::new(10.0, 20.0, 30.0), velocity);
        plane.update(0.25);
        assert_eq!(plane.body.position, Vector::new(10.5, 19.0, 30.125));
        assert_eq!(plane.body.velocity, velocity);
    }

    #[test]
    fn plane_position_after_many_steps() {
        let start = Vector::new(-100.0, 50.0, 0.0);
        let velocity = Vector::new(1.0, 2.0, -3.0);
        let mut plane = Plane::new(start, velocity);
        let dt = 0.03;
        for _ in 0..1000 {
            plane.update(dt);
        }
        let expected = start + velocity * (dt * 1000.0);
        assert!((plane.body.position - expected).length() < 5e-2);
    }

    #[test]
    fn radial_velocity_has_requested_speed() {
        let plane = Plane::radial(Vector::new(300.0, -400.0, 0.0), 5.0);
        assert!((plane.body.velocity.length() - 5.0).abs() < 1e-5);
        assert!(plane.body.velocity.dot(plane.body.position) > 0.0);

        let parked = Plane::radial(Vector::ZERO, 5.0);
        assert_eq!(parked.body.velocity, Vector::ZERO);
    }
}
