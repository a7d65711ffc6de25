//! Three component `f32` vector.
//!
//! The simulation only needs add, subtract, scale and normalize, which `glam::Vec3`
//! provides as operators and methods. This module pins down the one policy glam
//! leaves to the caller: what a direction toward a coincident point means.

/// 3D vector (12 bytes).
pub type Vector = glam::Vec3;

/// Unit vector pointing from `from` toward `to`.
///
/// When the two points coincide (or are so close that the reciprocal length is not
/// finite) the result is `Vector::ZERO`. Callers scaling this by a speed therefore
/// stop dead instead of producing NaN.
#[inline]
pub fn direction(from: Vector, to: Vector) -> Vector {
    (to - from).normalize_or_zero()
}
