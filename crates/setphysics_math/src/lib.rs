//! # setphysics_math - Geometry primitives for SetPhysics
//!
//! Double-precision vectors, axis-aligned bounding boxes and the body shapes
//! that produce them. Everything here is a `Copy` value type.

pub mod vector;
pub mod bounds;
pub mod shape;

pub use vector::*;
pub use bounds::*;
pub use shape::*;

/// Common math constants
pub mod consts {
    pub const EPSILON: f64 = 1e-9;
    /// Fallback returned by [`safe_ratio`](crate::safe_ratio) for degenerate quotients
    pub const DEGENERATE_RATIO: f64 = 1.0;
}

/// Quotient `num / den` that never produces infinity or NaN
///
/// Falls back to [`consts::DEGENERATE_RATIO`] when the denominator is zero or the
/// result is not finite.
#[inline]
pub fn safe_ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        return consts::DEGENERATE_RATIO;
    }
    let ratio = num / den;
    if ratio.is_finite() { ratio } else { consts::DEGENERATE_RATIO }
}

pub mod prelude {
    pub use crate::vector::{Axis, Vec3};
    pub use crate::bounds::Aabb;
    pub use crate::shape::Shape;
    pub use crate::safe_ratio;
}
