//! Per-axis revert-and-zero collision resolution
//!
//! A body's motion during a step is split into its three single-axis components.
//! Each component that on its own would make the body's box overlap the obstacle is
//! undone: the coordinate goes back to the pre-step value and the velocity along that
//! axis is cleared. Axes are tested Z, then X, then Y, and never short-circuit.

use crate::body::Body;
use crate::events::AxisMask;
use setphysics_math::{Axis, Vec3};

/// Axis test order
const RESOLUTION_ORDER: [Axis; 3] = [Axis::Z, Axis::X, Axis::Y];

/// New state for a body that collided
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Axes that were reverted
    pub axes: AxisMask,
}

/// Resolve `body` against `obstacle`'s current bounding box
///
/// Returns `None` when no single-axis move collides, so callers leave the body alone.
/// Bodies without a shape never collide.
pub fn resolve_axis(body: &Body, obstacle: &Body) -> Option<Correction> {
    let local = body.shape()?.local_aabb();
    let obstacle_box = obstacle.bounding_box().ok()?;

    let last = body.last_position();
    let current = body.position();

    let mut position = current;
    let mut velocity = body.velocity();
    let mut axes = AxisMask::NONE;

    for axis in RESOLUTION_ORDER {
        let moved_on_axis = last.with_axis(axis, current.axis(axis));
        if local.translate(moved_on_axis).intersects(&obstacle_box) {
            position = position.with_axis(axis, last.axis(axis));
            velocity = velocity.with_axis(axis, 0.0);
            axes.insert(axis);
        }
    }

    if axes.is_empty() {
        None
    } else {
        Some(Correction { position, velocity, axes })
    }
}
