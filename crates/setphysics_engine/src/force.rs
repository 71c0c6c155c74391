//! Force storage for bodies

use crate::error::{PhysicsError, Result};
use serde::{Deserialize, Serialize};
use setphysics_math::Vec3;

/// Scale applied to forces added through [`Forces::add`]
///
/// Environmental forces (gravity) are never scaled.
pub const FORCE_DAMPING: f64 = 0.1;

/// A force given as an intensity along a direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Magnitude
    pub intensity: f64,
    /// Direction (used as given, not normalized)
    pub direction: Vec3,
}

impl Force {
    pub fn new(intensity: f64, direction: Vec3) -> Self {
        Self { intensity, direction }
    }

    /// Force vector `direction * intensity`
    pub fn vector(&self) -> Vec3 {
        self.direction * self.intensity
    }
}

impl From<Force> for Vec3 {
    fn from(force: Force) -> Self {
        force.vector()
    }
}

/// All forces acting on a body
///
/// The environmental slot holds the world's gravity and is managed by the world only;
/// `applied` holds forces added by callers, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forces {
    gravity: Option<Vec3>,
    applied: Vec<Vec3>,
}

impl Forces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environmental (gravity) force, if the world has one enabled
    pub fn gravity(&self) -> Option<Vec3> {
        self.gravity
    }

    pub(crate) fn set_gravity(&mut self, gravity: Option<Vec3>) {
        self.gravity = gravity;
    }

    /// Rewrite only the Y component of the gravity entry
    pub(crate) fn set_gravity_y(&mut self, y: f64) {
        if let Some(gravity) = self.gravity.as_mut() {
            *gravity = gravity.with_y(y);
        }
    }

    /// Forces added by callers
    pub fn applied(&self) -> &[Vec3] {
        &self.applied
    }

    /// Append `force` scaled by [`FORCE_DAMPING`]
    pub fn add(&mut self, force: Vec3) {
        self.applied.push(force * FORCE_DAMPING);
    }

    /// Insert `force` unscaled at `index`
    pub fn insert(&mut self, index: usize, force: Vec3) -> Result<()> {
        if index > self.applied.len() {
            return Err(PhysicsError::ForceIndexOutOfRange {
                index,
                len: self.applied.len(),
            });
        }
        self.applied.insert(index, force);
        Ok(())
    }

    /// Remove and return the applied force at `index`
    pub fn remove(&mut self, index: usize) -> Result<Vec3> {
        if index >= self.applied.len() {
            return Err(PhysicsError::ForceIndexOutOfRange {
                index,
                len: self.applied.len(),
            });
        }
        Ok(self.applied.remove(index))
    }

    /// Remove every applied force (gravity is kept)
    pub fn clear_applied(&mut self) {
        self.applied.clear();
    }

    /// Sum of gravity and every applied force
    pub fn cumulated(&self) -> Vec3 {
        self.gravity.unwrap_or(Vec3::ZERO) + self.applied.iter().sum::<Vec3>()
    }

    /// Number of entries, counting gravity when present
    pub fn len(&self) -> usize {
        self.applied.len() + usize::from(self.gravity.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
