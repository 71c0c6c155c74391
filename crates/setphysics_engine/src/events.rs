//! Collision events recorded during a step

use crate::world::BodyHandle;
use setphysics_math::Axis;

/// Set of axes, used to report which axes a collision reverted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct AxisMask(u8);

impl AxisMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b111);

    /// Mask holding a single axis
    pub const fn of(axis: Axis) -> Self {
        Self(1 << axis.index())
    }

    pub fn insert(&mut self, axis: Axis) {
        self.0 |= Self::of(axis).0;
    }

    pub fn contains(&self, axis: Axis) -> bool {
        self.0 & Self::of(axis).0 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Axes in the mask, in X, Y, Z order
    pub fn iter(&self) -> impl Iterator<Item = Axis> + '_ {
        Axis::ALL.into_iter().filter(move |&axis| self.contains(axis))
    }
}

/// A collision correction applied during the last step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Body whose position was reverted
    pub body: BodyHandle,
    /// Body it collided with
    pub other: BodyHandle,
    /// Axes reverted to the pre-step position (velocity zeroed on each)
    pub axes: AxisMask,
}

impl CollisionEvent {
    /// Check if the given body took part in this collision
    pub fn involves(&self, handle: BodyHandle) -> bool {
        self.body == handle || self.other == handle
    }
}

/// Collects collision events for one step
#[derive(Debug, Default)]
pub struct EventCollector {
    /// Collision events this step
    pub collision_events: Vec<CollisionEvent>,
}

impl EventCollector {
    /// Create a new event collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.collision_events.clear();
    }

    pub fn push(&mut self, event: CollisionEvent) {
        self.collision_events.push(event);
    }

    /// Events where the given body was corrected
    pub fn corrections_of(&self, handle: BodyHandle) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter().filter(move |e| e.body == handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_mask() {
        let mut mask = AxisMask::NONE;
        assert!(mask.is_empty());
        mask.insert(Axis::Y);
        mask.insert(Axis::Z);
        assert!(mask.contains(Axis::Y));
        assert!(!mask.contains(Axis::X));
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![Axis::Y, Axis::Z]);
        assert_eq!(AxisMask::ALL.iter().count(), 3);
    }
}
