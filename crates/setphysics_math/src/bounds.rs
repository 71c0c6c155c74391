//! Axis-aligned bounding boxes

use crate::vector::{Axis, Vec3};

/// Axis-Aligned Bounding Box
///
/// Intervals are closed on every axis: two boxes sharing only a face, edge or corner
/// are considered intersecting.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create from min and max points
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from center and half-extents
    #[inline]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the half-extents
    #[inline]
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Get the size (full extents)
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if the AABB is valid (min <= max)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Copy of this box moved by `offset`
    #[inline]
    pub fn translate(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Check if a point is inside
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Check if the `axis` intervals of the two boxes overlap
    #[inline]
    pub fn overlaps_on(&self, other: &Aabb, axis: Axis) -> bool {
        self.min.axis(axis) <= other.max.axis(axis) && self.max.axis(axis) >= other.min.axis(axis)
    }

    /// Check if two AABBs intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        Axis::ALL.iter().all(|&axis| self.overlaps_on(other, axis))
    }

    /// Length of the overlap of the two `axis` intervals, zero when they are disjoint
    #[inline]
    pub fn penetration_on(&self, other: &Aabb, axis: Axis) -> f64 {
        let upper = self.max.axis(axis).min(other.max.axis(axis));
        let lower = self.min.axis(axis).max(other.min.axis(axis));
        (upper - lower).max(0.0)
    }
}
