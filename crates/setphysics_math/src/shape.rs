//! Geometric shapes carried by simulated bodies

use crate::bounds::Aabb;
use crate::vector::Vec3;

/// Shape of a body, expressed in its local frame (centred on the origin)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// Box with half-extents
    Cuboid { half_extents: Vec3 },
    /// Sphere with radius
    Sphere { radius: f64 },
}

impl Shape {
    /// Create a box shape from full width (X), height (Y) and depth (Z)
    pub fn cuboid(width: f64, height: f64, depth: f64) -> Self {
        Self::Cuboid {
            half_extents: Vec3::new(width * 0.5, height * 0.5, depth * 0.5),
        }
    }

    /// Create a box shape from half-extents
    pub fn from_half_extents(half_extents: Vec3) -> Self {
        Self::Cuboid { half_extents }
    }

    /// Create a sphere shape
    pub fn sphere(radius: f64) -> Self {
        Self::Sphere { radius }
    }

    /// Bounding box of the shape at the origin
    pub fn local_aabb(&self) -> Aabb {
        match *self {
            Self::Cuboid { half_extents } => Aabb::from_center_half_extents(Vec3::ZERO, half_extents),
            Self::Sphere { radius } => Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(radius)),
        }
    }

    /// Bounding box of the shape placed at `position`
    #[inline]
    pub fn aabb_at(&self, position: Vec3) -> Aabb {
        self.local_aabb().translate(position)
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::Cuboid {
            half_extents: Vec3::splat(0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_from_size() {
        let ground = Shape::cuboid(10.0, 2.0, 10.0);
        let aabb = ground.local_aabb();
        assert_eq!(aabb.min, Vec3::new(-5.0, -1.0, -5.0));
        assert_eq!(aabb.max, Vec3::new(5.0, 1.0, 5.0));
    }

    #[test]
    fn test_sphere_bounds() {
        let aabb = Shape::sphere(0.25).aabb_at(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.min, Vec3::new(0.75, 1.75, 2.75));
        assert_eq!(aabb.max, Vec3::new(1.25, 2.25, 3.25));
    }
}
