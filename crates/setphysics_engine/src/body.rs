//! Simulated bodies and their integration

use crate::error::{PhysicsError, Result};
use crate::force::Forces;
use setphysics_math::{Aabb, Shape, Vec3};

/// A simulated object: a shape, its kinematic state and the forces acting on it
///
/// Forces are treated directly as accelerations (every body has unit mass).
#[derive(Debug, Clone)]
pub struct Body {
    shape: Option<Shape>,
    position: Vec3,
    /// Position before the current step's integration, used to revert on collision
    last_position: Vec3,
    initial_position: Vec3,
    velocity: Vec3,
    initial_velocity: Vec3,
    forces: Forces,
    dynamic: bool,
}

impl Body {
    /// Create a dynamic body at rest
    pub fn new(shape: Shape, position: Vec3) -> Self {
        Self::with_velocity(shape, position, Vec3::ZERO)
    }

    /// Create a dynamic body with an initial velocity
    pub fn with_velocity(shape: Shape, position: Vec3, velocity: Vec3) -> Self {
        Self::build(Some(shape), position, velocity)
    }

    /// Create a shapeless body
    ///
    /// Integration and force accumulation work as usual, but bounding-box queries fail
    /// with [`PhysicsError::MissingShape`] and the world refuses to hold it.
    pub fn point(position: Vec3) -> Self {
        Self::build(None, position, Vec3::ZERO)
    }

    /// Create a static body
    pub fn fixed(shape: Shape, position: Vec3) -> Self {
        let mut body = Self::new(shape, position);
        body.dynamic = false;
        body
    }

    fn build(shape: Option<Shape>, position: Vec3, velocity: Vec3) -> Self {
        Self {
            shape,
            position,
            last_position: position,
            initial_position: position,
            velocity,
            initial_velocity: velocity,
            forces: Forces::new(),
            dynamic: true,
        }
    }

    // ==================== State ====================

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn last_position(&self) -> Vec3 {
        self.last_position
    }

    pub fn initial_position(&self) -> Vec3 {
        self.initial_position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn initial_velocity(&self) -> Vec3 {
        self.initial_velocity
    }

    /// Sum of the velocity components
    pub fn speed_value(&self) -> f64 {
        self.velocity.component_sum()
    }

    /// Teleport the body; the initial position is unchanged
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// A non-dynamic body never moves but still blocks dynamic ones
    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
    }

    /// Make the current position and velocity the state restored by [`reset`](Self::reset)
    pub fn reseed(&mut self) {
        self.initial_position = self.position;
        self.initial_velocity = self.velocity;
    }

    // ==================== Forces ====================

    pub fn forces(&self) -> &Forces {
        &self.forces
    }

    pub(crate) fn forces_mut(&mut self) -> &mut Forces {
        &mut self.forces
    }

    /// Apply a force, scaled by [`FORCE_DAMPING`](crate::FORCE_DAMPING)
    pub fn add_force(&mut self, force: impl Into<Vec3>) {
        self.forces.add(force.into());
    }

    /// Insert an unscaled force at `index` of the applied-force list
    pub fn insert_force(&mut self, index: usize, force: impl Into<Vec3>) -> Result<()> {
        self.forces.insert(index, force.into())
    }

    /// Remove the applied force at `index`
    pub fn remove_force(&mut self, index: usize) -> Result<Vec3> {
        self.forces.remove(index)
    }

    /// Total acceleration acting on the body
    pub fn cumulated_force(&self) -> Vec3 {
        self.forces.cumulated()
    }

    // ==================== Simulation ====================

    /// Advance the body by `dt` seconds under constant acceleration
    ///
    /// Position and velocity are both computed from the pre-step velocity.
    pub fn update(&mut self, dt: f64) {
        if !self.dynamic {
            return;
        }
        self.last_position = self.position;

        let acceleration = self.cumulated_force();
        let velocity = self.velocity;

        self.position = self.position + velocity * dt + acceleration * (0.5 * dt * dt);
        self.velocity = velocity + acceleration * dt;
    }

    /// Restore the initial position and velocity; forces and the dynamic flag are kept
    pub fn reset(&mut self) {
        self.position = self.initial_position;
        self.velocity = self.initial_velocity;
    }

    /// Collision-resolution write: new position plus zeroed velocity axes
    pub(crate) fn apply_correction(&mut self, position: Vec3, velocity: Vec3) {
        self.position = position;
        self.velocity = velocity;
    }

    // ==================== Bounds ====================

    /// World-space bounding box at the current position
    pub fn bounding_box(&self) -> Result<Aabb> {
        self.bounding_box_at(self.position)
    }

    /// World-space bounding box if the body were at `position`
    pub fn bounding_box_at(&self, position: Vec3) -> Result<Aabb> {
        self.shape
            .as_ref()
            .map(|shape| shape.aabb_at(position))
            .ok_or(PhysicsError::MissingShape)
    }

    /// Check whether the two bodies' bounding boxes intersect
    pub fn collide_with(&self, other: &Body) -> Result<bool> {
        Ok(self.bounding_box()?.intersects(&other.bounding_box()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPSILON: f64 = 1e-9;

    fn body_with(force: Vec3) -> Body {
        let mut body = Body::new(Shape::sphere(1.0), Vec3::ZERO);
        body.add_force(force);
        body
    }

    #[test]
    fn test_position_x_trace() {
        let mut body = body_with(Vec3::new(2.0, 0.0, 0.0));
        body.update(0.0);
        assert_abs_diff_eq!(body.position().x, 0.0, epsilon = EPSILON);

        let expected = [0.1, 0.4, 0.9];
        for x in expected {
            body.update(1.0);
            assert_abs_diff_eq!(body.position().x, x, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_position_xyz_trace() {
        let mut body = body_with(Vec3::new(2.0, 6.0, 3.0));
        let expected = [
            Vec3::new(0.1, 0.3, 0.15),
            Vec3::new(0.4, 1.2, 0.6),
            Vec3::new(0.9, 2.7, 1.35),
        ];
        for position in expected {
            body.update(1.0);
            assert_abs_diff_eq!(body.position().x, position.x, epsilon = EPSILON);
            assert_abs_diff_eq!(body.position().y, position.y, epsilon = EPSILON);
            assert_abs_diff_eq!(body.position().z, position.z, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_velocity_trace() {
        let mut body = body_with(Vec3::new(0.0, 0.0, 5.0));
        body.update(0.0);
        assert_abs_diff_eq!(body.velocity().z, 0.0, epsilon = EPSILON);
        for z in [0.5, 1.0, 1.5] {
            body.update(1.0);
            assert_abs_diff_eq!(body.velocity().z, z, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_position_uses_pre_step_velocity() {
        let mut body = Body::with_velocity(Shape::sphere(1.0), Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0));
        body.insert_force(0, Vec3::new(2.0, 0.0, 0.0)).unwrap();
        body.update(2.0);
        // 0 + 1*2 + 0.5*2*4
        assert_abs_diff_eq!(body.position().x, 6.0, epsilon = EPSILON);
        assert_abs_diff_eq!(body.velocity().x, 5.0, epsilon = EPSILON);
        assert_eq!(body.last_position(), Vec3::ZERO);
    }

    #[test]
    fn test_static_body_does_not_move() {
        let mut body = Body::fixed(Shape::cuboid(1.0, 1.0, 1.0), Vec3::new(0.0, 3.0, 0.0));
        body.add_force(Vec3::new(10.0, 10.0, 10.0));
        body.set_velocity(Vec3::X);
        for _ in 0..10 {
            body.update(1.0);
        }
        assert_eq!(body.position(), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(body.velocity(), Vec3::X);
    }

    #[test]
    fn test_reset_restores_initial_state_exactly() {
        let position = Vec3::new(0.3, 1.7, -2.1);
        let velocity = Vec3::new(0.1, 0.0, 0.7);
        let mut body = Body::with_velocity(Shape::sphere(0.5), position, velocity);
        body.add_force(Vec3::new(1.0, -3.0, 0.25));

        for _ in 0..17 {
            body.update(0.016);
        }
        assert_ne!(body.position(), position);

        body.reset();
        assert_eq!(body.position().to_array().map(f64::to_bits), position.to_array().map(f64::to_bits));
        assert_eq!(body.velocity().to_array().map(f64::to_bits), velocity.to_array().map(f64::to_bits));
        assert_eq!(body.forces().applied().len(), 1);
    }

    #[test]
    fn test_reseed() {
        let mut body = Body::new(Shape::sphere(1.0), Vec3::ZERO);
        body.set_position(Vec3::new(1.0, 2.0, 3.0));
        body.reseed();
        body.set_position(Vec3::ZERO);
        body.reset();
        assert_eq!(body.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_point_body_integrates_without_shape() {
        let mut body = Body::point(Vec3::ZERO);
        body.add_force(Vec3::new(0.0, 3.0, 0.0));
        body.update(1.0);
        assert_abs_diff_eq!(body.position().y, 0.15, epsilon = EPSILON);
        assert_eq!(body.bounding_box(), Err(PhysicsError::MissingShape));
    }

    #[test]
    fn test_cube_collisions() {
        let a = Body::new(Shape::cuboid(2.0, 2.0, 2.0), Vec3::ZERO);
        let b = Body::new(Shape::cuboid(2.0, 2.0, 2.0), Vec3::new(2.0, 0.0, 0.0));
        let c = Body::new(Shape::cuboid(2.0, 2.0, 2.0), Vec3::new(3.0, 0.0, 0.0));

        assert_eq!(a.collide_with(&b), Ok(true));
        assert_eq!(a.collide_with(&c), Ok(false));
        assert_eq!(b.collide_with(&c), Ok(true));
    }

    #[test]
    fn test_speed_value() {
        let body = Body::with_velocity(Shape::sphere(1.0), Vec3::ZERO, Vec3::new(1.0, -2.0, 4.0));
        assert_eq!(body.speed_value(), 3.0);
    }
}
