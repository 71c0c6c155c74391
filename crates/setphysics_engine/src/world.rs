//! Physics world - main simulation container

use crate::body::Body;
use crate::collision::resolve_axis;
use crate::config::WorldConfig;
use crate::error::{PhysicsError, Result};
use crate::events::{CollisionEvent, EventCollector};
use setphysics_math::{Shape, Vec3};

/// Handle to a body in a [`World`]
///
/// Handles are never reused, so a handle uniquely names one membership of one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u64);

impl BodyHandle {
    /// Get the raw handle value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct BodyEntry {
    handle: BodyHandle,
    body: Body,
}

/// The main physics world containing all simulation state
///
/// Bodies are kept in insertion order, which is also the collision resolution order.
/// Index 0 always holds the static ground.
#[derive(Debug)]
pub struct World {
    /// Configuration
    config: WorldConfig,

    /// Bodies in collision order
    entries: Vec<BodyEntry>,

    /// Gravity carried by every body while enabled
    gravity: Option<Vec3>,

    /// Corrections made during the last step
    events: EventCollector,

    /// Next handle value
    next_handle: u64,

    /// Simulated seconds since construction
    time: f64,

    /// Number of steps taken
    step_count: u64,
}

impl World {
    /// Create a new world with a static ground at index 0
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Create a world with default settings and a `size` x `size` ground
    pub fn with_ground_size(size: f64) -> Result<Self> {
        Self::new(WorldConfig::default().with_ground_size(size))
    }

    fn build(config: WorldConfig) -> Self {
        let ground = Body::fixed(
            Shape::cuboid(config.ground_size, config.ground_thickness, config.ground_size),
            Vec3::new(0.0, -config.ground_thickness * 0.5, 0.0),
        );
        let gravity = config.gravity.map(Vec3::from_array);

        let mut world = Self {
            config,
            entries: Vec::new(),
            gravity: None,
            events: EventCollector::new(),
            next_handle: 0,
            time: 0.0,
            step_count: 0,
        };
        world.insert(ground);
        if let Some(gravity) = gravity {
            world.set_gravity(gravity);
        }
        world
    }

    /// Get the world configuration
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    // ==================== Bodies ====================

    /// Add a body at the end of the collision order
    ///
    /// The body receives the world's gravity if it is enabled.
    pub fn add_body(&mut self, body: Body) -> Result<BodyHandle> {
        if body.shape().is_none() {
            return Err(PhysicsError::MissingShape);
        }
        let handle = self.insert(body);
        log::debug!("Added body {:?} ({} bodies)", handle, self.entries.len());
        Ok(handle)
    }

    /// Create a dynamic body at the origin from `shape` and add it
    pub fn add_shape(&mut self, shape: Shape) -> Result<BodyHandle> {
        self.add_body(Body::new(shape, Vec3::ZERO))
    }

    fn insert(&mut self, mut body: Body) -> BodyHandle {
        body.forces_mut().set_gravity(self.gravity);
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(BodyEntry { handle, body });
        handle
    }

    /// Remove a body, returning it without the world's gravity
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body> {
        if handle == self.ground() {
            return Err(PhysicsError::GroundRemoval);
        }
        let index = self.index_of(handle)?;
        let mut body = self.entries.remove(index).body;
        body.forces_mut().set_gravity(None);
        log::debug!("Removed body {:?} ({} bodies)", handle, self.entries.len());
        Ok(body)
    }

    /// Handle of the ground body
    pub fn ground(&self) -> BodyHandle {
        self.entries[0].handle
    }

    /// Get a body
    pub fn body(&self, handle: BodyHandle) -> Result<&Body> {
        let index = self.index_of(handle)?;
        Ok(&self.entries[index].body)
    }

    /// Get a body for mutation (forces, position, velocity, dynamic flag)
    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        let index = self.index_of(handle)?;
        Ok(&mut self.entries[index].body)
    }

    /// Check if the handle names a body of this world
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    /// Bodies in collision order, ground first
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.entries.iter().map(|e| (e.handle, &e.body))
    }

    /// Get number of bodies, ground included
    pub fn body_count(&self) -> usize {
        self.entries.len()
    }

    fn index_of(&self, handle: BodyHandle) -> Result<usize> {
        self.entries
            .iter()
            .position(|e| e.handle == handle)
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    // ==================== Gravity ====================

    /// Enable gravity, or update it when already enabled
    ///
    /// When gravity is already on only the Y component is rewritten, on every body
    /// and on the world's own gravity; X and Z keep their previous values.
    pub fn set_gravity(&mut self, gravity: Vec3) {
        match self.gravity {
            Some(current) => {
                for entry in &mut self.entries {
                    entry.body.forces_mut().set_gravity_y(gravity.y);
                }
                self.gravity = Some(current.with_y(gravity.y));
                log::debug!("Updated gravity Y component to {}", gravity.y);
            }
            None => {
                for entry in &mut self.entries {
                    entry.body.forces_mut().set_gravity(Some(gravity));
                }
                self.gravity = Some(gravity);
                log::debug!("Enabled gravity {}", gravity);
            }
        }
    }

    /// Disable gravity on every body
    pub fn delete_gravity(&mut self) {
        if self.gravity.take().is_some() {
            for entry in &mut self.entries {
                entry.body.forces_mut().set_gravity(None);
            }
            log::debug!("Disabled gravity");
        }
    }

    /// Get gravity, `None` when disabled
    pub fn gravity(&self) -> Option<Vec3> {
        self.gravity
    }

    pub fn is_gravity_enabled(&self) -> bool {
        self.gravity.is_some()
    }

    // ==================== Simulation ====================

    /// Advance the simulation by `elapsed_millis` milliseconds
    pub fn step(&mut self, elapsed_millis: u64) {
        self.step_seconds(elapsed_millis as f64 / 1000.0);
    }

    /// Advance the simulation by `dt` seconds
    ///
    /// Each body is integrated and then immediately resolved against every body before
    /// it, so earlier bodies are always fully up to date for this step.
    pub fn step_seconds(&mut self, dt: f64) {
        self.events.clear();

        for index in 0..self.entries.len() {
            self.entries[index].body.update(dt);
            self.do_collisions(index);
        }

        self.time += dt;
        self.step_count += 1;
        log::trace!(
            "Step {} (dt = {}s): {} corrections",
            self.step_count,
            dt,
            self.events.collision_events.len()
        );
    }

    /// Resolve the body at `index` against every earlier body
    fn do_collisions(&mut self, index: usize) {
        let (earlier, rest) = self.entries.split_at_mut(index);
        let current = &mut rest[0];

        for other in earlier.iter_mut() {
            let own = if current.body.is_dynamic() {
                resolve_axis(&current.body, &other.body)
            } else {
                None
            };
            let theirs = if other.body.is_dynamic() {
                resolve_axis(&other.body, &current.body)
            } else {
                None
            };

            if let Some(correction) = own {
                current.body.apply_correction(correction.position, correction.velocity);
                log::trace!("{:?} hit {:?} on {:?}", current.handle, other.handle, correction.axes);
                self.events.push(CollisionEvent {
                    body: current.handle,
                    other: other.handle,
                    axes: correction.axes,
                });
            }
            if let Some(correction) = theirs {
                other.body.apply_correction(correction.position, correction.velocity);
                log::trace!("{:?} hit {:?} on {:?}", other.handle, current.handle, correction.axes);
                self.events.push(CollisionEvent {
                    body: other.handle,
                    other: current.handle,
                    axes: correction.axes,
                });
            }
        }
    }

    /// Return every body to its initial position and velocity
    ///
    /// Forces, membership and gravity are kept.
    pub fn reset(&mut self) {
        log::debug!("Resetting world, every body returns to its initial state");
        for entry in &mut self.entries {
            entry.body.reset();
        }
    }

    // ==================== Events ====================

    /// Get collision corrections from the last step
    pub fn collision_events(&self) -> &[CollisionEvent] {
        &self.events.collision_events
    }

    /// Corrections applied to one body during the last step
    pub fn corrections_of(&self, handle: BodyHandle) -> impl Iterator<Item = &CollisionEvent> {
        self.events.corrections_of(handle)
    }

    // ==================== Debug ====================

    /// Simulated seconds since construction
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of steps taken
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

impl Default for World {
    fn default() -> Self {
        Self::build(WorldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_world() {
        let world = World::default();
        assert_eq!(world.body_count(), 1);

        let ground = world.body(world.ground()).unwrap();
        assert!(!ground.is_dynamic());
        let aabb = ground.bounding_box().unwrap();
        assert_eq!(aabb.max.y, 0.0);
        assert_eq!(aabb.min.y, -2.0);
        assert_eq!(aabb.max.x, 5.0);
    }

    #[test]
    fn test_custom_ground_size() {
        let world = World::with_ground_size(4.0).unwrap();
        let aabb = world.body(world.ground()).unwrap().bounding_box().unwrap();
        assert_eq!(aabb.min.x, -2.0);
        assert_eq!(aabb.max.z, 2.0);
        assert!(World::with_ground_size(-1.0).is_err());
    }

    #[test]
    fn test_add_and_remove_body() {
        let mut world = World::default();
        let a = world.add_shape(Shape::sphere(0.1)).unwrap();
        let b = world.add_shape(Shape::sphere(0.1)).unwrap();
        assert_ne!(a, b);
        assert_eq!(world.body_count(), 3);

        world.remove_body(a).unwrap();
        assert!(!world.contains(a));
        assert_eq!(world.remove_body(a).unwrap_err(), PhysicsError::BodyNotFound(a));
        assert_eq!(world.bodies().map(|(h, _)| h).collect::<Vec<_>>(), vec![world.ground(), b]);
    }

    #[test]
    fn test_ground_cannot_be_removed() {
        let mut world = World::default();
        let ground = world.ground();
        assert_eq!(world.remove_body(ground).unwrap_err(), PhysicsError::GroundRemoval);
    }

    #[test]
    fn test_shapeless_body_rejected() {
        let mut world = World::default();
        assert_eq!(
            world.add_body(Body::point(Vec3::ZERO)).unwrap_err(),
            PhysicsError::MissingShape
        );
    }

    #[test]
    fn test_gravity_from_config() {
        let world = World::new(WorldConfig::default().with_gravity(0.0, -9.81, 0.0)).unwrap();
        assert_eq!(world.gravity(), Some(Vec3::new(0.0, -9.81, 0.0)));
        let ground = world.body(world.ground()).unwrap();
        assert_eq!(ground.forces().gravity(), world.gravity());
    }

    #[test]
    fn test_step_advances_clock() {
        let mut world = World::default();
        world.step(250);
        world.step(250);
        assert_eq!(world.step_count(), 2);
        assert!((world.time() - 0.5).abs() < 1e-12);
    }
}
