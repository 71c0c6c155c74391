//! SetPhysics Engine - discrete-time rigid-body kinematics
//!
//! Bodies carry a shape, a position, a velocity and a set of forces. A [`World`]
//! advances them with a fixed-step constant-acceleration integrator and keeps them
//! apart with per-axis AABB collision resolution.
//!
//! # Features
//!
//! - Dynamic and static bodies (static bodies still block dynamic ones)
//! - Gravity as an environmental force carried by every body
//! - Revert-and-zero collision resolution against a static ground and other bodies
//! - Collision events per step
//! - Optional background step loop
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                    World                       │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────────┐ │
//! │  │  ground  │  │  bodies  │  │ EventCollector│ │
//! │  └──────────┘  └──────────┘  └──────────────┘ │
//! │  ┌───────────────────────────────────────────┐│
//! │  │ step: integrate body k, resolve vs 0..k   ││
//! │  └───────────────────────────────────────────┘│
//! └───────────────────────────────────────────────┘
//!            ▲                         │
//!            │ step(ms)                ▼
//!       ┌──────────┐            ┌────────────┐
//!       │ StepLoop │            │  renderer  │
//!       └──────────┘            └────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use setphysics_engine::prelude::*;
//!
//! let mut world = World::default();
//! world.set_gravity(Vec3::new(0.0, -1.0, 0.0));
//!
//! let ball = world
//!     .add_body(Body::new(Shape::sphere(0.1), Vec3::new(0.0, 2.0, 0.0)))
//!     .unwrap();
//!
//! for _ in 0..60 {
//!     world.step(16);
//! }
//!
//! assert!(world.body(ball).unwrap().position().y < 2.0);
//! ```

pub mod body;
pub mod collision;
pub mod config;
pub mod error;
pub mod events;
pub mod force;
pub mod step_loop;
pub mod world;

pub mod prelude {
    //! Common imports for physics functionality
    pub use crate::body::Body;
    pub use crate::collision::{resolve_axis, Correction};
    pub use crate::config::WorldConfig;
    pub use crate::error::{PhysicsError, Result};
    pub use crate::events::{AxisMask, CollisionEvent};
    pub use crate::force::{Force, Forces, FORCE_DAMPING};
    pub use crate::step_loop::StepLoop;
    pub use crate::world::{BodyHandle, World};
    pub use setphysics_math::{Aabb, Axis, Shape, Vec3};
}

pub use prelude::*;
