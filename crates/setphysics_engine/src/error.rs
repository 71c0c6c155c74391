//! Error types for the physics system

use thiserror::Error;

/// Physics system errors
#[derive(Debug, Error, PartialEq)]
pub enum PhysicsError {
    /// Body is not part of the world
    #[error("Body not found: {0:?}")]
    BodyNotFound(crate::world::BodyHandle),

    /// Applied-force index past the end of the force list
    #[error("Force index {index} out of range (body has {len} applied forces)")]
    ForceIndexOutOfRange { index: usize, len: usize },

    /// Bounding-box query on a body built without a shape
    #[error("Body has no shape")]
    MissingShape,

    /// The static ground at index 0 cannot leave the world
    #[error("The ground body cannot be removed")]
    GroundRemoval,

    /// Invalid configuration
    #[error("Invalid physics configuration: {0}")]
    InvalidConfig(String),

    /// The step loop thread could not be started
    #[error("Failed to spawn step loop: {0}")]
    StepLoopSpawn(String),
}

/// Result type for physics operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
