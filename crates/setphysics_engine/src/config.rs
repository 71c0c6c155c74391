//! World configuration

use crate::error::{PhysicsError, Result};
use serde::{Deserialize, Serialize};

/// Physics world configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Width and depth of the square ground plane
    pub ground_size: f64,

    /// Thickness of the ground; its top face sits at y = 0
    pub ground_thickness: f64,

    /// Gravity enabled at construction (`None` = no gravity)
    pub gravity: Option<[f64; 3]>,

    /// Steps per second when driven by a [`StepLoop`](crate::StepLoop)
    pub step_rate: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground_size: 10.0,
            ground_thickness: 2.0,
            gravity: None,
            step_rate: 60,
        }
    }
}

impl WorldConfig {
    /// Set ground width/depth
    pub fn with_ground_size(mut self, size: f64) -> Self {
        self.ground_size = size;
        self
    }

    /// Set ground thickness
    pub fn with_ground_thickness(mut self, thickness: f64) -> Self {
        self.ground_thickness = thickness;
        self
    }

    /// Set gravity
    pub fn with_gravity(mut self, x: f64, y: f64, z: f64) -> Self {
        self.gravity = Some([x, y, z]);
        self
    }

    /// Set step loop rate
    pub fn with_step_rate(mut self, rate: u32) -> Self {
        self.step_rate = rate;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.ground_size.is_finite() && self.ground_size > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "ground_size must be positive, got {}",
                self.ground_size
            )));
        }
        if !(self.ground_thickness.is_finite() && self.ground_thickness > 0.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "ground_thickness must be positive, got {}",
                self.ground_thickness
            )));
        }
        if let Some(gravity) = self.gravity {
            if gravity.iter().any(|c| !c.is_finite()) {
                return Err(PhysicsError::InvalidConfig(format!(
                    "gravity must be finite, got {:?}",
                    gravity
                )));
            }
        }
        if self.step_rate == 0 {
            return Err(PhysicsError::InvalidConfig("step_rate must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ground_size, 10.0);
        assert_eq!(config.gravity, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(WorldConfig::default().with_ground_size(0.0).validate().is_err());
        assert!(WorldConfig::default().with_ground_thickness(f64::NAN).validate().is_err());
        assert!(WorldConfig::default().with_step_rate(0).validate().is_err());
        assert!(WorldConfig::default()
            .with_gravity(0.0, f64::INFINITY, 0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json() {
        let config: WorldConfig =
            serde_json::from_str(r#"{ "ground_size": 4.0, "gravity": [0.0, -1.0, 0.0] }"#).unwrap();
        assert_eq!(config.ground_size, 4.0);
        assert_eq!(config.ground_thickness, 2.0);
        assert_eq!(config.gravity, Some([0.0, -1.0, 0.0]));
        assert_eq!(config.step_rate, 60);
    }
}
