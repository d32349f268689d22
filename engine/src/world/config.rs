//! Simulation Configuration
//!
//! Centralized tunables for the arena simulation. `Default` returns the
//! constants observed in the running demo; nothing reads configuration
//! dynamically after world construction.

use serde::{Deserialize, Serialize};

use crate::physics::ball::DEFAULT_THRUST;
use crate::physics::capsule::{ANGULAR_DAMPING, DEFAULT_TURN_RATE};

/// Central configuration for the physics simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Linear velocity damping per tick: `velocity *= 1 - friction`.
    /// Typical values 0.05-0.1.
    pub friction: f32,
    /// Magnitude a controlled body's commanded acceleration is normalized
    /// to each tick (a thrust cap, not a force)
    pub thrust: f32,
    /// Factor the capsule's angular velocity decays by each tick
    pub angular_damping: f32,
    /// Angular velocity a capsule turn command sets (radians per tick)
    pub turn_rate: f32,
    /// Random spawn range for ball radius, `[min, max]`
    pub spawn_radius: [f32; 2],
    /// Random spawn range for ball mass, `[min, max]`; a rolled mass of
    /// zero produces an immovable ball
    pub spawn_mass: [f32; 2],
    /// Random spawn range for ball elasticity, `[min, max]`
    pub spawn_elasticity: [f32; 2],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            friction: 0.05,
            thrust: DEFAULT_THRUST,
            angular_damping: ANGULAR_DAMPING,
            turn_rate: DEFAULT_TURN_RATE,
            spawn_radius: [20.0, 50.0],
            spawn_mass: [0.0, 10.0],
            spawn_elasticity: [0.0, 1.5],
        }
    }
}

impl SimConfig {
    /// Load a configuration from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
