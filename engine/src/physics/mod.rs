//! Physics module for the Bounce Arena engine
//!
//! Custom 2D rigid-body implementation, built from scratch without an
//! external physics library dependency (no Rapier).
//!
//! # Unit System
//!
//! **1 unit = 1 pixel** in the host's arena coordinates; the y axis points
//! down, matching canvas conventions. Velocities are units per tick,
//! accelerations units per tick squared. There is no explicit delta time:
//! one call to a body's `integrate` advances exactly one tick.
//!
//! # Submodules
//!
//! - [`ball`] - movable (or immovable) circular body
//! - [`capsule`] - elongated rounded body with rotational state
//! - [`wall`] - static line-segment boundary
//! - [`collision`] - stateless detection, separation and impulse response
//!
//! # Conventions
//!
//! Degenerate numeric cases are handled by convention, never by panic:
//! a zero mass stores a zero inverse mass and the body is immovable, a
//! zero-length separating axis normalizes to the zero vector, and a pair
//! of immovable bodies skips resolution outright.

pub mod ball;
pub mod capsule;
pub mod collision;
pub mod wall;

// Re-export commonly used types at the physics module level
pub use ball::Ball;
pub use capsule::Capsule;
pub use wall::Wall;

use std::error::Error;
use std::fmt;

/// Rejected body construction.
///
/// Malformed configuration is a precondition violation surfaced at spawn
/// time; nothing in the tick path itself returns errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// Radius was zero or negative.
    NonPositiveRadius,
    /// Mass was negative (zero is allowed and means immovable).
    NegativeMass,
    /// Elasticity was negative.
    NegativeElasticity,
    /// Segment endpoints coincide.
    DegenerateSegment,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::NonPositiveRadius => write!(f, "radius must be positive"),
            SpawnError::NegativeMass => write!(f, "mass must be zero or positive"),
            SpawnError::NegativeElasticity => write!(f, "elasticity must be zero or positive"),
            SpawnError::DegenerateSegment => write!(f, "segment endpoints must be distinct"),
        }
    }
}

impl Error for SpawnError {}
