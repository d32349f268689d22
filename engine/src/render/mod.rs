//! Render Snapshots
//!
//! Read-only state handed to the host renderer once per tick. The core
//! performs no drawing; this structure is its entire outward surface.
//! Velocity and acceleration ride along for optional debug-vector
//! overlays.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Per-ball draw data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub position: Vec2,
    pub radius: f32,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

/// Per-capsule draw data. `angle` and `reference_angle` let the host
/// orient a sprite without recomputing the rotation itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapsuleSnapshot {
    pub start: Vec2,
    pub end: Vec2,
    pub radius: f32,
    pub angle: f32,
    pub reference_angle: f32,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

/// Per-wall draw data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSnapshot {
    pub start: Vec2,
    pub end: Vec2,
}

/// One tick's worth of drawable state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Tick counter at the time the snapshot was taken
    pub tick: u64,
    pub balls: Vec<BallSnapshot>,
    pub capsules: Vec<CapsuleSnapshot>,
    pub walls: Vec<WallSnapshot>,
}
