//! Capsule rigid body
//!
//! An elongated rounded body: two endpoints plus a radius, with
//! translational state applied to the segment midpoint and a rotational
//! state accumulated as an angle since construction.
//!
//! # Orientation
//!
//! The direction is never rotated incrementally frame over frame. The
//! construction-time direction is kept as a fixed reference, and every
//! tick the current direction is recomputed by rotating that reference by
//! the accumulated angle. Rotating from a fixed baseline keeps the
//! endpoint distance exact; the `|end - start| == length` invariant holds
//! after every integration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::SpawnError;
use crate::input::InputState;
use crate::math::Rot2;

/// Factor the angular velocity decays by every tick. Exponential damping:
/// turning coasts to a stop but never snaps to zero.
pub const ANGULAR_DAMPING: f32 = 0.99;

/// Default angular velocity magnitude a turn command sets.
pub const DEFAULT_TURN_RATE: f32 = 0.01;

/// A movable capsule-shaped body with translational and rotational state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    /// First endpoint of the core segment
    pub start: Vec2,
    /// Second endpoint of the core segment
    pub end: Vec2,
    /// Rounded-end radius, always positive
    pub radius: f32,
    /// Segment midpoint; translational motion applies here
    pub position: Vec2,
    /// Current unit direction from start toward end
    pub direction: Vec2,
    /// Segment length, fixed at construction
    pub length: f32,
    /// Unit direction at construction time, the rotation baseline
    pub reference_direction: Vec2,
    /// Angle of the reference direction at construction (radians)
    pub reference_angle: f32,
    /// Cumulative rotation since construction (radians)
    pub angle: f32,
    /// Rotation per tick, damped toward zero every tick
    pub angular_velocity: f32,
    /// Midpoint velocity in units per tick
    pub velocity: Vec2,
    /// Commanded acceleration; renormalized to `thrust` during integration
    pub acceleration: Vec2,
    /// Magnitude steering acceleration is capped to
    pub thrust: f32,
}

impl Capsule {
    /// Create a capsule from its two segment endpoints.
    ///
    /// # Errors
    /// Rejects coincident endpoints and a non-positive radius.
    pub fn new(start: Vec2, end: Vec2, radius: f32) -> Result<Self, SpawnError> {
        if radius <= 0.0 {
            return Err(SpawnError::NonPositiveRadius);
        }
        let length = (end - start).length();
        if length == 0.0 {
            return Err(SpawnError::DegenerateSegment);
        }
        let direction = (end - start) / length;
        Ok(Self {
            start,
            end,
            radius,
            position: (start + end) * 0.5,
            direction,
            length,
            reference_direction: direction,
            reference_angle: direction.y.atan2(direction.x),
            angle: 0.0,
            angular_velocity: 0.0,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            thrust: super::ball::DEFAULT_THRUST,
        })
    }

    /// Apply the directional input command.
    ///
    /// Up/down drive translational acceleration forward/back along the
    /// current direction. Left/right set a fixed turn-rate angular
    /// velocity instead of translating; with neither (or both) held the
    /// angular velocity is left to its damped coast.
    pub fn steer(&mut self, input: &InputState, turn_rate: f32) {
        let forward = -input.vertical_axis() as f32;
        self.acceleration = self.direction * (forward * self.thrust);

        let turn = input.horizontal_axis();
        if turn != 0 {
            self.angular_velocity = turn as f32 * turn_rate;
        }
    }

    /// Advance one tick: translational steps exactly as a ball, then the
    /// rotational state, then the endpoints are rebuilt around the
    /// midpoint so the segment length stays the construction-time value.
    pub fn integrate(&mut self, friction: f32, angular_damping: f32) {
        self.acceleration = self.acceleration.normalize_or_zero() * self.thrust;
        self.velocity += self.acceleration;
        self.velocity *= 1.0 - friction;
        self.position += self.velocity;

        self.angle += self.angular_velocity;
        self.angular_velocity *= angular_damping;

        self.direction = Rot2::new(self.angle).rotate(self.reference_direction);
        let half = self.direction * (self.length * 0.5);
        self.start = self.position - half;
        self.end = self.position + half;
    }
}
