//! Circular rigid body
//!
//! A ball is the workhorse body of the arena: a circle with translational
//! state, a restitution coefficient and an inverse mass. A zero mass stores
//! a zero inverse mass, which makes the body immovable everywhere the
//! impulse and separation formulas divide by an inverse-mass sum.
//!
//! Integration is fixed-step: one `integrate` call advances one tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::SpawnError;
use crate::input::InputState;

/// Default magnitude a commanded acceleration is normalized to each tick.
///
/// This is a thrust cap, not a raw physical force: steering only picks the
/// direction, the magnitude is always exactly this (or zero).
pub const DEFAULT_THRUST: f32 = 0.5;

/// A movable (or immovable) circular body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position in arena space
    pub position: Vec2,
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Commanded acceleration; renormalized to `thrust` during integration
    pub acceleration: Vec2,
    /// Circle radius, always positive
    pub radius: f32,
    /// 1/mass, or 0 for an immovable body (the zero-mass convention)
    pub inverse_mass: f32,
    /// Restitution coefficient; values above 1 gain energy on impact
    pub elasticity: f32,
    /// Magnitude steering acceleration is capped to
    pub thrust: f32,
}

impl Ball {
    /// Create a ball.
    ///
    /// A `mass` of zero makes the body immovable: its inverse mass is
    /// stored as zero, so separation and impulses never displace it.
    ///
    /// # Errors
    /// Rejects a non-positive radius, a negative mass or a negative
    /// elasticity.
    pub fn new(position: Vec2, radius: f32, mass: f32, elasticity: f32) -> Result<Self, SpawnError> {
        if radius <= 0.0 {
            return Err(SpawnError::NonPositiveRadius);
        }
        if mass < 0.0 {
            return Err(SpawnError::NegativeMass);
        }
        if elasticity < 0.0 {
            return Err(SpawnError::NegativeElasticity);
        }
        let inverse_mass = if mass == 0.0 { 0.0 } else { 1.0 / mass };
        Ok(Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
            inverse_mass,
            elasticity,
            thrust: DEFAULT_THRUST,
        })
    }

    /// Create an immovable ball (an obstacle that participates in
    /// collisions but never moves).
    pub fn immovable(position: Vec2, radius: f32, elasticity: f32) -> Result<Self, SpawnError> {
        Self::new(position, radius, 0.0, elasticity)
    }

    /// Whether this body is immovable (inverse mass zero).
    pub fn is_immovable(&self) -> bool {
        self.inverse_mass == 0.0
    }

    /// Apply the directional input command.
    ///
    /// Up/down drive the y component to `-thrust`/`+thrust` (y points
    /// down), left/right the x component symmetrically. An axis with
    /// neither flag held, or both, is zeroed.
    pub fn steer(&mut self, input: &InputState) {
        self.acceleration = Vec2::new(
            input.horizontal_axis() as f32 * self.thrust,
            input.vertical_axis() as f32 * self.thrust,
        );
    }

    /// Advance one tick. The order is fixed and matters:
    ///
    /// 1. acceleration is renormalized to exactly `thrust` magnitude
    ///    (direction preserved, zero stays zero);
    /// 2. velocity gains the acceleration;
    /// 3. velocity is damped by `1 - friction`;
    /// 4. position gains the velocity.
    pub fn integrate(&mut self, friction: f32) {
        self.acceleration = self.acceleration.normalize_or_zero() * self.thrust;
        self.velocity += self.acceleration;
        self.velocity *= 1.0 - friction;
        self.position += self.velocity;
    }
}
