//! Collision detection and resolution
//!
//! Stateless narrow-phase routines for the two pair kinds the arena has:
//! ball-ball and ball-wall. Each overlapping pair is handled in two
//! passes run back to back:
//!
//! 1. **Separation** - positional correction that removes the geometric
//!    overlap, independent of velocity. Displacement is split along the
//!    unit separating axis in proportion to each body's inverse mass, so
//!    an immovable body (inverse mass 0) never moves.
//! 2. **Response** - an impulse along the collision normal that reflects
//!    the approach velocity, scaled by restitution. The pair restitution
//!    is the *minimum* of the two bodies' elasticity, favoring the less
//!    bouncy body. Tangential velocity is untouched: no friction at the
//!    contact.
//!
//! A pair where both bodies are immovable has an inverse-mass sum of
//! zero; both passes skip such a pair instead of dividing by zero.

use super::ball::Ball;
use super::wall::Wall;

/// Balls overlap iff the center distance is within the radius sum.
pub fn balls_overlap(a: &Ball, b: &Ball) -> bool {
    (b.position - a.position).length() <= a.radius + b.radius
}

/// A ball overlaps a wall iff the closest point on the segment is within
/// the ball's radius of its center.
pub fn ball_wall_overlap(ball: &Ball, wall: &Wall) -> bool {
    (wall.closest_point(ball.position) - ball.position).length() <= ball.radius
}

/// Positional correction for an overlapping ball pair.
///
/// The penetration depth is distributed along `unit(posA - posB)` in
/// proportion to inverse mass. Skipped when both bodies are immovable.
pub fn separate_balls(a: &mut Ball, b: &mut Ball) {
    let inverse_mass_sum = a.inverse_mass + b.inverse_mass;
    if inverse_mass_sum == 0.0 {
        return;
    }
    let offset = a.position - b.position;
    let depth = a.radius + b.radius - offset.length();
    let axis = offset.normalize_or_zero();
    a.position += axis * (depth * a.inverse_mass / inverse_mass_sum);
    b.position -= axis * (depth * b.inverse_mass / inverse_mass_sum);
}

/// Impulse response for an overlapping ball pair.
///
/// The impulse is equal and opposite, scaled by each body's inverse mass;
/// momentum is conserved whenever neither mass is zero. Skipped when both
/// bodies are immovable.
pub fn resolve_balls(a: &mut Ball, b: &mut Ball) {
    let inverse_mass_sum = a.inverse_mass + b.inverse_mass;
    if inverse_mass_sum == 0.0 {
        return;
    }
    let normal = (a.position - b.position).normalize_or_zero();
    let separating_velocity = (a.velocity - b.velocity).dot(normal);
    let restitution = a.elasticity.min(b.elasticity);
    let new_separating_velocity = -separating_velocity * restitution;

    let impulse = (new_separating_velocity - separating_velocity) / inverse_mass_sum;
    let impulse_vec = normal * impulse;
    a.velocity += impulse_vec * a.inverse_mass;
    b.velocity -= impulse_vec * b.inverse_mass;
}

/// Positional correction against a wall: the wall never moves, so the
/// ball is pushed fully out along the closest-point normal. Afterwards
/// the center sits at exactly the radius from the contact point.
pub fn separate_ball_from_wall(ball: &mut Ball, wall: &Wall) {
    let closest = wall.closest_point(ball.position);
    let offset = ball.position - closest;
    let depth = ball.radius - offset.length();
    ball.position += offset.normalize_or_zero() * depth;
}

/// Impulse response against a wall: the normal velocity component is
/// reflected and scaled by the ball's own elasticity, the tangential
/// component passes through unchanged.
pub fn resolve_ball_wall(ball: &mut Ball, wall: &Wall) {
    let normal = (ball.position - wall.closest_point(ball.position)).normalize_or_zero();
    let separating_velocity = ball.velocity.dot(normal);
    let new_separating_velocity = -separating_velocity * ball.elasticity;
    ball.velocity += normal * (new_separating_velocity - separating_velocity);
}
