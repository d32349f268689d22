//! World Module
//!
//! Owns the body and wall registries and orchestrates one simulation tick.
//! Bodies are addressed by stable index handles; nothing is ever removed,
//! so a handle stays valid for the life of the world.
//!
//! # Tick order
//!
//! The order within [`World::step`] is fixed and load-bearing. For each
//! ball in registration order: apply the input command if controlled,
//! test and resolve against every wall, then against every ball with a
//! strictly greater index (each unordered pair exactly once per tick),
//! then integrate that ball. Capsules steer and integrate after all ball
//! pairs. Pair resolution for a body always happens before that body's
//! own integration in the same tick; pairs are resolved sequentially, so
//! a body touching several partners sees velocities already updated by
//! earlier pairs. That order-dependence is inherent to the sequential
//! impulse design and deliberately kept.

pub mod config;

pub use config::SimConfig;

use glam::Vec2;
use rand::Rng;

use crate::input::InputState;
use crate::physics::{Ball, Capsule, SpawnError, Wall, collision};
use crate::render::{BallSnapshot, CapsuleSnapshot, FrameSnapshot, WallSnapshot};

/// Stable handle to a ball in the world registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BallId(pub usize);

/// Stable handle to a capsule in the world registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapsuleId(pub usize);

/// Stable handle to a wall in the world registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WallId(pub usize);

/// Which body the input adapter currently drives. At most one body is
/// controlled at a time; this replaces a per-body "is player" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controlled {
    Ball(BallId),
    Capsule(CapsuleId),
}

/// The simulation registry: all bodies and walls, the controlled-body
/// handle and the tunables. Single-threaded; one synchronous [`step`]
/// per host animation frame.
///
/// [`step`]: World::step
#[derive(Debug, Clone)]
pub struct World {
    config: SimConfig,
    balls: Vec<Ball>,
    capsules: Vec<Capsule>,
    walls: Vec<Wall>,
    controlled: Option<Controlled>,
    tick: u64,
}

impl World {
    /// Create an empty world with the given tunables.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            balls: Vec::new(),
            capsules: Vec::new(),
            walls: Vec::new(),
            controlled: None,
            tick: 0,
        }
    }

    /// The configuration this world was built with.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of ticks stepped so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Spawn a ball. A mass of zero spawns an immovable obstacle.
    ///
    /// # Errors
    /// Propagates construction validation ([`SpawnError`]).
    pub fn spawn_ball(
        &mut self,
        position: Vec2,
        radius: f32,
        mass: f32,
        elasticity: f32,
    ) -> Result<BallId, SpawnError> {
        let mut ball = Ball::new(position, radius, mass, elasticity)?;
        ball.thrust = self.config.thrust;
        self.balls.push(ball);
        Ok(BallId(self.balls.len() - 1))
    }

    /// Spawn a ball with radius, mass and elasticity rolled from the
    /// configured spawn ranges.
    ///
    /// # Errors
    /// Fails only when the configured ranges can roll an invalid body
    /// (e.g. a non-positive radius bound).
    pub fn spawn_random_ball<R: Rng>(
        &mut self,
        rng: &mut R,
        position: Vec2,
    ) -> Result<BallId, SpawnError> {
        let [r_min, r_max] = self.config.spawn_radius;
        let [m_min, m_max] = self.config.spawn_mass;
        let [e_min, e_max] = self.config.spawn_elasticity;
        let radius = rng.gen_range(r_min..=r_max);
        let mass = rng.gen_range(m_min..=m_max);
        let elasticity = rng.gen_range(e_min..=e_max);
        self.spawn_ball(position, radius, mass, elasticity)
    }

    /// Spawn a capsule.
    pub fn spawn_capsule(
        &mut self,
        start: Vec2,
        end: Vec2,
        radius: f32,
    ) -> Result<CapsuleId, SpawnError> {
        let mut capsule = Capsule::new(start, end, radius)?;
        capsule.thrust = self.config.thrust;
        self.capsules.push(capsule);
        Ok(CapsuleId(self.capsules.len() - 1))
    }

    /// Spawn a wall segment.
    pub fn spawn_wall(&mut self, start: Vec2, end: Vec2) -> Result<WallId, SpawnError> {
        let wall = Wall::new(start, end)?;
        self.walls.push(wall);
        Ok(WallId(self.walls.len() - 1))
    }

    /// Route input to a ball. Replaces any previously controlled body.
    pub fn control_ball(&mut self, id: BallId) {
        self.controlled = Some(Controlled::Ball(id));
    }

    /// Route input to a capsule. Replaces any previously controlled body.
    pub fn control_capsule(&mut self, id: CapsuleId) {
        self.controlled = Some(Controlled::Capsule(id));
    }

    /// Detach input from whatever body it was driving.
    pub fn release_control(&mut self) {
        self.controlled = None;
    }

    /// The currently controlled body, if any.
    pub fn controlled(&self) -> Option<Controlled> {
        self.controlled
    }

    pub fn ball(&self, id: BallId) -> &Ball {
        &self.balls[id.0]
    }

    pub fn ball_mut(&mut self, id: BallId) -> &mut Ball {
        &mut self.balls[id.0]
    }

    pub fn capsule(&self, id: CapsuleId) -> &Capsule {
        &self.capsules[id.0]
    }

    pub fn capsule_mut(&mut self, id: CapsuleId) -> &mut Capsule {
        &mut self.capsules[id.0]
    }

    pub fn wall(&self, id: WallId) -> &Wall {
        &self.walls[id.0]
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn capsule_count(&self) -> usize {
        self.capsules.len()
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Advance the simulation one tick. See the module docs for the exact
    /// ordering; every registered pair kind is tested pairwise, O(n^2),
    /// with no broad phase.
    pub fn step(&mut self, input: &InputState) {
        for i in 0..self.balls.len() {
            if self.controlled == Some(Controlled::Ball(BallId(i))) {
                self.balls[i].steer(input);
            }

            for wall in &self.walls {
                if collision::ball_wall_overlap(&self.balls[i], wall) {
                    collision::separate_ball_from_wall(&mut self.balls[i], wall);
                    collision::resolve_ball_wall(&mut self.balls[i], wall);
                }
            }

            for j in (i + 1)..self.balls.len() {
                let (head, tail) = self.balls.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if collision::balls_overlap(a, b) {
                    collision::separate_balls(a, b);
                    collision::resolve_balls(a, b);
                }
            }

            self.balls[i].integrate(self.config.friction);
        }

        for k in 0..self.capsules.len() {
            if self.controlled == Some(Controlled::Capsule(CapsuleId(k))) {
                self.capsules[k].steer(input, self.config.turn_rate);
            }
            self.capsules[k]
                .integrate(self.config.friction, self.config.angular_damping);
        }

        self.tick += 1;
    }

    /// Produce the read-only snapshot the host renderer consumes. The
    /// core never draws; this is its entire outward surface per frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.tick,
            balls: self
                .balls
                .iter()
                .map(|b| BallSnapshot {
                    position: b.position,
                    radius: b.radius,
                    velocity: b.velocity,
                    acceleration: b.acceleration,
                })
                .collect(),
            capsules: self
                .capsules
                .iter()
                .map(|c| CapsuleSnapshot {
                    start: c.start,
                    end: c.end,
                    radius: c.radius,
                    angle: c.angle,
                    reference_angle: c.reference_angle,
                    velocity: c.velocity,
                    acceleration: c.acceleration,
                })
                .collect(),
            walls: self
                .walls
                .iter()
                .map(|w| WallSnapshot {
                    start: w.start,
                    end: w.end,
                })
                .collect(),
        }
    }
}
