//! Bounce Arena Engine
//!
//! A 2D rigid-body motion and collision core for an arena of circular
//! bodies ("balls"), a rotating capsule and static wall segments. The
//! engine advances the simulation one synchronous tick at a time and hands
//! read-only snapshots to whatever draws the result; it performs no drawing
//! and registers no event listeners itself.
//!
//! # Modules
//!
//! - [`math`] - 2D rotation and the few vector helpers glam does not name
//! - [`physics`] - body state, integration and the collision routines
//! - [`input`] - windowing-agnostic key handling and the per-tick flag set
//! - [`world`] - body registries, spawning and tick orchestration
//! - [`render`] - read-only per-body snapshots for the host renderer
//!
//! # Example
//!
//! ```rust,ignore
//! use bounce_arena_engine::input::{InputState, KeyCode};
//! use bounce_arena_engine::world::{SimConfig, World};
//! use glam::Vec2;
//!
//! let mut world = World::new(SimConfig::default());
//! world.spawn_wall(Vec2::new(0.0, 0.0), Vec2::new(640.0, 0.0)).unwrap();
//! let player = world.spawn_ball(Vec2::new(100.0, 100.0), 20.0, 1.0, 0.5).unwrap();
//! world.control_ball(player);
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::ArrowRight, true);
//!
//! // Each host animation frame:
//! world.step(&input);
//! let frame = world.snapshot();
//! ```

pub mod input;
pub mod math;
pub mod physics;
pub mod render;
pub mod world;

// Re-export commonly used types at crate level for convenience
pub use input::{InputState, KeyCode};
pub use physics::{Ball, Capsule, SpawnError, Wall};
pub use render::FrameSnapshot;
pub use world::{SimConfig, World};
