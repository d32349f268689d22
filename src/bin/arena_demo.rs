//! Headless arena demo
//!
//! Stand-in for the host render loop: builds a boxed arena with a player
//! ball, a handful of random balls and a capsule, drives the simulation
//! with a scripted input sequence and prints JSON frame snapshots to
//! stdout. No drawing, no event listeners; exactly what a real host would
//! wire to a canvas and a keyboard.

use bounce_arena_engine::input::{InputState, KeyCode};
use bounce_arena_engine::world::{SimConfig, World};
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

const ARENA_WIDTH: f32 = 640.0;
const ARENA_HEIGHT: f32 = 480.0;
const TICKS: u64 = 120;
const SNAPSHOT_EVERY: u64 = 30;

fn main() {
    let mut world = World::new(SimConfig::default());

    // Four walls boxing the arena
    let corners = [
        (Vec2::new(0.0, 0.0), Vec2::new(ARENA_WIDTH, 0.0)),
        (Vec2::new(ARENA_WIDTH, 0.0), Vec2::new(ARENA_WIDTH, ARENA_HEIGHT)),
        (Vec2::new(ARENA_WIDTH, ARENA_HEIGHT), Vec2::new(0.0, ARENA_HEIGHT)),
        (Vec2::new(0.0, ARENA_HEIGHT), Vec2::new(0.0, 0.0)),
    ];
    for (start, end) in corners {
        world.spawn_wall(start, end).expect("arena walls are valid");
    }

    let player = world
        .spawn_ball(Vec2::new(100.0, 100.0), 20.0, 1.0, 0.7)
        .expect("player ball is valid");
    world.control_ball(player);

    let mut rng = StdRng::seed_from_u64(42);
    for x in [250.0, 350.0, 450.0] {
        world
            .spawn_random_ball(&mut rng, Vec2::new(x, 240.0))
            .expect("default spawn ranges are valid");
    }

    world
        .spawn_capsule(Vec2::new(200.0, 400.0), Vec2::new(300.0, 400.0), 15.0)
        .expect("capsule is valid");

    // Scripted input: push right for the first half, then coast
    let mut input = InputState::new();
    input.handle_key(KeyCode::ArrowRight, true);

    for tick in 0..TICKS {
        if tick == TICKS / 2 {
            input.handle_key(KeyCode::ArrowRight, false);
        }
        world.step(&input);

        if world.tick_count() % SNAPSHOT_EVERY == 0 {
            let frame = world.snapshot();
            let json = serde_json::to_string(&frame).expect("snapshot serializes");
            println!("{json}");
        }
    }
}
