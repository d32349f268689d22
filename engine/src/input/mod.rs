//! Input Module
//!
//! Platform-agnostic input handling, decoupled from any windowing system.
//! The host registers its event listeners once at startup and forwards
//! each physical key transition into a persistent [`InputState`]; the
//! simulation reads that state by reference once per tick and never
//! touches event listeners itself.

pub mod keyboard;

pub use keyboard::KeyCode;

/// The four directional flags the simulation consumes each tick.
///
/// Held keys stay `true` across ticks until the host reports the release
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    /// Up arrow / W held
    pub up: bool,
    /// Down arrow / S held
    pub down: bool,
    /// Left arrow / A held
    pub left: bool,
    /// Right arrow / D held
    pub right: bool,
}

impl InputState {
    /// Create an input state with all flags released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update a flag from a key press or release transition.
    ///
    /// Returns `true` if the key maps to a directional flag.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W | KeyCode::ArrowUp => {
                self.up = pressed;
                true
            }
            KeyCode::S | KeyCode::ArrowDown => {
                self.down = pressed;
                true
            }
            KeyCode::A | KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::D | KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            KeyCode::Unknown => false,
        }
    }

    /// Left/right as -1, 0 or 1. Opposing flags cancel.
    pub fn horizontal_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Up/down as -1, 0 or 1; positive is down (screen-space y).
    pub fn vertical_axis(&self) -> i32 {
        (self.down as i32) - (self.up as i32)
    }

    /// Check if any directional flag is held.
    pub fn any_pressed(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Release all flags.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
