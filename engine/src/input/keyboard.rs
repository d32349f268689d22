//! Generic key codes for directional input, independent of windowing
//! system. The host translates its own key events (winit, browser, SDL)
//! into these before calling [`InputState::handle_key`].
//!
//! [`InputState::handle_key`]: super::InputState::handle_key

/// The keys the simulation cares about. Anything else maps to `Unknown`
/// and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Catch-all for unhandled keys
    Unknown,
}
