//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into ship intents and exposes a non-blocking
//! [`KeyboardInput`] that implements the engine's
//! [`InputSource`](space_garbage_engine::InputSource) seam.

pub mod handler;
pub mod map;

pub use space_garbage_types as types;

pub use handler::{ControlLatch, KeyboardInput};
pub use map::{map_key, should_quit, KeyIntent};
