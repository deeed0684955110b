//! Terminal render surface.
//!
//! Tasks draw into a simple framebuffer through the engine's
//! [`Canvas`](space_garbage_engine::Canvas) trait; once per pass the renderer
//! flushes only the cells that changed. No widget or layout library is used.

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use space_garbage_types as types;

pub use canvas::TerminalCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, enter, leave, TerminalRenderer};
