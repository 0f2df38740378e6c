//! Interactive TUI interface
//!
//! Presentation only: keystrokes are assembled into rows here and handed to
//! the engine, whose snapshots drive the rendering.

mod app;
mod input;
mod rendering;

pub use app::{App, MESSAGE_TTL, Message, MessageStyle, Statistics, run_tui};
pub use input::RowInput;
