//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Alert, App, InputMode, Message, MessageStyle, run_tui};
