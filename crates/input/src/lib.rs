//! Terminal input module.
//!
//! Maps `crossterm` key events into [`tui_2048_types::GameAction`].
//! Quit and interrupt are recognized separately from game actions so the
//! session can distinguish a normal exit from a teardown-and-abort.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, is_interrupt, should_quit};
