//! Terminal 2048 (workspace facade crate).
//!
//! Keeps the `tui_2048::{core,input,term,types}` public API stable while
//! the implementation lives in dedicated crates under `crates/`. The
//! session controller is the one piece that needs all of them, so it
//! lives here.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod session;
