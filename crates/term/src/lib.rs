//! Terminal rendering module.
//!
//! Rendering is split into a pure view (board state into a framebuffer of
//! styled character cells) and a crossterm-backed renderer that flushes
//! framebuffers, diffing against the previous frame so a move only
//! repaints the cells it touched.

pub mod fb;
pub mod grid_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use grid_view::{GridView, Viewport};
pub use renderer::TerminalRenderer;
