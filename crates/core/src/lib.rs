//! Core module - pure game logic with no external dependencies
//!
//! This crate contains the grid engine: the move/merge algorithm, the
//! empty-cell query, and the weighted tile-spawn policy. It has zero
//! dependencies on UI, terminal handling, or I/O.

pub mod error;
pub mod grid;
pub mod rng;

pub use tui_2048_types as types;

pub use error::GridError;
pub use grid::{Grid, SpawnWeight};
pub use rng::{entropy_seed, SimpleRng};
