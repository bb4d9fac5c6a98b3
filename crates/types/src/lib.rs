//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimension (the board is always square)
pub const GRID_DIM: usize = 4;

/// Tiles placed by `reset`
pub const START_CELLS: usize = 2;

/// Default spawn table: value 2 at weight 9, value 4 at weight 1 (90%/10%)
pub const DEFAULT_SPAWN_TABLE: [(u32, u32); 2] = [(2, 9), (4, 1)];

/// Rendered footprint of a single tile in terminal character cells.
/// Each tile is a bordered box; the whole board needs
/// `dim * CELL_COLS + 1` columns and `dim * CELL_ROWS + 1` rows.
pub const CELL_COLS: u16 = 7;
pub const CELL_ROWS: u16 = 4;

/// Input poll interval (milliseconds)
pub const POLL_INTERVAL_MS: u64 = 10;

/// A board coordinate, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The four move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order legal-move checks scan them
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Compact and merge tiles toward the given edge
    Shift(Direction),
    /// Clear the board and place the starting tiles again
    Restart,
}
