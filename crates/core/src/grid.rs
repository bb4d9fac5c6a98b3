//! Grid module - the 2048 board and its move/merge/spawn rules
//!
//! The grid is a square matrix of tile values stored in a single flat
//! buffer, row-major (`row * dim + col`). `0` means empty; every placed
//! value is a power of two, and merges only ever combine equal non-zero
//! values, so the invariant holds by construction.
//!
//! All four directional moves run through one lane-compaction routine;
//! a lane is a row or column viewed from the target edge outward.

use crate::error::GridError;
use crate::rng::SimpleRng;
use tui_2048_types::{Coord, Direction, DEFAULT_SPAWN_TABLE, GRID_DIM, START_CELLS};

/// One entry of the spawn table: a tile value and its selection weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnWeight {
    pub value: u32,
    pub weight: u32,
}

impl SpawnWeight {
    pub const fn new(value: u32, weight: u32) -> Self {
        Self { value, weight }
    }
}

/// The game board plus its spawn policy and RNG.
#[derive(Debug, Clone)]
pub struct Grid {
    dim: usize,
    /// Flat cell buffer, row-major (`row * dim + col`)
    cells: Vec<u32>,
    spawn_table: Vec<SpawnWeight>,
    start_cells: usize,
    rng: SimpleRng,
}

impl Grid {
    /// Create the default 4x4 grid (two starting tiles, 9:1 spawn table).
    pub fn new(seed: u32) -> Self {
        let table = DEFAULT_SPAWN_TABLE
            .iter()
            .map(|&(value, weight)| SpawnWeight::new(value, weight))
            .collect();
        Self::with_config(GRID_DIM, START_CELLS, table, seed)
    }

    /// Create a grid with explicit dimension, start-tile count and spawn
    /// table. The weight sum must be positive.
    pub fn with_config(
        dim: usize,
        start_cells: usize,
        spawn_table: Vec<SpawnWeight>,
        seed: u32,
    ) -> Self {
        debug_assert!(dim > 0);
        debug_assert!(spawn_table.iter().map(|w| w.weight).sum::<u32>() > 0);
        Self {
            dim,
            cells: vec![0; dim * dim],
            spawn_table,
            start_cells,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn start_cells(&self) -> usize {
        self.start_cells
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.dim && col < self.dim);
        row * self.dim + col
    }

    /// Tile value at (row, col); `0` is an empty cell.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.index(row, col)]
    }

    /// Place a tile value directly. Used by tests and the starting-tile
    /// path; normal play only mutates through moves and spawns.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// The flat cell buffer, row-major.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Number of non-zero tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Pick an empty cell uniformly at random.
    ///
    /// Scans row-major, collects every zero cell, then draws one. Fails
    /// with [`GridError::NoEmptyCell`] on a full board; that is a real
    /// precondition failure, not a no-op.
    pub fn random_empty_cell(&mut self) -> Result<Coord, GridError> {
        let mut empties = Vec::new();
        for row in 0..self.dim {
            for col in 0..self.dim {
                if self.get(row, col) == 0 {
                    empties.push(Coord::new(row, col));
                }
            }
        }
        if empties.is_empty() {
            return Err(GridError::NoEmptyCell);
        }
        let pick = self.rng.next_range(empties.len() as u32) as usize;
        Ok(empties[pick])
    }

    /// Spawn one tile: choose an empty cell, then a value by weighted
    /// draw over the spawn table. Returns where the tile landed.
    pub fn insert_random_cell(&mut self) -> Result<Coord, GridError> {
        let cell = self.random_empty_cell()?;

        let sum: u32 = self.spawn_table.iter().map(|w| w.weight).sum();
        // Uniform draw in [1, sum], then walk the table subtracting
        // weights; the entry that takes the remainder to <= 0 wins.
        let mut remainder = self.rng.next_range(sum) as i64 + 1;
        let mut value = 0;
        for entry in &self.spawn_table {
            remainder -= entry.weight as i64;
            if remainder <= 0 {
                value = entry.value;
                break;
            }
        }
        if value == 0 {
            return Err(GridError::SpawnSelection);
        }

        self.set(cell.row, cell.col, value);
        Ok(cell)
    }

    /// Zero the board and place `start_cells` random tiles.
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.cells.fill(0);
        for _ in 0..self.start_cells {
            self.insert_random_cell()?;
        }
        Ok(())
    }

    /// Compact and merge every lane toward the given edge.
    /// Returns whether any tile moved or merged.
    pub fn shift(&mut self, dir: Direction) -> bool {
        let dim = self.dim;
        let mut moved = false;
        for lane in 0..dim {
            // Map lane position 0..dim onto flat indices, position 0 at
            // the target edge.
            moved |= match dir {
                Direction::Left => self.compact_lane(|pos| lane * dim + pos),
                Direction::Right => self.compact_lane(|pos| lane * dim + (dim - 1 - pos)),
                Direction::Up => self.compact_lane(|pos| pos * dim + lane),
                Direction::Down => self.compact_lane(|pos| (dim - 1 - pos) * dim + lane),
            };
        }
        moved
    }

    pub fn left(&mut self) -> bool {
        self.shift(Direction::Left)
    }

    pub fn right(&mut self) -> bool {
        self.shift(Direction::Right)
    }

    pub fn up(&mut self) -> bool {
        self.shift(Direction::Up)
    }

    pub fn down(&mut self) -> bool {
        self.shift(Direction::Down)
    }

    /// True if no direction can change the board.
    pub fn is_stuck(&self) -> bool {
        Direction::ALL.iter().all(|&dir| !self.can_shift(dir))
    }

    /// Would a move in this direction change anything? Pure check, used
    /// for stuck detection; the mutating path is [`Grid::shift`].
    pub fn can_shift(&self, dir: Direction) -> bool {
        let dim = self.dim;
        for lane in 0..dim {
            let at = |pos: usize| -> u32 {
                match dir {
                    Direction::Left => self.cells[lane * dim + pos],
                    Direction::Right => self.cells[lane * dim + (dim - 1 - pos)],
                    Direction::Up => self.cells[pos * dim + lane],
                    Direction::Down => self.cells[(dim - 1 - pos) * dim + lane],
                }
            };
            for pos in 1..dim {
                let cur = at(pos);
                let toward_edge = at(pos - 1);
                if cur != 0 && (toward_edge == 0 || toward_edge == cur) {
                    return true;
                }
            }
        }
        false
    }

    /// One lane of the move algorithm.
    ///
    /// `at` maps lane position (0 = target edge) to a flat cell index.
    /// A frontier index starts at the edge and marks the last merge
    /// target; repeated passes scan from just past the frontier outward,
    /// merging a cell into an equal edge-ward neighbor (advancing the
    /// frontier so the doubled tile cannot merge again this move) or
    /// sliding it into an empty neighbor, until a pass changes nothing.
    fn compact_lane<F: Fn(usize) -> usize>(&mut self, at: F) -> bool {
        let dim = self.dim;
        let mut moved = false;
        let mut frontier = 0;
        while frontier + 1 < dim {
            let mut changed = false;
            for pos in (frontier + 1)..dim {
                let cur = self.cells[at(pos)];
                if cur == 0 {
                    continue;
                }
                let neighbor = self.cells[at(pos - 1)];
                if neighbor == cur {
                    self.cells[at(pos - 1)] = cur * 2;
                    self.cells[at(pos)] = 0;
                    frontier = pos;
                    moved = true;
                    changed = true;
                } else if neighbor == 0 {
                    self.cells[at(pos - 1)] = cur;
                    self.cells[at(pos)] = 0;
                    moved = true;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        moved
    }
}
