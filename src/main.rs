//! Terminal 2048 runner.
//!
//! No arguments: one session over a default 4x4 board, two starting
//! tiles, 9:1 spawn weights. Quit with `q`, reset with `r`, move with
//! the arrow keys or WASD.

use anyhow::Result;

use tui_2048::core::{entropy_seed, Grid};
use tui_2048::session::Session;

fn main() -> Result<()> {
    let mut grid = Grid::new(entropy_seed());
    grid.reset()?;

    let mut session = Session::new(grid);
    session.open()
}
