//! GridView: maps a `core::Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and fully unit-testable. Each tile is a
//! bordered 7x4 character box; the whole board takes `dim*7+1` columns
//! by `dim*4+1` rows and is centered in the viewport. A viewport smaller
//! than the board shows a fallback message instead.

use tui_2048_core::Grid;
use tui_2048_types::{CELL_COLS, CELL_ROWS};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Shown when the terminal cannot fit the board.
pub const TOO_SMALL_MSG: &str = "Window too small to display grid";

/// Top and bottom edge of one cell box.
const BOX_TOP: &str = " ------";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders the board into a framebuffer.
#[derive(Debug, Default)]
pub struct GridView;

impl GridView {
    /// Columns the board needs for a given dimension.
    pub fn required_cols(dim: usize) -> u16 {
        dim as u16 * CELL_COLS + 1
    }

    /// Rows the board needs for a given dimension.
    pub fn required_rows(dim: usize) -> u16 {
        dim as u16 * CELL_ROWS + 1
    }

    /// Render the grid into a fresh frame sized to the viewport.
    pub fn render(&self, grid: &Grid, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, &mut fb);
        fb
    }

    /// Render the grid into an existing frame (resized to fit), letting
    /// callers reuse one buffer across frames.
    pub fn render_into(&self, grid: &Grid, fb: &mut FrameBuffer) {
        fb.clear(Default::default());

        let dim = grid.dim();
        let board_w = Self::required_cols(dim);
        let board_h = Self::required_rows(dim);

        if fb.width() < board_w || fb.height() < board_h {
            fb.put_str(0, 0, TOO_SMALL_MSG, CellStyle::default());
            return;
        }

        let basex = (fb.width() - board_w) / 2;
        let basey = (fb.height() - board_h) / 2;

        self.draw_borders(fb, dim, basex, basey);
        self.draw_values(grid, fb, basex, basey);
    }

    fn draw_borders(&self, fb: &mut FrameBuffer, dim: usize, basex: u16, basey: u16) {
        let style = border_style();

        for row in 0..dim as u16 {
            for col in 0..dim as u16 {
                let cornery = basey + row * CELL_ROWS;
                let cornerx = basex + col * CELL_COLS;
                fb.put_str(cornerx, cornery, BOX_TOP, style);
                for i in 1..CELL_ROWS {
                    fb.put_char(cornerx, cornery + i, '|', style);
                }
            }
        }

        // Right edge of the last column of boxes.
        let edgex = basex + dim as u16 * CELL_COLS;
        for row in 0..dim as u16 {
            let cornery = basey + row * CELL_ROWS;
            for i in 1..CELL_ROWS {
                fb.put_char(edgex, cornery + i, '|', style);
            }
        }

        // Bottom edge of the last row of boxes.
        let edgey = basey + dim as u16 * CELL_ROWS;
        for col in 0..dim as u16 {
            fb.put_str(basex + col * CELL_COLS, edgey, BOX_TOP, style);
        }
    }

    fn draw_values(&self, grid: &Grid, fb: &mut FrameBuffer, basex: u16, basey: u16) {
        for row in 0..grid.dim() {
            for col in 0..grid.dim() {
                let cornery = basey + row as u16 * CELL_ROWS;
                let cornerx = basex + col as u16 * CELL_COLS;
                let value = grid.get(row, col);
                if value == 0 {
                    continue;
                }
                let text = value.to_string();
                // Roughly centered in the 6-wide box interior.
                let x = cornerx + 4 - (text.len() / 2) as u16;
                fb.put_str(x, cornery + 2, &text, tile_style(value));
            }
        }
    }
}

fn border_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(160, 160, 160),
        bg: Rgb::new(0, 0, 0),
        bold: false,
    }
}

/// Per-value tile palette; everything 2048 and above gets the hot color.
fn tile_style(value: u32) -> CellStyle {
    let fg = match value {
        2 => Rgb::new(220, 220, 220),
        4 => Rgb::new(240, 220, 150),
        8 => Rgb::new(255, 177, 100),
        16 => Rgb::new(255, 130, 80),
        32 => Rgb::new(255, 100, 90),
        64 => Rgb::new(255, 70, 70),
        128 => Rgb::new(240, 210, 90),
        256 => Rgb::new(240, 205, 70),
        512 => Rgb::new(240, 200, 55),
        1024 => Rgb::new(240, 195, 40),
        _ => Rgb::new(255, 215, 0),
    };
    CellStyle {
        fg,
        bg: Rgb::new(0, 0, 0),
        bold: value >= 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_size_for_default_board() {
        assert_eq!(GridView::required_cols(4), 29);
        assert_eq!(GridView::required_rows(4), 17);
    }

    #[test]
    fn test_tile_palette_saturates() {
        assert_eq!(tile_style(2048).fg, tile_style(4096).fg);
        assert!(tile_style(8).bold);
        assert!(!tile_style(2).bold);
    }
}
