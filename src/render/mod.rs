pub mod composite;
pub mod layout;
pub mod sample;

use std::io;

use crossterm::{
    QueueableCommand,
    style::{Print, ResetColor, SetBackgroundColor},
};
use log::debug;
use rayon::prelude::*;

use crate::pixel::{PixelBuffer, Rgba};
use crate::terminal::TerminalControl;
use composite::composite;
use layout::OutputGrid;
use sample::sample;

/// Composited cell colors, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    pub width: u32,
    pub height: u32,
    cells: Vec<Rgba>,
}

impl CellGrid {
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.cells.chunks(self.width.max(1) as usize)
    }
}

/// Maps an output grid back onto a pixel buffer and paints it cell by cell.
pub struct Renderer<'a> {
    buffer: PixelBuffer<'a>,
    grid: OutputGrid,
    caption: Vec<String>,
}

impl<'a> Renderer<'a> {
    pub fn new(buffer: PixelBuffer<'a>, grid: OutputGrid) -> Self {
        Self {
            buffer,
            grid,
            caption: Vec::new(),
        }
    }

    /// Lines printed between clearing the screen and the first cell.
    pub fn with_caption(mut self, lines: Vec<String>) -> Self {
        self.caption = lines;
        self
    }

    /// Color of output cell `(x, y)`, sampled at the cell's center.
    pub fn cell(&self, x: u32, y: u32) -> Rgba {
        let scale_x = f64::from(self.buffer.width()) / f64::from(self.grid.width);
        let scale_y = f64::from(self.buffer.height()) / f64::from(self.grid.height);
        let src_x = (f64::from(x) + 0.5) * scale_x;
        let src_y = (f64::from(y) + 0.5) * scale_y;
        composite(sample(&self.buffer, src_x, src_y))
    }

    /// Samples every cell. Rows are computed in parallel; the result keeps
    /// row-major order.
    pub fn cells(&self) -> CellGrid {
        let OutputGrid { width, height } = self.grid;
        let rows: Vec<Vec<Rgba>> = (0..height)
            .into_par_iter()
            .map(|y| (0..width).map(|x| self.cell(x, y)).collect())
            .collect();
        CellGrid {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Clears the screen, hides the cursor, writes the caption and every
    /// cell top-to-bottom, left-to-right, then shows the cursor again.
    pub fn render<T: TerminalControl>(&self, term: &mut T) -> io::Result<()> {
        let grid = self.cells();
        debug!(
            "rendering {}x{} cells from {}x{} {} image",
            grid.width,
            grid.height,
            self.buffer.width(),
            self.buffer.height(),
            self.buffer.layout().label()
        );

        term.clear_screen()?;
        term.set_cursor_visible(false)?;
        for line in &self.caption {
            term.queue(Print(line))?.queue(Print('\n'))?;
        }
        for row in grid.rows() {
            for &color in row {
                term.queue(SetBackgroundColor(color.into()))?
                    .queue(Print(' '))?
                    .queue(ResetColor)?;
            }
            term.queue(Print('\n'))?;
        }
        term.set_cursor_visible(true)?;
        term.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::ChannelLayout;
    use crate::terminal::{AnsiTerminal, TerminalGeometry};

    #[test]
    fn cells_are_row_major() {
        // 4x2 gray gradient, rendered at full resolution.
        let data = [0, 10, 20, 30, 40, 50, 60, 70];
        let buf = PixelBuffer::new(4, 2, ChannelLayout::Gray, &data).unwrap();
        let grid = OutputGrid {
            width: 4,
            height: 2,
        };
        let cells = Renderer::new(buf, grid).cells();
        let reds: Vec<u8> = cells.rows().flatten().map(|c| c.r).collect();
        // Cell centers land on x + 0.5, so each value blends with its right
        // neighbour (clamped at the edge) and the row below.
        assert_eq!(reds, vec![25, 35, 45, 50, 45, 55, 65, 70]);
        assert_eq!(cells.get(3, 1), Some(Rgba::new(70, 70, 70, 255)));
        assert_eq!(cells.get(4, 0), None);
    }

    #[test]
    fn render_emits_caption_then_cells() {
        let data = [255, 0, 0];
        let buf = PixelBuffer::new(1, 1, ChannelLayout::Rgb, &data).unwrap();
        let grid = OutputGrid {
            width: 1,
            height: 1,
        };
        let mut term = AnsiTerminal::with_geometry(Vec::new(), Some(TerminalGeometry::DEFAULT));
        Renderer::new(buf, grid)
            .with_caption(vec!["hello".to_string()])
            .render(&mut term)
            .unwrap();
        let out = String::from_utf8(term.into_inner()).unwrap();
        assert_eq!(
            out,
            "\x1b[2J\x1b[1;1H\x1b[?25lhello\n\x1b[48;2;255;0;0m \x1b[0m\n\x1b[?25h"
        );
    }
}
