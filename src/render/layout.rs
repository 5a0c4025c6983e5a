//! Fits a source image onto the terminal's character grid.

use log::debug;

use crate::terminal::TerminalGeometry;

/// Rows kept free above the image for the run summary.
pub const RESERVED_ROWS: u16 = 4;

/// A character cell is about twice as tall as it is wide, so one cell covers
/// half as much horizontal image space as vertical.
pub const CELL_ASPECT: f64 = 2.0;

/// Output height never exceeds the source height divided by this.
pub const SOURCE_HEIGHT_DIVISOR: u32 = 2;

/// Size of the rendered image in terminal cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct OutputGrid {
    pub width: u32,
    pub height: u32,
}

/// Plans the output grid with the default [`RESERVED_ROWS`].
pub fn plan(src_width: u32, src_height: u32, terminal: TerminalGeometry) -> OutputGrid {
    plan_with_reserved(src_width, src_height, terminal, RESERVED_ROWS)
}

/// Plans the output grid for a `src_width` x `src_height` image.
///
/// Height is bounded by the rows left after `reserved_rows` and by half the
/// source height; width follows from the aspect ratio. When that width does
/// not fit the terminal, width becomes the binding constraint and height is
/// derived from it instead. Both dimensions are at least 1.
pub fn plan_with_reserved(
    src_width: u32,
    src_height: u32,
    terminal: TerminalGeometry,
    reserved_rows: u16,
) -> OutputGrid {
    let columns = u32::from(terminal.columns);
    let rows = u32::from(terminal.rows);
    let reserved = u32::from(reserved_rows);
    let available_rows = if rows > reserved { rows - reserved } else { rows };

    let aspect_ratio = f64::from(src_width) / f64::from(src_height);

    let mut height = available_rows.min(src_height / SOURCE_HEIGHT_DIVISOR);
    let mut width = (f64::from(height) * aspect_ratio * CELL_ASPECT) as u32;

    if width > columns {
        width = columns;
        height = (f64::from(width) / (aspect_ratio * CELL_ASPECT)) as u32;
    }

    if width == 0 || height == 0 {
        debug!("degenerate grid {width}x{height} for {src_width}x{src_height}, clamping to 1");
    }
    let grid = OutputGrid {
        width: width.max(1),
        height: height.max(1),
    };
    debug!(
        "planned {}x{} cells for {src_width}x{src_height} on {columns}x{rows} terminal",
        grid.width, grid.height
    );
    grid
}
