//! Bilinear sampling of a pixel buffer at fractional coordinates.

use log::trace;

use crate::pixel::{PixelBuffer, Rgba};

/// Returned whenever a sample would land outside the buffer.
pub const OUT_OF_RANGE: Rgba = Rgba::OPAQUE_BLACK;

/// Samples `buffer` at image-space `(x, y)` with bilinear interpolation.
///
/// The second sample point on each axis is clamped to the last row/column,
/// so edge pixels are replicated rather than wrapped. Each channel is
/// interpolated independently and truncated to `u8`. Coordinates outside
/// `[0, width) x [0, height)` (or NaN) yield [`OUT_OF_RANGE`].
pub fn sample(buffer: &PixelBuffer<'_>, x: f64, y: f64) -> Rgba {
    // Negated form so NaN is rejected too.
    if !(x >= 0.0 && y >= 0.0) {
        trace!("sample at ({x}, {y}) is before the buffer origin");
        return OUT_OF_RANGE;
    }

    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    if x0 >= width || y0 >= height {
        trace!("sample at ({x}, {y}) is past the {width}x{height} buffer");
        return OUT_OF_RANGE;
    }
    let x1 = (x0 + 1).min(width - 1);
    let y1 = (y0 + 1).min(height - 1);

    let dx = x - x0 as f64;
    let dy = y - y0 as f64;
    let dx_inv = 1.0 - dx;
    let dy_inv = 1.0 - dy;

    let layout = buffer.layout();
    let channels = layout.channels();
    let index = |px: usize, py: usize| channels * (py * width + px);
    let top_left = index(x0, y0);
    let bottom_left = index(x0, y1);
    let top_right = index(x1, y0);
    let bottom_right = index(x1, y1);

    let data = buffer.data();
    if top_left >= data.len() || bottom_right + channels - 1 >= data.len() {
        trace!("sample at ({x}, {y}) indexes past {} bytes", data.len());
        return OUT_OF_RANGE;
    }

    let mut raw = [0u8; 4];
    for (c, slot) in raw.iter_mut().enumerate().take(channels) {
        let v00 = f64::from(data[top_left + c]);
        let v01 = f64::from(data[bottom_left + c]);
        let v10 = f64::from(data[top_right + c]);
        let v11 = f64::from(data[bottom_right + c]);
        let value =
            v00 * dx_inv * dy_inv + v10 * dx * dy_inv + v01 * dx_inv * dy + v11 * dx * dy;
        *slot = value as u8;
    }
    layout.expand(raw)
}
