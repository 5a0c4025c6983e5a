use crate::pixel::Rgba;

/// Background that translucent pixels are blended over.
pub const BACKGROUND: Rgba = Rgba::OPAQUE_BLACK;

/// Composites `color` over the opaque black [`BACKGROUND`].
///
/// Opaque colors pass through untouched. Otherwise each channel is scaled by
/// `a / 255` and truncated; the result is always opaque since a terminal
/// cell has no transparency.
pub fn composite(color: Rgba) -> Rgba {
    if color.is_opaque() {
        return color;
    }
    let alpha = f64::from(color.a) / 255.0;
    let scale = |channel: u8| (f64::from(channel) * alpha) as u8;
    Rgba::new(scale(color.r), scale(color.g), scale(color.b), BACKGROUND.a)
}
