use crate::error::{Error, Result};

/// How the channels of one pixel are laid out in a decoded buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl ChannelLayout {
    pub fn from_count(channels: u8) -> Option<Self> {
        match channels {
            1 => Some(Self::Gray),
            2 => Some(Self::GrayAlpha),
            3 => Some(Self::Rgb),
            4 => Some(Self::Rgba),
            _ => None,
        }
    }

    pub fn channels(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::GrayAlpha => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Gray => "grayscale",
            Self::GrayAlpha => "grayscale+alpha",
            Self::Rgb => "RGB",
            Self::Rgba => "RGBA",
        }
    }

    /// Expands raw channel values into a color. Only the first
    /// `self.channels()` entries of `raw` are read.
    pub fn expand(self, raw: [u8; 4]) -> Rgba {
        match self {
            Self::Gray => Rgba::new(raw[0], raw[0], raw[0], 255),
            Self::GrayAlpha => Rgba::new(raw[0], raw[0], raw[0], raw[1]),
            Self::Rgb => Rgba::new(raw[0], raw[1], raw[2], 255),
            Self::Rgba => Rgba::new(raw[0], raw[1], raw[2], raw[3]),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const OPAQUE_BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}

impl From<Rgba> for crossterm::style::Color {
    fn from(c: Rgba) -> Self {
        crossterm::style::Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

impl From<Rgba> for ratatui::style::Color {
    fn from(c: Rgba) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

/// A read-only view over decoded pixels: row-major, top-to-bottom,
/// left-to-right, `layout.channels()` bytes per pixel.
#[derive(Debug, Copy, Clone)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    pub fn new(width: u32, height: u32, layout: ChannelLayout, data: &'a [u8]) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}
