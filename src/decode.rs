//! The decoding boundary: extension allow-list and `image`-backed decoding
//! into an owned buffer the renderer can borrow.

use std::path::Path;

use image::DynamicImage;
use log::debug;

use crate::error::{Error, Result};
use crate::pixel::{ChannelLayout, PixelBuffer};

/// File extensions accepted before any decode is attempted.
pub const SUPPORTED_FORMATS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "tga", "psd", "gif", "hdr", "pic", "pnm",
];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_FORMATS
                .iter()
                .any(|fmt| fmt.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

pub fn check_format(path: &Path) -> Result<()> {
    if is_supported(path) {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Decoded pixels owned by the caller for the duration of rendering.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub layout: ChannelLayout,
    pub bytes: Vec<u8>,
}

impl DecodedImage {
    pub fn buffer(&self) -> Result<PixelBuffer<'_>> {
        PixelBuffer::new(self.width, self.height, self.layout, &self.bytes)
    }
}

impl From<DynamicImage> for DecodedImage {
    fn from(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let (layout, bytes) = match img {
            DynamicImage::ImageLuma8(buf) => (ChannelLayout::Gray, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (ChannelLayout::GrayAlpha, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (ChannelLayout::Rgb, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (ChannelLayout::Rgba, buf.into_raw()),
            // Wider sample types are narrowed to 8 bits per channel.
            other if other.color().has_alpha() => {
                (ChannelLayout::Rgba, other.into_rgba8().into_raw())
            }
            other => (ChannelLayout::Rgb, other.into_rgb8().into_raw()),
        };
        Self {
            width,
            height,
            layout,
            bytes,
        }
    }
}

/// Checks the extension, then decodes the file at `path`.
pub fn open(path: &Path) -> Result<DecodedImage> {
    check_format(path)?;
    let img = image::open(path).map_err(|e| Error::Decode {
        reason: e.to_string(),
    })?;
    finish(img)
}

/// Decodes an in-memory image, guessing the format from its contents.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage> {
    let img = image::load_from_memory(bytes).map_err(|e| Error::Decode {
        reason: e.to_string(),
    })?;
    finish(img)
}

fn finish(img: DynamicImage) -> Result<DecodedImage> {
    let decoded = DecodedImage::from(img);
    if decoded.width == 0 || decoded.height == 0 {
        return Err(Error::EmptyImage {
            width: decoded.width,
            height: decoded.height,
        });
    }
    debug!(
        "decoded {}x{} {} image",
        decoded.width,
        decoded.height,
        decoded.layout.label()
    );
    Ok(decoded)
}
