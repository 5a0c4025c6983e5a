use std::path::PathBuf;

use thiserror::Error;

use crate::decode::SUPPORTED_FORMATS;

/// Failures at the crate's boundaries. Sampling and layout never fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "unsupported image format for {}; supported formats: {}",
        .path.display(),
        SUPPORTED_FORMATS.join(" ")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("could not load image ({reason})")]
    Decode { reason: String },

    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferLength { expected: usize, actual: usize },

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
