//! Render still images as true-color blocks in a text terminal.
//!
//! The pipeline is: decode ([`decode`]) into a [`PixelBuffer`], plan the
//! output grid against the terminal size ([`render::layout`]), then sample,
//! composite and emit one background-colored cell per grid position
//! ([`render`]).

pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod info;
pub mod pixel;
pub mod render;
pub mod terminal;
pub mod tui;

pub use config::RenderConfig;
pub use decode::{DecodedImage, SUPPORTED_FORMATS};
pub use error::{Error, Result};
pub use info::ImageInfo;
pub use pixel::{ChannelLayout, PixelBuffer, Rgba};
pub use render::{CellGrid, Renderer, layout::OutputGrid};
pub use terminal::{AnsiTerminal, TerminalControl, TerminalGeometry};
