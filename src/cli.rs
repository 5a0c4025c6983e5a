use std::path::PathBuf;

use clap::Parser;

use crate::config::RenderConfig;
use crate::decode::SUPPORTED_FORMATS;
use crate::render::layout::RESERVED_ROWS;
use crate::terminal::TerminalGeometry;

/// Show an image as colored blocks in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, after_help = supported_formats())]
pub struct Args {
    /// Path to the image file
    pub path: PathBuf,

    /// Terminal width in columns, instead of the detected size
    #[arg(long, requires = "rows", value_parser = clap::value_parser!(u16).range(1..))]
    pub cols: Option<u16>,

    /// Terminal height in rows, instead of the detected size
    #[arg(long, requires = "cols", value_parser = clap::value_parser!(u16).range(1..))]
    pub rows: Option<u16>,

    /// Rows kept free above the image for the summary
    #[arg(long, default_value_t = RESERVED_ROWS)]
    pub reserved_rows: u16,

    /// Do not print the image summary
    #[arg(long)]
    pub no_info: bool,
}

impl Args {
    pub fn config(&self) -> RenderConfig {
        let geometry = match (self.cols, self.rows) {
            (Some(columns), Some(rows)) => Some(TerminalGeometry { columns, rows }),
            _ => None,
        };
        RenderConfig {
            reserved_rows: self.reserved_rows,
            show_info: !self.no_info,
            geometry,
        }
    }

    /// The name shown in the summary.
    pub fn display_name(&self) -> String {
        self.path.display().to_string()
    }
}

fn supported_formats() -> String {
    format!("Supported formats: {}", SUPPORTED_FORMATS.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tintview", "cat.png"]).unwrap();
        assert_eq!(args.config(), RenderConfig::default());
        assert_eq!(args.display_name(), "cat.png");
    }

    #[test]
    fn geometry_override() {
        let args =
            Args::try_parse_from(["tintview", "--cols", "40", "--rows", "12", "--no-info", "a.jpg"])
                .unwrap();
        let config = args.config();
        assert_eq!(
            config.geometry,
            Some(TerminalGeometry {
                columns: 40,
                rows: 12
            })
        );
        assert!(!config.show_info);
    }

    #[test]
    fn cols_without_rows_is_rejected() {
        assert!(Args::try_parse_from(["tintview", "--cols", "40", "a.jpg"]).is_err());
        assert!(Args::try_parse_from(["tintview", "--cols", "0", "--rows", "3", "a.jpg"]).is_err());
    }
}
