use crate::pixel::ChannelLayout;
use crate::render::layout::{OutputGrid, RESERVED_ROWS};
use crate::terminal::TerminalGeometry;

/// What gets shown above the image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageInfo {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub layout: ChannelLayout,
    pub terminal: TerminalGeometry,
    pub grid: OutputGrid,
}

impl ImageInfo {
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// The summary as exactly [`RESERVED_ROWS`] lines, the last one blank.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Image: {}", self.name),
            format!(
                "Size: {}×{} px, {} channels ({}), ratio {:.2}",
                self.width,
                self.height,
                self.layout.channels(),
                self.layout.label(),
                self.aspect_ratio()
            ),
            format!(
                "Terminal: {}×{} chars, target {}×{} chars",
                self.terminal.columns, self.terminal.rows, self.grid.width, self.grid.height
            ),
        ];
        lines.resize(usize::from(RESERVED_ROWS), String::new());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_fills_reserved_rows() {
        let info = ImageInfo {
            name: "cat.png".to_string(),
            width: 640,
            height: 480,
            layout: ChannelLayout::Rgba,
            terminal: TerminalGeometry::DEFAULT,
            grid: OutputGrid {
                width: 53,
                height: 20,
            },
        };
        let lines = info.lines();
        assert_eq!(lines.len(), usize::from(RESERVED_ROWS));
        assert_eq!(lines[0], "Image: cat.png");
        assert_eq!(lines[1], "Size: 640×480 px, 4 channels (RGBA), ratio 1.33");
        assert_eq!(lines[2], "Terminal: 80×24 chars, target 53×20 chars");
        assert!(lines[3].is_empty());
    }
}
