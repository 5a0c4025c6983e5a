use crate::render::layout::RESERVED_ROWS;
use crate::terminal::{TerminalControl, TerminalGeometry};

/// Settings shared by the one-shot printer and the interactive viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Terminal rows kept free above the image.
    pub reserved_rows: u16,
    /// Print the run summary in the reserved rows.
    pub show_info: bool,
    /// Overrides the queried terminal size.
    pub geometry: Option<TerminalGeometry>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            reserved_rows: RESERVED_ROWS,
            show_info: true,
            geometry: None,
        }
    }
}

impl RenderConfig {
    /// The configured geometry, else whatever `term` reports, else the
    /// 80x24 default.
    pub fn geometry_for<T: TerminalControl>(&self, term: &T) -> TerminalGeometry {
        match self.geometry {
            Some(geometry) => geometry,
            None => TerminalGeometry::resolve(term.query_geometry()),
        }
    }
}
