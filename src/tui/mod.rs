use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::config::RenderConfig;
use crate::decode::DecodedImage;
use crate::error::Result;
use crate::info::ImageInfo;
use crate::pixel::PixelBuffer;
use crate::render::Renderer;
use crate::render::layout::{OutputGrid, plan_with_reserved};
use crate::terminal::TerminalGeometry;

#[derive(Debug)]
pub struct ViewerState {
    pub name: String,
    pub image: DecodedImage,
    pub show_info: bool,
    pub reserved_rows: u16,
}

impl ViewerState {
    pub fn new(name: String, image: DecodedImage, config: &RenderConfig) -> Result<Self> {
        image.buffer()?;
        Ok(Self {
            name,
            image,
            show_info: config.show_info,
            reserved_rows: config.reserved_rows,
        })
    }

    pub fn handle_input(&mut self, key: KeyInput) -> Option<AppAction> {
        match key {
            KeyInput::Char('q') | KeyInput::Esc => return Some(AppAction::Quit),
            KeyInput::Char('i') => self.show_info = !self.show_info,
            KeyInput::Char(_) => {}
        }
        None
    }

    fn info_rows(&self) -> u16 {
        if self.show_info { self.reserved_rows } else { 0 }
    }
}

#[derive(Debug, Clone)]
pub enum KeyInput {
    Char(char),
    Esc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    Quit,
}

/// An image fitted into whatever area it is given, centered.
pub struct Picture<'a> {
    buffer: PixelBuffer<'a>,
}

impl<'a> Picture<'a> {
    pub fn new(buffer: PixelBuffer<'a>) -> Self {
        Self { buffer }
    }

    /// The grid this picture occupies inside `area`.
    pub fn grid_for(&self, area: Rect) -> OutputGrid {
        let geometry = TerminalGeometry {
            columns: area.width.max(1),
            rows: area.height.max(1),
        };
        plan_with_reserved(self.buffer.width(), self.buffer.height(), geometry, 0)
    }
}

impl Widget for Picture<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let grid = self.grid_for(area);
        let cells = Renderer::new(self.buffer, grid).cells();

        let left = area.x + area.width.saturating_sub(grid.width as u16) / 2;
        let top = area.y + area.height.saturating_sub(grid.height as u16) / 2;
        for (dy, row) in cells.rows().enumerate() {
            for (dx, &color) in row.iter().enumerate() {
                let position = (left + dx as u16, top + dy as u16);
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_symbol(" ").set_bg(color.into());
                }
            }
        }
    }
}

pub fn view(frame: &mut Frame, state: &ViewerState) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(state.info_rows()), Constraint::Min(0)])
        .split(area);
    let (info_area, picture_area) = (chunks[0], chunks[1]);

    let Ok(buffer) = state.image.buffer() else {
        frame.render_widget(Paragraph::new("image buffer is invalid"), area);
        return;
    };
    let picture = Picture::new(buffer);

    if state.show_info && !info_area.is_empty() {
        let info = ImageInfo {
            name: state.name.clone(),
            width: state.image.width,
            height: state.image.height,
            layout: state.image.layout,
            terminal: TerminalGeometry {
                columns: area.width,
                rows: area.height,
            },
            grid: picture.grid_for(picture_area),
        };
        let block = Block::default().borders(Borders::BOTTOM);
        let text = info.lines()[..3].join("\n");
        frame.render_widget(Paragraph::new(text).block(block), info_area);
    }

    frame.render_widget(picture, picture_area);
}
