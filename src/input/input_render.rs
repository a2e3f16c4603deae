use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders},
};

use super::Field;
use crate::app::App;
use crate::theme;

pub const FIELD_HEIGHT: u16 = 3;

pub fn render_field(app: &mut App, field: Field, frame: &mut Frame, area: Rect) {
    let focused = app.focus.field() == Some(field);

    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(field.title())
        .border_style(Style::default().fg(border_color));

    let textarea = app.input.textarea_mut(field);
    textarea.set_block(block);
    if focused {
        textarea.set_cursor_style(theme::input::CURSOR);
    } else {
        textarea.set_cursor_style(Style::default());
    }

    frame.render_widget(&*textarea, area);
}
