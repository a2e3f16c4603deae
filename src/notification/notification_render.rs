use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::notification_state::NotificationState;
use crate::theme;

const MARGIN: u16 = 2;

/// Draw the current notification in the top-right corner.
///
/// Call after the main UI so it lands on top.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let frame_area = frame.area();

    // message + 1 space padding each side + borders
    let width = (notif.message.chars().count() as u16).saturating_add(4);
    let area = Rect {
        x: frame_area.width.saturating_sub(width + MARGIN),
        y: MARGIN.min(frame_area.height),
        width: width.min(frame_area.width.saturating_sub(MARGIN * 2)),
        height: 3.min(frame_area.height.saturating_sub(MARGIN * 2)),
    };

    if area.width < 5 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme::notification::BORDER)
                .bg(theme::notification::BG),
        )
        .style(Style::default().bg(theme::notification::BG));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default()
            .fg(theme::notification::FG)
            .bg(theme::notification::BG),
    ));

    frame.render_widget(Paragraph::new(text).block(block), area);
}
