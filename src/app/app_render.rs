use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus};
use crate::input::Field;
use crate::input::input_render::{FIELD_HEIGHT, render_field};
use crate::notification::render_notification;
use crate::results::results_render::wrap_chars;
use crate::theme;

const TITLE: &str = "Website Content Search";
// title, two fields, button and help line
const FIXED_ROWS: u16 = 1 + FIELD_HEIGHT * 2 + 1 + 1;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let error_lines = self.error_lines(area.width);
        let error_height = error_lines
            .len()
            .min(area.height.saturating_sub(FIXED_ROWS) as usize) as u16;

        let [
            title_area,
            url_area,
            query_area,
            button_area,
            error_area,
            results_area,
            help_area,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(error_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(TITLE, theme::title::TEXT)))
                .alignment(Alignment::Center),
            title_area,
        );

        render_field(self, Field::Url, frame, url_area);
        render_field(self, Field::Query, frame, query_area);
        self.render_button(frame, button_area);

        if !error_lines.is_empty() {
            let lines: Vec<Line> = error_lines
                .into_iter()
                .map(|chunk| Line::from(Span::styled(chunk, theme::error::TEXT)))
                .collect();
            frame.render_widget(Paragraph::new(lines), error_area);
        }

        if !self.view.results.is_empty() && results_area.height >= 3 {
            crate::results::results_render::render_pane(self, frame, results_area);
        }

        self.render_help_line(frame, help_area);

        render_notification(frame, &mut self.notification);
    }

    /// The inline error split into rows of the frame width
    fn error_lines(&self, width: u16) -> Vec<String> {
        match &self.view.error {
            Some(error) => wrap_chars(error, width as usize),
            None => Vec::new(),
        }
    }

    fn render_button(&self, frame: &mut Frame, area: Rect) {
        let (label, style) = if self.view.loading {
            (" 🔍 Searching... ", theme::button::LOADING)
        } else if self.focus == Focus::SearchButton {
            (" Search ", theme::button::FOCUSED)
        } else {
            (
                " Search ",
                Style::default().fg(theme::button::FG).bg(theme::button::BG),
            )
        };

        let line = Line::from(vec![Span::raw(" "), Span::styled(label, style)]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn context_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.focus {
            Focus::UrlField | Focus::QueryField | Focus::SearchButton => {
                hints!["Enter" => "Search", "Tab" => "Next", "Shift+Tab" => "Previous", "Esc" => "Quit"]
            }
            Focus::Results => {
                hints!["↑/↓" => "Select", "Enter" => "Toggle HTML", "PgUp/PgDn" => "Scroll", "Tab" => "Next", "Esc" => "Quit"]
            }
        }
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(theme::help_line::KEY);
        let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
        let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

        let hints = self.context_hints();
        let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
        spans.push(Span::raw(" "));
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{2022} ", sep_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, desc_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
