use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::results_state::ScrollTarget;
use crate::app::{App, Focus};
use crate::backend::SearchResult;
use crate::theme;
use crate::view::card;

const INDENT: &str = "  ";
const SELECTED_MARKER: &str = "▶ ";
const HTML_GUTTER: &str = "  │ ";
const TAB_WIDTH: &str = "    ";

/// Line ranges of one rendered card within the pane content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub start: usize,
    /// Preview, path and toggle lines
    pub header_len: usize,
    /// `(start, len)` of the HTML panel when expanded
    pub html: Option<(usize, usize)>,
}

pub struct RenderedCards {
    pub lines: Vec<Line<'static>>,
    pub layouts: Vec<CardLayout>,
}

/// Split `text` into chunks of at most `width` characters
pub fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(width.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn html_lines(html: &str, width: usize) -> Vec<String> {
    if html.trim().is_empty() {
        return vec!["(empty)".to_string()];
    }
    html.replace('\t', TAB_WIDTH)
        .lines()
        .flat_map(|line| wrap_chars(line, width))
        .collect()
}

/// Lay out every result as a card, `width` columns wide
pub fn build_cards(
    results: &[SearchResult],
    expanded: &[bool],
    selected: Option<usize>,
    width: usize,
) -> RenderedCards {
    let text_width = width.saturating_sub(INDENT.len());
    let html_width = width.saturating_sub(HTML_GUTTER.chars().count());

    let mut lines = Vec::new();
    let mut layouts = Vec::with_capacity(results.len());

    for (index, result) in results.iter().enumerate() {
        let start = lines.len();

        for (row, chunk) in wrap_chars(&card::preview(&result.content), text_width)
            .into_iter()
            .enumerate()
        {
            let prefix = if row == 0 && selected == Some(index) {
                Span::styled(
                    SELECTED_MARKER,
                    Style::default().fg(theme::results::SELECTED_MARKER),
                )
            } else {
                Span::raw(INDENT)
            };
            lines.push(Line::from(vec![
                prefix,
                Span::styled(chunk, theme::results::PREVIEW),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled(
                format!("{}Path: {}  ", INDENT, card::display_path(result)),
                Style::default().fg(theme::results::PATH),
            ),
            Span::styled(
                format!(" {} ", card::score_badge(result.score)),
                theme::results::BADGE,
            ),
        ]));

        let is_expanded = expanded.get(index).copied().unwrap_or(false);
        let toggle = if is_expanded {
            "Hide HTML ⌃"
        } else {
            "View HTML ⌄"
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", INDENT, toggle),
            Style::default().fg(theme::results::TOGGLE),
        )));

        let header_len = lines.len() - start;

        let html = if is_expanded {
            let html_start = lines.len();
            for chunk in html_lines(&result.html, html_width) {
                lines.push(Line::from(vec![
                    Span::styled(
                        HTML_GUTTER,
                        Style::default().fg(theme::results::HTML_GUTTER),
                    ),
                    Span::styled(chunk, Style::default().fg(theme::results::HTML)),
                ]));
            }
            Some((html_start, lines.len() - html_start))
        } else {
            None
        };

        lines.push(Line::default());

        layouts.push(CardLayout {
            start,
            header_len,
            html,
        });
    }

    RenderedCards { lines, layouts }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        " 1 result ".to_string()
    } else {
        format!(" {} results ", count)
    }
}

pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let focused = app.focus == Focus::Results;
    let border_color = if focused {
        theme::results::BORDER_FOCUSED
    } else {
        theme::results::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Search Results ")
        .title_top(Line::from(count_label(app.view.results.len())).alignment(Alignment::Right))
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    app.results.clamp_selection(app.view.results.len());
    let cards = build_cards(
        &app.view.results,
        &app.view.expanded,
        Some(app.results.selected),
        inner.width as usize,
    );

    let pending = app.results.take_pending();
    let selected_layout = cards.layouts.get(app.results.selected).copied();
    let scroll = &mut app.results.scroll;
    scroll.update_bounds(cards.lines.len(), inner.height);

    match pending {
        Some(ScrollTarget::Selection) => {
            if let Some(layout) = selected_layout {
                scroll.ensure_visible(layout.start, layout.header_len);
            }
        }
        Some(ScrollTarget::Html(index)) => {
            if let Some((start, len)) = cards.layouts.get(index).and_then(|layout| layout.html) {
                scroll.center_on(start, len);
            }
        }
        None => {}
    }

    let paragraph = Paragraph::new(cards.lines).scroll((scroll.offset, 0));
    frame.render_widget(paragraph, inner);

    area
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
