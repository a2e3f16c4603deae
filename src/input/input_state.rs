use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::theme;

/// The two editable fields of the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Url,
    Query,
}

impl Field {
    pub fn title(self) -> &'static str {
        match self {
            Field::Url => " Website URL ",
            Field::Query => " Search Query ",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Url => "Enter Website URL (https://example.com)",
            Field::Query => "Enter Search Query",
        }
    }
}

/// Editing buffers for the URL and query fields
///
/// The text here is the editor's copy; every change is reported back to
/// the caller so the view state stays the source of truth for searches.
pub struct InputState {
    url: TextArea<'static>,
    query: TextArea<'static>,
}

fn create_field_textarea(field: Field, text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![single_line(text)]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(field.placeholder());
    textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));
    textarea.set_style(Style::default().fg(theme::input::TEXT));
    textarea.move_cursor(CursorMove::End);
    textarea
}

/// Collapse line breaks so each field stays a single line
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}

impl InputState {
    pub fn with_text(url: &str, query: &str) -> Self {
        Self {
            url: create_field_textarea(Field::Url, url),
            query: create_field_textarea(Field::Query, query),
        }
    }

    pub fn text(&self, field: Field) -> &str {
        self.textarea(field).lines()[0].as_ref()
    }

    pub fn textarea(&self, field: Field) -> &TextArea<'static> {
        match field {
            Field::Url => &self.url,
            Field::Query => &self.query,
        }
    }

    pub fn textarea_mut(&mut self, field: Field) -> &mut TextArea<'static> {
        match field {
            Field::Url => &mut self.url,
            Field::Query => &mut self.query,
        }
    }

    /// Forward a key to the field's editor. Returns the new text if it changed.
    pub fn handle_key(&mut self, field: Field, key: KeyEvent) -> Option<String> {
        let before = self.text(field).to_string();
        if !self.textarea_mut(field).input(key) {
            return None;
        }
        let after = self.flatten(field);
        (after != before).then_some(after)
    }

    /// Insert pasted text at the cursor. Returns the new text if it changed.
    pub fn insert_str(&mut self, field: Field, text: &str) -> Option<String> {
        let text = single_line(text);
        if text.is_empty() {
            return None;
        }
        self.textarea_mut(field).insert_str(&text);
        Some(self.flatten(field))
    }

    // Some key bindings (Ctrl+M, Ctrl+J) insert a line break; fold it back
    fn flatten(&mut self, field: Field) -> String {
        let textarea = self.textarea(field);
        if textarea.lines().len() == 1 {
            return self.text(field).to_string();
        }

        let joined = textarea.lines().concat();
        *self.textarea_mut(field) = create_field_textarea(field, &joined);
        joined
    }
}
