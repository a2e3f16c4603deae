use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use crate::input::Field;
use crate::results;
use crate::view::ViewEvent;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_search_response();

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_paste_event(&mut self, text: &str) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if let Some(changed) = self.input.insert_str(field, text) {
            self.dispatch(field_changed(field, changed));
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::UrlField => self.handle_field_key(Field::Url, key),
            Focus::QueryField => self.handle_field_key(Field::Query, key),
            Focus::SearchButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.trigger_search();
                }
            }
            Focus::Results => {
                results::results_events::handle_results_pane_key(self, key);
            }
        }
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            _ => return false,
        }
        true
    }

    fn handle_field_key(&mut self, field: Field, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.trigger_search();
            return;
        }

        if let Some(changed) = self.input.handle_key(field, key) {
            self.dispatch(field_changed(field, changed));
        }
    }
}

fn field_changed(field: Field, text: String) -> ViewEvent {
    match field {
        Field::Url => ViewEvent::UrlChanged(text),
        Field::Query => ViewEvent::QueryChanged(text),
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
