use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Keys while the results pane has focus. Returns true if the key was used.
pub fn handle_results_pane_key(app: &mut App, key: KeyEvent) -> bool {
    let count = app.view.results.len();

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.results.select_next(count),
        KeyCode::Up | KeyCode::Char('k') => app.results.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => {
            app.results.select_first();
            app.results.scroll.jump_to_top();
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.results.select_last(count);
            app.results.scroll.jump_to_bottom();
        }
        KeyCode::PageDown => app.results.scroll.page_down(),
        KeyCode::PageUp => app.results.scroll.page_up(),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('h') => {
            let index = app.results.selected;
            app.toggle_html(index);
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
#[path = "results_events_tests.rs"]
mod results_events_tests;
