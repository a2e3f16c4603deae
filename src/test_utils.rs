//! Shared test utilities for sitesearch

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::backend::{SearchResponse, SearchResult};
    use crate::view::ViewEvent;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// App with empty fields and no worker attached
    pub fn test_app() -> App {
        App::new("", "")
    }

    /// Deterministic result `i`: content `result i`, html `<div>result i</div>`
    pub fn sample_result(i: usize) -> SearchResult {
        SearchResult {
            content: format!("result {}", i),
            path: Some(format!("/p{}", i)),
            score: Some(90.0 - i as f64),
            html: format!("<div>result {}</div>", i),
        }
    }

    /// App that just completed a search returning `count` results
    pub fn app_with_results(count: usize) -> App {
        let mut app = App::new("https://example.com", "cats");
        app.dispatch(ViewEvent::SearchStarted);
        app.dispatch(ViewEvent::SearchSucceeded(SearchResponse::with_results(
            (0..count).map(sample_result).collect(),
        )));
        app
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
