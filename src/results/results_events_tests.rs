//! Tests for results_events

use super::*;
use crate::app::Focus;
use crate::results::ScrollTarget;
use crate::test_utils::test_helpers::{app_with_results, key};

#[test]
fn test_down_and_up_move_selection() {
    let mut app = app_with_results(3);
    app.focus = Focus::Results;

    assert!(handle_results_pane_key(&mut app, key(KeyCode::Down)));
    assert!(handle_results_pane_key(&mut app, key(KeyCode::Char('j'))));
    assert_eq!(app.results.selected, 2);

    assert!(handle_results_pane_key(&mut app, key(KeyCode::Up)));
    assert_eq!(app.results.selected, 1);
}

#[test]
fn test_end_and_home() {
    let mut app = app_with_results(4);
    app.results.scroll.update_bounds(16, 6);

    handle_results_pane_key(&mut app, key(KeyCode::End));
    assert_eq!(app.results.selected, 3);
    assert_eq!(app.results.scroll.offset, 10);

    handle_results_pane_key(&mut app, key(KeyCode::Home));
    assert_eq!(app.results.selected, 0);
    assert_eq!(app.results.scroll.offset, 0);
}

#[test]
fn test_enter_toggles_selected_html() {
    let mut app = app_with_results(3);
    handle_results_pane_key(&mut app, key(KeyCode::Down));

    assert!(handle_results_pane_key(&mut app, key(KeyCode::Enter)));
    assert_eq!(app.view.expanded, vec![false, true, false]);
    assert_eq!(app.results.take_pending(), Some(ScrollTarget::Html(1)));

    handle_results_pane_key(&mut app, key(KeyCode::Char(' ')));
    assert_eq!(app.view.expanded, vec![false, false, false]);
    assert_eq!(app.results.take_pending(), Some(ScrollTarget::Selection));
}

#[test]
fn test_unhandled_key() {
    let mut app = app_with_results(1);
    assert!(!handle_results_pane_key(&mut app, key(KeyCode::Char('x'))));
}
