use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::backend::{RequestError, SearchOutcome, SearchParams};
use crate::input::{Field, InputState};
use crate::notification::NotificationState;
use crate::results::ResultsState;
use crate::view::{ViewEvent, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    UrlField,
    QueryField,
    SearchButton,
    Results,
}

impl Focus {
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::UrlField => Some(Field::Url),
            Focus::QueryField => Some(Field::Query),
            Focus::SearchButton | Focus::Results => None,
        }
    }
}

/// Channels to the search worker thread
struct SearchChannels {
    request_tx: Sender<SearchParams>,
    response_rx: Receiver<SearchOutcome>,
}

pub struct App {
    pub view: ViewState,
    pub input: InputState,
    pub results: ResultsState,
    pub focus: Focus,
    pub notification: NotificationState,
    pub should_quit: bool,
    channels: Option<SearchChannels>,
}

impl App {
    /// Create the app with both fields pre-filled (either may be empty)
    pub fn new(url: &str, query: &str) -> Self {
        Self {
            view: ViewState::with_inputs(url, query),
            input: InputState::with_text(url, query),
            results: ResultsState::new(),
            focus: Focus::UrlField,
            notification: NotificationState::new(),
            should_quit: false,
            channels: None,
        }
    }

    pub fn set_channels(
        &mut self,
        request_tx: Sender<SearchParams>,
        response_rx: Receiver<SearchOutcome>,
    ) {
        self.channels = Some(SearchChannels {
            request_tx,
            response_rx,
        });
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Apply one event to the view state
    pub fn dispatch(&mut self, event: ViewEvent) {
        let replaces_results = matches!(
            event,
            ViewEvent::UrlChanged(_)
                | ViewEvent::QueryChanged(_)
                | ViewEvent::SearchStarted
                | ViewEvent::SearchSucceeded(_)
        );

        self.view = std::mem::take(&mut self.view).reduce(event);

        if replaces_results {
            self.results.reset();
        }
        if self.focus == Focus::Results && self.view.results.is_empty() {
            self.focus = Focus::SearchButton;
        }
    }

    /// Search trigger: validate, then hand the request to the worker.
    ///
    /// Disabled while a search is in flight.
    pub fn trigger_search(&mut self) {
        if !self.view.can_search() {
            return;
        }

        let Some(params) = self.view.search_params() else {
            self.dispatch(ViewEvent::ValidationFailed);
            return;
        };

        log::debug!("Starting search for {:?}", params);
        self.dispatch(ViewEvent::SearchStarted);

        let sent = self
            .channels
            .as_ref()
            .is_some_and(|channels| channels.request_tx.send(params).is_ok());

        if !sent {
            self.channels = None;
            self.dispatch(ViewEvent::SearchFailed(RequestError::Transport(
                "search worker is not running".to_string(),
            )));
        }
    }

    /// Drain finished searches from the worker. Returns true if state changed.
    pub fn poll_search_response(&mut self) -> bool {
        let Some(channels) = &self.channels else {
            return false;
        };

        let mut outcomes = Vec::new();
        let mut disconnected = false;
        loop {
            match channels.response_rx.try_recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        let had_outcomes = !outcomes.is_empty();
        for outcome in outcomes {
            match outcome {
                Ok(response) => self.dispatch(ViewEvent::SearchSucceeded(response)),
                Err(err) => self.dispatch(ViewEvent::SearchFailed(err)),
            }
        }

        if disconnected {
            log::error!("Search worker disconnected");
            self.channels = None;
            if self.view.loading {
                self.dispatch(ViewEvent::SearchFailed(RequestError::Transport(
                    "search worker disconnected unexpectedly".to_string(),
                )));
            }
        }

        had_outcomes || disconnected
    }

    /// Flip the HTML panel of one result and scroll to it when it opens
    pub fn toggle_html(&mut self, index: usize) {
        self.dispatch(ViewEvent::HtmlToggled(index));
        if self.view.is_expanded(index) {
            self.results.reveal_html(index);
        } else {
            self.results.follow_selection();
        }
    }

    fn focus_order(&self) -> &'static [Focus] {
        if self.view.results.is_empty() {
            &[Focus::UrlField, Focus::QueryField, Focus::SearchButton]
        } else {
            &[
                Focus::UrlField,
                Focus::QueryField,
                Focus::SearchButton,
                Focus::Results,
            ]
        }
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + 1) % order.len()];
    }

    pub fn focus_previous(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + order.len() - 1) % order.len()];
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
