//! Results pane: the card list, its selection and its scroll position

mod results_state;
pub mod results_events;
pub mod results_render;

pub use results_state::{ResultsState, ScrollTarget};
