//! Search view state
//!
//! The view owns the two inputs, the current result list, the loading flag
//! and the inline error. Changes happen only through [`ViewState::reduce`].

pub mod card;
mod view_state;

pub use view_state::{ViewEvent, ViewState};
