//! sitesearch library - terminal client for a website content search backend
//!
//! The binary is a thin wrapper; everything it drives lives here so it can be tested.

pub mod app;
pub mod backend;
pub mod config;
pub mod error;
pub mod input;
pub mod notification;
pub mod results;
pub mod scroll;
pub mod theme;
pub mod view;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, Focus};
pub use config::Config;
pub use error::SiteSearchError;
