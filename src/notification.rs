//! Transient notification overlay
//!
//! Shows short messages (for example a config warning) in the top-right
//! corner for a fixed time.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::NotificationState;
