use std::time::{Duration, Instant};

/// How long a warning stays on screen
const DISPLAY_DURATION: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    shown_at: Instant,
    duration: Duration,
}

impl Notification {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            shown_at: Instant::now(),
            duration: DISPLAY_DURATION,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > self.duration
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing with `message`
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message));
    }

    /// Drop the notification once its time is up; returns true if one was dropped
    pub fn clear_if_expired(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }

    #[cfg(test)]
    pub(crate) fn expire_now(&mut self) {
        if let Some(notification) = self.current.as_mut() {
            notification.duration = Duration::ZERO;
            notification.shown_at = Instant::now() - Duration::from_millis(1);
        }
    }
}
