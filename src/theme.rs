//! Centralized colors for all UI components.
//!
//! Render files use `theme::module::CONSTANT`; no `Color::*` literals elsewhere.

use ratatui::style::{Color, Modifier, Style};

/// Base colors shared across components
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);

    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const BLUE: Color = Color::Rgb(97, 145, 255);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
}

pub mod title {
    use super::*;

    pub const TEXT: Style = Style::new().fg(palette::PURPLE).add_modifier(Modifier::BOLD);
}

/// URL and query fields
pub mod input {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const TEXT: Color = palette::TEXT;
    pub const PLACEHOLDER: Color = palette::TEXT_MUTED;
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Search button
pub mod button {
    use super::*;

    pub const FG: Color = palette::TEXT;
    pub const BG: Color = palette::BLUE;
    pub const FOCUSED: Style = Style::new()
        .fg(palette::TEXT)
        .bg(palette::BLUE)
        .add_modifier(Modifier::BOLD.union(Modifier::UNDERLINED));
    pub const LOADING: Style = Style::new().fg(palette::TEXT_MUTED).bg(palette::BG_SURFACE);
}

/// Inline error line
pub mod error {
    use super::*;

    pub const TEXT: Style = Style::new().fg(palette::ERROR).add_modifier(Modifier::BOLD);
}

/// Result cards
pub mod results {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const PREVIEW: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const PATH: Color = palette::TEXT_MUTED;
    pub const BADGE: Style = Style::new().fg(palette::SUCCESS).bg(palette::BG_SURFACE);
    pub const TOGGLE: Color = palette::BLUE;
    pub const HTML: Color = palette::TEXT_MUTED;
    pub const HTML_GUTTER: Color = palette::TEXT_DIM;
    pub const SELECTED_MARKER: Color = palette::CYAN;
}

/// Bottom key hint line
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Notification overlay
pub mod notification {
    use super::*;

    pub const FG: Color = Color::Black;
    pub const BG: Color = palette::WARNING;
    pub const BORDER: Color = palette::WARNING;
}
