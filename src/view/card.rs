//! Display formatting for a single result card

use crate::backend::SearchResult;

/// Characters of `content` shown before the preview is cut
pub const PREVIEW_CHARS: usize = 120;

const ELLIPSIS: &str = "...";
const DEFAULT_PATH: &str = "/";
const NO_SCORE: &str = "—";

/// First [`PREVIEW_CHARS`] characters of the content, with `...` when cut
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

/// The result's path, or `/` when the backend sent none
pub fn display_path(result: &SearchResult) -> &str {
    result
        .path
        .as_deref()
        .filter(|path| !path.is_empty())
        .unwrap_or(DEFAULT_PATH)
}

/// Badge text such as `92% match`, or a dash for a missing or zero score
pub fn score_badge(score: Option<f64>) -> String {
    match score {
        Some(score) if score != 0.0 && !score.is_nan() => format!("{}% match", score),
        _ => NO_SCORE.to_string(),
    }
}
