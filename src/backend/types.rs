//! Wire types for the search endpoint
//!
//! Decoding is lenient: a 2xx body is never rejected, and a result with an
//! odd field type still renders.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::uri::encode_uri;

/// One matched snippet returned by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "lenient_text")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_path")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub html: String,
}

/// Strings as-is, null as empty, any other value as its JSON text
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_path<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

/// Numbers, or strings holding a number (`"92"`)
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    })
}

/// Body of a 2xx response from `/search`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    pub results: Option<Vec<SearchResult>>,
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results: Some(results),
            error: None,
        }
    }

    pub fn with_error(message: &str) -> Self {
        Self {
            results: Some(Vec::new()),
            error: Some(message.to_string()),
        }
    }

    /// Decode a 2xx body.
    ///
    /// Anything that is not a JSON object is an empty response. `error` counts
    /// only as a non-empty string, and result entries that are not objects
    /// are skipped.
    pub fn from_body(body: &str) -> Self {
        let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) else {
            log::debug!("2xx body is not a JSON object, treating as empty");
            return Self::default();
        };

        let error = fields
            .get("error")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_string);

        let results = fields.get("results").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(|item| match SearchResult::deserialize(item) {
                    Ok(result) => Some(result),
                    Err(e) => {
                        log::debug!("Skipping result entry: {}", e);
                        None
                    }
                })
                .collect()
        });

        Self { results, error }
    }

    /// Server-reported error, if any. An empty string counts as no error.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    /// Consume the response, yielding its results or an empty list when absent
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results.unwrap_or_default()
    }
}

/// Query parameters for one search, already normalized for the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub url: String,
    pub query: String,
}

impl SearchParams {
    /// Build parameters from raw field contents.
    ///
    /// Returns `None` when either field is empty. Whitespace-only input is
    /// accepted here and trimmed, matching what the backend receives.
    pub fn from_inputs(url: &str, query: &str) -> Option<Self> {
        if url.is_empty() || query.is_empty() {
            return None;
        }

        Some(Self {
            url: encode_uri(url.trim()),
            query: query.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_optional_fields_absent() {
        let result: SearchResult =
            serde_json::from_value(json!({"content": "hello", "html": "<p>hello</p>"})).unwrap();

        assert_eq!(result.content, "hello");
        assert_eq!(result.path, None);
        assert_eq!(result.score, None);
        assert_eq!(result.html, "<p>hello</p>");
    }

    #[test]
    fn test_result_fractional_score() {
        let result: SearchResult = serde_json::from_value(json!({
            "content": "c", "html": "", "path": "div#main", "score": 87.25
        }))
        .unwrap();

        assert_eq!(result.path.as_deref(), Some("div#main"));
        assert_eq!(result.score, Some(87.25));
    }

    #[test]
    fn test_result_numeric_string_score() {
        let result: SearchResult =
            serde_json::from_value(json!({"content": "c", "html": "", "score": "92"})).unwrap();
        assert_eq!(result.score, Some(92.0));
    }

    #[test]
    fn test_result_odd_field_types() {
        let result: SearchResult = serde_json::from_value(json!({
            "content": 42, "html": null, "path": null, "score": "high"
        }))
        .unwrap();

        assert_eq!(result.content, "42");
        assert_eq!(result.html, "");
        assert_eq!(result.path, None);
        assert_eq!(result.score, None);
    }

    #[test]
    fn test_response_missing_results_is_empty() {
        let response = SearchResponse::from_body("{}");
        assert!(response.error_message().is_none());
        assert!(response.into_results().is_empty());
    }

    #[test]
    fn test_response_null_results_is_empty() {
        let response = SearchResponse::from_body(r#"{"results": null}"#);
        assert!(response.into_results().is_empty());
    }

    #[test]
    fn test_response_non_object_body_is_empty() {
        for body in ["OK", "", "[1, 2]", "null", "\"text\"", "<html>oops</html>"] {
            assert_eq!(SearchResponse::from_body(body), SearchResponse::default(), "{}", body);
        }
    }

    #[test]
    fn test_response_error_field() {
        let response = SearchResponse::from_body(
            r#"{"results": [], "error": "URL must start with http:// or https://"}"#,
        );

        assert_eq!(
            response.error_message(),
            Some("URL must start with http:// or https://")
        );
    }

    #[test]
    fn test_response_empty_error_is_ignored() {
        let response = SearchResponse::from_body(r#"{"results": [], "error": ""}"#);
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn test_response_non_string_error_is_ignored() {
        let response = SearchResponse::from_body(r#"{"results": [], "error": {"code": 1}}"#);
        assert_eq!(response.error_message(), None);
    }

    #[test]
    fn test_response_keeps_results_around_bad_entry() {
        let response = SearchResponse::from_body(
            r#"{"results": [{"content": "a", "score": "92"}, 7, {"content": "b", "score": 80}]}"#,
        );

        let results = response.into_results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].content, "a");
        assert_eq!(results[0].score, Some(92.0));
        assert_eq!(results[1].content, "b");
    }

    #[test]
    fn test_params_require_both_fields() {
        assert_eq!(SearchParams::from_inputs("", "cats"), None);
        assert_eq!(SearchParams::from_inputs("https://example.com", ""), None);
        assert_eq!(SearchParams::from_inputs("", ""), None);
    }

    #[test]
    fn test_params_trim_and_encode() {
        let params = SearchParams::from_inputs("  https://example.com/a b ", " cats ").unwrap();
        assert_eq!(params.url, "https://example.com/a%20b");
        assert_eq!(params.query, "cats");
    }

    #[test]
    fn test_params_accept_whitespace_only_query() {
        let params = SearchParams::from_inputs("https://example.com", "   ").unwrap();
        assert_eq!(params.query, "");
    }
}
