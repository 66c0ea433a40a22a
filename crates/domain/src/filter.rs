use serde::{Deserialize, Serialize};
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Minimum filter length, counted in user-perceived characters.
pub const MIN_FILTER_GRAPHEMES: usize = 2;

/// A blocked word. Any navigation to a URL containing `text` as a plain
/// substring (case-sensitive, unanchored) is denied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    pub id: Option<i64>,
    pub text: Arc<str>,
    pub created_at: Option<String>,
}

impl Filter {
    pub fn validate_text(text: &str) -> Result<(), String> {
        if text.graphemes(true).count() < MIN_FILTER_GRAPHEMES {
            return Err(format!(
                "Filter word must contain at least {} characters",
                MIN_FILTER_GRAPHEMES
            ));
        }
        if text.chars().any(char::is_whitespace) {
            return Err("Filter word cannot contain whitespace".to_string());
        }
        Ok(())
    }
}

/// Total predicate over arbitrary input: at least two user-perceived
/// characters and no whitespace of any kind.
pub fn is_valid_filter_word(candidate: &str) -> bool {
    Filter::validate_text(candidate).is_ok()
}

/// Whether the string already carries an explicit `http://` or `https://`
/// scheme. Case-sensitive; other schemes do not count.
pub fn has_url_scheme(candidate: &str) -> bool {
    candidate.starts_with("http://") || candidate.starts_with("https://")
}

/// Address-bar normalization: bare hostnames get `https://` prepended so a
/// request can be built from them. Not part of the match decision.
pub fn ensure_url_scheme(input: &str) -> String {
    if has_url_scheme(input) {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}
