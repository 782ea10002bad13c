//! Plain-text note preview for list rows.

use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

// Delimiters produced by the formatting toolbar.
static FORMAT_DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\*\*|__|==|\*|•|(?m:^\s*\d+\.\s))").expect("valid delimiter regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Returns the first 100 characters of `content` with formatting delimiters
/// stripped and whitespace collapsed, or `None` for blank notes.
pub fn note_preview(content: &str) -> Option<String> {
    let without_delimiters = FORMAT_DELIMITER_RE.replace_all(content, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_delimiters, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::note_preview;

    #[test]
    fn strips_toolbar_delimiters() {
        let preview = note_preview("**GDP** grew\n\n• ==7%==\n1. check *RBI*").unwrap();
        assert_eq!(preview, "GDP grew 7% check RBI");
    }

    #[test]
    fn blank_note_has_no_preview() {
        assert_eq!(note_preview("  \n ** ** "), None);
    }

    #[test]
    fn preview_is_capped() {
        let long = "x".repeat(250);
        assert_eq!(note_preview(&long).unwrap().chars().count(), 100);
    }
}
