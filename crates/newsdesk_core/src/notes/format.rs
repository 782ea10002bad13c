//! Markdown-like formatting of the selected span.

use crate::notes::history::Selection;

/// Formatting action offered by the editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Bold,
    Italic,
    Underline,
    Bullet,
    Numbered,
    Highlight,
}

impl Format {
    /// `(prefix, suffix)` wrapped around the selection.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Bold => ("**", "**"),
            Self::Italic => ("*", "*"),
            Self::Underline => ("__", "__"),
            Self::Bullet => ("• ", ""),
            Self::Numbered => ("1. ", ""),
            Self::Highlight => ("==", "=="),
        }
    }
}

/// Wraps the selected span of `content` and splices it back in place.
///
/// Offsets are character offsets. Returns the new content and a caret just
/// past the inserted span.
pub fn apply_format(content: &str, selection: Selection, format: Format) -> (String, Selection) {
    let len = content.chars().count();
    let selection = selection.clamp_to(len);
    let start_byte = byte_offset(content, selection.start);
    let end_byte = byte_offset(content, selection.end);

    let (prefix, suffix) = format.delimiters();
    let selected = &content[start_byte..end_byte];
    let formatted = format!("{prefix}{selected}{suffix}");

    let mut result = String::with_capacity(content.len() + prefix.len() + suffix.len());
    result.push_str(&content[..start_byte]);
    result.push_str(&formatted);
    result.push_str(&content[end_byte..]);

    let caret = selection.start + formatted.chars().count();
    (result, Selection::caret(caret))
}

fn byte_offset(content: &str, char_offset: usize) -> usize {
    content
        .char_indices()
        .nth(char_offset)
        .map_or(content.len(), |(index, _)| index)
}
