//! Comment-block formatting for generated explanations.
//!
//! The formatter turns a model explanation into the text inserted directly
//! above the user's selection. The inserted block copies the selection's
//! leading whitespace so it lines up with the annotated code, and always
//! occupies whole lines so it never merges with the first character of the
//! selection.
//!
//! Everything here is a pure function of its string inputs.

use serde::Serialize;

/// Comment marker used when no other marker is configured.
///
/// Only one comment style is supported; callers working with other
/// languages can override it through [`CommentStyle`].
pub const DEFAULT_COMMENT_MARKER: &str = "# ";

/// Label written on the header line above the generated explanation.
pub const DEFAULT_HEADER_LABEL: &str = "Recommended name: (generated)";

/// Marker and header label applied to an inserted comment block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStyle {
    marker: String,
    header_label: String,
}

impl Default for CommentStyle {
    fn default() -> Self {
        Self::new(DEFAULT_COMMENT_MARKER, DEFAULT_HEADER_LABEL)
    }
}

impl CommentStyle {
    /// Creates a style from an explicit marker and header label.
    #[must_use]
    pub fn new(marker: impl Into<String>, header_label: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            header_label: header_label.into(),
        }
    }

    /// Comment marker prefixed to every inserted line.
    #[must_use]
    pub const fn marker(&self) -> &str {
        self.marker.as_str()
    }

    /// Label written on the header line.
    #[must_use]
    pub const fn header_label(&self) -> &str {
        self.header_label.as_str()
    }

    /// Builds the header and body to insert before `selected_text`.
    ///
    /// Only the leading whitespace of `selected_text` is inspected.
    #[must_use]
    pub fn build_insertion(&self, selected_text: &str, explanation: &str) -> CommentInsertion {
        let indentation = compute_indentation(selected_text);

        CommentInsertion {
            header: format_header(indentation, self.marker(), self.header_label()),
            body: format_comment_body(explanation, indentation, self.marker()),
        }
    }
}

/// Text to insert at the start of a selection, in insertion order.
///
/// Callers must insert `header` immediately followed by `body` at the
/// selection start and leave the selection itself untouched. Neither string
/// may have its trailing newline stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentInsertion {
    /// Fixed descriptive line announcing the generated comment.
    pub header: String,
    /// Generated explanation rendered as comment lines.
    pub body: String,
}

impl CommentInsertion {
    /// Header and body concatenated in insertion order.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.header.len() + self.body.len());
        text.push_str(&self.header);
        text.push_str(&self.body);
        text
    }
}

/// Returns the leading whitespace of `selected_text`.
///
/// The result is whatever a left trim removes, so it is empty when the text
/// starts with a non-whitespace character. Whitespace follows the Unicode
/// `White_Space` property: `U+0085` counts as indentation, a byte order mark
/// does not.
#[must_use]
pub fn compute_indentation(selected_text: &str) -> &str {
    let indent_len = selected_text.len() - selected_text.trim_start().len();
    selected_text.get(..indent_len).unwrap_or_default()
}

/// Renders `explanation` as comment lines prefixed with
/// `indentation + comment_marker`.
///
/// Every line is prefixed, including an empty trailing line, and the result
/// always ends with a newline. An empty explanation yields one empty comment
/// line.
#[must_use]
pub fn format_comment_body(explanation: &str, indentation: &str, comment_marker: &str) -> String {
    let mut body = explanation
        .split('\n')
        .map(|line| format!("{indentation}{comment_marker}{line}"))
        .collect::<Vec<_>>()
        .join("\n");

    if !body.ends_with('\n') {
        body.push('\n');
    }

    body
}

/// Renders the single newline-terminated header line.
#[must_use]
pub fn format_header(indentation: &str, comment_marker: &str, label_text: &str) -> String {
    format!("{indentation}{comment_marker}{label_text}\n")
}

/// Builds the insertion for `selected_text` with the default marker and
/// header label.
#[must_use]
pub fn build_insertion(selected_text: &str, explanation: &str) -> CommentInsertion {
    CommentStyle::default().build_insertion(selected_text, explanation)
}

#[cfg(test)]
mod tests;
