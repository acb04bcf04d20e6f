//! Service abstraction and the suggestion-to-comment pipeline.

use crate::comment::{CommentInsertion, CommentStyle};
use crate::error::NomenError;

use super::model::NameSuggestionRequest;

/// Model client contract used by the CLI and tests.
pub trait NameSuggestionService: Send + Sync + std::fmt::Debug {
    /// Returns the model's explanation for the request.
    ///
    /// An empty string is a valid answer and is rendered as an empty comment
    /// line.
    ///
    /// # Errors
    ///
    /// Returns [`NomenError`] when the provider call fails.
    fn suggest(&self, request: &NameSuggestionRequest) -> Result<String, NomenError>;
}

/// Requests a name suggestion for `selected_text` and renders it as the
/// comment block to insert above the selection.
///
/// # Errors
///
/// Propagates the service error unchanged; the response text itself is
/// never rejected.
pub fn suggest_name_comment(
    service: &dyn NameSuggestionService,
    selected_text: &str,
    style: &CommentStyle,
) -> Result<CommentInsertion, NomenError> {
    tracing::info!("generating function name");

    let request = NameSuggestionRequest::new(selected_text);
    let explanation = service.suggest(&request)?;
    if explanation.is_empty() {
        tracing::debug!("model returned no text; inserting an empty comment line");
    }

    Ok(style.build_insertion(selected_text, &explanation))
}
