//! Request model for name-suggestion calls.

/// Instruction sent ahead of the selected code.
pub const DEFAULT_PROMPT: &str = "Recommend a name for this function. Explain your
reasoning in 3 sentences or less:";

/// Input payload for a name-suggestion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSuggestionRequest {
    selected_code: String,
}

impl NameSuggestionRequest {
    /// Constructs a request for the given selection.
    #[must_use]
    pub fn new(selected_code: impl Into<String>) -> Self {
        Self {
            selected_code: selected_code.into(),
        }
    }

    /// Code the user selected, unmodified.
    #[must_use]
    pub const fn selected_code(&self) -> &str {
        self.selected_code.as_str()
    }

    /// Full prompt: the instruction followed by the code wrapped in quote
    /// lines.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{DEFAULT_PROMPT}\n\"\n{}\n\"\n", self.selected_code)
    }
}
