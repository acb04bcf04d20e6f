//! Function-name suggestions generated by a hosted model and rendered as
//! comment blocks.

mod gemini;
mod model;
mod service;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiConfig,
    GeminiNameSuggestionService,
};
pub use model::{DEFAULT_PROMPT, NameSuggestionRequest};
pub use service::{NameSuggestionService, suggest_name_comment};
