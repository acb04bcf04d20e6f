//! Model-backed services.
//!
//! The only service asks a hosted Gemini model to recommend a name for the
//! selected function and explain the choice.

pub mod name_suggestion;

pub use name_suggestion::{
    GeminiConfig, GeminiNameSuggestionService, NameSuggestionRequest, NameSuggestionService,
    suggest_name_comment,
};
