//! Nomen library crate: ask a hosted model to name the selected function and
//! insert its explanation as a comment above the selection.
//!
//! The library reads the selection from an editor-facing source, calls the
//! Gemini `generateContent` API, and renders the answer as a comment block
//! that copies the selection's indentation.

pub mod ai;
pub mod comment;
pub mod config;
pub mod editor;
pub mod error;

pub use comment::{CommentInsertion, CommentStyle, build_insertion};
pub use config::{NomenConfig, OutputFormat};
pub use error::NomenError;
