//! Error types surfaced by configuration, selection handling, and the model
//! client.

use thiserror::Error;

/// Errors surfaced while resolving input or talking to the model API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NomenError {
    /// No API key was found in any configuration source.
    #[error("API key not configured. Check your settings.")]
    MissingApiKey,

    /// Configuration could not be loaded or holds an unusable value.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The requested selection does not fit the document.
    #[error("invalid selection: {message}")]
    InvalidSelection {
        /// Why the selection was rejected.
        message: String,
    },

    /// Networking failed while calling the model API.
    #[error("network error talking to the model API: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The model API returned an unusable response.
    #[error("model API error: {message}")]
    Api {
        /// Status or decoding detail returned with the failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl NomenError {
    /// Wraps an [`std::io::Error`] with a short description of the operation.
    #[must_use]
    pub fn io(context: &str, error: &std::io::Error) -> Self {
        Self::Io {
            message: format!("{context}: {error}"),
        }
    }
}
