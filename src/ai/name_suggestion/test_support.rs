//! Test-support utilities for name-suggestion flows.

use std::sync::{Mutex, PoisonError};

use crate::error::NomenError;

use super::{NameSuggestionRequest, NameSuggestionService};

/// Deterministic suggestion-service stub used by unit and behavioural tests.
#[derive(Debug)]
pub struct StubNameSuggestionService {
    response: Result<String, NomenError>,
    requests: Mutex<Vec<String>>,
}

impl StubNameSuggestionService {
    /// Creates a stub that always returns the provided explanation.
    #[must_use]
    pub fn success(explanation: impl Into<String>) -> Self {
        Self {
            response: Ok(explanation.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Creates a stub that always returns the provided error.
    #[must_use]
    pub const fn failure(error: NomenError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Selected code of every request received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl NameSuggestionService for StubNameSuggestionService {
    fn suggest(&self, request: &NameSuggestionRequest) -> Result<String, NomenError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.selected_code().to_owned());
        self.response.clone()
    }
}
