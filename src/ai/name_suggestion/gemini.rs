//! Gemini `generateContent` implementation of [`NameSuggestionService`].

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::error::NomenError;

use super::model::NameSuggestionRequest;
use super::service::NameSuggestionService;

/// Default API root for the Generative Language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "models/gemini-1.0-pro-latest";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configuration for [`GeminiNameSuggestionService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// Base API URL (e.g., `https://generativelanguage.googleapis.com/v1beta`).
    pub base_url: String,
    /// Model identifier, with or without the `models/` prefix.
    pub model: String,
    /// API key sent in the `x-goog-api-key` header.
    pub api_key: String,
    /// HTTP timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Constructs configuration with the given key and default endpoint,
    /// model and timeout.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Overrides the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Overrides the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full `generateContent` endpoint for the configured model.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model_resource_name(&self.model)
        )
    }
}

/// Gemini-backed suggestion service.
#[derive(Debug, Clone)]
pub struct GeminiNameSuggestionService {
    config: GeminiConfig,
}

impl GeminiNameSuggestionService {
    /// Creates a service from explicit configuration.
    #[must_use]
    pub const fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    fn create_http_client(&self) -> Result<Client, NomenError> {
        Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|error| NomenError::Configuration {
                message: format!("failed to configure model HTTP client: {error}"),
            })
    }
}

impl NameSuggestionService for GeminiNameSuggestionService {
    fn suggest(&self, request: &NameSuggestionRequest) -> Result<String, NomenError> {
        let endpoint = self.config.endpoint();
        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart {
                    text: request.prompt(),
                }],
            }],
        };
        tracing::debug!(%endpoint, "requesting name suggestion");

        let response = self
            .create_http_client()?
            .post(endpoint)
            .header(API_KEY_HEADER, self.config.api_key.as_str())
            .json(&payload)
            .send()
            .map_err(|error| NomenError::Network {
                message: format!("model request transport failed: {error}"),
            })?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| truncate_for_message(content.as_str(), 160),
            );
            return Err(NomenError::Api {
                message: format!(
                    "model request failed with status {}: {body}",
                    status.as_u16()
                ),
            });
        }

        let response_payload: GenerateContentResponse =
            response.json().map_err(|error| NomenError::Api {
                message: format!("model response JSON decoding failed: {error}"),
            })?;

        response_text(&response_payload)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Prefixes bare model ids with `models/`, leaving resource names alone.
fn model_resource_name(model: &str) -> String {
    if model.contains('/') {
        model.to_owned()
    } else {
        format!("models/{model}")
    }
}

/// Concatenates the text parts of the first candidate.
///
/// A response without candidates yields an empty explanation unless the
/// prompt was blocked.
fn response_text(response: &GenerateContentResponse) -> Result<String, NomenError> {
    let Some(candidate) = response.candidates.first() else {
        let block_reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref());
        return block_reason.map_or_else(
            || {
                tracing::debug!("model response contained no candidates");
                Ok(String::new())
            },
            |reason| {
                Err(NomenError::Api {
                    message: format!("prompt was blocked: {reason}"),
                })
            },
        );
    };

    if response.candidates.len() > 1 {
        tracing::warn!(
            discarded = response.candidates.len() - 1,
            "ignoring additional model candidates"
        );
    }

    Ok(candidate
        .content
        .iter()
        .flat_map(|content| content.parts.iter())
        .filter_map(|part| part.text.as_deref())
        .collect())
}

fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut output: String = message.chars().take(max_chars).collect();
    if message.chars().nth(max_chars).is_some() {
        output.push_str("...");
    }
    output
}

#[cfg(test)]
#[path = "gemini_tests.rs"]
mod tests;
