//! Integration tests for the Gemini suggestion adapter against a mock server.

use std::error::Error;
use std::time::Duration;

use nomen::ai::{
    GeminiConfig, GeminiNameSuggestionService, NameSuggestionRequest, NameSuggestionService,
    suggest_name_comment,
};
use nomen::{CommentStyle, NomenError};
use rstest::{fixture, rstest};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

type TestResult<T = ()> = Result<T, Box<dyn Error>>;

const MODEL_PATH: &str = "/v1beta/models/gemini-1.0-pro-latest:generateContent";

/// Mock server plus the runtime that drives it.
///
/// The blocking client must not run inside the runtime, so tests only enter
/// it to start the server and mount mocks. The server is declared first so
/// it is dropped, and its expectations verified, before the runtime.
struct GeminiMock {
    server: MockServer,
    runtime: Runtime,
}

impl GeminiMock {
    fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    fn service(&self) -> GeminiNameSuggestionService {
        GeminiNameSuggestionService::new(
            GeminiConfig::new("test-key")
                .with_base_url(format!("{}/v1beta", self.server.uri()))
                .with_timeout(Duration::from_secs(5)),
        )
    }
}

#[fixture]
fn gemini_mock() -> GeminiMock {
    let runtime = Runtime::new()
        .unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}"));
    let server = runtime.block_on(MockServer::start());
    GeminiMock { server, runtime }
}

fn candidate_response(parts: &[&str]) -> serde_json::Value {
    let parts: Vec<_> = parts.iter().map(|text| json!({"text": text})).collect();
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": parts},
            "finishReason": "STOP"
        }]
    })
}

#[rstest]
fn suggest_sends_prompt_and_returns_candidate_text(gemini_mock: GeminiMock) -> TestResult {
    let request = NameSuggestionRequest::new("def f(x):\n    return x * x");
    gemini_mock.mount(
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user", "parts": [{"text": request.prompt()}]}]
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_response(&["Call it `square`.\n", "It squares x."])),
            )
            .expect(1),
    );

    let explanation = gemini_mock.service().suggest(&request)?;

    assert_eq!(explanation, "Call it `square`.\nIt squares x.");
    Ok(())
}

#[rstest]
fn suggestion_is_rendered_with_selection_indentation(gemini_mock: GeminiMock) -> TestResult {
    gemini_mock.mount(
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_response(&["Line one\nLine two"])),
            ),
    );

    let insertion = suggest_name_comment(
        &gemini_mock.service(),
        "    def f(x):",
        &CommentStyle::default(),
    )?;

    assert_eq!(insertion.header, "    # Recommended name: (generated)\n");
    assert_eq!(insertion.body, "    # Line one\n    # Line two\n");
    Ok(())
}

#[rstest]
fn response_without_candidates_yields_empty_comment(gemini_mock: GeminiMock) -> TestResult {
    gemini_mock.mount(
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({}))),
    );

    let insertion =
        suggest_name_comment(&gemini_mock.service(), "def f(): pass", &CommentStyle::default())?;

    assert_eq!(insertion.body, "# \n");
    Ok(())
}

#[rstest]
fn error_status_maps_to_api_error(gemini_mock: GeminiMock) {
    gemini_mock.mount(
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_string("{\"error\": {\"message\": \"API key not valid\"}}"),
            ),
    );

    let result = gemini_mock
        .service()
        .suggest(&NameSuggestionRequest::new("x"));

    let message = match result {
        Err(NomenError::Api { message }) => message,
        other => panic!("expected API error, got {other:?}"),
    };
    assert!(message.contains("403"), "status missing from {message}");
    assert!(
        message.contains("API key not valid"),
        "body missing from {message}"
    );
}

#[rstest]
fn undecodable_body_maps_to_api_error(gemini_mock: GeminiMock) {
    gemini_mock.mount(
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json")),
    );

    let result = gemini_mock
        .service()
        .suggest(&NameSuggestionRequest::new("x"));

    assert!(
        matches!(result, Err(NomenError::Api { .. })),
        "expected API error, got {result:?}"
    );
}

#[test]
fn unreachable_host_maps_to_network_error() {
    let service = GeminiNameSuggestionService::new(
        GeminiConfig::new("test-key")
            .with_base_url("http://127.0.0.1:1/v1beta")
            .with_timeout(Duration::from_secs(2)),
    );

    let result = service.suggest(&NameSuggestionRequest::new("x"));

    assert!(
        matches!(result, Err(NomenError::Network { .. })),
        "expected network error, got {result:?}"
    );
}
