// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end scenarios: build a prompt, send it through the provider to a
//! mocked endpoint, and check the classified result.

use std::time::Duration;

use wenan_core::{
    CompletionProvider, ContentDomain, Credentials, GenerationError, GenerationFlags,
    GenerationRequest,
};
use wenan_openai::client::OpenAiClient;
use wenan_openai::OpenAiProvider;
use wenan_prompt::RequestBuilder;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn anime_request() -> GenerationRequest {
    GenerationRequest {
        domain: ContentDomain::ShortVideo,
        theme: "新番推荐".into(),
        category: "动漫".into(),
        style: "搞笑".into(),
        length: "短（150字内）".into(),
        custom_prompt: None,
        flags: GenerationFlags::default(),
    }
}

fn provider(timeout: Duration) -> OpenAiProvider {
    OpenAiProvider::with_client(OpenAiClient::new(timeout, 0).unwrap())
}

fn credentials(server: &MockServer) -> Credentials {
    Credentials::new(server.uri(), "moonshot-v1-8k", "sk-scenario".into())
}

#[tokio::test]
async fn short_anime_request_succeeds_with_400_token_budget() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({ "max_tokens": 400 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{"message": {"content": "示例文案"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let prompt = RequestBuilder::new().build(&anime_request());
    assert_eq!(prompt.token_budget, 400);

    let text = provider(Duration::from_secs(5))
        .generate(&credentials(&server), &prompt)
        .await;
    assert_eq!(text, Ok("示例文案".to_string()));
}

#[tokio::test]
async fn unauthorized_scenario_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let prompt = RequestBuilder::new().build(&anime_request());
    let err = provider(Duration::from_secs(5))
        .generate(&credentials(&server), &prompt)
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Auth { .. }), "got: {err:?}");
}

#[tokio::test]
async fn slow_endpoint_scenario_is_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "choices": [{"message": {"content": "示例文案"}}]
                }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let prompt = RequestBuilder::new().build(&anime_request());
    let err = provider(Duration::from_millis(150))
        .generate(&credentials(&server), &prompt)
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Timeout { .. }), "got: {err:?}");
}
