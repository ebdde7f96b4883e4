// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for OpenAI-compatible chat-completion endpoints.
//!
//! Provides [`OpenAiClient`], which sends one request per call and maps every
//! outcome onto [`GenerationError`].

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use tracing::{debug, warn};
use wenan_core::{Credentials, GenerationError, WenanError};

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// Delay before re-sending after a transport failure.
const TRANSPORT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// HTTP client for chat-completion calls.
///
/// Holds only the connection pool and timeout/retry settings; endpoint, model
/// and API key come with each call.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    timeout: Duration,
    max_retries: u32,
}

impl OpenAiClient {
    /// Creates a client with the given per-request timeout and transport retry count.
    pub fn new(timeout: Duration, max_retries: u32) -> Result<Self, WenanError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| WenanError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout,
            max_retries,
        })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a completion request and returns `choices[0].message.content`.
    ///
    /// Only transport failures are retried, and only `max_retries` times.
    /// HTTP error statuses are returned immediately.
    pub async fn complete(
        &self,
        credentials: &Credentials,
        request: &ChatCompletionRequest,
    ) -> Result<String, GenerationError> {
        let url = completions_url(&credentials.endpoint);
        let mut attempt = 0;

        loop {
            let sent = self
                .client
                .post(&url)
                .bearer_auth(credentials.api_key.expose_secret())
                .json(request)
                .send()
                .await;

            let response = match sent {
                Ok(response) => response,
                Err(e) => {
                    let err = self.classify_send_error(&e);
                    if matches!(err, GenerationError::Transport { .. }) && attempt < self.max_retries {
                        attempt += 1;
                        warn!(attempt, error = %e, "transport failure, retrying");
                        tokio::time::sleep(TRANSPORT_RETRY_DELAY).await;
                        continue;
                    }
                    return Err(err);
                }
            };

            let status = response.status();
            debug!(status = %status, attempt, model = %request.model, "completion response received");

            let body = response
                .text()
                .await
                .map_err(|e| self.classify_send_error(&e))?;

            if !status.is_success() {
                return Err(classify_status(status, body));
            }

            let parsed: ChatCompletionResponse =
                serde_json::from_str(&body).map_err(|e| GenerationError::MalformedResponse {
                    message: format!("response is not valid JSON: {e}"),
                })?;

            return parsed
                .into_first_content()
                .ok_or_else(|| GenerationError::MalformedResponse {
                    message: "response has no choices[0].message.content".to_string(),
                });
        }
    }

    fn classify_send_error(&self, e: &reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                duration: self.timeout,
            }
        } else {
            GenerationError::Transport {
                message: e.to_string(),
            }
        }
    }
}

/// `{endpoint}/chat/completions`, tolerating a trailing slash on the endpoint.
pub fn completions_url(endpoint: &str) -> String {
    format!("{}/chat/completions", endpoint.trim_end_matches('/'))
}

/// Maps a non-2xx status and its body onto the error taxonomy.
fn classify_status(status: StatusCode, body: String) -> GenerationError {
    let api_message = serde_json::from_str::<ApiErrorResponse>(&body)
        .ok()
        .map(|e| match e.error.error_type {
            Some(kind) => format!("{} ({kind})", e.error.message),
            None => e.error.message,
        });

    match status {
        StatusCode::UNAUTHORIZED => GenerationError::Auth {
            message: api_message.unwrap_or_else(|| format!("{status}")),
        },
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimited {
            message: api_message.unwrap_or_else(|| format!("{status}")),
        },
        _ => GenerationError::Upstream {
            status: status.as_u16(),
            body,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatMessage;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client() -> OpenAiClient {
        OpenAiClient::new(Duration::from_secs(5), 0).unwrap()
    }

    fn credentials(endpoint: &str) -> Credentials {
        Credentials::new(endpoint, "gpt-3.5-turbo", "sk-test-key".into())
    }

    fn test_request() -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![ChatMessage::system("system"), ChatMessage::user("hello")],
            temperature: 0.7,
            max_tokens: 400,
            stream: false,
        }
    }

    fn success_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
    }

    #[tokio::test]
    async fn success_returns_content_verbatim() {
        let server = MockServer::start().await;
        let content = "  第一条\n\n第二条 ✨  ";

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body(content)))
            .mount(&server)
            .await;

        let endpoint = format!("{}/v1", server.uri());
        let text = test_client()
            .complete(&credentials(&endpoint), &test_request())
            .await
            .unwrap();
        assert_eq!(text, content);
    }

    #[tokio::test]
    async fn sends_bearer_auth_and_wire_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test-key"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 400,
                "stream": false,
                "messages": [
                    {"role": "system", "content": "system"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let result = test_client()
            .complete(&credentials(&server.uri()), &test_request())
            .await;
        assert_eq!(result.unwrap(), "ok");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let err = test_client()
            .complete(&credentials(&server.uri()), &test_request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::Auth {
                message: "Incorrect API key provided (invalid_request_error)".into()
            }
        );
    }

    #[tokio::test]
    async fn forbidden_is_upstream_with_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("region blocked"))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client()
            .complete(&credentials(&server.uri()), &test_request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::Upstream {
                status: 403,
                body: "region blocked".into()
            }
        );
    }

    #[tokio::test]
    async fn rate_limit_message_without_type_is_plain() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {"message": "Rate limit reached"}
            })))
            .mount(&server)
            .await;

        let err = test_client()
            .complete(&credentials(&server.uri()), &test_request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::RateLimited {
                message: "Rate limit reached".into()
            }
        );
    }

    #[tokio::test]
    async fn rate_limit_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiClient::new(Duration::from_secs(5), 2).unwrap();
        let err = client
            .complete(&credentials(&server.uri()), &test_request())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::RateLimited { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = OpenAiClient::new(Duration::from_secs(5), 2).unwrap();
        let err = client
            .complete(&credentials(&server.uri()), &test_request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::Upstream {
                status: 503,
                body: "overloaded".into()
            }
        );
    }

    #[tokio::test]
    async fn success_without_content_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let err = test_client()
            .complete(&credentials(&server.uri()), &test_request())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn non_json_success_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = test_client()
            .complete(&credentials(&server.uri()), &test_request())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not valid JSON"), "got: {err}");
    }

    #[tokio::test]
    async fn slow_response_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(success_body("too late"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = OpenAiClient::new(Duration::from_millis(200), 0).unwrap();
        let err = client
            .complete(&credentials(&server.uri()), &test_request())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::Timeout {
                duration: Duration::from_millis(200)
            }
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_failure() {
        // Port 9 (discard) on localhost is closed on test machines.
        let err = test_client()
            .complete(&credentials("http://127.0.0.1:9"), &test_request())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Transport { .. }), "got: {err:?}");
    }

    #[test]
    fn completions_url_handles_trailing_slash() {
        assert_eq!(
            completions_url("https://api.moonshot.cn/v1/"),
            "https://api.moonshot.cn/v1/chat/completions"
        );
        assert_eq!(
            completions_url("https://api.openai.com/v1"),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
