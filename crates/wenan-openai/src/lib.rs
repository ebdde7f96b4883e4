// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible provider for the Wenan copywriting assistant.
//!
//! This crate implements [`CompletionProvider`] on top of the
//! `POST {endpoint}/chat/completions` API shared by OpenAI, Moonshot (Kimi),
//! Qwen and other compatible services.

pub mod client;
pub mod types;

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;
use wenan_config::model::ProviderConfig;
use wenan_core::{BuiltPrompt, CompletionProvider, Credentials, GenerationError, WenanError};

use crate::client::OpenAiClient;
use crate::types::{ChatCompletionRequest, ChatMessage};

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI-compatible provider implementing [`CompletionProvider`].
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    /// Creates a provider using the configured timeout and transport retries.
    pub fn new(config: &ProviderConfig) -> Result<Self, WenanError> {
        let client = OpenAiClient::new(
            Duration::from_secs(config.timeout_secs),
            config.max_retries,
        )?;
        info!(
            timeout_secs = config.timeout_secs,
            max_retries = config.max_retries,
            "OpenAI-compatible provider initialized"
        );
        Ok(Self { client })
    }

    /// Creates a provider with an existing client.
    pub fn with_client(client: OpenAiClient) -> Self {
        Self { client }
    }

    fn to_chat_request(credentials: &Credentials, prompt: &BuiltPrompt) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: credentials.model.clone(),
            messages: vec![
                ChatMessage::system(prompt.system.clone()),
                ChatMessage::user(prompt.user.clone()),
            ],
            temperature: prompt.temperature,
            max_tokens: prompt.token_budget,
            stream: false,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai-compatible"
    }

    async fn generate(
        &self,
        credentials: &Credentials,
        prompt: &BuiltPrompt,
    ) -> Result<String, GenerationError> {
        let request = Self::to_chat_request(credentials, prompt);
        self.client.complete(credentials, &request).await
    }
}

/// Resolves the API key: config value first, then [`API_KEY_ENV`].
///
/// Returns `None` when neither is set so the front-end can prompt for one.
pub fn resolve_api_key(config_key: &Option<String>) -> Option<String> {
    if let Some(key) = config_key
        && !key.trim().is_empty()
    {
        return Some(key.clone());
    }

    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

/// Builds per-call credentials from the provider config and a resolved key.
pub fn credentials_from_config(config: &ProviderConfig, api_key: String) -> Credentials {
    Credentials::new(config.endpoint.clone(), config.model.clone(), api_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_api_key_prefers_config() {
        assert_eq!(
            resolve_api_key(&Some("sk-config".into())).as_deref(),
            Some("sk-config")
        );
    }

    #[test]
    fn resolve_api_key_falls_back_to_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(API_KEY_ENV, "sk-from-env");
            assert_eq!(resolve_api_key(&None).as_deref(), Some("sk-from-env"));
            assert_eq!(
                resolve_api_key(&Some("   ".into())).as_deref(),
                Some("sk-from-env")
            );
            assert_eq!(
                resolve_api_key(&Some("sk-config".into())).as_deref(),
                Some("sk-config")
            );
            Ok(())
        });
    }

    #[test]
    fn resolve_api_key_blank_everywhere_is_none() {
        figment::Jail::expect_with(|jail| {
            jail.set_env(API_KEY_ENV, "  ");
            assert_eq!(resolve_api_key(&None), None);
            assert_eq!(resolve_api_key(&Some(String::new())), None);
            Ok(())
        });
    }

    #[test]
    fn chat_request_carries_prompt_parameters() {
        let creds = Credentials::new("https://api.openai.com/v1", "gpt-4", "sk-x".into());
        let prompt = BuiltPrompt {
            system: "sys".into(),
            user: "user".into(),
            token_budget: 1200,
            temperature: 0.8,
        };
        let req = OpenAiProvider::to_chat_request(&creds, &prompt);
        assert_eq!(req.model, "gpt-4");
        assert_eq!(req.max_tokens, 1200);
        assert!(!req.stream);
        assert_eq!(req.messages[0], ChatMessage::system("sys"));
        assert_eq!(req.messages[1], ChatMessage::user("user"));
    }

    #[test]
    fn credentials_come_from_config() {
        let config = ProviderConfig::default();
        let creds = credentials_from_config(&config, "sk-abc".into());
        assert_eq!(creds.endpoint, config.endpoint);
        assert_eq!(creds.model, config.model);
    }
}
