// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Assembles a session from configuration.

use std::io::IsTerminal;
use std::sync::Arc;

use wenan_config::model::{ProviderConfig, WenanConfig};
use wenan_core::{CompletionProvider, GenerationRequest, SessionId, WenanError};
use wenan_openai::{credentials_from_config, resolve_api_key, OpenAiProvider, API_KEY_ENV};
use wenan_prompt::RequestBuilder;
use wenan_session::SessionContext;

/// Opens a session backed by the configured OpenAI-compatible endpoint.
pub fn open_session(
    config: &WenanConfig,
    form: GenerationRequest,
) -> Result<SessionContext, WenanError> {
    let api_key = acquire_api_key(&config.provider)?;
    let credentials = credentials_from_config(&config.provider, api_key);
    let provider: Arc<dyn CompletionProvider> = Arc::new(OpenAiProvider::new(&config.provider)?);
    let builder = RequestBuilder::new().with_temperature(config.generation.temperature);
    let id = SessionId::generate();
    tracing::info!(session_id = %id, model = %config.provider.model, "session opened");
    Ok(SessionContext::new(id, credentials, provider, builder, form))
}

/// Config value, then [`API_KEY_ENV`], then an interactive prompt.
fn acquire_api_key(config: &ProviderConfig) -> Result<String, WenanError> {
    if let Some(key) = resolve_api_key(&config.api_key) {
        return Ok(key);
    }

    if std::io::stdin().is_terminal() {
        eprint!("API key for {}: ", config.endpoint);
        let key = rpassword::read_password()
            .map_err(|e| WenanError::Config(format!("failed to read API key: {e}")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(WenanError::Config("empty API key not allowed".to_string()));
        }
        return Ok(key.to_string());
    }

    Err(WenanError::Config(format!(
        "no API key provided. Set provider.api_key, the {API_KEY_ENV} environment variable, or run interactively."
    )))
}
