// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Wenan copywriting assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use wenan_core::ContentDomain;

/// Top-level Wenan configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WenanConfig {
    /// Chat-completion endpoint settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Prompt defaults.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Front-end session settings.
    #[serde(default)]
    pub session: SessionConfig,
}

/// OpenAI-compatible endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Base URL; `/chat/completions` is appended per request.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,

    /// API key. `None` falls back to `OPENAI_API_KEY`, then an interactive prompt.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Extra attempts after a transport failure. Never applied to HTTP errors.
    #[serde(default)]
    pub max_retries: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            max_retries: 0,
        }
    }
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

/// Prompt defaults applied when the front-end does not override them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Content domain the shell starts in.
    #[serde(default)]
    pub domain: ContentDomain,

    /// Sampling temperature override. `None` uses the domain default.
    #[serde(default)]
    pub temperature: Option<f32>,
}

/// Front-end session configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory exported text files are written to.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            export_dir: default_export_dir(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_export_dir() -> String {
    ".".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = WenanConfig::default();
        assert_eq!(config.provider.endpoint, "https://api.openai.com/v1");
        assert_eq!(config.provider.model, "gpt-3.5-turbo");
        assert_eq!(config.provider.timeout_secs, 60);
        assert_eq!(config.provider.max_retries, 0);
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.generation.domain, ContentDomain::Moments);
        assert!(config.generation.temperature.is_none());
        assert_eq!(config.session.log_level, "info");
    }

    #[test]
    fn partial_section_fills_defaults() {
        let config: WenanConfig = toml::from_str(
            r#"
[provider]
model = "moonshot-v1-8k"
"#,
        )
        .unwrap();
        assert_eq!(config.provider.model, "moonshot-v1-8k");
        assert_eq!(config.provider.timeout_secs, 60);
    }

    #[test]
    fn domain_parses_kebab_case() {
        let config: WenanConfig = toml::from_str(
            r#"
[generation]
domain = "short-video"
"#,
        )
        .unwrap();
        assert_eq!(config.generation.domain, ContentDomain::ShortVideo);
    }
}
