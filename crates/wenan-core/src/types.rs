// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the prompt builder, the provider client and the
//! session stores.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a user session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    /// Generates a fresh random session identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of copy being written. Each domain has its own option sets and
/// fixed system prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ContentDomain {
    /// 朋友圈文案: short social posts for WeChat Moments.
    #[default]
    Moments,
    /// B站话题文案: topic posts with title, summary and call to action.
    Bilibili,
    /// 短视频选题: short-video topic ideas with titles and hashtags.
    ShortVideo,
}

impl ContentDomain {
    /// All domains, in display order.
    pub const ALL: [ContentDomain; 3] = [
        ContentDomain::Moments,
        ContentDomain::Bilibili,
        ContentDomain::ShortVideo,
    ];
}

/// Optional prompt addenda toggled from the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationFlags {
    /// Ask for currently trending phrasing and hooks.
    #[serde(default)]
    pub use_trending: bool,
    /// Ask the model to model its output on a worked example.
    #[serde(default)]
    pub include_examples: bool,
}

/// The inputs of one generation, echoed into results and history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub domain: ContentDomain,
    pub theme: String,
    /// Scene for `moments`, category for the other domains.
    pub category: String,
    pub style: String,
    /// Length-class label, resolved to a token budget by the prompt builder.
    pub length: String,
    #[serde(default)]
    pub custom_prompt: Option<String>,
    #[serde(default)]
    pub flags: GenerationFlags,
}

/// A fully rendered chat-completion prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltPrompt {
    pub system: String,
    pub user: String,
    /// Sent as `max_tokens`.
    pub token_budget: u32,
    pub temperature: f32,
}

/// Caller-supplied endpoint, model and API key for one call.
///
/// The key is held as a [`SecretString`] so it never shows up in `Debug`
/// output or logs.
#[derive(Debug)]
pub struct Credentials {
    /// Base URL of an OpenAI-compatible API, e.g. `https://api.openai.com/v1`.
    pub endpoint: String,
    pub model: String,
    pub api_key: SecretString,
}

impl Credentials {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>, api_key: String) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: SecretString::from(api_key),
        }
    }
}

/// Outcome status of a generation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationStatus {
    Success,
    Failure(String),
}

/// The result of one generation attempt, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub request: GenerationRequest,
    /// Empty when the attempt failed.
    pub output_text: String,
    pub created_at: DateTime<Utc>,
    pub status: GenerationStatus,
}

impl GenerationResult {
    pub fn success(request: GenerationRequest, output_text: String) -> Self {
        Self {
            request,
            output_text,
            created_at: Utc::now(),
            status: GenerationStatus::Success,
        }
    }

    pub fn failure(request: GenerationRequest, reason: impl Into<String>) -> Self {
        Self {
            request,
            output_text: String::new(),
            created_at: Utc::now(),
            status: GenerationStatus::Failure(reason.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == GenerationStatus::Success
    }
}
