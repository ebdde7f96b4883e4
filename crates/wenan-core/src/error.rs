// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Wenan copywriting assistant.

use std::time::Duration;

use thiserror::Error;

/// Failure of a single chat-completion call.
///
/// Every variant renders a message that can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The endpoint rejected the credential (401).
    #[error("authentication failed, check the API key: {message}")]
    Auth { message: String },

    /// The endpoint throttled the request (429).
    #[error("rate limited by the provider, try again later: {message}")]
    RateLimited { message: String },

    /// No response arrived within the configured timeout.
    #[error("request timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Connection, DNS, TLS or other send failure.
    #[error("could not reach the provider: {message}")]
    Transport { message: String },

    /// Any other non-2xx status.
    #[error("provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// A 2xx response without `choices[0].message.content`.
    #[error("malformed provider response: {message}")]
    MalformedResponse { message: String },
}

/// The primary error type for session operations and the front-end.
#[derive(Debug, Error)]
pub enum WenanError {
    /// User input rejected before any request is sent (e.g. empty theme).
    #[error("validation error: {0}")]
    Validation(String),

    /// The generation call itself failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// `regenerate` or `replace_last` on an empty history.
    #[error("history is empty, generate something first")]
    EmptyHistory,

    /// No history record at the given display index.
    #[error("history has no record #{index} ({len} records)")]
    HistoryIndexOutOfRange { index: usize, len: usize },

    /// No template with the requested name.
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// Configuration errors (invalid TOML, missing credential).
    #[error("configuration error: {0}")]
    Config(String),

    /// Export of a result failed.
    #[error("export error: {message}")]
    Export {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
