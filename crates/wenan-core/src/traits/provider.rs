// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for chat-completion backends.

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::types::{BuiltPrompt, Credentials};

/// A chat-completion backend.
///
/// Implementations issue exactly one logical request per call and keep no
/// per-user state: credentials and model arrive with every call.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    /// Returns the human-readable name of this provider.
    fn name(&self) -> &str;

    /// Sends the prompt and returns the generated text exactly as received.
    async fn generate(
        &self,
        credentials: &Credentials,
        prompt: &BuiltPrompt,
    ) -> Result<String, GenerationError>;
}
