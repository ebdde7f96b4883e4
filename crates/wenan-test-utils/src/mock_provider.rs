// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion provider for deterministic testing.
//!
//! `MockProvider` implements `CompletionProvider` with pre-configured
//! outcomes, so session and front-end tests run without network access.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use wenan_core::{BuiltPrompt, CompletionProvider, Credentials, GenerationError};

/// A prompt the mock received, with the model it was addressed to.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: BuiltPrompt,
}

/// A mock provider that replays queued outcomes.
///
/// Outcomes are popped from a FIFO queue. When the queue is empty,
/// `"mock response"` is returned.
#[derive(Clone, Default)]
pub struct MockProvider {
    outcomes: Arc<Mutex<VecDeque<Result<String, GenerationError>>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock pre-loaded with successful responses.
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let outcomes = responses.into_iter().map(|s| Ok(s.into())).collect();
        Self {
            outcomes: Arc::new(Mutex::new(outcomes)),
            calls: Arc::default(),
        }
    }

    /// Queue a successful response.
    pub async fn push_response(&self, text: impl Into<String>) {
        self.outcomes.lock().await.push_back(Ok(text.into()));
    }

    /// Queue a failure.
    pub async fn push_error(&self, error: GenerationError) {
        self.outcomes.lock().await.push_back(Err(error));
    }

    /// Every call received so far, oldest first.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    async fn next_outcome(&self) -> Result<String, GenerationError> {
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("mock response".to_string()))
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    async fn generate(
        &self,
        credentials: &Credentials,
        prompt: &BuiltPrompt,
    ) -> Result<String, GenerationError> {
        self.calls.lock().await.push(RecordedCall {
            model: credentials.model.clone(),
            prompt: prompt.clone(),
        });
        let outcome = self.next_outcome().await;
        tracing::debug!(ok = outcome.is_ok(), "mock provider replying");
        outcome
    }
}
