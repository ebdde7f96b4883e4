// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for session-level tests.
//!
//! `TestSessionBuilder` assembles a [`SessionContext`] wired to a
//! [`MockProvider`] and a valid starting form.

use std::sync::Arc;

use wenan_core::{ContentDomain, Credentials, GenerationFlags, GenerationRequest, SessionId};
use wenan_prompt::RequestBuilder;
use wenan_session::SessionContext;

use crate::mock_provider::MockProvider;

/// A valid short-video form: 新番推荐 / 动漫 / 搞笑 / 短.
pub fn sample_request() -> GenerationRequest {
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

/// Builder for creating test sessions with configurable options.
pub struct TestSessionBuilder {
    provider: MockProvider,
    form: GenerationRequest,
    temperature: Option<f32>,
}

impl TestSessionBuilder {
    fn new() -> Self {
        Self {
            provider: MockProvider::new(),
            form: sample_request(),
            temperature: None,
        }
    }

    /// Set mock provider responses.
    pub fn with_mock_responses<I, S>(mut self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provider = MockProvider::with_responses(responses);
        self
    }

    /// Use an existing mock, e.g. one with queued errors.
    pub fn with_provider(mut self, provider: MockProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_form(mut self, form: GenerationRequest) -> Self {
        self.form = form;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn build(self) -> TestSession {
        let credentials = Credentials::new("http://mock.invalid/v1", "mock-model", "sk-test".into());
        let context = SessionContext::new(
            SessionId::generate(),
            credentials,
            Arc::new(self.provider.clone()),
            RequestBuilder::new().with_temperature(self.temperature),
            self.form,
        );
        TestSession {
            context,
            provider: self.provider,
        }
    }
}

/// A session plus a handle on its mock provider for call inspection.
pub struct TestSession {
    pub context: SessionContext,
    pub provider: MockProvider,
}

impl TestSession {
    pub fn builder() -> TestSessionBuilder {
        TestSessionBuilder::new()
    }
}
