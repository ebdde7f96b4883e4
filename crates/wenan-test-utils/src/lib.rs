// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Wenan integration tests.
//!
//! # Components
//!
//! - [`MockProvider`] - Completion provider that replays queued outcomes
//! - [`TestSession`] - Session context wired to a mock provider

pub mod harness;
pub mod mock_provider;

pub use harness::{sample_request, TestSession, TestSessionBuilder};
pub use mock_provider::{MockProvider, RecordedCall};
