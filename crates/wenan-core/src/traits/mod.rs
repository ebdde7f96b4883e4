// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between session orchestration and external services.

pub mod provider;

pub use provider::CompletionProvider;
