// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Wenan copywriting assistant.
//!
//! This crate provides the shared request/result types, the error taxonomy,
//! and the [`CompletionProvider`] trait that the HTTP client implements and the
//! session layer consumes.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{GenerationError, WenanError};
pub use traits::CompletionProvider;
pub use types::{
    BuiltPrompt, ContentDomain, Credentials, GenerationFlags, GenerationRequest,
    GenerationResult, GenerationStatus, SessionId,
};
