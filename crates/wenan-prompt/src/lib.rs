// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt building for the Wenan copywriting assistant.
//!
//! [`RequestBuilder`] turns the options collected by the front-end into a
//! system prompt, a user prompt, a token budget and a temperature. Option
//! sets and system prompts live in [`domain`]; the length table in [`length`].

pub mod builder;
pub mod domain;
pub mod length;

pub use builder::RequestBuilder;
pub use domain::{profile, DomainProfile};
pub use length::{token_budget, LengthClass, DEFAULT_TOKEN_BUDGET};
