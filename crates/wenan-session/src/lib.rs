// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session layer for the Wenan copywriting assistant.
//!
//! A [`SessionContext`] owns one user's form draft, [`HistoryStore`],
//! [`TemplateStore`] and last result, and turns [`SessionAction`]s into calls
//! on the prompt builder and completion provider. [`SessionRegistry`] keeps
//! many sessions apart.

pub mod action;
pub mod export;
pub mod history;
pub mod registry;
pub mod session;
pub mod templates;

pub use action::{ActionOutcome, SessionAction};
pub use export::{default_filename, ExportedText};
pub use history::{HistoryRecord, HistoryStore, ALL_STYLES};
pub use registry::{SessionHandle, SessionRegistry};
pub use session::SessionContext;
pub use templates::{Template, TemplateStore};
