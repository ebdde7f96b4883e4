// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! User actions as data, dispatched onto a [`SessionContext`].

use wenan_core::{GenerationRequest, GenerationResult, WenanError};

use crate::export::ExportedText;
use crate::history::HistoryRecord;
use crate::session::SessionContext;
use crate::templates::Template;

/// Something the user asked the session to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Generate,
    Regenerate,
    ListHistory { style: Option<String> },
    Rehydrate { index: usize },
    SaveTemplate,
    ListTemplates,
    ApplyTemplate { name: String },
    ClearHistory,
    ClearTemplates,
    Export { filename: Option<String> },
}

/// What a dispatched action produced, owned so the session lock can be
/// released before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Generated(GenerationResult),
    /// Records newest first, each with its unfiltered display index.
    History(Vec<(usize, HistoryRecord)>),
    FormUpdated(GenerationRequest),
    TemplateSaved(Template),
    Templates(Vec<Template>),
    Cleared { removed: usize },
    Exported(ExportedText),
}

impl SessionContext {
    pub async fn dispatch(&mut self, action: SessionAction) -> Result<ActionOutcome, WenanError> {
        tracing::debug!(session_id = %self.id(), ?action, "dispatching action");
        match action {
            SessionAction::Generate => self.generate().await.map(ActionOutcome::Generated),
            SessionAction::Regenerate => self.regenerate().await.map(ActionOutcome::Generated),
            SessionAction::ListHistory { style } => Ok(ActionOutcome::History(
                self.history()
                    .list_indexed(style.as_deref())
                    .into_iter()
                    .map(|(i, record)| (i, record.clone()))
                    .collect(),
            )),
            SessionAction::Rehydrate { index } => self
                .rehydrate(index)
                .map(|form| ActionOutcome::FormUpdated(form.clone())),
            SessionAction::SaveTemplate => self
                .save_template()
                .map(|t| ActionOutcome::TemplateSaved(t.clone())),
            SessionAction::ListTemplates => {
                Ok(ActionOutcome::Templates(self.templates().list().to_vec()))
            }
            SessionAction::ApplyTemplate { name } => self
                .apply_template(&name)
                .map(|form| ActionOutcome::FormUpdated(form.clone())),
            SessionAction::ClearHistory => Ok(ActionOutcome::Cleared {
                removed: self.clear_history(),
            }),
            SessionAction::ClearTemplates => Ok(ActionOutcome::Cleared {
                removed: self.clear_templates(),
            }),
            SessionAction::Export { filename } => self
                .export_last(filename.as_deref())
                .map(ActionOutcome::Exported),
        }
    }
}
