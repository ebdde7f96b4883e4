// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-session state and the operations the front-end drives.

use std::sync::Arc;

use tracing::{info, warn};
use wenan_core::{
    CompletionProvider, Credentials, GenerationRequest, GenerationResult, SessionId, WenanError,
};
use wenan_prompt::{profile, RequestBuilder};

use crate::export::{default_filename, ExportedText};
use crate::history::{HistoryRecord, HistoryStore};
use crate::templates::{Template, TemplateStore};

/// Everything one user session owns: the form draft, history, templates,
/// the last result and the credentials used for calls.
///
/// The provider is shared between sessions; nothing else is.
pub struct SessionContext {
    id: SessionId,
    credentials: Credentials,
    provider: Arc<dyn CompletionProvider>,
    builder: RequestBuilder,
    form: GenerationRequest,
    history: HistoryStore,
    templates: TemplateStore,
    last_result: Option<GenerationResult>,
}

impl SessionContext {
    pub fn new(
        id: SessionId,
        credentials: Credentials,
        provider: Arc<dyn CompletionProvider>,
        builder: RequestBuilder,
        form: GenerationRequest,
    ) -> Self {
        Self {
            id,
            credentials,
            provider,
            builder,
            form,
            history: HistoryStore::new(),
            templates: TemplateStore::new(),
            last_result: None,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn form(&self) -> &GenerationRequest {
        &self.form
    }

    /// Mutable access to the draft, for field-by-field edits.
    pub fn form_mut(&mut self) -> &mut GenerationRequest {
        &mut self.form
    }

    pub fn set_form(&mut self, form: GenerationRequest) {
        self.form = form;
    }

    /// Model the next calls are addressed to.
    pub fn model(&self) -> &str {
        &self.credentials.model
    }

    /// Switches the model for subsequent calls. Endpoint and key are kept.
    pub fn set_model(&mut self, model: &str) -> Result<(), WenanError> {
        let model = model.trim();
        if model.is_empty() {
            return Err(WenanError::Validation("model must not be empty".into()));
        }
        info!(session_id = %self.id, model, "model switched");
        self.credentials.model = model.to_string();
        Ok(())
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    pub fn last_result(&self) -> Option<&GenerationResult> {
        self.last_result.as_ref()
    }

    /// Generates copy from the current form.
    ///
    /// A validation failure returns before any call is made and leaves the
    /// session untouched. Provider failures are recorded as the last result
    /// and returned as [`WenanError::Generation`]; only successes reach
    /// history.
    pub async fn generate(&mut self) -> Result<GenerationResult, WenanError> {
        let request = self.form.clone();
        let output = self.call(&request).await?;
        let result = GenerationResult::success(request, output);
        self.history.append(HistoryRecord::from(&result));
        self.last_result = Some(result.clone());
        info!(
            session_id = %self.id,
            history_len = self.history.len(),
            "generation appended to history"
        );
        Ok(result)
    }

    /// Re-runs the most recent history record's inputs and overwrites that
    /// record in place. The form draft is not consulted.
    pub async fn regenerate(&mut self) -> Result<GenerationResult, WenanError> {
        let request = self
            .history
            .last()
            .ok_or(WenanError::EmptyHistory)?
            .request
            .clone();
        let output = self.call(&request).await?;
        let result = GenerationResult::success(request, output);
        self.history
            .replace_last(result.output_text.clone(), result.created_at)?;
        self.last_result = Some(result.clone());
        info!(session_id = %self.id, "last history record regenerated");
        Ok(result)
    }

    /// Copies the inputs of the record at display index `index` into the form.
    pub fn rehydrate(&mut self, index: usize) -> Result<&GenerationRequest, WenanError> {
        self.form = self.history.get(index)?.request.clone();
        Ok(&self.form)
    }

    /// Saves the current form as a template.
    pub fn save_template(&mut self) -> Result<&Template, WenanError> {
        if self.form.theme.trim().is_empty() {
            return Err(WenanError::Validation(
                "enter a theme before saving a template".into(),
            ));
        }
        let template = self.templates.save(&self.form);
        info!(session_id = %self.id, name = %template.name, "template saved");
        Ok(template)
    }

    /// Loads the first template called `name` into the form, keeping the
    /// current custom prompt.
    pub fn apply_template(&mut self, name: &str) -> Result<&GenerationRequest, WenanError> {
        let template = self.templates.apply(name)?;
        self.form = template.to_request(self.form.custom_prompt.take());
        Ok(&self.form)
    }

    /// Packages the last successful result. Without a filename the default
    /// `wenan_{domain}_{timestamp}.txt` is used.
    pub fn export_last(&self, filename: Option<&str>) -> Result<ExportedText, WenanError> {
        let result = self
            .last_result
            .as_ref()
            .filter(|r| r.is_success())
            .ok_or_else(|| WenanError::Export {
                message: "no successful generation to export".into(),
                source: None,
            })?;
        let filename = filename
            .map(str::to_string)
            .unwrap_or_else(|| default_filename(result));
        ExportedText::from_result(result, &filename)
    }

    pub fn clear_history(&mut self) -> usize {
        let removed = self.history.clear();
        info!(session_id = %self.id, removed, "history cleared");
        removed
    }

    pub fn clear_templates(&mut self) -> usize {
        let removed = self.templates.clear();
        info!(session_id = %self.id, removed, "templates cleared");
        removed
    }

    async fn call(&mut self, request: &GenerationRequest) -> Result<String, WenanError> {
        profile(request.domain).validate(request)?;
        let prompt = self.builder.build(request);
        match self.provider.generate(&self.credentials, &prompt).await {
            Ok(output) => Ok(output),
            Err(e) => {
                warn!(
                    session_id = %self.id,
                    provider = self.provider.name(),
                    error = %e,
                    "generation failed"
                );
                self.last_result = Some(GenerationResult::failure(request.clone(), e.to_string()));
                Err(e.into())
            }
        }
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("id", &self.id)
            .field("provider", &self.provider.name())
            .field("history_len", &self.history.len())
            .field("templates_len", &self.templates.len())
            .finish_non_exhaustive()
    }
}
