// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Named presets of form inputs.

use serde::{Deserialize, Serialize};
use wenan_core::{ContentDomain, GenerationFlags, GenerationRequest, WenanError};

/// A saved form configuration. The custom prompt is not part of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Derived as `"{theme}_{style}"`.
    pub name: String,
    pub domain: ContentDomain,
    pub theme: String,
    pub style: String,
    pub length: String,
    pub category: String,
    pub flags: GenerationFlags,
}

impl Template {
    pub fn from_request(request: &GenerationRequest) -> Self {
        Self {
            name: format!("{}_{}", request.theme, request.style),
            domain: request.domain,
            theme: request.theme.clone(),
            style: request.style.clone(),
            length: request.length.clone(),
            category: request.category.clone(),
            flags: request.flags,
        }
    }

    /// Rebuilds a form from this template, carrying over `custom_prompt`.
    pub fn to_request(&self, custom_prompt: Option<String>) -> GenerationRequest {
        GenerationRequest {
            domain: self.domain,
            theme: self.theme.clone(),
            category: self.category.clone(),
            style: self.style.clone(),
            length: self.length.clone(),
            custom_prompt,
            flags: self.flags,
        }
    }
}

/// Templates in insertion order. Duplicate names are kept; lookups return the
/// first match.
#[derive(Debug, Default)]
pub struct TemplateStore {
    templates: Vec<Template>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, request: &GenerationRequest) -> &Template {
        self.templates.push(Template::from_request(request));
        let index = self.templates.len() - 1;
        &self.templates[index]
    }

    pub fn list(&self) -> &[Template] {
        &self.templates
    }

    pub fn apply(&self, name: &str) -> Result<&Template, WenanError> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| WenanError::TemplateNotFound {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.templates.len();
        self.templates.clear();
        removed
    }
}
