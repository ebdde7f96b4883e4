// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only, session-scoped generation history.

use chrono::{DateTime, Utc};
use serde::Serialize;
use wenan_core::{GenerationRequest, GenerationResult, WenanError};

/// Style filter value that matches every record.
pub const ALL_STYLES: &str = "all";

/// One successful generation: the inputs used and the text produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRecord {
    pub request: GenerationRequest,
    pub output: String,
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn theme(&self) -> &str {
        &self.request.theme
    }

    pub fn style(&self) -> &str {
        &self.request.style
    }

    pub fn category(&self) -> &str {
        &self.request.category
    }
}

impl From<&GenerationResult> for HistoryRecord {
    fn from(result: &GenerationResult) -> Self {
        Self {
            request: result.request.clone(),
            output: result.output_text.clone(),
            created_at: result.created_at,
        }
    }
}

/// Ordered list of records in insertion order.
///
/// The count only grows through [`append`](Self::append) and only shrinks
/// through [`clear`](Self::clear). Reads are reverse-chronological; display
/// index 0 is the most recent record.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<HistoryRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: HistoryRecord) {
        self.records.push(record);
    }

    /// Overwrites the output and timestamp of the most recent record, keeping
    /// its inputs.
    pub fn replace_last(
        &mut self,
        output: String,
        created_at: DateTime<Utc>,
    ) -> Result<&HistoryRecord, WenanError> {
        let last = self.records.last_mut().ok_or(WenanError::EmptyHistory)?;
        last.output = output;
        last.created_at = created_at;
        Ok(last)
    }

    /// Records newest first, optionally limited to one style.
    ///
    /// `None` and [`ALL_STYLES`] both disable the filter.
    pub fn list(&self, filter_style: Option<&str>) -> Vec<&HistoryRecord> {
        self.list_indexed(filter_style)
            .into_iter()
            .map(|(_, record)| record)
            .collect()
    }

    /// Like [`list`](Self::list), paired with each record's unfiltered display
    /// index so a filtered view can still address records for rehydration.
    pub fn list_indexed(&self, filter_style: Option<&str>) -> Vec<(usize, &HistoryRecord)> {
        let filter = filter_style.filter(|s| *s != ALL_STYLES);
        self.records
            .iter()
            .rev()
            .enumerate()
            .filter(|(_, record)| filter.is_none_or(|style| record.style() == style))
            .collect()
    }

    /// The record at a display index (0 = most recent).
    pub fn get(&self, index: usize) -> Result<&HistoryRecord, WenanError> {
        let len = self.records.len();
        if index >= len {
            return Err(WenanError::HistoryIndexOutOfRange { index, len });
        }
        Ok(&self.records[len - 1 - index])
    }

    pub fn last(&self) -> Option<&HistoryRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }
}
