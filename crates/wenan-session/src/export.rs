// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plain-text export of a generation result.

use std::path::{Path, PathBuf};

use wenan_core::{GenerationResult, WenanError};

/// UTF-8 bytes of one result's output, ready to be written or downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedText {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportedText {
    /// Packages a successful result under `filename`.
    ///
    /// The name must be a bare file name; separators and `..` are rejected so
    /// an export cannot escape the directory it is written to.
    pub fn from_result(result: &GenerationResult, filename: &str) -> Result<Self, WenanError> {
        if !result.is_success() {
            return Err(export_error("only successful results can be exported"));
        }
        let filename = filename.trim();
        if filename.is_empty() || filename == "." || filename == ".." {
            return Err(export_error("export filename must not be empty"));
        }
        if filename.contains(['/', '\\']) {
            return Err(export_error(format!(
                "export filename `{filename}` must not contain path separators"
            )));
        }
        Ok(Self {
            filename: filename.to_string(),
            bytes: result.output_text.as_bytes().to_vec(),
        })
    }

    /// Writes the bytes to `dir/filename`, creating `dir` if needed.
    pub async fn write_to(&self, dir: &Path) -> Result<PathBuf, WenanError> {
        tokio::fs::create_dir_all(dir).await.map_err(|e| WenanError::Export {
            message: format!("cannot create export directory {}", dir.display()),
            source: Some(Box::new(e)),
        })?;
        let path = dir.join(&self.filename);
        tokio::fs::write(&path, &self.bytes)
            .await
            .map_err(|e| WenanError::Export {
                message: format!("cannot write {}", path.display()),
                source: Some(Box::new(e)),
            })?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "exported result");
        Ok(path)
    }
}

/// `wenan_{domain}_{YYYYmmdd_HHMMSS}.txt`, from the result's timestamp.
pub fn default_filename(result: &GenerationResult) -> String {
    format!(
        "wenan_{}_{}.txt",
        result.request.domain,
        result.created_at.format("%Y%m%d_%H%M%S")
    )
}

fn export_error(message: impl Into<String>) -> WenanError {
    WenanError::Export {
        message: message.into(),
        source: None,
    }
}
