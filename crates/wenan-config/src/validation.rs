// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::WenanConfig;

/// Highest transport retry count accepted from configuration.
const MAX_RETRIES_LIMIT: u32 = 5;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &WenanConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let endpoint = config.provider.endpoint.trim();
    if endpoint.is_empty() {
        fail("provider.endpoint must not be empty".to_string());
    } else if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        fail(format!(
            "provider.endpoint `{endpoint}` must start with http:// or https://"
        ));
    }

    if config.provider.model.trim().is_empty() {
        fail("provider.model must not be empty".to_string());
    }

    if config.provider.timeout_secs == 0 {
        fail("provider.timeout_secs must be greater than 0".to_string());
    }

    if config.provider.max_retries > MAX_RETRIES_LIMIT {
        fail(format!(
            "provider.max_retries must be at most {MAX_RETRIES_LIMIT}, got {}",
            config.provider.max_retries
        ));
    }

    if let Some(t) = config.generation.temperature
        && !(0.0..=2.0).contains(&t)
    {
        fail(format!(
            "generation.temperature must be between 0.0 and 2.0, got {t}"
        ));
    }

    if config.session.export_dir.trim().is_empty() {
        fail("session.export_dir must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
