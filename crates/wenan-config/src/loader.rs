// SPDX-FileCopyrightText: 2026 Wenan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./wenan.toml` > `~/.config/wenan/wenan.toml` > `/etc/wenan/wenan.toml`
//! with environment variable overrides via `WENAN_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::WenanConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/wenan/wenan.toml` (system-wide)
/// 3. `~/.config/wenan/wenan.toml` (user XDG config)
/// 4. `./wenan.toml` (local directory)
/// 5. `WENAN_*` environment variables
pub fn load_config() -> Result<WenanConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<WenanConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WenanConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<WenanConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(WenanConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading.
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(WenanConfig::default()))
        .merge(Toml::file("/etc/wenan/wenan.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("wenan/wenan.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("wenan.toml"))
        .merge(env_provider())
}

/// Environment provider with explicit section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `WENAN_PROVIDER_API_KEY` must map to `provider.api_key`,
/// not `provider.api.key`.
fn env_provider() -> Env {
    Env::prefixed("WENAN_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("provider_", "provider.", 1)
            .replacen("generation_", "generation.", 1)
            .replacen("session_", "session.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("WENAN_PROVIDER_API_KEY", "sk-from-env");
            jail.set_env("WENAN_PROVIDER_TIMEOUT_SECS", "15");
            jail.set_env("WENAN_SESSION_EXPORT_DIR", "/tmp/out");
            let config = load_config()?;
            assert_eq!(config.provider.api_key.as_deref(), Some("sk-from-env"));
            assert_eq!(config.provider.timeout_secs, 15);
            assert_eq!(config.session.export_dir, "/tmp/out");
            Ok(())
        });
    }

    #[test]
    fn local_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "wenan.toml",
                r#"
[provider]
endpoint = "https://api.moonshot.cn/v1"
model = "moonshot-v1-8k"
"#,
            )?;
            let config = load_config()?;
            assert_eq!(config.provider.endpoint, "https://api.moonshot.cn/v1");
            assert_eq!(config.provider.model, "moonshot-v1-8k");
            Ok(())
        });
    }

    #[test]
    fn explicit_path_is_loaded() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[generation]\ntemperature = 0.5\n")?;
            let config = load_config_from_path(Path::new("custom.toml"))?;
            assert_eq!(config.generation.temperature, Some(0.5));
            Ok(())
        });
    }
}
