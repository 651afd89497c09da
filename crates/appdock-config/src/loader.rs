// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./appdock.toml` > `~/.config/appdock/appdock.toml`
//! > `/etc/appdock/appdock.toml` with environment variable overrides via the
//! `APPDOCK_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::AppdockConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/appdock/appdock.toml` (system-wide)
/// 3. `~/.config/appdock/appdock.toml` (user XDG config)
/// 4. `./appdock.toml` (local directory)
/// 5. `APPDOCK_*` environment variables
pub fn load_config() -> Result<AppdockConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AppdockConfig::default()))
        .merge(Toml::file("/etc/appdock/appdock.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("appdock/appdock.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("appdock.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Useful for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<AppdockConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AppdockConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AppdockConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AppdockConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `APPDOCK_COMPOSIO_API_KEY` must map to
/// `composio.api_key`, not `composio.api.key`.
fn env_provider() -> Env {
    Env::prefixed("APPDOCK_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: APPDOCK_COMPOSIO_API_KEY -> "composio_api_key"
        key.as_str().replacen("composio_", "composio.", 1).into()
    })
}
