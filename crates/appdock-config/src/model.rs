// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Appdock catalog adapter.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Appdock configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppdockConfig {
    /// Composio catalog API settings.
    #[serde(default)]
    pub composio: ComposioConfig,
}

/// Composio catalog API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ComposioConfig {
    /// API key for authenticated catalog access. Falls back to the
    /// `COMPOSIO_API_KEY` environment variable when unset.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Override for the catalog base URL. Defaults to the public endpoint.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ComposioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
