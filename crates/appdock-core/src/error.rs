// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Appdock catalog adapter.

use thiserror::Error;

/// The primary error type used across the Appdock catalog trait and operations.
#[derive(Debug, Error)]
pub enum AppdockError {
    /// Configuration errors (invalid TOML, bad header values, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Catalog API errors (network failure, non-success status).
    #[error("catalog error: {message}")]
    Catalog {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed or unparseable upstream response.
    #[error("decode error: {message}")]
    Decode {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
