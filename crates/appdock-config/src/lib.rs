// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Appdock catalog adapter.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, and environment
//! variable overrides.
//!
//! # Usage
//!
//! ```no_run
//! use appdock_config::load_config;
//!
//! let config = load_config().expect("config errors");
//! println!("timeout: {}s", config.composio.timeout_secs);
//! ```

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AppdockConfig, ComposioConfig};
