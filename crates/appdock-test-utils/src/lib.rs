// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Appdock integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests
//! without reaching the real catalog.
//!
//! # Components
//!
//! - [`MockCatalog`] - Mock catalog backend with pre-loaded toolkit records

pub mod mock_catalog;

pub use mock_catalog::MockCatalog;
