// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for Appdock catalog backends.
//!
//! Backends implement [`CatalogAdapter`] and use `#[async_trait]` for
//! dynamic dispatch compatibility.

pub mod catalog;

pub use catalog::CatalogAdapter;
