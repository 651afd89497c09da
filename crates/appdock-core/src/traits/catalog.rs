// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog adapter trait for toolkit/integration catalog backends.

use async_trait::async_trait;

use crate::error::AppdockError;
use crate::types::{
    Category, ListQuery, SearchQuery, ToolkitDetail, ToolkitPage, ToolkitSummary,
};

/// Adapter for a toolkit catalog backend.
///
/// Implementations normalize the backend's response shapes into the record
/// types in [`crate::types`]. Two error policies apply: listing and lookup
/// operations are load-bearing and propagate failures, while icon and detail
/// enrichment collapse failures to `None` so a missing logo or auth detail
/// never fails the surrounding request.
#[async_trait]
pub trait CatalogAdapter: Send + Sync {
    /// Returns the fixed category set. Makes no network call.
    async fn list_categories(&self) -> Result<Vec<Category>, AppdockError>;

    /// Lists toolkits that support provider-managed OAUTH2.
    async fn list_toolkits(&self, query: ListQuery) -> Result<ToolkitPage, AppdockError>;

    /// Looks up one toolkit summary by slug, or `None` if absent.
    async fn toolkit_by_slug(&self, slug: &str)
        -> Result<Option<ToolkitSummary>, AppdockError>;

    /// Case-insensitive substring search over name, description, and tags.
    async fn search_toolkits(
        &self,
        query: &str,
        opts: SearchQuery,
    ) -> Result<ToolkitPage, AppdockError>;

    /// Fetches a toolkit's logo URL. Failures collapse to `None`.
    async fn toolkit_icon(&self, slug: &str) -> Option<String>;

    /// Fetches the full toolkit record with auth config details.
    /// Failures collapse to `None`.
    async fn toolkit_detail(&self, slug: &str) -> Option<ToolkitDetail>;
}
