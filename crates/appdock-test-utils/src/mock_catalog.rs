// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock catalog adapter for deterministic testing.
//!
//! `MockCatalog` implements `CatalogAdapter` over pre-loaded records,
//! enabling fast, CI-runnable tests without reaching the real catalog.
//! Lookup and search follow the same semantics as the real adapter:
//! substring matching over name/description/tags, truncation to the
//! requested limit, single-page search results.

use std::collections::HashMap;

use async_trait::async_trait;

use appdock_core::types::{
    Category, ListQuery, SearchQuery, ToolkitDetail, ToolkitPage, ToolkitSummary,
};
use appdock_core::{AppdockError, CatalogAdapter};

/// A mock catalog backend serving pre-loaded toolkit records.
pub struct MockCatalog {
    toolkits: Vec<ToolkitSummary>,
    details: HashMap<String, ToolkitDetail>,
    fail: bool,
}

impl MockCatalog {
    /// Create an empty mock catalog.
    pub fn new() -> Self {
        Self {
            toolkits: Vec::new(),
            details: HashMap::new(),
            fail: false,
        }
    }

    /// Create a mock catalog pre-loaded with the given summaries.
    pub fn with_toolkits(toolkits: Vec<ToolkitSummary>) -> Self {
        Self {
            toolkits,
            details: HashMap::new(),
            fail: false,
        }
    }

    /// Add a detail record served by `toolkit_detail` and `toolkit_icon`.
    pub fn add_detail(&mut self, detail: ToolkitDetail) {
        self.details.insert(detail.slug.clone(), detail);
    }

    /// Create a mock catalog whose load-bearing operations fail and whose
    /// enrichment operations return `None`, for exercising consumer error
    /// paths.
    pub fn failing() -> Self {
        Self {
            toolkits: Vec::new(),
            details: HashMap::new(),
            fail: true,
        }
    }

    fn check_failure(&self) -> Result<(), AppdockError> {
        if self.fail {
            return Err(AppdockError::Catalog {
                message: "mock catalog failure".into(),
                source: None,
            });
        }
        Ok(())
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogAdapter for MockCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, AppdockError> {
        self.check_failure()?;
        Ok(vec![
            Category {
                id: "popular".into(),
                name: "Popular".into(),
            },
            Category {
                id: "communication".into(),
                name: "Communication".into(),
            },
        ])
    }

    async fn list_toolkits(&self, query: ListQuery) -> Result<ToolkitPage, AppdockError> {
        self.check_failure()?;
        let items: Vec<ToolkitSummary> = self
            .toolkits
            .iter()
            .filter(|toolkit| {
                query
                    .category
                    .as_ref()
                    .is_none_or(|category| toolkit.categories.contains(category))
            })
            .take(query.limit as usize)
            .cloned()
            .collect();
        let total_items = items.len() as u64;
        Ok(ToolkitPage {
            items,
            total_items,
            total_pages: 1,
            current_page: 1,
            next_cursor: None,
        })
    }

    async fn toolkit_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ToolkitSummary>, AppdockError> {
        self.check_failure()?;
        Ok(self
            .toolkits
            .iter()
            .find(|toolkit| toolkit.slug == slug)
            .cloned())
    }

    async fn search_toolkits(
        &self,
        query: &str,
        opts: SearchQuery,
    ) -> Result<ToolkitPage, AppdockError> {
        self.check_failure()?;
        let needle = query.to_lowercase();
        let mut matches: Vec<ToolkitSummary> = self
            .toolkits
            .iter()
            .filter(|toolkit| {
                toolkit.name.to_lowercase().contains(&needle)
                    || toolkit
                        .description
                        .as_ref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
                    || toolkit.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        let total_items = matches.len() as u64;
        matches.truncate(opts.limit as usize);
        Ok(ToolkitPage {
            items: matches,
            total_items,
            total_pages: 1,
            current_page: 1,
            next_cursor: None,
        })
    }

    async fn toolkit_icon(&self, slug: &str) -> Option<String> {
        if self.fail {
            return None;
        }
        self.details.get(slug).and_then(|detail| detail.logo.clone())
    }

    async fn toolkit_detail(&self, slug: &str) -> Option<ToolkitDetail> {
        if self.fail {
            return None;
        }
        self.details.get(slug).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(slug: &str, name: &str, tags: &[&str]) -> ToolkitSummary {
        ToolkitSummary {
            slug: slug.into(),
            name: name.into(),
            description: None,
            logo: None,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            auth_schemes: vec!["OAUTH2".into()],
            categories: vec!["communication".into()],
        }
    }

    #[tokio::test]
    async fn lookup_finds_preloaded_toolkit() {
        let catalog = MockCatalog::with_toolkits(vec![summary("gmail", "Gmail", &[])]);
        let found = catalog.toolkit_by_slug("gmail").await.unwrap();
        assert_eq!(found.unwrap().name, "Gmail");
        assert!(catalog.toolkit_by_slug("slack").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn search_matches_tags_and_truncates() {
        let catalog = MockCatalog::with_toolkits(vec![
            summary("gmail", "Gmail", &["Communication"]),
            summary("slack", "Slack", &["Communication"]),
        ]);

        let page = catalog
            .search_toolkits(
                "communication",
                SearchQuery {
                    limit: 1,
                    ..SearchQuery::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_items, 2);
    }

    #[tokio::test]
    async fn category_filter_applies_to_listing() {
        let catalog = MockCatalog::with_toolkits(vec![summary("gmail", "Gmail", &[])]);
        let page = catalog
            .list_toolkits(ListQuery::for_category("crm"))
            .await
            .unwrap();
        assert!(page.items.is_empty());

        let page = catalog
            .list_toolkits(ListQuery::for_category("communication"))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn failing_catalog_propagates_and_collapses_per_policy() {
        let catalog = MockCatalog::failing();
        assert!(catalog.list_toolkits(ListQuery::default()).await.is_err());
        assert!(catalog.toolkit_by_slug("gmail").await.is_err());
        assert!(catalog.toolkit_icon("gmail").await.is_none());
        assert!(catalog.toolkit_detail("gmail").await.is_none());
    }

    #[tokio::test]
    async fn detail_and_icon_come_from_added_records() {
        let mut catalog = MockCatalog::new();
        catalog.add_detail(ToolkitDetail {
            slug: "gmail".into(),
            name: "Gmail".into(),
            description: None,
            logo: Some("g.png".into()),
            tags: Vec::new(),
            auth_schemes: vec!["OAUTH2".into()],
            categories: Vec::new(),
            auth_config_details: Vec::new(),
            connected_account_initiation_fields: None,
            base_url: None,
        });

        assert_eq!(catalog.toolkit_icon("gmail").await.as_deref(), Some("g.png"));
        assert_eq!(catalog.toolkit_detail("gmail").await.unwrap().name, "Gmail");
        assert!(catalog.toolkit_detail("slack").await.is_none());
    }
}
