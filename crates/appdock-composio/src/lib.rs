// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Composio catalog adapter for the Appdock framework.
//!
//! This crate implements [`CatalogAdapter`] over the Composio toolkit catalog
//! API. It normalizes the catalog's loosely-shaped responses into the stable
//! records in [`appdock_core::types`] and applies the OAUTH2 capability
//! filter: only toolkits carrying `"OAUTH2"` in both their declared and their
//! provider-managed auth scheme lists are surfaced.

pub mod client;
pub mod raw;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use appdock_config::ComposioConfig;
use appdock_core::error::AppdockError;
use appdock_core::traits::CatalogAdapter;
use appdock_core::types::{
    AuthConfigDetail, AuthConfigField, Category, FieldRequirements, ListQuery, SearchQuery,
    ToolkitDetail, ToolkitPage, ToolkitSummary,
};

use crate::client::ComposioClient;
use crate::raw::{RawAuthConfig, RawField, RawFieldGroup, RawToolkit};

/// Auth scheme required in both scheme lists for a toolkit to be surfaced.
const OAUTH2: &str = "OAUTH2";

/// Field group holding the fields a user supplies when linking an account.
const INITIATION_GROUP: &str = "connected_account_initiation";

/// Fixed category set exposed by `list_categories`. Process-wide constant,
/// not derived from the catalog.
const CATEGORIES: [(&str, &str); 8] = [
    ("popular", "Popular"),
    ("productivity", "Productivity"),
    ("crm", "CRM"),
    ("marketing", "Marketing"),
    ("analytics", "Analytics"),
    ("communication", "Communication"),
    ("project-management", "Project Management"),
    ("scheduling", "Scheduling"),
];

/// Composio catalog backend implementing [`CatalogAdapter`].
///
/// Stateless and request-scoped: every call issues at most one upstream
/// request and rebuilds its records from the response.
pub struct ComposioCatalog {
    client: ComposioClient,
}

impl ComposioCatalog {
    /// Creates a new Composio catalog adapter from the given configuration.
    pub fn new(config: &ComposioConfig) -> Result<Self, AppdockError> {
        let client = ComposioClient::new(config)?;
        info!("Composio catalog adapter initialized");
        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogAdapter for ComposioCatalog {
    async fn list_categories(&self) -> Result<Vec<Category>, AppdockError> {
        let categories: Vec<Category> = CATEGORIES
            .iter()
            .map(|(id, name)| Category {
                id: (*id).to_string(),
                name: (*name).to_string(),
            })
            .collect();
        debug!(count = categories.len(), "listed catalog categories");
        Ok(categories)
    }

    async fn list_toolkits(&self, query: ListQuery) -> Result<ToolkitPage, AppdockError> {
        info!(
            limit = query.limit,
            cursor = query.cursor.as_deref(),
            category = query.category.as_deref(),
            "fetching toolkits"
        );

        let raw = match self.client.list_toolkits(&query).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(error = %e, "failed to list toolkits");
                return Err(e);
            }
        };

        let items: Vec<ToolkitSummary> = raw.items.iter().filter_map(summarize).collect();
        let page = ToolkitPage {
            total_items: raw.total_items.unwrap_or(items.len() as u64),
            total_pages: raw.total_pages.unwrap_or(1),
            current_page: raw.current_page.unwrap_or(1),
            next_cursor: raw.next_cursor,
            items,
        };

        info!(
            count = page.items.len(),
            "fetched toolkits with managed OAUTH2 support"
        );
        Ok(page)
    }

    async fn toolkit_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<ToolkitSummary>, AppdockError> {
        let page = match self.list_toolkits(ListQuery::default()).await {
            Ok(page) => page,
            Err(e) => {
                error!(slug, error = %e, "failed to look up toolkit");
                return Err(e);
            }
        };
        Ok(page.items.into_iter().find(|toolkit| toolkit.slug == slug))
    }

    async fn search_toolkits(
        &self,
        query: &str,
        opts: SearchQuery,
    ) -> Result<ToolkitPage, AppdockError> {
        let listing = self
            .list_toolkits(ListQuery {
                limit: 500,
                cursor: opts.cursor,
                category: opts.category,
            })
            .await?;

        let needle = query.to_lowercase();
        let mut matches: Vec<ToolkitSummary> = listing
            .items
            .into_iter()
            .filter(|toolkit| matches_query(toolkit, &needle))
            .collect();
        let total_items = matches.len() as u64;
        matches.truncate(opts.limit as usize);

        info!(total = total_items, query, "found toolkits matching query");

        // Search is single-page: cursor pagination does not apply to the
        // filtered result set.
        Ok(ToolkitPage {
            items: matches,
            total_items,
            total_pages: 1,
            current_page: 1,
            next_cursor: None,
        })
    }

    async fn toolkit_icon(&self, slug: &str) -> Option<String> {
        debug!(slug, "fetching toolkit icon");
        match self.client.retrieve_toolkit(slug).await {
            Ok(raw) => raw.meta.and_then(|meta| meta.logo),
            Err(e) => {
                warn!(slug, error = %e, "failed to fetch toolkit icon");
                None
            }
        }
    }

    async fn toolkit_detail(&self, slug: &str) -> Option<ToolkitDetail> {
        debug!(slug, "fetching detailed toolkit info");
        match self.client.retrieve_toolkit(slug).await {
            Ok(raw) => Some(detail_from_raw(raw)),
            Err(e) => {
                warn!(slug, error = %e, "failed to fetch toolkit detail");
                None
            }
        }
    }
}

/// Checks whether a summary matches a lowercased search needle in its name,
/// description, or any tag.
fn matches_query(toolkit: &ToolkitSummary, needle: &str) -> bool {
    toolkit.name.to_lowercase().contains(needle)
        || toolkit
            .description
            .as_ref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
        || toolkit
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Builds a summary from a raw listing item, or `None` when the toolkit does
/// not carry OAUTH2 in both scheme lists.
///
/// Logo and description prefer the nested `meta` substructure, falling back
/// to the top-level fields some catalog versions emit instead.
fn summarize(raw: &RawToolkit) -> Option<ToolkitSummary> {
    if !raw.auth_schemes.iter().any(|scheme| scheme == OAUTH2)
        || !raw
            .composio_managed_auth_schemes
            .iter()
            .any(|scheme| scheme == OAUTH2)
    {
        return None;
    }

    let meta = raw.meta.clone().unwrap_or_default();
    let (tags, categories): (Vec<String>, Vec<String>) = meta
        .categories
        .iter()
        .map(|category| (category.name.clone(), category.id.clone()))
        .unzip();

    Some(ToolkitSummary {
        slug: raw.slug.clone(),
        name: raw.name.clone(),
        description: meta.description.or_else(|| raw.description.clone()),
        logo: meta.logo.or_else(|| raw.logo.clone()),
        tags,
        auth_schemes: raw.auth_schemes.clone(),
        categories,
    })
}

/// Normalizes a full raw toolkit record into a [`ToolkitDetail`].
///
/// The detail record carries the provider-managed scheme list as its
/// `auth_schemes` and category names as its `categories`. The
/// `connected_account_initiation_fields` come from the first auth config
/// declaring that field group.
fn detail_from_raw(raw: RawToolkit) -> ToolkitDetail {
    let meta = raw.meta.unwrap_or_default();

    let auth_config_details: Vec<AuthConfigDetail> =
        raw.auth_config_details.iter().map(auth_config_from_raw).collect();

    let connected_account_initiation_fields = raw
        .auth_config_details
        .iter()
        .find_map(|config| config.fields.get(INITIATION_GROUP))
        .map(requirements_from_raw);

    ToolkitDetail {
        slug: raw.slug,
        name: raw.name,
        description: meta.description,
        logo: meta.logo,
        tags: Vec::new(),
        auth_schemes: raw.composio_managed_auth_schemes,
        categories: meta
            .categories
            .iter()
            .map(|category| category.name.clone())
            .collect(),
        auth_config_details,
        connected_account_initiation_fields,
        base_url: raw.base_url,
    }
}

fn auth_config_from_raw(config: &RawAuthConfig) -> AuthConfigDetail {
    AuthConfigDetail {
        name: config.name.clone(),
        mode: config.mode.clone(),
        fields: config
            .fields
            .iter()
            .map(|(group, fields)| (group.clone(), requirements_from_raw(fields)))
            .collect(),
    }
}

fn requirements_from_raw(group: &RawFieldGroup) -> FieldRequirements {
    FieldRequirements {
        required: group.required.iter().map(field_from_raw).collect(),
        optional: group.optional.iter().map(field_from_raw).collect(),
    }
}

fn field_from_raw(field: &RawField) -> AuthConfigField {
    AuthConfigField {
        name: field.name.clone(),
        display_name: field.display_name.clone(),
        field_type: field.field_type.clone(),
        description: field.description.clone(),
        required: field.required,
        default: field.default.clone(),
        legacy_template_name: field.legacy_template_name.clone(),
    }
}
