// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Normalized catalog record types shared across adapter implementations.
//!
//! These are the stable shapes handed to calling applications. They are
//! rebuilt from the upstream response on every call; nothing here is
//! persisted or cached.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A toolkit category (e.g., "crm", "communication").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable category identifier.
    pub id: String,
    /// Human-readable category name.
    pub name: String,
}

/// A normalized toolkit listing entry.
///
/// Every summary produced by listing or search carries `"OAUTH2"` in its
/// `auth_schemes`; entries without provider-managed OAUTH2 support are
/// dropped during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitSummary {
    /// Unique toolkit slug (e.g., "gmail").
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Short description, when the upstream record carries one.
    pub description: Option<String>,
    /// Logo URL.
    pub logo: Option<String>,
    /// Category names, used as free-text search tags.
    pub tags: Vec<String>,
    /// Declared authentication schemes.
    pub auth_schemes: Vec<String>,
    /// Category ids.
    pub categories: Vec<String>,
}

/// A single field within an auth config profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfigField {
    /// Machine name of the field.
    pub name: String,
    /// Human-readable label.
    pub display_name: String,
    /// Field value type (e.g., "string").
    #[serde(rename = "type")]
    pub field_type: String,
    /// Optional help text.
    pub description: Option<String>,
    /// Whether the field must be provided.
    pub required: bool,
    /// Default value, when one exists.
    pub default: Option<String>,
    /// Legacy template name carried through for older integrations.
    pub legacy_template_name: Option<String>,
}

/// Fields of one group split by requirement level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRequirements {
    /// Fields that must be supplied.
    pub required: Vec<AuthConfigField>,
    /// Fields that may be supplied.
    pub optional: Vec<AuthConfigField>,
}

/// A named auth configuration profile for a toolkit.
///
/// `fields` maps a field group name (e.g., "auth_config_creation",
/// "connected_account_initiation") to its required/optional field lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfigDetail {
    /// Profile name.
    pub name: String,
    /// Auth mode (e.g., "OAUTH2", "API_KEY").
    pub mode: String,
    /// Field groups keyed by group name.
    pub fields: BTreeMap<String, FieldRequirements>,
}

/// Full toolkit record with auth configuration details.
///
/// Unlike [`ToolkitSummary`], `auth_schemes` here carries the
/// provider-managed scheme list and `categories` carries category names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitDetail {
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub tags: Vec<String>,
    pub auth_schemes: Vec<String>,
    pub categories: Vec<String>,
    /// Auth configuration profiles declared by the toolkit.
    pub auth_config_details: Vec<AuthConfigDetail>,
    /// Fields needed when a user initiates linking their account, taken from
    /// the first auth config that declares a `connected_account_initiation`
    /// field group.
    pub connected_account_initiation_fields: Option<FieldRequirements>,
    /// Upstream API base URL for the toolkit, when declared.
    pub base_url: Option<String>,
}

/// A page of toolkit summaries with pass-through pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitPage {
    pub items: Vec<ToolkitSummary>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub next_cursor: Option<String>,
}

/// Parameters for a toolkit listing call.
#[derive(Debug, Clone)]
pub struct ListQuery {
    /// Maximum number of raw items to fetch.
    pub limit: u32,
    /// Opaque pagination cursor passed through to the catalog.
    pub cursor: Option<String>,
    /// Category id filter passed through to the catalog.
    pub category: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: 500,
            cursor: None,
            category: None,
        }
    }
}

impl ListQuery {
    /// Listing query restricted to one category.
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }
}

/// Parameters for a free-text toolkit search.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Maximum number of matches to return.
    pub limit: u32,
    /// Opaque pagination cursor forwarded to the underlying listing call.
    pub cursor: Option<String>,
    /// Category id filter forwarded to the underlying listing call.
    pub category: Option<String>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            cursor: None,
            category: None,
        }
    }
}
