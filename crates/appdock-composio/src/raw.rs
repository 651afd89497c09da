// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw wire types for Composio catalog responses.
//!
//! The upstream SDK's schema is unstable: keys arrive in snake_case or
//! camelCase depending on the endpoint version, nested substructures may be
//! absent, and field lists may be empty or missing. These types absorb all of
//! that once, at the deserialization boundary: every field defaults, `alias`
//! attributes accept both spellings, and unknown keys are ignored. The
//! adapter then normalizes from these into the stable records in
//! `appdock_core::types`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Raw paginated listing as returned by `GET /toolkits`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawToolkitList {
    #[serde(default)]
    pub items: Vec<RawToolkit>,
    #[serde(default, alias = "totalItems")]
    pub total_items: Option<u64>,
    #[serde(default, alias = "totalPages")]
    pub total_pages: Option<u32>,
    #[serde(default, alias = "currentPage")]
    pub current_page: Option<u32>,
    #[serde(default, alias = "nextCursor")]
    pub next_cursor: Option<String>,
}

/// A raw toolkit record from listing or retrieval.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawToolkit {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    /// Top-level description, used as fallback when `meta` carries none.
    #[serde(default)]
    pub description: Option<String>,
    /// Top-level logo, used as fallback when `meta` carries none.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, alias = "authSchemes")]
    pub auth_schemes: Vec<String>,
    #[serde(default, alias = "composioManagedAuthSchemes")]
    pub composio_managed_auth_schemes: Vec<String>,
    #[serde(default)]
    pub meta: Option<RawMeta>,
    #[serde(default, alias = "baseUrl")]
    pub base_url: Option<String>,
    #[serde(default, alias = "authConfigDetails")]
    pub auth_config_details: Vec<RawAuthConfig>,
}

/// Nested metadata substructure of a toolkit record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMeta {
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<RawCategory>,
}

/// A category reference inside toolkit metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A raw auth configuration profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mode: String,
    /// Field groups keyed by group name (e.g., "auth_config_creation",
    /// "connected_account_initiation").
    #[serde(default)]
    pub fields: BTreeMap<String, RawFieldGroup>,
}

/// Required/optional field lists of one field group.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFieldGroup {
    #[serde(default)]
    pub required: Vec<RawField>,
    #[serde(default)]
    pub optional: Vec<RawField>,
}

/// A single raw auth config field.
#[derive(Debug, Clone, Deserialize)]
pub struct RawField {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "displayName")]
    pub display_name: String,
    #[serde(rename = "type", default = "default_field_type")]
    pub field_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default, alias = "legacyTemplateName")]
    pub legacy_template_name: Option<String>,
}

fn default_field_type() -> String {
    "string".to_string()
}

/// Error envelope returned by the catalog API on non-success status.
#[derive(Debug, Clone, Deserialize)]
pub struct RawErrorResponse {
    pub error: RawErrorDetail,
}

/// Error detail within a catalog error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct RawErrorDetail {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_listing_with_snake_case_keys() {
        let json = r#"{
            "items": [{"slug": "gmail", "name": "Gmail"}],
            "total_items": 42,
            "total_pages": 3,
            "current_page": 1,
            "next_cursor": "abc"
        }"#;
        let list: RawToolkitList = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.total_items, Some(42));
        assert_eq!(list.total_pages, Some(3));
        assert_eq!(list.current_page, Some(1));
        assert_eq!(list.next_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn deserialize_listing_with_camel_case_keys() {
        let json = r#"{
            "items": [],
            "totalItems": 42,
            "totalPages": 3,
            "currentPage": 1,
            "nextCursor": "abc"
        }"#;
        let list: RawToolkitList = serde_json::from_str(json).unwrap();
        assert_eq!(list.total_items, Some(42));
        assert_eq!(list.total_pages, Some(3));
        assert_eq!(list.next_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn deserialize_listing_without_pagination_fields() {
        let list: RawToolkitList = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(list.total_items.is_none());
        assert!(list.total_pages.is_none());
        assert!(list.current_page.is_none());
        assert!(list.next_cursor.is_none());
    }

    #[test]
    fn deserialize_toolkit_accepts_both_scheme_spellings() {
        let snake: RawToolkit = serde_json::from_str(
            r#"{"slug": "slack", "auth_schemes": ["OAUTH2"], "composio_managed_auth_schemes": ["OAUTH2"]}"#,
        )
        .unwrap();
        let camel: RawToolkit = serde_json::from_str(
            r#"{"slug": "slack", "authSchemes": ["OAUTH2"], "composioManagedAuthSchemes": ["OAUTH2"]}"#,
        )
        .unwrap();
        assert_eq!(snake.auth_schemes, camel.auth_schemes);
        assert_eq!(
            snake.composio_managed_auth_schemes,
            camel.composio_managed_auth_schemes
        );
    }

    #[test]
    fn deserialize_toolkit_with_null_meta() {
        let toolkit: RawToolkit =
            serde_json::from_str(r#"{"slug": "gmail", "meta": null}"#).unwrap();
        assert!(toolkit.meta.is_none());
    }

    #[test]
    fn deserialize_toolkit_ignores_unknown_keys() {
        let toolkit: RawToolkit = serde_json::from_str(
            r#"{"slug": "gmail", "is_local_toolkit": false, "enabled_by_default": true}"#,
        )
        .unwrap();
        assert_eq!(toolkit.slug, "gmail");
    }

    #[test]
    fn deserialize_field_defaults_type_to_string() {
        let field: RawField =
            serde_json::from_str(r#"{"name": "client_id", "displayName": "Client ID"}"#).unwrap();
        assert_eq!(field.field_type, "string");
        assert_eq!(field.display_name, "Client ID");
        assert!(!field.required);
    }

    #[test]
    fn deserialize_field_accepts_snake_case_display_name() {
        let field: RawField = serde_json::from_str(
            r#"{"name": "client_id", "display_name": "Client ID", "type": "password", "required": true}"#,
        )
        .unwrap();
        assert_eq!(field.display_name, "Client ID");
        assert_eq!(field.field_type, "password");
        assert!(field.required);
    }

    #[test]
    fn deserialize_auth_config_with_field_groups() {
        let json = r#"{
            "name": "default",
            "mode": "OAUTH2",
            "fields": {
                "auth_config_creation": {
                    "required": [{"name": "client_id"}],
                    "optional": []
                },
                "connected_account_initiation": {
                    "optional": [{"name": "scope"}]
                }
            }
        }"#;
        let config: RawAuthConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mode, "OAUTH2");
        assert_eq!(config.fields.len(), 2);
        let creation = &config.fields["auth_config_creation"];
        assert_eq!(creation.required.len(), 1);
        // Missing "required" list in a group defaults to empty.
        let initiation = &config.fields["connected_account_initiation"];
        assert!(initiation.required.is_empty());
        assert_eq!(initiation.optional.len(), 1);
    }

    #[test]
    fn deserialize_error_envelope() {
        let json = r#"{"error": {"message": "invalid api key", "code": 401}}"#;
        let err: RawErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.message, "invalid api key");
    }
}
