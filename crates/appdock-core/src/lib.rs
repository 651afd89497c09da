// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Appdock toolkit catalog adapter.
//!
//! This crate provides the [`CatalogAdapter`] trait, the [`AppdockError`]
//! error type, and the normalized record types that catalog backends produce.
//! Backend crates (e.g., the Composio adapter) implement the trait defined
//! here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::AppdockError;
pub use traits::CatalogAdapter;
pub use types::{
    AuthConfigDetail, AuthConfigField, Category, FieldRequirements, ListQuery, SearchQuery,
    ToolkitDetail, ToolkitPage, ToolkitSummary,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appdock_error_has_all_variants() {
        // Verify all 4 error variants exist and can be constructed.
        let _config = AppdockError::Config("test".into());
        let _catalog = AppdockError::Catalog {
            message: "test".into(),
            source: Some(Box::new(std::io::Error::other("test"))),
        };
        let _decode = AppdockError::Decode {
            message: "test".into(),
            source: None,
        };
        let _internal = AppdockError::Internal("test".into());
    }

    #[test]
    fn error_display_includes_context() {
        let err = AppdockError::Catalog {
            message: "listing failed".into(),
            source: None,
        };
        assert_eq!(err.to_string(), "catalog error: listing failed");

        let err = AppdockError::Config("bad key".into());
        assert_eq!(err.to_string(), "configuration error: bad key");
    }

    #[test]
    fn list_query_defaults() {
        let q = ListQuery::default();
        assert_eq!(q.limit, 500);
        assert!(q.cursor.is_none());
        assert!(q.category.is_none());
    }

    #[test]
    fn list_query_for_category() {
        let q = ListQuery::for_category("crm");
        assert_eq!(q.limit, 500);
        assert_eq!(q.category.as_deref(), Some("crm"));
    }

    #[test]
    fn search_query_defaults() {
        let q = SearchQuery::default();
        assert_eq!(q.limit, 100);
        assert!(q.cursor.is_none());
        assert!(q.category.is_none());
    }

    #[test]
    fn toolkit_summary_serialization_round_trip() {
        let summary = ToolkitSummary {
            slug: "gmail".into(),
            name: "Gmail".into(),
            description: Some("Email".into()),
            logo: Some("g.png".into()),
            tags: vec!["Communication".into()],
            auth_schemes: vec!["OAUTH2".into()],
            categories: vec!["comm".into()],
        };
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: ToolkitSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, parsed);
    }

    #[test]
    fn auth_config_field_serializes_type_key() {
        let field = AuthConfigField {
            name: "client_id".into(),
            display_name: "Client ID".into(),
            field_type: "string".into(),
            description: None,
            required: true,
            default: None,
            legacy_template_name: None,
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "string");
        assert_eq!(json["display_name"], "Client ID");
    }

    #[test]
    fn catalog_adapter_is_object_safe() {
        // The trait must support dynamic dispatch for downstream consumers.
        fn _assert(_: &dyn CatalogAdapter) {}
    }
}
