// SPDX-FileCopyrightText: 2026 Appdock Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Composio catalog API.
//!
//! Provides [`ComposioClient`] which handles request construction,
//! authentication, and response decoding. Retry and cancellation policy
//! belong to the caller; each method issues exactly one request.

use std::time::Duration;

use appdock_config::ComposioConfig;
use appdock_core::types::ListQuery;
use appdock_core::AppdockError;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::raw::{RawErrorResponse, RawToolkit, RawToolkitList};

/// Base URL for the Composio catalog API.
const API_BASE_URL: &str = "https://backend.composio.dev/api/v3";

/// HTTP client for Composio catalog communication.
///
/// Manages the `x-api-key` authentication header and connection pooling.
/// Constructable without an API key; the public listing endpoints accept
/// unauthenticated requests.
#[derive(Debug, Clone)]
pub struct ComposioClient {
    client: reqwest::Client,
    base_url: String,
}

impl ComposioClient {
    /// Creates a new catalog client from the given configuration.
    ///
    /// # API Key Resolution
    /// 1. `config.api_key` if set and non-empty
    /// 2. `COMPOSIO_API_KEY` environment variable
    /// 3. Unauthenticated client
    pub fn new(config: &ComposioConfig) -> Result<Self, AppdockError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = resolve_api_key(&config.api_key) {
            headers.insert(
                "x-api-key",
                HeaderValue::from_str(&key).map_err(|e| {
                    AppdockError::Config(format!("invalid API key header value: {e}"))
                })?,
            );
        }
        headers.insert("accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppdockError::Catalog {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| API_BASE_URL.to_string()),
        })
    }

    /// Fetches a raw toolkit listing.
    ///
    /// Always requests `managed_by=composio`; cursor and category are passed
    /// through when present.
    pub async fn list_toolkits(&self, query: &ListQuery) -> Result<RawToolkitList, AppdockError> {
        let mut params: Vec<(&str, String)> = vec![
            ("limit", query.limit.to_string()),
            ("managed_by", "composio".to_string()),
        ];
        if let Some(ref cursor) = query.cursor {
            params.push(("cursor", cursor.clone()));
        }
        if let Some(ref category) = query.category {
            params.push(("category", category.clone()));
        }

        let response = self
            .client
            .get(format!("{}/toolkits", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| AppdockError::Catalog {
                message: format!("toolkit listing request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        self.decode(response).await
    }

    /// Fetches a single raw toolkit record by slug.
    pub async fn retrieve_toolkit(&self, slug: &str) -> Result<RawToolkit, AppdockError> {
        let response = self
            .client
            .get(format!("{}/toolkits/{slug}", self.base_url))
            .send()
            .await
            .map_err(|e| AppdockError::Catalog {
                message: format!("toolkit retrieval request failed for {slug}: {e}"),
                source: Some(Box::new(e)),
            })?;

        self.decode(response).await
    }

    /// Checks status and decodes a catalog response body.
    ///
    /// Non-success statuses are folded into a `Catalog` error, with the
    /// upstream error envelope's message when the body parses as one.
    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppdockError> {
        let status = response.status();
        debug!(status = %status, "catalog response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(envelope) = serde_json::from_str::<RawErrorResponse>(&body) {
                format!("catalog API error ({status}): {}", envelope.error.message)
            } else {
                format!("catalog API returned {status}: {body}")
            };
            return Err(AppdockError::Catalog {
                message,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| AppdockError::Catalog {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body).map_err(|e| AppdockError::Decode {
            message: format!("failed to parse catalog response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

/// Resolves the API key from config or environment. Empty values are treated
/// as unset.
fn resolve_api_key(config_key: &Option<String>) -> Option<String> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Some(key.clone());
    }
    std::env::var("COMPOSIO_API_KEY")
        .ok()
        .filter(|key| !key.is_empty())
}
