//! HTTP client for the Google Places REST API.
//!
//! Wraps `reqwest` with API key management, envelope status checks and typed
//! response deserialization. Only the first page of text-search results is
//! ever requested.

use std::time::Duration;

use cuboleads_core::{PlaceDetail, PlaceSummary};
use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{DetailsResponse, TextSearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Fields requested from the details endpoint.
pub const DETAIL_FIELDS: &str = "name,formatted_phone_number,website,formatted_address";

/// Client for the Places text-search and details endpoints.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("cuboleads/0.1 (lead-discovery)")
            .build()?;

        // Exactly one trailing slash so endpoint paths are joined under the
        // base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Runs a free-text place search and returns the first page of results.
    ///
    /// `ZERO_RESULTS` yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API returns an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn text_search(&self, query: &str) -> Result<Vec<PlaceSummary>, PlacesError> {
        let url = self.build_url("textsearch/json", &[("query", query)])?;
        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let response: TextSearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("textsearch(query={query})"),
                source: e,
            })?;

        if response.next_page_token.is_some() {
            tracing::debug!(query, "more results available; only the first page is used");
        }
        tracing::info!(query, count = response.results.len(), "text search complete");

        Ok(response.results)
    }

    /// Fetches name, phone, website and address for a single place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the API returns an error status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let url = self.build_url(
            "details/json",
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_api_status(&body)?;

        let response: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        Ok(response.result.unwrap_or_default())
    }

    /// Builds the endpoint URL with percent-encoded query parameters, `key` last.
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// Transport errors are stripped of their URL, which carries the API key.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: redact_key(url),
            source: e,
        })
    }

    /// Checks the envelope `"status"`. `OK`, `ZERO_RESULTS` and a missing
    /// status pass; anything else is an API error.
    fn check_api_status(body: &serde_json::Value) -> Result<(), PlacesError> {
        let Some(status) = body.get("status").and_then(serde_json::Value::as_str) else {
            return Ok(());
        };
        match status {
            "OK" | "ZERO_RESULTS" => Ok(()),
            other => {
                let message = body
                    .get("error_message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("no error message")
                    .to_string();
                Err(PlacesError::Api {
                    status: other.to_string(),
                    message,
                })
            }
        }
    }
}

/// Renders `url` without its `key` parameter, for error contexts and logs.
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "key")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
