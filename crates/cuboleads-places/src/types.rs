//! Places API response envelopes.
//!
//! Both endpoints wrap their payload in `{"status": "...", ...}`; the status
//! is checked separately before these types are deserialized.

use cuboleads_core::{PlaceDetail, PlaceSummary};
use serde::Deserialize;

/// `textsearch/json`: `{ "results": [ { "place_id": ... }, ... ] }`.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// `details/json`: `{ "result": { ... } }`. A missing `result` is treated as
/// a place with no details.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    #[serde(default)]
    pub result: Option<PlaceDetail>,
}
