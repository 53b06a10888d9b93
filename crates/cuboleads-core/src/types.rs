//! Domain types shared by the places client, the site analyzer and the lead builder.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Website value recorded for businesses with no site on file.
pub const NO_WEBSITE_SENTINEL: &str = "NÃO POSSUI";

/// Urgency forced onto every lead without a website.
pub const NO_WEBSITE_URGENCY: u8 = 100;

/// Fallback for missing phone numbers and addresses.
pub const DEFAULT_PLACEHOLDER: &str = "N/A";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("category must not be empty")]
    EmptyCategory,

    #[error("location must not be empty")]
    EmptyLocation,
}

/// A business category and the place to look for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub category: String,
    pub location: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(category: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            location: location.into(),
        }
    }

    /// Free-text query sent to the places text search: `"<category> em <location>"`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{} em {}", self.category.trim(), self.location.trim())
    }

    /// Rejects queries with a blank category or location.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyCategory`] or [`QueryError::EmptyLocation`].
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.category.trim().is_empty() {
            return Err(QueryError::EmptyCategory);
        }
        if self.location.trim().is_empty() {
            return Err(QueryError::EmptyLocation);
        }
        Ok(())
    }
}

/// One entry of a text-search response. Only the identifier is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
}

/// Contact details of a single place, as returned by the details endpoint.
///
/// Every field is optional upstream; the accessors apply the defaults used
/// when building lead records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "formatted_phone_number")]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default, rename = "formatted_address")]
    pub address: Option<String>,
}

impl PlaceDetail {
    #[must_use]
    pub fn name_or_default(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn phone_or_default(&self) -> String {
        self.phone
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string())
    }

    #[must_use]
    pub fn address_or_default(&self) -> String {
        self.address
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string())
    }

    /// The website, with empty or whitespace-only values treated as absent.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.website
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }
}

/// Problems found on a business's website and the resulting urgency score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub problems: Vec<String>,
    /// `0..=100`; higher means a more actionable lead.
    pub urgency: u8,
}

impl AnalysisResult {
    #[must_use]
    pub fn new(problems: Vec<String>, urgency: u8) -> Self {
        Self {
            problems,
            urgency: urgency.min(100),
        }
    }

    #[must_use]
    pub fn single(problem: impl Into<String>, urgency: u8) -> Self {
        Self::new(vec![problem.into()], urgency)
    }

    /// Problems joined with `", "` as shown in the lead table.
    #[must_use]
    pub fn joined_problems(&self) -> String {
        self.problems.join(", ")
    }
}

/// A business enriched with contact info and its urgency score.
///
/// Serialized field names are the exported column labels, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadRecord {
    #[serde(rename = "Empresa")]
    pub company: String,
    #[serde(rename = "Urgência (0-100)")]
    pub urgency: u8,
    #[serde(rename = "Problemas Detectados")]
    pub problems_joined: String,
    #[serde(rename = "Telefone")]
    pub phone: String,
    /// A real URL or [`NO_WEBSITE_SENTINEL`].
    #[serde(rename = "Site")]
    pub website: String,
    #[serde(rename = "Endereço")]
    pub address: String,
}

impl LeadRecord {
    #[must_use]
    pub fn has_website(&self) -> bool {
        self.website != NO_WEBSITE_SENTINEL
    }
}
