//! Lead search orchestration.

use cuboleads_analyzer::SiteAnalyzer;
use cuboleads_core::{
    AnalysisResult, AppConfig, LeadRecord, PlaceDetail, SearchQuery, NO_WEBSITE_SENTINEL,
    NO_WEBSITE_URGENCY,
};
use cuboleads_places::PlacesClient;

use crate::error::LeadsError;

/// What to do when one place's details cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailFailurePolicy {
    /// Fail the whole search.
    #[default]
    AbortBatch,
    /// Log the failure, drop that place and keep going.
    SkipPlace,
}

/// Result of a lead search.
///
/// A failed search carries its reason for operators; callers that only look
/// at [`LeadSearchOutcome::leads`] see an empty list either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadSearchOutcome {
    Found(Vec<LeadRecord>),
    Failed { reason: String },
}

impl LeadSearchOutcome {
    #[must_use]
    pub fn leads(&self) -> &[LeadRecord] {
        match self {
            Self::Found(leads) => leads,
            Self::Failed { .. } => &[],
        }
    }

    #[must_use]
    pub fn into_leads(self) -> Vec<LeadRecord> {
        match self {
            Self::Found(leads) => leads,
            Self::Failed { .. } => Vec::new(),
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Turns a `(category, location)` query into ranked lead records.
///
/// Places are processed one at a time in search-result order.
pub struct LeadBuilder {
    places: PlacesClient,
    analyzer: SiteAnalyzer,
    detail_failure_policy: DetailFailurePolicy,
}

impl LeadBuilder {
    #[must_use]
    pub fn new(places: PlacesClient, analyzer: SiteAnalyzer) -> Self {
        Self {
            places,
            analyzer,
            detail_failure_policy: DetailFailurePolicy::default(),
        }
    }

    /// Builds the places client and site analyzer from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError`] if either HTTP client cannot be constructed or
    /// the configured Places base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, LeadsError> {
        let places = PlacesClient::with_base_url(
            &config.google_api_key,
            config.places_timeout_secs,
            &config.places_base_url,
        )?;
        let analyzer = SiteAnalyzer::new(config.site_timeout_secs, &config.site_user_agent)?;
        Ok(Self::new(places, analyzer))
    }

    #[must_use]
    pub fn with_detail_failure_policy(mut self, policy: DetailFailurePolicy) -> Self {
        self.detail_failure_policy = policy;
        self
    }

    /// Runs a full search and returns leads sorted by descending urgency.
    ///
    /// Never returns an error: invalid queries, search failures and (under
    /// [`DetailFailurePolicy::AbortBatch`]) detail failures are logged and
    /// reported as [`LeadSearchOutcome::Failed`].
    pub async fn build_leads(&self, query: &SearchQuery) -> LeadSearchOutcome {
        match self.try_build_leads(query).await {
            Ok(leads) => {
                tracing::info!(
                    query = %query.text(),
                    leads = leads.len(),
                    "lead search complete"
                );
                LeadSearchOutcome::Found(leads)
            }
            Err(e) => {
                tracing::error!(query = %query.text(), error = %e, "lead search failed");
                LeadSearchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn try_build_leads(&self, query: &SearchQuery) -> Result<Vec<LeadRecord>, LeadsError> {
        query.validate()?;

        let places = self.places.text_search(&query.text()).await?;
        let mut leads = Vec::with_capacity(places.len());

        for place in &places {
            let detail = match self.places.place_details(&place.place_id).await {
                Ok(detail) => detail,
                Err(e) => match self.detail_failure_policy {
                    DetailFailurePolicy::AbortBatch => return Err(e.into()),
                    DetailFailurePolicy::SkipPlace => {
                        tracing::warn!(
                            place_id = %place.place_id,
                            error = %e,
                            "skipping place, details unavailable"
                        );
                        continue;
                    }
                },
            };

            let analysis = self.analyzer.analyze(detail.website()).await;
            leads.push(assemble_lead(&detail, analysis));
        }

        rank_leads(&mut leads);
        Ok(leads)
    }
}

/// Merges a place's details with its site analysis.
///
/// A place without a website gets [`NO_WEBSITE_SENTINEL`] as its website and
/// urgency [`NO_WEBSITE_URGENCY`], whatever the analyzer scored.
#[must_use]
pub fn assemble_lead(detail: &PlaceDetail, analysis: AnalysisResult) -> LeadRecord {
    let (website, urgency) = match detail.website() {
        Some(site) => (site.to_string(), analysis.urgency),
        None => (NO_WEBSITE_SENTINEL.to_string(), NO_WEBSITE_URGENCY),
    };

    LeadRecord {
        company: detail.name_or_default(),
        urgency,
        problems_joined: analysis.joined_problems(),
        phone: detail.phone_or_default(),
        website,
        address: detail.address_or_default(),
    }
}

/// Sorts by descending urgency. Stable: ties keep discovery order.
pub fn rank_leads(leads: &mut [LeadRecord]) {
    leads.sort_by(|a, b| b.urgency.cmp(&a.urgency));
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;
