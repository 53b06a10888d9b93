//! HTTP side of the site analysis.

use std::time::Duration;

use cuboleads_core::AnalysisResult;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{redirect, Client, StatusCode};

use crate::error::AnalyzerError;
use crate::failure::SiteFailure;
use crate::page::evaluate_page;

/// Reported for businesses with no website on file.
pub const NO_WEBSITE_PROBLEM: &str = "SEM SITE (Oportunidade Alta)";

/// Urgency returned for the no-website case. Lead records override it.
pub const NO_WEBSITE_ANALYZER_URGENCY: u8 = 50;

const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en-US;q=0.8,en;q=0.7";
const MAX_REDIRECTS: usize = 30;

/// Fetches business websites and scores their web presence.
///
/// Certificate verification is disabled so pages behind broken TLS setups
/// can still be read; redirects are followed and the final URL decides
/// whether the site counts as HTTPS.
pub struct SiteAnalyzer {
    client: Client,
}

impl SiteAnalyzer {
    /// Creates an analyzer with a browser-like `User-Agent` and a per-site
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, AnalyzerError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .default_headers(headers)
            .danger_accept_invalid_certs(true)
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }

    /// Analyzes `website`, never failing: unreachable sites are themselves
    /// findings.
    pub async fn analyze(&self, website: Option<&str>) -> AnalysisResult {
        let Some(url) = website.map(str::trim).filter(|w| !w.is_empty()) else {
            return AnalysisResult::single(NO_WEBSITE_PROBLEM, NO_WEBSITE_ANALYZER_URGENCY);
        };

        let result = self
            .fetch(url)
            .await
            .unwrap_or_else(SiteFailure::into_result);
        tracing::debug!(url, urgency = result.urgency, problems = ?result.problems, "site analyzed");
        result
    }

    async fn fetch(&self, url: &str) -> Result<AnalysisResult, SiteFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::failure(url, &e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SiteFailure::BadStatus(status.as_u16()));
        }

        let final_url = response.url().to_string();
        let body = response
            .text()
            .await
            .map_err(|e| Self::failure(url, &e))?;

        Ok(evaluate_page(&final_url, &body))
    }

    fn failure(url: &str, err: &reqwest::Error) -> SiteFailure {
        let failure = SiteFailure::classify(err);
        tracing::debug!(url, ?failure, error = %err, "site fetch failed");
        failure
    }
}
