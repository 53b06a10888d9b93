//! Web-presence heuristics for lead scoring.
//!
//! [`SiteAnalyzer`] fetches a business website and turns what it finds (or
//! fails to find) into an [`AnalysisResult`](cuboleads_core::AnalysisResult):
//! a list of human-readable problems plus an urgency score.

pub mod analyzer;
pub mod error;
pub mod failure;
pub mod page;

pub use analyzer::{SiteAnalyzer, NO_WEBSITE_ANALYZER_URGENCY, NO_WEBSITE_PROBLEM};
pub use error::AnalyzerError;
pub use failure::SiteFailure;
pub use page::{evaluate_page, PROBLEM_WEIGHT, SITE_OK};
