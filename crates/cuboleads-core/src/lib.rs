//! Shared configuration and domain types for CuboLeads.

pub mod app_config;
pub mod config;
pub mod types;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use types::{
    AnalysisResult, LeadRecord, PlaceDetail, PlaceSummary, QueryError, SearchQuery,
    DEFAULT_PLACEHOLDER, NO_WEBSITE_SENTINEL, NO_WEBSITE_URGENCY,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
