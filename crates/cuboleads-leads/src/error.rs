use cuboleads_analyzer::AnalyzerError;
use cuboleads_core::QueryError;
use cuboleads_places::PlacesError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeadsError {
    #[error("invalid search query: {0}")]
    Query(#[from] QueryError),

    #[error("places lookup failed: {0}")]
    Places(#[from] PlacesError),

    #[error("site analyzer setup failed: {0}")]
    Analyzer(#[from] AnalyzerError),
}
