use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}
