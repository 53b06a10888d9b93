use thiserror::Error;

/// Errors returned by the Places API client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network failure, timeout or non-2xx status from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success `status` (e.g. `REQUEST_DENIED`).
    #[error("Places API error {status}: {message}")]
    Api { status: String, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
