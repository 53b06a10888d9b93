//! Client for the Google Places text-search and place-details endpoints.

pub mod client;
pub mod error;
pub mod types;

pub use client::{PlacesClient, DETAIL_FIELDS};
pub use error::PlacesError;
pub use types::{DetailsResponse, TextSearchResponse};
