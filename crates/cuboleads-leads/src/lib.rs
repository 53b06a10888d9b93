//! Lead building for CuboLeads.
//!
//! Searches places for a category and location, resolves each place's
//! contact details, scores its website with the site analyzer and ranks the
//! resulting leads by urgency. Also provides the summary metrics and CSV
//! export used by the front end.

pub mod builder;
pub mod error;
pub mod export;
pub mod summary;

pub use builder::{
    assemble_lead, rank_leads, DetailFailurePolicy, LeadBuilder, LeadSearchOutcome,
};
pub use error::LeadsError;
pub use export::{csv_file_name, to_csv_string, write_csv};
pub use summary::{LeadSummary, HIGH_URGENCY_THRESHOLD};
