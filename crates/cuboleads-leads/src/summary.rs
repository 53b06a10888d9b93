//! Headline metrics for a lead search.

use cuboleads_core::LeadRecord;

/// Leads at or above this urgency count as high urgency.
pub const HIGH_URGENCY_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadSummary {
    pub total: usize,
    pub without_website: usize,
    pub high_urgency: usize,
}

impl LeadSummary {
    #[must_use]
    pub fn from_leads(leads: &[LeadRecord]) -> Self {
        Self {
            total: leads.len(),
            without_website: leads.iter().filter(|l| !l.has_website()).count(),
            high_urgency: leads
                .iter()
                .filter(|l| l.urgency >= HIGH_URGENCY_THRESHOLD)
                .count(),
        }
    }
}
