//! `search` command: run a lead search, print it and export CSV.

use std::fmt::Write as _;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use cuboleads_core::{AppConfig, LeadRecord, SearchQuery};
use cuboleads_leads::{
    csv_file_name, write_csv, DetailFailurePolicy, LeadBuilder, LeadSearchOutcome, LeadSummary,
};

const COMPANY_WIDTH: usize = 32;
const PHONE_WIDTH: usize = 18;
const SITE_WIDTH: usize = 36;

#[derive(Debug)]
pub(crate) struct SearchOptions {
    pub output: Option<PathBuf>,
    pub export: bool,
    pub json: bool,
    pub skip_failed_details: bool,
}

/// Search `category` in `location` and report the ranked leads.
///
/// # Errors
///
/// Returns an error if the query is blank, the clients cannot be built, the
/// search itself fails, or the CSV file cannot be written. A search that
/// finds nothing is not an error.
pub(crate) async fn run_search(
    config: &AppConfig,
    category: String,
    location: String,
    options: &SearchOptions,
) -> anyhow::Result<()> {
    let query = SearchQuery::new(category, location);
    query
        .validate()
        .context("both a category and a location are required")?;

    let policy = if options.skip_failed_details {
        DetailFailurePolicy::SkipPlace
    } else {
        DetailFailurePolicy::AbortBatch
    };
    let builder = LeadBuilder::from_config(config)?.with_detail_failure_policy(policy);

    println!("searching {} and analyzing sites...", query.text());
    let leads = match builder.build_leads(&query).await {
        LeadSearchOutcome::Found(leads) => leads,
        LeadSearchOutcome::Failed { reason } => anyhow::bail!("search failed: {reason}"),
    };

    if leads.is_empty() {
        println!("no leads found for {}", query.text());
        return Ok(());
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&leads)?);
    } else {
        print!("{}", render_summary(&LeadSummary::from_leads(&leads)));
        print!("{}", render_table(&leads));
    }

    if options.export {
        let path = options
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(csv_file_name(&query)));
        let file =
            File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        write_csv(BufWriter::new(file), &leads)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), leads = leads.len(), "csv exported");
        println!("exported {} leads to {}", leads.len(), path.display());
    }

    Ok(())
}

fn render_summary(summary: &LeadSummary) -> String {
    format!(
        "leads found: {}  without site: {}  high urgency: {}\n",
        summary.total, summary.without_website, summary.high_urgency
    )
}

/// Fixed-width table of leads in the order given.
fn render_table(leads: &[LeadRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<9}{:<cw$}{:<pw$}{:<sw$}PROBLEMS",
        "URGENCY",
        "COMPANY",
        "PHONE",
        "SITE",
        cw = COMPANY_WIDTH,
        pw = PHONE_WIDTH,
        sw = SITE_WIDTH,
    );
    for lead in leads {
        let _ = writeln!(
            out,
            "{:<9}{:<cw$}{:<pw$}{:<sw$}{}",
            lead.urgency,
            truncate(&lead.company, COMPANY_WIDTH - 1),
            truncate(&lead.phone, PHONE_WIDTH - 1),
            truncate(&lead.website, SITE_WIDTH - 1),
            lead.problems_joined,
            cw = COMPANY_WIDTH,
            pw = PHONE_WIDTH,
            sw = SITE_WIDTH,
        );
    }
    out
}

/// Cuts `s` to at most `max` characters, marking the cut with `…`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
