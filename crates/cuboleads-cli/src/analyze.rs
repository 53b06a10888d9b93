//! `analyze` command: score a single website.

use cuboleads_analyzer::SiteAnalyzer;
use cuboleads_core::AppConfig;

/// Run the site analyzer against `url` and print the findings.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed; an
/// unreachable site is reported as a finding.
pub(crate) async fn run_analyze(config: &AppConfig, url: &str) -> anyhow::Result<()> {
    let analyzer = SiteAnalyzer::new(config.site_timeout_secs, &config.site_user_agent)?;
    let result = analyzer.analyze(Some(url)).await;

    println!("urgency: {}", result.urgency);
    for problem in &result.problems {
        println!("  - {problem}");
    }
    Ok(())
}
