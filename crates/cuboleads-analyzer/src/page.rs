//! Content checks for a page that answered HTTP 200.

use cuboleads_core::AnalysisResult;

/// Reported when every check passes.
pub const SITE_OK: &str = "Site OK (Seguro e Otimizado)";

/// Urgency added per problem found on a reachable page.
pub const PROBLEM_WEIGHT: u8 = 15;

const INSECURE_PROBLEM: &str = "SITE INSEGURO (Não usa HTTPS)";

struct MarkerCheck {
    /// The check passes if any of these appears in the lower-cased body.
    needles: &'static [&'static str],
    problem: &'static str,
}

const MARKER_CHECKS: [MarkerCheck; 3] = [
    MarkerCheck {
        needles: &["instagram.com"],
        problem: "Sem link para Instagram",
    },
    MarkerCheck {
        needles: &["wa.me", "api.whatsapp.com"],
        problem: "Sem link direto WhatsApp",
    },
    MarkerCheck {
        needles: &["fbevents.js", "connect.facebook.net"],
        problem: "Sem Pixel Facebook",
    },
];

/// Scores a fetched page from its final (post-redirect) URL and body.
///
/// Adds one problem for a non-HTTPS final URL and one per missing marker
/// (Instagram link, WhatsApp link, Facebook pixel). The urgency is
/// [`PROBLEM_WEIGHT`] per problem; a clean page yields `([SITE_OK], 0)`.
#[must_use]
pub fn evaluate_page(final_url: &str, body: &str) -> AnalysisResult {
    let mut problems = Vec::new();

    if !final_url.starts_with("https") {
        problems.push(INSECURE_PROBLEM.to_string());
    }

    let html = body.to_lowercase();
    for check in &MARKER_CHECKS {
        if !check.needles.iter().any(|needle| html.contains(needle)) {
            problems.push(check.problem.to_string());
        }
    }

    if problems.is_empty() {
        return AnalysisResult::single(SITE_OK, 0);
    }

    let count = u8::try_from(problems.len()).unwrap_or(u8::MAX);
    let urgency = count.saturating_mul(PROBLEM_WEIGHT);
    AnalysisResult::new(problems, urgency)
}
