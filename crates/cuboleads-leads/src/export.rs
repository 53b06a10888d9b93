//! CSV export of lead records.

use std::io::Write;
use std::sync::LazyLock;

use cuboleads_core::{LeadRecord, SearchQuery};
use regex::Regex;

static UNSAFE_FILE_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_-]+").expect("valid regex"));

/// Writes a header row followed by one line per lead, in the given order.
///
/// Column labels come from the serialized field names of [`LeadRecord`]. The
/// header is emitted with the first record, so an empty slice writes nothing.
///
/// # Errors
///
/// Returns [`csv::Error`] on any serialization or I/O failure.
pub fn write_csv<W: Write>(w: W, leads: &[LeadRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(w);
    for lead in leads {
        writer.serialize(lead)?;
    }
    writer.flush()?;
    Ok(())
}

/// [`write_csv`] into a `String`.
///
/// # Errors
///
/// Returns [`csv::Error`] if a record cannot be serialized.
pub fn to_csv_string(leads: &[LeadRecord]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(&mut buf, leads)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Default export file name: `leads_<category>_<location>.csv`, with runs of
/// characters other than letters, digits, `-` and `_` replaced by `_`.
#[must_use]
pub fn csv_file_name(query: &SearchQuery) -> String {
    let clean = |s: &str| {
        UNSAFE_FILE_CHARS_RE
            .replace_all(s.trim(), "_")
            .trim_matches('_')
            .to_string()
    };
    format!(
        "leads_{}_{}.csv",
        clean(&query.category),
        clean(&query.location)
    )
}
