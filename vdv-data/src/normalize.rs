//! Column-name and numeric normalization for loosely specified CSV headers.
//!
//! The source spreadsheets have been republished several times with
//! different header spellings ("GRDP-VND", "GRDP (VND)", "Dân số", ...) and
//! with decimal commas in some numeric cells. Each logical field carries an
//! ordered alias list; the first alias with a non-empty value wins. Numeric
//! parsing never errors: unparseable cells become NaN and the caller drops
//! the row.

use csv::StringRecord;

/// Return the value of the first alias present and non-empty in `record`.
///
/// `headers` is the header row of the CSV; alias matching is exact after
/// trimming. Returns `None` when no alias has a usable value.
pub fn first_match<'a>(
    headers: &StringRecord,
    record: &'a StringRecord,
    aliases: &[&str],
) -> Option<&'a str> {
    for alias in aliases {
        let position = headers.iter().position(|h| h.trim() == *alias);
        if let Some(idx) = position {
            if let Some(value) = record.get(idx) {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value);
                }
            }
        }
    }
    None
}

/// Parse a numeric cell, tolerating a decimal comma ("65,4" -> 65.4).
///
/// Only the first comma is replaced; thousands separators do not occur in
/// these spreadsheets. Unparseable input yields NaN rather than an error;
/// rows with NaN metrics are filtered out by the callers, not reported.
pub fn parse_metric(raw: &str) -> f64 {
    let cleaned = raw.trim().replacen(',', ".", 1);
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse an optional numeric cell into `Some(value)` only when finite.
pub fn parse_metric_opt(raw: Option<&str>) -> Option<f64> {
    let value = parse_metric(raw?);
    value.is_finite().then_some(value)
}
