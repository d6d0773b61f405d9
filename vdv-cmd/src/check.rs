//! Fixture validation: parse a provinces CSV and report what normalization
//! keeps and drops.

use log::{info, warn};
use vdv_data::province::parse_provinces_csv;

/// Parse and normalize the CSV at `path` and report row counts.
///
/// Exits nonzero (via the error) only when the file cannot be read or is
/// not CSV at all; dropped rows are reported, not fatal.
pub fn run_check(path: &str) -> anyhow::Result<()> {
    let csv_object = std::fs::read_to_string(path)?;

    let raw_rows = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes())
        .records()
        .count();

    let provinces = parse_provinces_csv(&csv_object)?;
    let dropped = raw_rows - provinces.len();

    info!("{}: {} rows, {} normalized, {} dropped", path, raw_rows, provinces.len(), dropped);
    if dropped > 0 {
        warn!("{} rows failed normalization (missing name or unparseable metric)", dropped);
    }
    if let Some(richest) = provinces
        .iter()
        .max_by(|a, b| a.grdp.total_cmp(&b.grdp))
    {
        info!("highest GRDP: {} ({:.1})", richest.name, richest.grdp);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn check_accepts_the_embedded_fixture() {
        let mut tmp = std::env::temp_dir();
        tmp.push("vdv-check-fixture.csv");
        let mut file = std::fs::File::create(&tmp).unwrap();
        file.write_all(vdv_data::province::CSV_PROVINCES.as_bytes())
            .unwrap();
        assert!(run_check(tmp.to_str().unwrap()).is_ok());
        let _ = std::fs::remove_file(&tmp);
    }

    #[test]
    fn check_fails_on_missing_file() {
        assert!(run_check("/nonexistent/provinces.csv").is_err());
    }
}
