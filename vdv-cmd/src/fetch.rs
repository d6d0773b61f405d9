//! Fetch subcommands: download the remote datasets into fixture files.

use chrono::NaiveDate;
use log::info;
use vdv_data::covid::parse_province_cases;
use vdv_data::fetch::{
    fetch_text, COVID_CONFIRMED_URL, GEOJSON_URL, PROVINCES_URL, PROVINCE_CASES_URL,
};
use vdv_data::geo::join_cases;

/// Date format of the wide CSV's column headers, e.g. "4/5/20".
const HEADER_DATE_FORMAT: &str = "%m/%d/%y";

/// Download the province statistics CSV as-is.
pub async fn run_provinces(out: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let body = fetch_text(&client, PROVINCES_URL).await?;
    std::fs::write(out, &body)?;
    info!("wrote {} bytes of province data to {}", body.len(), out);
    Ok(())
}

/// Download the global confirmed time series; with filters, keep only
/// country-level rows for the selected countries and the date columns
/// inside the window, writing the same wide format back out.
pub async fn run_covid(
    out: &str,
    countries: &[String],
    start: Option<&str>,
    end: Option<&str>,
) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let body = fetch_text(&client, COVID_CONFIRMED_URL).await?;

    if countries.is_empty() && start.is_none() && end.is_none() {
        std::fs::write(out, &body)?;
        info!("wrote {} bytes of case data to {}", body.len(), out);
        return Ok(());
    }

    let start = start
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()?;
    let end = end
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .transpose()?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());
    let headers = rdr.headers()?.clone();

    // Keep the four metadata columns plus the date columns in the window.
    let keep: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter_map(|(idx, h)| {
            if idx < 4 {
                return Some(idx);
            }
            let date = NaiveDate::parse_from_str(h.trim(), HEADER_DATE_FORMAT).ok()?;
            let after_start = start.map_or(true, |s| date >= s);
            let before_end = end.map_or(true, |e| date <= e);
            (after_start && before_end).then_some(idx)
        })
        .collect();

    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record(keep.iter().map(|&idx| &headers[idx]))?;

    let mut kept_rows = 0u32;
    for row in rdr.records() {
        let record = row?;
        let province_state = record.get(0).unwrap_or("").trim();
        let country = record.get(1).unwrap_or("").trim();
        if !countries.is_empty()
            && (!province_state.is_empty() || !countries.iter().any(|c| c == country))
        {
            continue;
        }
        wtr.write_record(keep.iter().map(|&idx| record.get(idx).unwrap_or("")))?;
        kept_rows += 1;
    }
    wtr.flush()?;
    info!("wrote {} trimmed case rows to {}", kept_rows, out);
    Ok(())
}

/// Download the province GeoJSON; with `--cases`, join the case counts
/// onto the features before writing.
pub async fn run_geo(out: &str, cases_path: Option<&str>) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let body = fetch_text(&client, GEOJSON_URL).await?;

    let output = match cases_path {
        None => body,
        Some(path) => {
            let cases_csv = if path == "remote" {
                fetch_text(&client, PROVINCE_CASES_URL).await?
            } else {
                std::fs::read_to_string(path)?
            };
            let cases = parse_province_cases(&cases_csv)?;
            let mut geojson: serde_json::Value = serde_json::from_str(&body)?;
            let matched = join_cases(&mut geojson, &cases);
            info!("joined {} of {} case rows onto the GeoJSON", matched, cases.len());
            geojson.to_string()
        }
    };
    std::fs::write(out, &output)?;
    info!("wrote {} bytes of GeoJSON to {}", output.len(), out);
    Ok(())
}
