//! One-shot HTTP fetches of the remote datasets (native CLI only).
//!
//! Single attempt per resource: a failed fetch is logged and propagated,
//! never retried. The chart apps embed their data at compile time; these
//! fetches exist to refresh the fixture files.

use reqwest::{Client, StatusCode};

/// Vietnamese province statistics CSV.
pub const PROVINCES_URL: &str = "https://tungth.github.io/data/vn-provinces-data.csv";

/// JHU CSSE global confirmed-case time series (wide CSV).
pub const COVID_CONFIRMED_URL: &str = "https://raw.githubusercontent.com/CSSEGISandData/COVID-19/\
     master/csse_covid_19_data/csse_covid_19_time_series/time_series_covid19_confirmed_global.csv";

/// Per-province Vietnamese COVID case counts.
pub const PROVINCE_CASES_URL: &str = "https://tungth.github.io/data/vn-covid19-province.csv";

/// Province-boundary GeoJSON keyed by GSO code.
pub const GEOJSON_URL: &str =
    "https://raw.githubusercontent.com/TungTh/tungth.github.io/master/data/vn-provinces.json";

/// Fetch a remote text resource, once.
pub async fn fetch_text(client: &Client, url: &str) -> anyhow::Result<String> {
    let response = client.get(url).send().await.map_err(|e| {
        log::warn!("fetch failed for {}: {}", url, e);
        e
    })?;
    if response.status() != StatusCode::OK {
        log::warn!("bad response status for {}: {}", url, response.status());
        anyhow::bail!("bad response status for {}: {}", url, response.status());
    }
    let body = response.text().await?;
    if body.trim().is_empty() {
        anyhow::bail!("empty response body for {}", url);
    }
    Ok(body)
}
