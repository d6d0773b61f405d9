//! COVID-19 datasets: the JHU CSSE global confirmed time series (wide CSV,
//! one date column per day) and the per-province Vietnamese case counts.

use crate::normalize::parse_metric;
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded sample of the JHU global confirmed time series
/// (selected countries, 2020-03-25 through 2020-05-01).
pub static CSV_CONFIRMED_GLOBAL: &str = include_str!("../../fixtures/covid_confirmed_sample.csv");

/// Embedded per-province case counts (`Province,ma,Confirm`).
pub static CSV_PROVINCE_CASES: &str = include_str!("../../fixtures/covid19_province.csv");

/// Date format of the wide CSV's column headers, e.g. "4/5/20".
const HEADER_DATE_FORMAT: &str = "%m/%d/%y";

/// A single (place, case count) sample for the lat/long scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovidPlace {
    pub country: String,
    pub lat: f64,
    pub long: f64,
    pub cases: u32,
}

/// One sample of a country's confirmed-case series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub cases: u32,
}

/// A country's confirmed-case time series, points ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySeries {
    pub country: String,
    pub points: Vec<SeriesPoint>,
}

/// Case count for one Vietnamese province, keyed by its numeric GSO code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceCases {
    pub code: u32,
    pub name: String,
    pub confirmed: u32,
}

/// Parse the wide time-series CSV into per-place samples at one date column.
///
/// All columns are resolved by header, so a reordered export still reads
/// the right cells; `date_column` must match a header verbatim (e.g.
/// "4/5/20") and any absent column is a hard error since the chart cannot
/// render without it. Rows with unparseable Lat/Long cells are dropped, as
/// are rows whose case cell fails numeric parse.
pub fn parse_places_at(csv_object: &str, date_column: &str) -> anyhow::Result<Vec<CovidPlace>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes());
    let headers = rdr.headers()?.clone();
    let date_idx = headers
        .iter()
        .position(|h| h.trim() == date_column)
        .ok_or_else(|| anyhow::anyhow!("date column {:?} not found", date_column))?;
    let country_idx = headers
        .iter()
        .position(|h| h.trim() == "Country/Region")
        .ok_or_else(|| anyhow::anyhow!("Country/Region column not found"))?;
    let lat_idx = headers
        .iter()
        .position(|h| h.trim() == "Lat")
        .ok_or_else(|| anyhow::anyhow!("Lat column not found"))?;
    let long_idx = headers
        .iter()
        .position(|h| h.trim() == "Long")
        .ok_or_else(|| anyhow::anyhow!("Long column not found"))?;

    let mut places = Vec::new();
    let mut dropped = 0u32;
    for row in rdr.records() {
        let record = row?;
        let lat = parse_metric(record.get(lat_idx).unwrap_or(""));
        let long = parse_metric(record.get(long_idx).unwrap_or(""));
        let cases = parse_metric(record.get(date_idx).unwrap_or(""));
        if !lat.is_finite() || !long.is_finite() || !cases.is_finite() {
            dropped += 1;
            continue;
        }
        places.push(CovidPlace {
            country: record.get(country_idx).unwrap_or("").trim().to_string(),
            lat,
            long,
            cases: cases as u32,
        });
    }
    if dropped > 0 {
        log::debug!("parse_places_at: dropped {} rows without usable Lat/Long", dropped);
    }
    Ok(places)
}

/// Parse country-level time series for `countries`, restricted to the
/// `[start, end]` date window (inclusive).
///
/// Only country-level rows are used: rows carrying a `Province/State` value
/// are skipped, matching how the line-chart exercise selects its data.
/// Output series follow the order of `countries`, skipping absent ones.
pub fn parse_country_series(
    csv_object: &str,
    countries: &[&str],
    start: NaiveDate,
    end: NaiveDate,
) -> anyhow::Result<Vec<CountrySeries>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes());
    let headers = rdr.headers()?.clone();

    // Precompute which columns are date columns inside the window.
    let date_columns: Vec<(usize, NaiveDate)> = headers
        .iter()
        .enumerate()
        .filter_map(|(idx, h)| {
            let date = NaiveDate::parse_from_str(h.trim(), HEADER_DATE_FORMAT).ok()?;
            (date >= start && date <= end).then_some((idx, date))
        })
        .collect();

    let mut series: Vec<CountrySeries> = Vec::new();
    for row in rdr.records() {
        let record = row?;
        let province_state = record.get(0).unwrap_or("").trim();
        let country = record.get(1).unwrap_or("").trim();
        if !province_state.is_empty() || !countries.contains(&country) {
            continue;
        }
        let mut points: Vec<SeriesPoint> = date_columns
            .iter()
            .filter_map(|&(idx, date)| {
                let cases = record.get(idx)?.trim().parse::<u32>().ok()?;
                Some(SeriesPoint { date, cases })
            })
            .collect();
        points.sort_by_key(|p| p.date);
        series.push(CountrySeries {
            country: country.to_string(),
            points,
        });
    }
    // Present series in the caller's order so line colors stay stable.
    series.sort_by_key(|s| countries.iter().position(|c| *c == s.country));
    Ok(series)
}

/// Parse the per-province case-count CSV (`Province,ma,Confirm`).
///
/// The `ma` code sometimes appears zero-padded ("01"); it is parsed
/// numerically. Rows with an unparseable code or count are dropped.
pub fn parse_province_cases(csv_object: &str) -> anyhow::Result<Vec<ProvinceCases>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes());

    let mut cases = Vec::new();
    for row in rdr.records() {
        let record = row?;
        let name = record.get(0).unwrap_or("").trim();
        let code = parse_metric(record.get(1).unwrap_or(""));
        let confirmed = parse_metric(record.get(2).unwrap_or(""));
        if name.is_empty() || !code.is_finite() || !confirmed.is_finite() {
            continue;
        }
        cases.push(ProvinceCases {
            code: code as u32,
            name: name.to_string(),
            confirmed: confirmed as u32,
        });
    }
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn places_at_fixed_date_column() {
        let places = parse_places_at(CSV_CONFIRMED_GLOBAL, "4/5/20").unwrap();
        assert!(places.len() >= 12);
        let vietnam = places.iter().find(|p| p.country == "Vietnam").unwrap();
        assert!(vietnam.lat > 13.0 && vietnam.lat < 15.0);
        assert!(vietnam.cases > 0);
    }

    #[test]
    fn missing_date_column_is_an_error() {
        assert!(parse_places_at(CSV_CONFIRMED_GLOBAL, "1/1/19").is_err());
    }

    #[test]
    fn reordered_columns_resolve_by_header() {
        let csv = "Country/Region,Long,Lat,Province/State,4/5/20\n\
                   Vietnam,108.2772,14.0583,,241\n";
        let places = parse_places_at(csv, "4/5/20").unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat, 14.0583);
        assert_eq!(places[0].long, 108.2772);
        assert_eq!(places[0].country, "Vietnam");
    }

    #[test]
    fn missing_long_column_is_an_error() {
        let csv = "Province/State,Country/Region,Lat,4/5/20\n,Vietnam,14.0,100\n";
        assert!(parse_places_at(csv, "4/5/20").is_err());
    }

    #[test]
    fn rows_without_coordinates_are_dropped() {
        let csv = "Province/State,Country/Region,Lat,Long,4/5/20\n\
                   ,Atlantis,,," ;
        let places = parse_places_at(&format!("{}100\n", csv), "4/5/20").unwrap();
        assert!(places.is_empty());
    }

    #[test]
    fn country_series_filters_window_and_province_rows() {
        let series = parse_country_series(
            CSV_CONFIRMED_GLOBAL,
            &["Vietnam", "US", "France"],
            date(2020, 3, 31),
            date(2020, 5, 1),
        )
        .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].country, "Vietnam");
        // The fixture has a French Guiana province row; it must not add a
        // second France series.
        assert_eq!(series.iter().filter(|s| s.country == "France").count(), 1);
        for s in &series {
            assert_eq!(s.points.first().unwrap().date, date(2020, 3, 31));
            assert_eq!(s.points.last().unwrap().date, date(2020, 5, 1));
            assert!(s.points.windows(2).all(|w| w[0].date < w[1].date));
        }
    }

    #[test]
    fn country_series_keeps_requested_order() {
        let series = parse_country_series(
            CSV_CONFIRMED_GLOBAL,
            &["France", "Vietnam"],
            date(2020, 4, 1),
            date(2020, 4, 10),
        )
        .unwrap();
        let order: Vec<&str> = series.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(order, vec!["France", "Vietnam"]);
    }

    #[test]
    fn province_cases_fixture_parses() {
        let cases = parse_province_cases(CSV_PROVINCE_CASES).unwrap();
        assert!(!cases.is_empty());
        let hcmc = cases.iter().find(|c| c.code == 79).unwrap();
        assert_eq!(hcmc.name, "Ho Chi Minh City");
        assert!(hcmc.confirmed > 0);
    }

    #[test]
    fn province_cases_tolerates_zero_padded_codes() {
        let cases = parse_province_cases("Province,ma,Confirm\nHa Noi,01,4547\n").unwrap();
        assert_eq!(cases[0].code, 1);
    }
}
