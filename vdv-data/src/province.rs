//! Vietnamese province statistics: parsing and record types.

use crate::normalize::{first_match, parse_metric, parse_metric_opt};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded province statistics CSV (population, GRDP, area, density).
pub static CSV_PROVINCES: &str = include_str!("../../fixtures/vn-provinces.csv");

/// Header aliases for the province name column.
pub const NAME_ALIASES: &[&str] = &["Province", "province", "Name", "name", "Tỉnh/TP", "Tinh/TP"];

/// Header aliases for the population column (thousand people).
pub const POPULATION_ALIASES: &[&str] = &[
    "Population (thousand people)",
    "Population",
    "population",
    "Population (thousand)",
    "Dân số (nghìn người)",
    "Dân số",
    "dan_so",
    "danso",
];

/// Header aliases for the GRDP column (million VND / person / year).
pub const GRDP_ALIASES: &[&str] = &[
    "GRDP-VND (million VND/person/year)",
    "GRDP-VND",
    "GRDP_VND",
    "GRDP",
    "GRDP (VND)",
    "grdp-vnd",
    "GRDP (triệu VND/người/năm)",
];

/// Header aliases for the area column (km2).
pub const AREA_ALIASES: &[&str] = &[
    "Area (km2)",
    "Area",
    "area",
    "area_km2",
    "Diện tích (km2)",
    "Diện tích",
    "dien_tich",
];

/// Header aliases for the population density column (person / km2).
pub const DENSITY_ALIASES: &[&str] = &[
    "Density (person per km2)",
    "Density",
    "density",
    "population_density",
    "Mật độ dân số (người/km2)",
    "Mật độ dân số",
    "mat_do",
];

/// One province row after normalization.
///
/// `population` and `grdp` are required (rows without them are dropped);
/// `area` and `density` are optional and serialize as `null` when absent so
/// the chart scripts can fall back to a default radius/color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Province {
    pub name: String,
    pub population: f64,
    pub grdp: f64,
    pub area: Option<f64>,
    pub density: Option<f64>,
}

/// The `{ name, grdp }` projection used by the incremental bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvinceGrdp {
    pub name: String,
    pub grdp: f64,
}

impl From<&Province> for ProvinceGrdp {
    fn from(p: &Province) -> Self {
        ProvinceGrdp {
            name: p.name.clone(),
            grdp: p.grdp,
        }
    }
}

/// Parse a province statistics CSV into normalized records.
///
/// Rows missing a name, or whose population or GRDP fail numeric parse or
/// come out negative, are dropped (and counted in a debug log line), never
/// reported as errors.
pub fn parse_provinces_csv(csv_object: &str) -> anyhow::Result<Vec<Province>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_object.as_bytes());
    let headers = rdr.headers()?.clone();

    let mut provinces = Vec::new();
    let mut dropped = 0u32;
    for row in rdr.records() {
        let record = row?;
        let name = match first_match(&headers, &record, NAME_ALIASES) {
            Some(n) => n.to_string(),
            None => {
                dropped += 1;
                continue;
            }
        };
        let population = first_match(&headers, &record, POPULATION_ALIASES)
            .map(parse_metric)
            .unwrap_or(f64::NAN);
        let grdp = first_match(&headers, &record, GRDP_ALIASES)
            .map(parse_metric)
            .unwrap_or(f64::NAN);
        if !population.is_finite() || !grdp.is_finite() || grdp < 0.0 {
            dropped += 1;
            continue;
        }
        provinces.push(Province {
            name,
            population,
            grdp,
            area: parse_metric_opt(first_match(&headers, &record, AREA_ALIASES)),
            density: parse_metric_opt(first_match(&headers, &record, DENSITY_ALIASES)),
        });
    }
    if dropped > 0 {
        log::debug!("parse_provinces_csv: dropped {} malformed rows", dropped);
    }
    Ok(provinces)
}

/// The GRDP projection of a province list, in dataset order.
pub fn grdp_records(provinces: &[Province]) -> Vec<ProvinceGrdp> {
    provinces.iter().map(ProvinceGrdp::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixture_parses_fully() {
        let provinces = parse_provinces_csv(CSV_PROVINCES).unwrap();
        assert_eq!(provinces.len(), 63);
        assert!(provinces.iter().all(|p| p.grdp.is_finite() && p.grdp >= 0.0));
    }

    #[test]
    fn decimal_comma_rows_survive() {
        // The fixture carries a few quoted decimal-comma GRDP cells.
        let provinces = parse_provinces_csv(CSV_PROVINCES).unwrap();
        let lao_cai = provinces.iter().find(|p| p.name == "Lao Cai").unwrap();
        assert!((lao_cai.grdp - 88.9).abs() < 1e-9);
    }

    #[test]
    fn malformed_rows_are_dropped() {
        let csv = "Province,GRDP,Population\n\
                   Ha Noi,142.0,8435.6\n\
                   ,10.0,100.0\n\
                   Hue,not-a-number,1160.2\n\
                   Da Nang,-5.0,1195.5\n";
        let provinces = parse_provinces_csv(csv).unwrap();
        assert_eq!(provinces.len(), 1);
        assert_eq!(provinces[0].name, "Ha Noi");
    }

    #[test]
    fn alternate_headers_are_accepted() {
        let csv = "Name,GRDP (VND),Population\nCan Tho,97.2,1244.7\n";
        let provinces = parse_provinces_csv(csv).unwrap();
        assert_eq!(provinces.len(), 1);
        assert_eq!(provinces[0].grdp, 97.2);
        assert_eq!(provinces[0].area, None);
    }

    #[test]
    fn grdp_projection_keeps_dataset_order() {
        let provinces = parse_provinces_csv(CSV_PROVINCES).unwrap();
        let grdp = grdp_records(&provinces);
        assert_eq!(grdp.len(), provinces.len());
        assert_eq!(grdp[0].name, provinces[0].name);
    }
}
