//! Joining province case counts onto the boundary GeoJSON.
//!
//! The GeoJSON features carry a numeric GSO province code in
//! `properties.Ma`; depending on the export it is either a JSON number or a
//! numeric string. Case counts are injected as `properties.cases` and
//! `properties.province` for the map script to read.

use crate::covid::ProvinceCases;
use serde_json::{json, Value};

/// Embedded province-boundary GeoJSON sample.
pub static GEOJSON_PROVINCES: &str = include_str!("../../fixtures/vn-provinces.geojson");

/// Read a feature's `Ma` code, accepting numbers and numeric strings.
fn feature_code(feature: &Value) -> Option<u32> {
    let ma = feature.get("properties")?.get("Ma")?;
    match ma {
        Value::Number(n) => n.as_u64().map(|v| v as u32),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// Join case counts onto a parsed GeoJSON `FeatureCollection` in place.
///
/// Features without a matching code are left untouched; the map script
/// renders those in a neutral fill. Returns the number of matched features.
pub fn join_cases(geojson: &mut Value, cases: &[ProvinceCases]) -> usize {
    let features = match geojson.get_mut("features").and_then(Value::as_array_mut) {
        Some(f) => f,
        None => {
            log::warn!("join_cases: input has no features array");
            return 0;
        }
    };

    let mut matched = 0;
    for feature in features.iter_mut() {
        let code = match feature_code(feature) {
            Some(c) => c,
            None => continue,
        };
        if let Some(case) = cases.iter().find(|c| c.code == code) {
            if let Some(props) = feature.get_mut("properties").and_then(Value::as_object_mut) {
                props.insert("cases".to_string(), json!(case.confirmed));
                props.insert("province".to_string(), json!(case.name));
                matched += 1;
            }
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::covid::parse_province_cases;

    #[test]
    fn join_marks_matching_features() {
        let mut geojson: Value = serde_json::from_str(GEOJSON_PROVINCES).unwrap();
        let cases = parse_province_cases(crate::covid::CSV_PROVINCE_CASES).unwrap();
        let matched = join_cases(&mut geojson, &cases);
        assert!(matched > 0);

        let features = geojson["features"].as_array().unwrap();
        let hanoi = features
            .iter()
            .find(|f| f["properties"]["Ma"] == json!(1))
            .unwrap();
        assert_eq!(hanoi["properties"]["province"], json!("Ha Noi"));
        assert!(hanoi["properties"]["cases"].as_u64().unwrap() > 0);
    }

    #[test]
    fn unmatched_features_stay_untouched() {
        let mut geojson = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "Ma": 999 }, "geometry": null }
            ]
        });
        let matched = join_cases(&mut geojson, &[]);
        assert_eq!(matched, 0);
        assert!(geojson["features"][0]["properties"].get("cases").is_none());
    }

    #[test]
    fn string_codes_are_accepted() {
        let mut geojson = json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "Ma": "48" }, "geometry": null }
            ]
        });
        let cases = vec![ProvinceCases {
            code: 48,
            name: "Da Nang".to_string(),
            confirmed: 4892,
        }];
        assert_eq!(join_cases(&mut geojson, &cases), 1);
        assert_eq!(geojson["features"][0]["properties"]["cases"], json!(4892));
    }

    #[test]
    fn non_collection_input_is_a_noop() {
        let mut not_geojson = json!({ "hello": "world" });
        assert_eq!(join_cases(&mut not_geojson, &[]), 0);
    }
}
