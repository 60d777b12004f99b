//! Raw record normalization.
//!
//! Projects open-ended upstream complaint records down to the
//! `{latitude, longitude, severity}` wire format. Records without
//! parseable, finite coordinates are dropped silently: partial data is
//! more useful than a full failure.

use safe_commute_incident_models::{Incident, Severity};
use serde_json::Value;

/// Normalizes raw upstream records into incidents.
///
/// Pure and total: never fails, preserves input order, performs no
/// deduplication.
#[must_use]
pub fn normalize(raws: &[Value]) -> Vec<Incident> {
    let mut incidents = Vec::with_capacity(raws.len());

    for raw in raws {
        let Some((latitude, longitude)) = parse_lat_lng(
            raw.get("latitude").and_then(Value::as_str),
            raw.get("longitude").and_then(Value::as_str),
        ) else {
            continue;
        };

        let severity = Severity::from_code(raw.get("law_cat_cd").and_then(Value::as_str));

        incidents.push(Incident {
            latitude,
            longitude,
            severity,
        });
    }

    log::info!(
        "Normalized {} incidents from {} raw records",
        incidents.len(),
        raws.len()
    );
    incidents
}

/// Parses lat/lng from optional string fields. Returns `None` if either
/// is missing, unparseable, or non-finite.
fn parse_lat_lng(lat: Option<&str>, lng: Option<&str>) -> Option<(f64, f64)> {
    let latitude = lat?.parse::<f64>().ok()?;
    let longitude = lng?.parse::<f64>().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }
    Some((latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_feed_normalizes_to_empty_set() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn single_felony_record() {
        let raws = vec![json!({
            "latitude": "40.7831",
            "longitude": "-73.9712",
            "law_cat_cd": "FELONY",
            "boro_nm": "MANHATTAN"
        })];
        let incidents = normalize(&raws);
        assert_eq!(incidents.len(), 1);
        assert!((incidents[0].latitude - 40.7831).abs() < f64::EPSILON);
        assert!((incidents[0].longitude - -73.9712).abs() < f64::EPSILON);
        assert_eq!(incidents[0].severity, Severity::Felony);
    }

    #[test]
    fn drops_unparseable_coordinates_and_preserves_order() {
        let raws = vec![
            json!({
                "latitude": "40.7831",
                "longitude": "-73.9712",
                "law_cat_cd": "FELONY"
            }),
            json!({
                "latitude": "abc",
                "longitude": "-73.9712",
                "law_cat_cd": "MISDEMEANOR"
            }),
            json!({
                "latitude": "40.78",
                "longitude": "-73.97"
            }),
        ];
        let incidents = normalize(&raws);
        assert_eq!(incidents.len(), 2);
        assert_eq!(incidents[0].severity, Severity::Felony);
        assert_eq!(incidents[1].severity, Severity::Unknown);
    }

    #[test]
    fn drops_records_with_missing_coordinates() {
        let raws = vec![
            json!({"longitude": "-73.9712", "law_cat_cd": "FELONY"}),
            json!({"latitude": "40.7831", "law_cat_cd": "FELONY"}),
            json!({"law_cat_cd": "FELONY"}),
        ];
        assert!(normalize(&raws).is_empty());
    }

    #[test]
    fn drops_non_finite_coordinates() {
        let raws = vec![
            json!({"latitude": "NaN", "longitude": "-73.9712"}),
            json!({"latitude": "40.7831", "longitude": "inf"}),
        ];
        assert!(normalize(&raws).is_empty());
    }

    #[test]
    fn drops_non_string_coordinates() {
        let raws = vec![json!({
            "latitude": 40.7831,
            "longitude": -73.9712,
            "law_cat_cd": "FELONY"
        })];
        assert!(normalize(&raws).is_empty());
    }

    #[test]
    fn empty_category_normalizes_to_unknown() {
        let raws = vec![json!({
            "latitude": "40.78",
            "longitude": "-73.97",
            "law_cat_cd": ""
        })];
        let incidents = normalize(&raws);
        assert_eq!(incidents[0].severity, Severity::Unknown);
    }

    #[test]
    fn non_enumerated_category_survives_verbatim() {
        let raws = vec![json!({
            "latitude": "40.78",
            "longitude": "-73.97",
            "law_cat_cd": "SUMMONS"
        })];
        let incidents = normalize(&raws);
        assert_eq!(incidents[0].severity, Severity::Other("SUMMONS".to_string()));
    }

    #[test]
    fn preserves_upstream_multiplicities() {
        let record = json!({
            "latitude": "40.78",
            "longitude": "-73.97",
            "law_cat_cd": "VIOLATION"
        });
        let raws = vec![record.clone(), record];
        assert_eq!(normalize(&raws).len(), 2);
    }
}
