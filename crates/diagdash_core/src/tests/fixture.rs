//! Tests for the built-in records

use crate::model::{HexColor, prediction_metrics};
use crate::validation::validate_records;

#[test]
fn test_fixture_has_five_records_in_display_order() {
    let records = prediction_metrics();
    let names: Vec<&str> = records.iter().map(|r| r.disease.as_str()).collect();
    assert_eq!(
        names,
        vec!["Parkinson's Disease", "Pneumonia", "COPD", "URTI", "Bronchitis"]
    );
}

#[test]
fn test_fixture_values() {
    let records = prediction_metrics();

    let parkinsons = &records[0];
    assert_eq!(parkinsons.accuracy, 94.2);
    assert_eq!(parkinsons.samples, 1196);
    assert_eq!(parkinsons.features, Some(22));
    assert_eq!(parkinsons.model, "Random Forest");
    assert_eq!(parkinsons.color, HexColor::new(0x4C, 0x51, 0xBF));

    let copd = &records[2];
    assert_eq!(copd.accuracy, 89.5);
    assert_eq!(copd.samples, 1500);
    assert_eq!(copd.model, "GRU");
    assert_eq!(copd.color.to_string(), "#ED8936");
}

#[test]
fn test_only_parkinsons_reports_features() {
    let with_features: Vec<String> = prediction_metrics()
        .into_iter()
        .filter(|r| r.features.is_some())
        .map(|r| r.disease)
        .collect();
    assert_eq!(with_features, vec!["Parkinson's Disease".to_string()]);
}

#[test]
fn test_fixture_is_valid_and_stable() {
    let records = prediction_metrics();
    assert!(validate_records(&records).is_ok());
    assert_eq!(records, prediction_metrics());
}

#[test]
fn test_color_parsing() {
    assert_eq!("#48bb78".parse::<HexColor>().unwrap(), HexColor::from_u32(0x48BB78));
    assert!("48BB78".parse::<HexColor>().is_err());
    assert!("#48BB7".parse::<HexColor>().is_err());
    assert!("#48BBZZ".parse::<HexColor>().is_err());
}

#[test]
fn test_record_serde_omits_missing_features() {
    let records = prediction_metrics();
    let json = serde_json::to_string(&records[1]).unwrap();
    assert!(!json.contains("features"));
    assert!(json.contains("\"color\":\"#48BB78\""));

    let parsed: crate::model::MetricRecord = serde_json::from_str(
        r##"{"disease":"COPD","accuracy":89.5,"samples":1500,"model":"GRU","color":"#ed8936"}"##,
    )
    .unwrap();
    assert_eq!(parsed, records[2]);
}
