// File: crates/wealth-health/tests/loading.rs
// Purpose: Dataset and config loading from disk, including malformed input.

use std::io::Write;

use wealth_health::{ChartConfig, DataError, Dataset, YearRange};

#[test]
fn loads_fixture_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(include_bytes!("fixtures/three_years.json")).unwrap();
    let data = Dataset::load(f.path()).expect("load");
    assert_eq!(data.len(), 5);
    assert_eq!(data.skipped(), 0);
    assert!(data.misaligned(&YearRange::new(2000, 2002)).is_empty());
    assert_eq!(data.misaligned(&YearRange::default()).len(), 5);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, DataError::Io { .. }));
}

#[test]
fn non_array_document_rejected() {
    let err = Dataset::from_json_str(r#"{"countries": []}"#).unwrap_err();
    assert!(matches!(err, DataError::NotAnArray("an object")));
    assert!(matches!(Dataset::from_json_str("[1, 2"), Err(DataError::Json(_))));
}

#[test]
fn bad_records_are_skipped() {
    let data = Dataset::from_json_str(
        r#"[
            {"country": "Ok", "region": "asia", "gdp": [1], "lifeExpectancy": [1], "population": [1]},
            {"region": "asia", "gdp": [1], "lifeExpectancy": [1], "population": [1]},
            {"country": "Scalar", "region": "asia", "gdp": 5, "lifeExpectancy": [1], "population": [1]},
            "not a record"
        ]"#,
    )
    .expect("document parses");
    assert_eq!(data.len(), 1);
    assert_eq!(data.skipped(), 3);
    assert_eq!(data.countries()[0].name, "Ok");
}

#[test]
fn config_file_round_trip() {
    let cfg = ChartConfig { end_year: 1950, theme: "dark".into(), ..ChartConfig::default() };
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(serde_json::to_string_pretty(&cfg).unwrap().as_bytes()).unwrap();
    let back = ChartConfig::load(f.path()).expect("load config");
    assert_eq!(back, cfg);
    assert_eq!(back.theme().name, "dark");
}
