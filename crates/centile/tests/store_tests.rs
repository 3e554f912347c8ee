#![cfg(feature = "dev")]
//! Tests for the reference data store.
//!
//! These tests verify how published tables become queryable series:
//! - Record parsing for both column schemes (LMS and preterm)
//! - Series invariants: sorting, unique ages, age-scale homogeneity
//! - Registry lookups and the process-wide load-once store
//!
//! ## Test Organization
//!
//! 1. **Record Parsing** - Aliases, sex codes, age labels, malformed input
//! 2. **Series Invariants** - Sorting, duplicates, scale mismatches
//! 3. **Registry** - Keyed lookups, JSON loading, global install

use centile::internals::primitives::errors::{CentileError, ErrorKind};
use centile::internals::primitives::types::{
    GestationalAge, GrowthStandard, MeasurementType, PediatricAge, Sex,
};
use centile::internals::store::records::{lms_rows_from_json, preterm_rows_from_json};
use centile::internals::store::registry::ReferenceStore;
use centile::internals::store::series::{PercentileAnchors, ReferenceRow, ReferenceSeries};

// ============================================================================
// Fixtures
// ============================================================================

const LMS_TABLE: &str = r#"[
    {"Sex": 1, "Agemos": 11.0, "L": -0.0756, "M": 9.4089, "S": 0.11316,
     "P3": 7.72, "P5": 7.93, "P10": 8.23, "P25": 8.77, "P50": 9.41,
     "P75": 10.11, "P90": 10.82, "P95": 11.28, "P97": 11.59},
    {"Sex": 1, "Agemos": 12.0, "L": -0.0884, "M": 9.6479, "S": 0.11392,
     "P3": 7.90, "P5": 8.12, "P10": 8.43, "P25": 8.98, "P50": 9.65,
     "P75": 10.37, "P90": 11.10, "P95": 11.57, "P97": 11.89}
]"#;

const PRETERM_TABLE: &str = r#"[
    {"sex": 2, "age": "33+0", "3rd": 1.42, "5th": 1.50, "10th": 1.62,
     "50th": 1.94, "90th": 2.29, "95th": 2.40, "97th": 2.47},
    {"sex": 2, "age": "34+0", "3rd": 1.55, "5th": 1.64, "10th": 1.76,
     "50th": 2.10, "90th": 2.46, "95th": 2.58, "97th": 2.66}
]"#;

fn month_row(sex: Sex, age: f64) -> ReferenceRow {
    ReferenceRow {
        sex,
        age: PediatricAge::Months(age),
        lms: None,
        anchors: PercentileAnchors {
            p3: 1.0,
            p5: 2.0,
            p10: 3.0,
            p25: Some(4.0),
            p50: 5.0,
            p75: Some(6.0),
            p90: 7.0,
            p95: 8.0,
            p97: 9.0,
        },
    }
}

// ============================================================================
// Record Parsing Tests
// ============================================================================

/// Test parsing an LMS-scheme table with published column capitalization.
#[test]
fn test_parse_lms_table() {
    let rows = lms_rows_from_json(LMS_TABLE).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].sex, Sex::Male);
    assert_eq!(rows[0].age, PediatricAge::Months(11.0));

    let lms = rows[0].lms.unwrap();
    assert_eq!(lms.l, -0.0756);
    assert_eq!(lms.m, 9.4089);
    assert_eq!(lms.s, 0.11316);

    assert_eq!(rows[0].anchors.p25, Some(8.77));
    assert_eq!(rows[1].anchors.p97, 11.89);
}

/// Test parsing a preterm-scheme table with ordinal column names.
#[test]
fn test_parse_preterm_table() {
    let rows = preterm_rows_from_json(PRETERM_TABLE).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].sex, Sex::Female);
    assert_eq!(
        rows[0].age,
        PediatricAge::Gestational(GestationalAge { weeks: 33, days: 0 })
    );
    assert!(rows[0].lms.is_none());
    assert_eq!(rows[0].anchors.p25, None);
    assert_eq!(rows[0].anchors.p50, 1.94);
}

/// Test that an unknown sex code fails record conversion.
#[test]
fn test_invalid_sex_code() {
    let json = r#"[{"sex": 3, "age": "33+0", "3rd": 1.0, "5th": 1.1, "10th": 1.2,
                    "50th": 1.5, "90th": 1.8, "95th": 1.9, "97th": 2.0}]"#;

    let err = preterm_rows_from_json(json).unwrap_err();
    assert_eq!(err, CentileError::InvalidSexCode { code: 3 });
}

/// Test that a malformed gestational age label is rejected.
#[test]
fn test_invalid_age_label() {
    let json = r#"[{"sex": 2, "age": "thirty3", "3rd": 1.0, "5th": 1.1, "10th": 1.2,
                    "50th": 1.5, "90th": 1.8, "95th": 1.9, "97th": 2.0}]"#;

    let err = preterm_rows_from_json(json).unwrap_err();
    assert_eq!(err, CentileError::InvalidAgeLabel("thirty3".into()));
    assert_eq!(err.kind(), ErrorKind::ReferenceData);
}

/// Test gestational label parsing edge cases.
#[test]
fn test_gestational_label_parsing() {
    assert_eq!(
        GestationalAge::from_label("24+0").unwrap(),
        GestationalAge { weeks: 24, days: 0 }
    );
    assert_eq!(GestationalAge::from_label("33+4").unwrap().total_days(), 235);
    assert_eq!(GestationalAge::from_total_days(235).label(), "33+4");

    assert!(GestationalAge::from_label("33").is_err());
    assert!(GestationalAge::from_label("33+7").is_err());
    assert!(GestationalAge::from_label("+3").is_err());
}

/// Test that a non-JSON document is a malformed-table error.
#[test]
fn test_malformed_document() {
    let err = lms_rows_from_json("Sex,Agemos,L,M,S").unwrap_err();
    assert!(matches!(err, CentileError::MalformedTable(_)));
    assert_eq!(err.kind(), ErrorKind::ReferenceData);
}

// ============================================================================
// Series Invariant Tests
// ============================================================================

/// Test that construction sorts rows by (sex, age).
#[test]
fn test_series_sorts_rows() {
    let rows = vec![
        month_row(Sex::Female, 12.0),
        month_row(Sex::Male, 13.0),
        month_row(Sex::Male, 11.0),
        month_row(Sex::Female, 10.0),
    ];
    let series = ReferenceSeries::new(GrowthStandard::Who, MeasurementType::Weight, rows).unwrap();

    let ages: Vec<(Sex, f64)> = series
        .rows()
        .iter()
        .map(|r| (r.sex, r.age.scalar()))
        .collect();
    assert_eq!(
        ages,
        vec![
            (Sex::Male, 11.0),
            (Sex::Male, 13.0),
            (Sex::Female, 10.0),
            (Sex::Female, 12.0),
        ]
    );
}

/// Test that duplicate age anchors within one sex are rejected.
#[test]
fn test_series_rejects_duplicate_age() {
    let rows = vec![month_row(Sex::Male, 12.0), month_row(Sex::Male, 12.0)];
    let err =
        ReferenceSeries::new(GrowthStandard::Who, MeasurementType::Weight, rows).unwrap_err();
    assert!(matches!(err, CentileError::InvalidReferenceRow(_)));
}

/// Test that the same age anchor on both sexes is allowed.
#[test]
fn test_series_allows_same_age_across_sexes() {
    let rows = vec![month_row(Sex::Male, 12.0), month_row(Sex::Female, 12.0)];
    assert!(ReferenceSeries::new(GrowthStandard::Who, MeasurementType::Weight, rows).is_ok());
}

/// Test that the age scale must match the standard.
#[test]
fn test_series_rejects_scale_mismatch() {
    let rows = vec![month_row(Sex::Male, 12.0)];
    let err =
        ReferenceSeries::new(GrowthStandard::Intergrowth, MeasurementType::Weight, rows)
            .unwrap_err();
    assert!(matches!(err, CentileError::InvalidReferenceRow(_)));
}

/// Test that non-finite age anchors are rejected.
#[test]
fn test_series_rejects_non_finite_age() {
    let rows = vec![month_row(Sex::Male, f64::NAN), month_row(Sex::Male, 12.0)];
    let err =
        ReferenceSeries::new(GrowthStandard::Who, MeasurementType::Weight, rows).unwrap_err();
    assert!(matches!(err, CentileError::InvalidReferenceRow(_)));
}

/// Test that an empty row set is rejected.
#[test]
fn test_series_rejects_empty() {
    let err = ReferenceSeries::new(GrowthStandard::Who, MeasurementType::Weight, vec![])
        .unwrap_err();
    assert_eq!(err, CentileError::TooFewReferenceRows { got: 0, min: 1 });
}

// ============================================================================
// Registry Tests
// ============================================================================

/// Test keyed lookups and the missing-series error.
#[test]
fn test_registry_lookup() {
    let mut store = ReferenceStore::new();
    assert!(store.is_empty());

    store
        .insert_lms_json(GrowthStandard::Who, MeasurementType::Weight, LMS_TABLE)
        .unwrap();
    store
        .insert_preterm_json(
            GrowthStandard::Intergrowth,
            MeasurementType::Weight,
            PRETERM_TABLE,
        )
        .unwrap();
    assert_eq!(store.len(), 2);

    let series = store
        .series(GrowthStandard::Who, MeasurementType::Weight)
        .unwrap();
    assert_eq!(series.rows().len(), 2);

    let err = store
        .series(GrowthStandard::Who, MeasurementType::Bmi)
        .unwrap_err();
    assert_eq!(
        err,
        CentileError::MissingSeries {
            standard: GrowthStandard::Who,
            measurement: MeasurementType::Bmi,
        }
    );
    assert_eq!(err.kind(), ErrorKind::ReferenceData);
}

/// Test that inserting under the same key replaces the series.
#[test]
fn test_registry_replace() {
    let mut store = ReferenceStore::new();
    store
        .insert_lms_json(GrowthStandard::Who, MeasurementType::Weight, LMS_TABLE)
        .unwrap();

    let single = r#"[{"Sex": 1, "Agemos": 11.0, "L": -0.0756, "M": 9.4089, "S": 0.11316,
     "P3": 7.72, "P5": 7.93, "P10": 8.23, "P25": 8.77, "P50": 9.41,
     "P75": 10.11, "P90": 10.82, "P95": 11.28, "P97": 11.59}]"#;
    store
        .insert_lms_json(GrowthStandard::Who, MeasurementType::Weight, single)
        .unwrap();

    assert_eq!(store.len(), 1);
    let series = store
        .series(GrowthStandard::Who, MeasurementType::Weight)
        .unwrap();
    assert_eq!(series.rows().len(), 1);
}

/// Test the load-once process-wide store: the first install wins.
#[test]
fn test_global_install_first_wins() {
    let mut first = ReferenceStore::new();
    first
        .insert_lms_json(GrowthStandard::Who, MeasurementType::Weight, LMS_TABLE)
        .unwrap();

    let installed = first.install();
    assert_eq!(installed.len(), 1);

    // A second install is ignored; the original store remains.
    let mut second = ReferenceStore::new();
    second
        .insert_lms_json(GrowthStandard::Who, MeasurementType::Weight, LMS_TABLE)
        .unwrap();
    second
        .insert_preterm_json(
            GrowthStandard::Intergrowth,
            MeasurementType::Weight,
            PRETERM_TABLE,
        )
        .unwrap();
    let still_first = second.install();
    assert_eq!(still_first.len(), 1);

    assert_eq!(ReferenceStore::global().unwrap().len(), 1);
}
