#![cfg(feature = "dev")]
//! Tests for the assessment engine end to end.
//!
//! These tests exercise the full pipeline: validation, series lookup,
//! interpolation, percentile computation, and result assembly — through the
//! public builder API.
//!
//! ## Test Organization
//!
//! 1. **LMS Path** - The concrete WHO 12-month scenario, median round-trip
//! 2. **Preterm Path** - Table percentiles, no Z-score
//! 3. **Configuration** - Rounding, caps, lookup modes
//! 4. **Errors** - Degenerate parameters, missing series/LMS
//! 5. **Purity** - Idempotence
//! 6. **Serialization** - Wire-shape of results and requests

use approx::assert_relative_eq;

use centile::internals::math::lms::LmsParams;
use centile::internals::primitives::errors::{CentileError, ErrorKind};
use centile::internals::store::registry::ReferenceStore;
use centile::internals::store::series::{PercentileAnchors, ReferenceRow, ReferenceSeries};
use centile::prelude::*;

// ============================================================================
// Fixtures
// ============================================================================

fn full_anchors(anchors: [f64; 9]) -> PercentileAnchors {
    PercentileAnchors {
        p3: anchors[0],
        p5: anchors[1],
        p10: anchors[2],
        p25: Some(anchors[3]),
        p50: anchors[4],
        p75: Some(anchors[5]),
        p90: anchors[6],
        p95: anchors[7],
        p97: anchors[8],
    }
}

/// WHO weight-for-age boys, monthly anchors around 12 months.
fn who_store() -> ReferenceStore {
    let rows = vec![
        ReferenceRow {
            sex: Sex::Male,
            age: PediatricAge::Months(11.0),
            lms: Some(LmsParams::new(-0.0756, 9.4089, 0.11316)),
            anchors: full_anchors([7.72, 7.93, 8.23, 8.77, 9.41, 10.11, 10.82, 11.28, 11.59]),
        },
        ReferenceRow {
            sex: Sex::Male,
            age: PediatricAge::Months(12.0),
            lms: Some(LmsParams::new(-0.0884, 9.6479, 0.11392)),
            anchors: full_anchors([7.90, 8.12, 8.43, 8.98, 9.65, 10.37, 11.10, 11.57, 11.89]),
        },
        ReferenceRow {
            sex: Sex::Male,
            age: PediatricAge::Months(13.0),
            lms: Some(LmsParams::new(-0.1004, 9.8749, 0.11462)),
            anchors: full_anchors([8.07, 8.30, 8.62, 9.19, 9.87, 10.61, 11.36, 11.84, 12.17]),
        },
    ];

    let mut store = ReferenceStore::new();
    store.insert(ReferenceSeries::new(GrowthStandard::Who, MeasurementType::Weight, rows).unwrap());
    store
}

fn preterm_anchors(anchors: [f64; 7]) -> PercentileAnchors {
    PercentileAnchors {
        p3: anchors[0],
        p5: anchors[1],
        p10: anchors[2],
        p25: None,
        p50: anchors[3],
        p75: None,
        p90: anchors[4],
        p95: anchors[5],
        p97: anchors[6],
    }
}

/// INTERGROWTH-style birth-weight rows for girls.
fn preterm_store() -> ReferenceStore {
    let rows = vec![
        ReferenceRow {
            sex: Sex::Female,
            age: PediatricAge::Gestational(GestationalAge { weeks: 33, days: 0 }),
            lms: None,
            anchors: preterm_anchors([1.42, 1.50, 1.62, 1.94, 2.29, 2.40, 2.47]),
        },
        ReferenceRow {
            sex: Sex::Female,
            age: PediatricAge::Gestational(GestationalAge { weeks: 34, days: 0 }),
            lms: None,
            anchors: preterm_anchors([1.55, 1.64, 1.76, 2.10, 2.46, 2.58, 2.66]),
        },
    ];

    let mut store = ReferenceStore::new();
    store.insert(
        ReferenceSeries::new(GrowthStandard::Intergrowth, MeasurementType::Weight, rows).unwrap(),
    );
    store
}

// ============================================================================
// LMS Path Tests
// ============================================================================

/// Test the concrete WHO scenario: male, 12 months, at a tabulated age.
///
/// Interpolating at exactly a tabulated age must reduce to that row, and
/// feeding the row's own median back through the calculator must yield a
/// percentile of 50 and a Z-score of 0.
#[test]
fn test_who_median_round_trip_at_tabulated_age() {
    let store = who_store();
    let engine = Centile::new().build(&store).unwrap();

    let median = Measurement::postnatal(9.6479, 12.0, Male);
    let result = engine
        .assess(GrowthStandard::Who, MeasurementType::Weight, &median)
        .unwrap();

    assert_relative_eq!(result.z_score.unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.calculated_percentile, 50.0, epsilon = 0.5);
    assert_eq!(result.percentiles.p50, 9.65);
    assert_eq!(result.value, 9.6479);
}

/// Test Z-score/percentile consistency away from the median.
///
/// A value one S above the median (for small |L|) lands near Z = +1, and
/// the percentile must equal 100 * Phi(z) for the computed z.
#[test]
fn test_who_z_score_percentile_consistency() {
    let store = who_store();
    let engine = Centile::new().build(&store).unwrap();

    let heavy = Measurement::postnatal(11.0, 12.0, Male);
    let result = engine
        .assess(GrowthStandard::Who, MeasurementType::Weight, &heavy)
        .unwrap();

    let z = result.z_score.unwrap();
    assert!(z > 0.0);

    let phi = centile::internals::math::erf::normal_cdf(z);
    assert_relative_eq!(result.calculated_percentile, 100.0 * phi, epsilon = 1e-12);
}

/// Test that interpolation between anchors feeds the percentile calculator.
#[test]
fn test_who_interpolated_age() {
    let store = who_store();
    let engine = Centile::new().build(&store).unwrap();

    // Median interpolated at 12.5 months.
    let m_mid = (9.6479 + 9.8749) / 2.0;
    let result = engine
        .assess(
            GrowthStandard::Who,
            MeasurementType::Weight,
            &Measurement::postnatal(m_mid, 12.5, Male),
        )
        .unwrap();

    assert_relative_eq!(result.z_score.unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(result.calculated_percentile, 50.0, epsilon = 0.5);
}

// ============================================================================
// Preterm Path Tests
// ============================================================================

/// Test the preterm path: exact anchor, no Z-score, exact 50.
#[test]
fn test_preterm_median_is_50() {
    let store = preterm_store();
    let engine = Centile::new().build(&store).unwrap();

    let input = Measurement::preterm(1.94, GestationalAge { weeks: 33, days: 0 }, Female);
    let result = engine
        .assess(GrowthStandard::Intergrowth, MeasurementType::Weight, &input)
        .unwrap();

    assert_eq!(result.calculated_percentile, 50.0);
    assert!(result.z_score.is_none());
    assert!(result.percentiles.p25.is_none());
}

/// Test preterm clamping through the engine.
#[test]
fn test_preterm_clamping() {
    let store = preterm_store();
    let engine = Centile::new().build(&store).unwrap();

    let tiny = Measurement::preterm(0.8, GestationalAge { weeks: 33, days: 0 }, Female);
    let low = engine
        .assess(GrowthStandard::Intergrowth, MeasurementType::Weight, &tiny)
        .unwrap();
    assert_eq!(low.calculated_percentile, 0.0);

    let big = Measurement::preterm(3.1, GestationalAge { weeks: 33, days: 0 }, Female);
    let high = engine
        .assess(GrowthStandard::Intergrowth, MeasurementType::Weight, &big)
        .unwrap();
    assert_eq!(high.calculated_percentile, 100.0);
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test the half-month rounding policy through the engine.
///
/// With rounding enabled, a query at 11.8 months resolves at 12.0 and must
/// equal the exact 12-month result.
#[test]
fn test_age_rounding_config() {
    let store = who_store();
    let rounded = Centile::new()
        .age_rounding(HalfMonth)
        .build(&store)
        .unwrap();
    let exact = Centile::new().build(&store).unwrap();

    let input = Measurement::postnatal(9.6479, 11.8, Male);
    let at_twelve = Measurement::postnatal(9.6479, 12.0, Male);

    let rounded_result = rounded
        .assess(GrowthStandard::Who, MeasurementType::Weight, &input)
        .unwrap();
    let exact_result = exact
        .assess(GrowthStandard::Who, MeasurementType::Weight, &at_twelve)
        .unwrap();

    assert_eq!(rounded_result, exact_result);
}

/// Test cap overrides through the builder.
#[test]
fn test_cap_override() {
    let store = who_store();
    let engine = Centile::new().max_weight_kg(10.0).build(&store).unwrap();

    let err = engine
        .assess(
            GrowthStandard::Who,
            MeasurementType::Weight,
            &Measurement::postnatal(11.0, 12.0, Male),
        )
        .unwrap_err();

    assert_eq!(
        err,
        CentileError::ValueAboveLimit {
            measurement: MeasurementType::Weight,
            value: 11.0,
            limit: 10.0,
        }
    );
}

/// Test that setting a builder parameter twice fails at build time.
#[test]
fn test_duplicate_builder_parameter() {
    let store = who_store();
    let err = Centile::new()
        .lookup_mode(FullInterpolation)
        .lookup_mode(LmsOnly)
        .build(&store)
        .unwrap_err();

    assert_eq!(
        err,
        CentileError::DuplicateParameter {
            parameter: "lookup_mode",
        }
    );
}

/// Test the reference-curve sampling entry point.
#[test]
fn test_reference_at() {
    let store = who_store();
    let engine = Centile::new().build(&store).unwrap();

    let point = engine
        .reference_at(
            GrowthStandard::Who,
            MeasurementType::Weight,
            Male,
            &PediatricAge::Months(11.5),
        )
        .unwrap();
    assert_relative_eq!(point.anchors.p50, (9.41 + 9.65) / 2.0, epsilon = 1e-12);

    // Domain validation applies here too.
    let err = engine
        .reference_at(
            GrowthStandard::Who,
            MeasurementType::Weight,
            Male,
            &PediatricAge::Months(25.0),
        )
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test that degenerate LMS parameters surface as a computation error.
#[test]
fn test_degenerate_lms_is_computation_error() {
    let rows = vec![
        ReferenceRow {
            sex: Sex::Male,
            age: PediatricAge::Months(11.0),
            lms: Some(LmsParams::new(-0.0756, 0.0, 0.11316)),
            anchors: full_anchors([7.72, 7.93, 8.23, 8.77, 9.41, 10.11, 10.82, 11.28, 11.59]),
        },
        ReferenceRow {
            sex: Sex::Male,
            age: PediatricAge::Months(12.0),
            lms: Some(LmsParams::new(-0.0884, 0.0, 0.11392)),
            anchors: full_anchors([7.90, 8.12, 8.43, 8.98, 9.65, 10.37, 11.10, 11.57, 11.89]),
        },
    ];
    let mut store = ReferenceStore::new();
    store.insert(ReferenceSeries::new(GrowthStandard::Who, MeasurementType::Weight, rows).unwrap());

    let engine = Centile::new().build(&store).unwrap();
    let err = engine
        .assess(
            GrowthStandard::Who,
            MeasurementType::Weight,
            &Measurement::postnatal(9.5, 11.5, Male),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        CentileError::DegenerateDistribution { m, .. } if m == 0.0
    ));
    assert_eq!(err.kind(), ErrorKind::Computation);
}

/// Test that a missing series is a reference-data error.
#[test]
fn test_missing_series() {
    let store = who_store();
    let engine = Centile::new().build(&store).unwrap();

    let err = engine
        .assess(
            GrowthStandard::Who,
            MeasurementType::Height,
            &Measurement::postnatal(75.0, 12.0, Male),
        )
        .unwrap_err();

    assert_eq!(
        err,
        CentileError::MissingSeries {
            standard: GrowthStandard::Who,
            measurement: MeasurementType::Height,
        }
    );
    assert_eq!(err.kind(), ErrorKind::ReferenceData);
}

/// Test that an LMS standard whose series lacks LMS parameters errors.
#[test]
fn test_missing_lms_parameters() {
    let rows = vec![
        ReferenceRow {
            sex: Sex::Male,
            age: PediatricAge::Months(11.0),
            lms: None,
            anchors: full_anchors([7.72, 7.93, 8.23, 8.77, 9.41, 10.11, 10.82, 11.28, 11.59]),
        },
        ReferenceRow {
            sex: Sex::Male,
            age: PediatricAge::Months(12.0),
            lms: None,
            anchors: full_anchors([7.90, 8.12, 8.43, 8.98, 9.65, 10.37, 11.10, 11.57, 11.89]),
        },
    ];
    let mut store = ReferenceStore::new();
    store.insert(ReferenceSeries::new(GrowthStandard::Who, MeasurementType::Weight, rows).unwrap());

    let engine = Centile::new().build(&store).unwrap();
    let err = engine
        .assess(
            GrowthStandard::Who,
            MeasurementType::Weight,
            &Measurement::postnatal(9.5, 11.5, Male),
        )
        .unwrap_err();

    assert_eq!(
        err,
        CentileError::MissingLms {
            standard: GrowthStandard::Who,
            measurement: MeasurementType::Weight,
        }
    );
}

/// Test that validation rejects before the store is consulted.
#[test]
fn test_validation_precedes_lookup() {
    // Empty store: an out-of-domain age must still fail validation, not
    // with a missing-series error.
    let store = ReferenceStore::new();
    let engine = Centile::new().build(&store).unwrap();

    let err = engine
        .assess(
            GrowthStandard::CdcChild,
            MeasurementType::Weight,
            &Measurement::postnatal(12.0, 23.0, Male),
        )
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
}

// ============================================================================
// Purity Tests
// ============================================================================

/// Test idempotence: identical inputs produce bit-identical outputs.
#[test]
fn test_idempotence() {
    let store = who_store();
    let engine = Centile::new().build(&store).unwrap();
    let input = Measurement::postnatal(10.3, 11.7, Male);

    let first = engine
        .assess(GrowthStandard::Who, MeasurementType::Weight, &input)
        .unwrap();
    let second = engine
        .assess(GrowthStandard::Who, MeasurementType::Weight, &input)
        .unwrap();

    assert_eq!(first, second);
}

// ============================================================================
// Serialization Tests
// ============================================================================

/// Test the wire shape of an LMS result.
#[test]
fn test_result_wire_shape() {
    let store = who_store();
    let engine = Centile::new().build(&store).unwrap();

    let result = engine
        .assess(
            GrowthStandard::Who,
            MeasurementType::Weight,
            &Measurement::postnatal(9.6479, 12.0, Male),
        )
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("calculatedPercentile").is_some());
    assert!(json.get("zScore").is_some());
    assert!(json["percentiles"].get("P3").is_some());
    assert!(json["percentiles"].get("P97").is_some());
}

/// Test that preterm results omit the Z-score and sparse anchors.
#[test]
fn test_preterm_result_wire_shape() {
    let store = preterm_store();
    let engine = Centile::new().build(&store).unwrap();

    let result = engine
        .assess(
            GrowthStandard::Intergrowth,
            MeasurementType::Weight,
            &Measurement::preterm(1.94, GestationalAge { weeks: 33, days: 0 }, Female),
        )
        .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("zScore").is_none());
    assert!(json["percentiles"].get("P25").is_none());
    assert!(json["percentiles"].get("P50").is_some());
}

/// Test wire-request deserialization and resolution.
#[test]
fn test_raw_request_round_trip() {
    let request: RawRequest = serde_json::from_str(
        r#"{
            "standard": "who",
            "measurementType": "weight",
            "sex": "male",
            "value": 9.6479,
            "ageMonths": 12.0
        }"#,
    )
    .unwrap();

    let (standard, measurement, input) = request.resolve().unwrap();
    assert_eq!(standard, GrowthStandard::Who);
    assert_eq!(measurement, MeasurementType::Weight);
    assert_eq!(input.age, PediatricAge::Months(12.0));

    let store = who_store();
    let engine = Centile::new().build(&store).unwrap();
    let result = engine.assess(standard, measurement, &input).unwrap();
    assert_relative_eq!(result.calculated_percentile, 50.0, epsilon = 0.5);
}

/// Test wire-request validation: a missing age field is a typed error.
#[test]
fn test_raw_request_missing_age() {
    let request: RawRequest = serde_json::from_str(
        r#"{
            "standard": "intergrowth",
            "measurementType": "weight",
            "sex": "female",
            "value": 1.94
        }"#,
    )
    .unwrap();

    let err = request.resolve().unwrap_err();
    assert_eq!(
        err,
        CentileError::MissingField {
            field: "gestationalWeeks",
        }
    );
}

/// Test that gestational days default to zero on the wire.
#[test]
fn test_raw_request_gestational_days_default() {
    let request: RawRequest = serde_json::from_str(
        r#"{
            "standard": "intergrowth",
            "measurementType": "weight",
            "sex": "female",
            "value": 1.94,
            "gestationalWeeks": 33
        }"#,
    )
    .unwrap();

    let (_, _, input) = request.resolve().unwrap();
    assert_eq!(
        input.age,
        PediatricAge::Gestational(GestationalAge { weeks: 33, days: 0 })
    );
}
