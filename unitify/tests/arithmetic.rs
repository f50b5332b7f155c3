use std::cmp::Ordering;

use unitify::{Measurement, UnitifyError};

fn m(text: &str) -> Measurement {
    text.parse().unwrap()
}

#[test]
fn addition_converts_to_base_unit() {
    let sum = m("1 km").add(&m("500 m")).unwrap();
    assert_eq!(sum.magnitude(), 1500.0);
    assert_eq!(sum.unit().name(), "m");
}

#[test]
fn subtraction_converts_to_base_unit() {
    let diff = m("2 kg").sub(&m("500 g")).unwrap();
    assert_eq!(diff.magnitude(), 1500.0);
    assert_eq!(diff.unit().name(), "g");
}

#[test]
fn addition_rejects_different_dimensions() {
    let err = m("5 g").add(&m("5 m")).unwrap_err();
    assert_eq!(
        err,
        UnitifyError::IncompatibleUnits {
            left: "g".to_string(),
            right: "m".to_string(),
        }
    );
}

#[test]
fn same_dimension_multiplication_collapses_to_base_unit() {
    let product = m("2 km").mul(&m("3 m")).unwrap();
    assert_eq!(product.magnitude(), 6000.0);
    assert_eq!(product.unit().name(), "m");
}

#[test]
fn same_dimension_division_collapses_to_base_unit() {
    let quotient = m("1 km").div(&m("2 m")).unwrap();
    assert_eq!(quotient.magnitude(), 500.0);
    assert_eq!(quotient.unit().name(), "m");
}

#[test]
fn division_by_zero_is_an_error() {
    let err = m("100 g").div(&m("0 L")).unwrap_err();
    assert_eq!(err, UnitifyError::DivisionByZero);

    // Checked before dimension analysis
    let err = m("100 g").div(&m("0 g")).unwrap_err();
    assert_eq!(err, UnitifyError::DivisionByZero);
}

#[test]
fn comparison_uses_base_magnitudes() {
    assert_eq!(m("1 km").compare(&m("999 m")).unwrap(), Ordering::Greater);
    assert_eq!(m("1 km").compare(&m("1000 m")).unwrap(), Ordering::Equal);
    assert_eq!(m("500 mL").compare(&m("1 L")).unwrap(), Ordering::Less);
}

#[test]
fn comparison_rejects_different_dimensions() {
    let err = m("1 kg").compare(&m("1 L")).unwrap_err();
    assert!(matches!(err, UnitifyError::IncompatibleUnits { .. }));
}

#[test]
fn negative_results_are_allowed() {
    let diff = m("100 g").sub(&m("1 kg")).unwrap();
    assert_eq!(diff.magnitude(), -900.0);
    assert_eq!(diff.unit().name(), "g");
}
