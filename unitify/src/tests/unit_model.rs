use crate::registry::UnitRegistry;
use crate::unit::{Dimension, Unit, UnitOp};
use crate::UnitifyError;

fn simple(name: &str) -> Unit {
    UnitRegistry::resolve(name).unwrap()
}

#[test]
fn test_simple_to_base_and_back() {
    let kg = simple("kg");
    assert_eq!(kg.to_base(1.5), 1500.0);
    assert_eq!(kg.from_base(1500.0), 1.5);

    let mm = simple("mm");
    assert_eq!(mm.to_base(250.0), 0.25);
    assert_eq!(mm.from_base(0.25), 250.0);
}

#[test]
fn test_simple_base_unit_is_canonical() {
    assert_eq!(simple("kg").base_unit().name(), "g");
    assert_eq!(simple("km").base_unit().name(), "m");
    assert_eq!(simple("hr").base_unit().name(), "s");
    assert_eq!(simple("mL").base_unit().name(), "L");
    assert_eq!(simple("g").base_unit().name(), "g");
}

#[test]
fn test_compound_name_joins_components() {
    let unit = Unit::compound(
        vec![simple("km"), simple("hr")],
        vec![UnitOp::Divide],
    )
    .unwrap();
    assert_eq!(unit.name(), "km / hr");
    assert_eq!(unit.dimension(), Dimension::Compound);
}

#[test]
fn test_compound_to_base_folds_operator_sequence() {
    let speed = Unit::compound(
        vec![simple("km"), simple("hr")],
        vec![UnitOp::Divide],
    )
    .unwrap();
    // 72 km/hr = 72 * (1000 / 3600) m/s
    assert_eq!(speed.to_base(72.0), 20.0);
    assert_eq!(speed.from_base(20.0), 72.0);
}

#[test]
fn test_compound_base_unit_preserves_structure() {
    let speed = Unit::compound(
        vec![simple("km"), simple("hr")],
        vec![UnitOp::Divide],
    )
    .unwrap();
    let base = speed.base_unit();
    assert_eq!(base.name(), "m / s");
    assert_eq!(base.to_base(5.0), 5.0);
}

#[test]
fn test_compound_three_components() {
    let unit = Unit::compound(
        vec![simple("g"), simple("m"), simple("s")],
        vec![UnitOp::Multiply, UnitOp::Divide],
    )
    .unwrap();
    assert_eq!(unit.name(), "g * m / s");
}

#[test]
fn test_compound_rejects_empty_components() {
    let err = Unit::compound(vec![], vec![]).unwrap_err();
    assert_eq!(err, UnitifyError::EmptyCompoundUnit);
}

#[test]
fn test_compound_rejects_operator_count_mismatch() {
    let err = Unit::compound(vec![simple("g"), simple("L")], vec![]).unwrap_err();
    assert_eq!(
        err,
        UnitifyError::MalformedCompoundUnit {
            components: 2,
            operators: 0,
        }
    );
}

#[test]
fn test_unit_display_matches_name() {
    let speed = UnitRegistry::parse_compound("m / s").unwrap();
    assert_eq!(speed.to_string(), "m / s");
    assert_eq!(simple("kg").to_string(), "kg");
}

#[test]
fn test_unit_serializes_as_name_string() {
    let speed = UnitRegistry::parse_compound("km / hr").unwrap();
    assert_eq!(
        serde_json::to_string(&speed).unwrap(),
        "\"km / hr\""
    );
    assert_eq!(serde_json::to_string(&simple("kg")).unwrap(), "\"kg\"");
}
