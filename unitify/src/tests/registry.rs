use crate::registry::UnitRegistry;
use crate::unit::Dimension;
use crate::UnitifyError;

#[test]
fn test_resolve_canonical_names() {
    let test_cases = vec![
        ("mg", Dimension::Mass, 0.001),
        ("cg", Dimension::Mass, 0.01),
        ("g", Dimension::Mass, 1.0),
        ("kg", Dimension::Mass, 1000.0),
        ("mm", Dimension::Length, 0.001),
        ("cm", Dimension::Length, 0.01),
        ("m", Dimension::Length, 1.0),
        ("km", Dimension::Length, 1000.0),
        ("s", Dimension::Time, 1.0),
        ("min", Dimension::Time, 60.0),
        ("hr", Dimension::Time, 3600.0),
        ("mL", Dimension::Volume, 0.001),
        ("cL", Dimension::Volume, 0.01),
        ("L", Dimension::Volume, 1.0),
        ("kL", Dimension::Volume, 1000.0),
    ];

    for (name, dimension, factor) in test_cases {
        let unit = UnitRegistry::resolve(name).unwrap_or_else(|e| {
            panic!("failed to resolve '{}': {}", name, e);
        });
        assert_eq!(unit.name(), name);
        assert_eq!(unit.dimension(), dimension);
        assert_eq!(unit.to_base(1.0), factor);
    }
}

#[test]
fn test_resolve_aliases_to_canonical_name() {
    let test_cases = vec![
        ("kilograms", "kg"),
        ("grams", "g"),
        ("meters", "m"),
        ("kilometers", "km"),
        ("seconds", "s"),
        ("minutes", "min"),
        ("hours", "hr"),
        ("liters", "L"),
        ("l", "L"),
        ("ml", "mL"),
        ("milliliters", "mL"),
    ];

    for (alias, canonical) in test_cases {
        let unit = UnitRegistry::resolve(alias).unwrap_or_else(|e| {
            panic!("failed to resolve alias '{}': {}", alias, e);
        });
        assert_eq!(unit.name(), canonical, "alias '{}'", alias);
    }
}

#[test]
fn test_resolve_is_case_sensitive() {
    assert!(matches!(
        UnitRegistry::resolve("KG"),
        Err(UnitifyError::UnknownUnit(name)) if name == "KG"
    ));
    assert!(matches!(
        UnitRegistry::resolve("Grams"),
        Err(UnitifyError::UnknownUnit(_))
    ));
}

#[test]
fn test_resolve_unknown_unit() {
    let err = UnitRegistry::resolve("furlongs").unwrap_err();
    assert_eq!(err, UnitifyError::UnknownUnit("furlongs".to_string()));
}

#[test]
fn test_is_compound_name() {
    assert!(UnitRegistry::is_compound_name("km / hr"));
    assert!(UnitRegistry::is_compound_name("g * m"));
    assert!(!UnitRegistry::is_compound_name("kg"));
    assert!(!UnitRegistry::is_compound_name("hours"));
}

#[test]
fn test_parse_compound_two_components() {
    let unit = UnitRegistry::parse_compound("km / hr").unwrap();
    assert!(unit.is_compound());
    assert_eq!(unit.name(), "km / hr");
    assert_eq!(unit.to_base(72.0), 20.0);
}

#[test]
fn test_parse_compound_single_unit_stays_simple() {
    let unit = UnitRegistry::parse_compound("kg").unwrap();
    assert!(!unit.is_compound());
    assert_eq!(unit.name(), "kg");
}

#[test]
fn test_parse_compound_rejects_bad_operator() {
    let err = UnitRegistry::parse_compound("km per hr").unwrap_err();
    assert!(matches!(err, UnitifyError::Parse(_)));
}

#[test]
fn test_parse_compound_rejects_dangling_operator() {
    let err = UnitRegistry::parse_compound("km /").unwrap_err();
    assert!(matches!(err, UnitifyError::Parse(_)));
}

#[test]
fn test_parse_compound_rejects_empty_name() {
    let err = UnitRegistry::parse_compound("   ").unwrap_err();
    assert!(matches!(err, UnitifyError::Parse(_)));
}

#[test]
fn test_parse_compound_propagates_unknown_unit() {
    let err = UnitRegistry::parse_compound("km / fortnight").unwrap_err();
    assert_eq!(err, UnitifyError::UnknownUnit("fortnight".to_string()));
}

#[test]
fn test_entries_cover_all_dimensions() {
    let entries = UnitRegistry::entries();
    assert_eq!(entries.len(), 15);
    for dimension in [
        Dimension::Mass,
        Dimension::Length,
        Dimension::Time,
        Dimension::Volume,
    ] {
        assert!(entries.iter().any(|e| e.dimension == dimension));
    }
}
