use unitify::{Measurement, UnitConverter, UnitRegistry};

#[test]
fn simple_measurement_converts_to_base_unit() {
    let mass: Measurement = "1.5 kg".parse().unwrap();
    let base = UnitConverter::convert_to_base_unit(&mass);
    assert_eq!(base.magnitude(), 1500.0);
    assert_eq!(base.unit().name(), "g");
}

#[test]
fn base_measurement_is_unchanged_by_conversion() {
    let mass: Measurement = "250 g".parse().unwrap();
    let base = UnitConverter::convert_to_base_unit(&mass);
    assert_eq!(base, mass);
}

#[test]
fn compound_measurement_converts_to_base_unit() {
    let speed: Measurement = "72 km / hr".parse().unwrap();
    let base = UnitConverter::convert_to_base_unit(&speed);
    assert_eq!(base.magnitude(), 20.0);
    assert_eq!(base.unit().name(), "m / s");
}

#[test]
fn conversion_factor_to_base_units() {
    let km = UnitRegistry::resolve("km").unwrap();
    let m = UnitRegistry::resolve("m").unwrap();
    assert_eq!(UnitConverter::conversion_factor(&km, &m), 1000.0);

    let hr = UnitRegistry::resolve("hr").unwrap();
    let s = UnitRegistry::resolve("s").unwrap();
    assert_eq!(UnitConverter::conversion_factor(&hr, &s), 3600.0);

    let ml = UnitRegistry::resolve("mL").unwrap();
    let l = UnitRegistry::resolve("L").unwrap();
    assert_eq!(UnitConverter::conversion_factor(&ml, &l), 0.001);
}

#[test]
fn conversion_factor_of_a_unit_to_itself_base() {
    let g = UnitRegistry::resolve("g").unwrap();
    assert_eq!(UnitConverter::conversion_factor(&g, &g), 1.0);
}

#[test]
fn compound_conversion_factor_to_base_structure() {
    let kmh = UnitRegistry::parse_compound("km / hr").unwrap();
    let ms = UnitRegistry::parse_compound("m / s").unwrap();
    let factor = UnitConverter::conversion_factor(&kmh, &ms);
    assert_eq!(72.0 * factor, 20.0);
}
