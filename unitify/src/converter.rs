//! Conversion between units of the same dimension, always routed through the
//! dimension's base unit.

use crate::measurement::Measurement;
use crate::unit::Unit;

/// Stateless converter between units of a shared dimension
pub struct UnitConverter;

impl UnitConverter {
    /// Re-express a measurement in its dimension's base unit.
    ///
    /// `72 km / hr` becomes `20 m / s`, `1.5 kg` becomes `1500 g`.
    pub fn convert_to_base_unit(measurement: &Measurement) -> Measurement {
        let unit = measurement.unit();
        Measurement::new(unit.to_base(measurement.magnitude()), unit.base_unit())
    }

    /// Multiplicative factor taking a magnitude in `from` to one in `to`.
    ///
    /// Computed as one `from` in base units over one base unit expressed in
    /// `to`. The result is exact when `to` is a base unit.
    pub fn conversion_factor(from: &Unit, to: &Unit) -> f64 {
        from.to_base(1.0) / to.from_base(1.0)
    }
}
