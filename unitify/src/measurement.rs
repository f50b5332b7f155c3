//! Measurements pair a magnitude with a unit and carry dimensional analysis
//! through arithmetic.
//!
//! Addition and subtraction require operands of the same dimension and
//! produce a result in the shared base unit. Multiplication and division
//! between different dimensions synthesize a compound unit; between the same
//! dimension they collapse to the base unit of that dimension.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::converter::UnitConverter;
use crate::error::UnitifyError;
use crate::unit::{Unit, UnitOp};
use crate::UnitifyResult;

/// A magnitude paired with a unit of measure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    magnitude: f64,
    unit: Unit,
}

impl Measurement {
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Convert both operands to their base units and require the results to
    /// share a base unit. Returns both in base form.
    fn same_dimension(&self, other: &Self) -> UnitifyResult<(Measurement, Measurement)> {
        if self.unit.dimension() != other.unit.dimension() {
            return Err(UnitifyError::IncompatibleUnits {
                left: self.unit.name().to_string(),
                right: other.unit.name().to_string(),
            });
        }
        let left = UnitConverter::convert_to_base_unit(self);
        let right = UnitConverter::convert_to_base_unit(other);
        if left.unit.name() != right.unit.name() {
            return Err(UnitifyError::IncompatibleUnits {
                left: self.unit.name().to_string(),
                right: other.unit.name().to_string(),
            });
        }
        Ok((left, right))
    }

    /// Add two measurements of the same dimension; the result is in their
    /// shared base unit
    pub fn add(&self, other: &Self) -> UnitifyResult<Measurement> {
        let (left, right) = self.same_dimension(other)?;
        Ok(Measurement::new(
            left.magnitude + right.magnitude,
            left.unit,
        ))
    }

    /// Subtract a measurement of the same dimension; the result is in their
    /// shared base unit
    pub fn sub(&self, other: &Self) -> UnitifyResult<Measurement> {
        let (left, right) = self.same_dimension(other)?;
        Ok(Measurement::new(
            left.magnitude - right.magnitude,
            left.unit,
        ))
    }

    /// Multiply two measurements.
    ///
    /// Same-dimension operands multiply in base units and the result keeps
    /// that base unit. Operands of different dimensions multiply raw
    /// magnitudes and join their units into a compound unit.
    pub fn mul(&self, other: &Self) -> UnitifyResult<Measurement> {
        if self.unit.dimension() == other.unit.dimension() {
            let (left, right) = self.same_dimension(other)?;
            return Ok(Measurement::new(
                left.magnitude * right.magnitude,
                left.unit,
            ));
        }
        self.synthesize_compound(other, UnitOp::Multiply)
    }

    /// Divide by another measurement.
    ///
    /// Same-dimension operands divide in base units and the result keeps that
    /// base unit. Operands of different dimensions divide raw magnitudes and
    /// join their units into a compound unit. Division by a zero magnitude is
    /// an error regardless of units.
    pub fn div(&self, other: &Self) -> UnitifyResult<Measurement> {
        if other.magnitude == 0.0 {
            return Err(UnitifyError::DivisionByZero);
        }
        if self.unit.dimension() == other.unit.dimension() {
            let (left, right) = self.same_dimension(other)?;
            return Ok(Measurement::new(
                left.magnitude / right.magnitude,
                left.unit,
            ));
        }
        self.synthesize_compound(other, UnitOp::Divide)
    }

    /// Join this measurement's unit with another's via `op`. A compound left
    /// unit is flattened so the new component appends to its sequence.
    fn synthesize_compound(&self, other: &Self, op: UnitOp) -> UnitifyResult<Measurement> {
        let (mut components, mut operators) = match &self.unit {
            Unit::Compound(c) => (c.components().to_vec(), c.operators().to_vec()),
            simple => (vec![simple.clone()], Vec::new()),
        };
        components.push(other.unit.clone());
        operators.push(op);
        let unit = Unit::compound(components, operators)?;
        let magnitude = op.apply(self.magnitude, other.magnitude);
        Ok(Measurement::new(magnitude, unit))
    }

    /// Order two measurements of the same dimension by base magnitude
    pub fn compare(&self, other: &Self) -> UnitifyResult<Ordering> {
        let (left, right) = self.same_dimension(other)?;
        Ok(left.magnitude.total_cmp(&right.magnitude))
    }
}

impl FromStr for Measurement {
    type Err = UnitifyError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_measurement(text)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.name())
    }
}
