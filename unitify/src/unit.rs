//! The unit model: simple units, compound units, and conversion to and from
//! each dimension's canonical base unit.
//!
//! A simple unit carries a name, a dimension, and a multiplicative factor to
//! the dimension's base unit (grams, meters, seconds, liters). A compound
//! unit is an ordered composition of units joined by `*` and `/`, e.g.
//! `km / hr`. Units are immutable once constructed; a compound unit's display
//! name is computed eagerly at construction.

use std::fmt;

use serde::Serialize;

use crate::error::UnitifyError;
use crate::UnitifyResult;

/// The physical kind of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Mass,
    Length,
    Time,
    Volume,
    Compound,
}

impl Dimension {
    /// Canonical base-unit symbol for a simple dimension; Compound has none
    pub fn base_symbol(&self) -> Option<&'static str> {
        match self {
            Dimension::Mass => Some("g"),
            Dimension::Length => Some("m"),
            Dimension::Time => Some("s"),
            Dimension::Volume => Some("L"),
            Dimension::Compound => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Mass => write!(f, "mass"),
            Dimension::Length => write!(f, "length"),
            Dimension::Time => write!(f, "time"),
            Dimension::Volume => write!(f, "volume"),
            Dimension::Compound => write!(f, "compound"),
        }
    }
}

/// Operator joining two adjacent components of a compound unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitOp {
    Multiply,
    Divide,
}

impl UnitOp {
    /// Combine an accumulated factor with the next component's factor
    pub fn apply(&self, acc: f64, rhs: f64) -> f64 {
        match self {
            UnitOp::Multiply => acc * rhs,
            UnitOp::Divide => acc / rhs,
        }
    }
}

impl fmt::Display for UnitOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitOp::Multiply => write!(f, "*"),
            UnitOp::Divide => write!(f, "/"),
        }
    }
}

/// A single-dimension unit with a multiplicative factor to its base unit
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleUnit {
    name: String,
    dimension: Dimension,
    base_factor: f64,
}

impl SimpleUnit {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Factor converting one of this unit into the dimension's base unit
    pub fn base_factor(&self) -> f64 {
        self.base_factor
    }
}

/// An ordered composition of units joined by `*`/`/` operators
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundUnit {
    components: Vec<Unit>,
    operators: Vec<UnitOp>,
    name: String,
}

impl CompoundUnit {
    /// Build a compound unit from components and the operators between them.
    ///
    /// There must be exactly one operator fewer than there are components.
    pub fn new(components: Vec<Unit>, operators: Vec<UnitOp>) -> UnitifyResult<Self> {
        if components.is_empty() {
            return Err(UnitifyError::EmptyCompoundUnit);
        }
        if operators.len() != components.len() - 1 {
            return Err(UnitifyError::MalformedCompoundUnit {
                components: components.len(),
                operators: operators.len(),
            });
        }
        let name = build_compound_name(&components, &operators);
        Ok(Self {
            components,
            operators,
            name,
        })
    }

    pub fn components(&self) -> &[Unit] {
        &self.components
    }

    pub fn operators(&self) -> &[UnitOp] {
        &self.operators
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn build_compound_name(components: &[Unit], operators: &[UnitOp]) -> String {
    let mut name = components[0].name().to_string();
    for (op, unit) in operators.iter().zip(&components[1..]) {
        name.push(' ');
        name.push_str(&op.to_string());
        name.push(' ');
        name.push_str(unit.name());
    }
    name
}

/// A unit of measure: either a simple unit or a compound composition
#[derive(Debug, Clone, PartialEq)]
pub enum Unit {
    Simple(SimpleUnit),
    Compound(CompoundUnit),
}

impl Unit {
    /// Create a simple unit. The base factor must be positive.
    pub fn simple(name: impl Into<String>, dimension: Dimension, base_factor: f64) -> Unit {
        debug_assert!(base_factor > 0.0, "base factor must be positive");
        Unit::Simple(SimpleUnit {
            name: name.into(),
            dimension,
            base_factor,
        })
    }

    /// Create a compound unit, validating the component/operator invariant
    pub fn compound(components: Vec<Unit>, operators: Vec<UnitOp>) -> UnitifyResult<Unit> {
        CompoundUnit::new(components, operators).map(Unit::Compound)
    }

    /// Display name: the stored name for simple units, the joined
    /// `a <op> b <op> c` form for compound units
    pub fn name(&self) -> &str {
        match self {
            Unit::Simple(u) => u.name(),
            Unit::Compound(c) => c.name(),
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::Simple(u) => u.dimension(),
            Unit::Compound(_) => Dimension::Compound,
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Unit::Compound(_))
    }

    /// Convert a magnitude in this unit to the base-unit form.
    ///
    /// For a compound unit the component factors are folded together with the
    /// unit's own operators: `km / hr` applied to 72 yields 20 (m/s).
    pub fn to_base(&self, value: f64) -> f64 {
        match self {
            Unit::Simple(u) => value * u.base_factor,
            Unit::Compound(c) => {
                let mut factor = c.components[0].to_base(1.0);
                for (op, unit) in c.operators.iter().zip(&c.components[1..]) {
                    factor = op.apply(factor, unit.to_base(1.0));
                }
                value * factor
            }
        }
    }

    /// Convert a magnitude in base-unit form back into this unit
    pub fn from_base(&self, value: f64) -> f64 {
        match self {
            Unit::Simple(u) => value / u.base_factor,
            Unit::Compound(c) => {
                let mut factor = c.components[0].from_base(1.0);
                for (op, unit) in c.operators.iter().zip(&c.components[1..]) {
                    factor = op.apply(factor, unit.from_base(1.0));
                }
                value * factor
            }
        }
    }

    /// The canonical base unit: grams, meters, seconds or liters for simple
    /// units; for compound units, the composition of each component's base
    /// unit with the operator sequence preserved
    pub fn base_unit(&self) -> Unit {
        match self {
            Unit::Simple(u) => match u.dimension.base_symbol() {
                Some(symbol) => Unit::simple(symbol, u.dimension, 1.0),
                None => self.clone(),
            },
            Unit::Compound(c) => {
                let components = c.components.iter().map(Unit::base_unit).collect();
                let unit = CompoundUnit::new(components, c.operators.clone())
                    .expect("component and operator counts are preserved");
                Unit::Compound(unit)
            }
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}
