//! Unit resolution - maps unit name strings to unit values
//!
//! The registry is a compile-time constant table of recognized unit names
//! and abbreviations with their dimension and base-conversion factor.
//! Lookups are exact-match and case-sensitive.

use crate::unit::{Dimension, Unit, UnitOp};
use crate::UnitifyError;
use crate::UnitifyResult;

/// One row of the built-in unit table
#[derive(Debug, Clone, Copy)]
pub struct UnitEntry {
    /// Canonical short name, used as the unit's display name
    pub canonical: &'static str,
    /// Other accepted spellings (full names, alternate abbreviations)
    pub aliases: &'static [&'static str],
    pub dimension: Dimension,
    /// Factor converting one of this unit into the dimension's base unit
    pub base_factor: f64,
}

static ENTRIES: &[UnitEntry] = &[
    // Mass (base: grams)
    UnitEntry {
        canonical: "mg",
        aliases: &["milligrams"],
        dimension: Dimension::Mass,
        base_factor: 0.001,
    },
    UnitEntry {
        canonical: "cg",
        aliases: &["centigrams"],
        dimension: Dimension::Mass,
        base_factor: 0.01,
    },
    UnitEntry {
        canonical: "g",
        aliases: &["grams"],
        dimension: Dimension::Mass,
        base_factor: 1.0,
    },
    UnitEntry {
        canonical: "kg",
        aliases: &["kilograms"],
        dimension: Dimension::Mass,
        base_factor: 1000.0,
    },
    // Length (base: meters)
    UnitEntry {
        canonical: "mm",
        aliases: &["millimeters"],
        dimension: Dimension::Length,
        base_factor: 0.001,
    },
    UnitEntry {
        canonical: "cm",
        aliases: &["centimeters"],
        dimension: Dimension::Length,
        base_factor: 0.01,
    },
    UnitEntry {
        canonical: "m",
        aliases: &["meters"],
        dimension: Dimension::Length,
        base_factor: 1.0,
    },
    UnitEntry {
        canonical: "km",
        aliases: &["kilometers"],
        dimension: Dimension::Length,
        base_factor: 1000.0,
    },
    // Time (base: seconds)
    UnitEntry {
        canonical: "s",
        aliases: &["seconds"],
        dimension: Dimension::Time,
        base_factor: 1.0,
    },
    UnitEntry {
        canonical: "min",
        aliases: &["minutes"],
        dimension: Dimension::Time,
        base_factor: 60.0,
    },
    UnitEntry {
        canonical: "hr",
        aliases: &["hours"],
        dimension: Dimension::Time,
        base_factor: 3600.0,
    },
    // Volume (base: liters)
    UnitEntry {
        canonical: "mL",
        aliases: &["ml", "milliliters"],
        dimension: Dimension::Volume,
        base_factor: 0.001,
    },
    UnitEntry {
        canonical: "cL",
        aliases: &["cl", "centiliters"],
        dimension: Dimension::Volume,
        base_factor: 0.01,
    },
    UnitEntry {
        canonical: "L",
        aliases: &["l", "liters"],
        dimension: Dimension::Volume,
        base_factor: 1.0,
    },
    UnitEntry {
        canonical: "kL",
        aliases: &["kl", "kiloliters"],
        dimension: Dimension::Volume,
        base_factor: 1000.0,
    },
];

/// Resolves unit names against the built-in unit table
pub struct UnitRegistry;

impl UnitRegistry {
    /// Exact-match, case-sensitive lookup of a simple unit name
    pub fn resolve(name: &str) -> UnitifyResult<Unit> {
        ENTRIES
            .iter()
            .find(|entry| entry.canonical == name || entry.aliases.contains(&name))
            .map(|entry| Unit::simple(entry.canonical, entry.dimension, entry.base_factor))
            .ok_or_else(|| UnitifyError::UnknownUnit(name.to_string()))
    }

    /// True if the name denotes a compound unit (contains `*` or `/`)
    pub fn is_compound_name(name: &str) -> bool {
        name.contains('*') || name.contains('/')
    }

    /// Parse a space-separated compound unit name such as "km / hr".
    ///
    /// Tokens alternate between unit names and operators. A single unit name
    /// with no operators resolves to the simple unit itself.
    pub fn parse_compound(name: &str) -> UnitifyResult<Unit> {
        let mut tokens = name.split_whitespace();
        let first = tokens
            .next()
            .ok_or_else(|| UnitifyError::Parse("empty compound unit name".to_string()))?;

        let mut components = vec![Self::resolve(first)?];
        let mut operators = Vec::new();

        while let Some(op_token) = tokens.next() {
            let op = match op_token {
                "*" => UnitOp::Multiply,
                "/" => UnitOp::Divide,
                other => {
                    return Err(UnitifyError::Parse(format!(
                        "expected '*' or '/' in compound unit name '{}', found '{}'",
                        name, other
                    )))
                }
            };
            let unit_token = tokens.next().ok_or_else(|| {
                UnitifyError::Parse(format!(
                    "dangling operator '{}' in compound unit name '{}'",
                    op_token, name
                ))
            })?;
            operators.push(op);
            components.push(Self::resolve(unit_token)?);
        }

        if operators.is_empty() {
            Ok(components.remove(0))
        } else {
            Unit::compound(components, operators)
        }
    }

    /// The full unit table, for listings and diagnostics
    pub fn entries() -> &'static [UnitEntry] {
        ENTRIES
    }
}
