//! # Unitify Engine
//!
//! **Measurement arithmetic with dimensional analysis**
//!
//! Unitify parses measurements like `1.5 kg` or `72 km / hr`, checks that
//! arithmetic between them is dimensionally sound, and evaluates infix
//! expressions with standard operator precedence.
//!
//! ## Quick Start
//!
//! ```rust
//! use unitify::{Measurement, UnitifyResult};
//!
//! fn main() -> UnitifyResult<()> {
//!     let mass: Measurement = "100 g".parse()?;
//!     let volume: Measurement = "2 L".parse()?;
//!
//!     // Dividing different dimensions synthesizes a compound unit
//!     let density = mass.div(&volume)?;
//!     assert_eq!(density.to_string(), "50 g / L");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Units
//! A simple unit belongs to one dimension (mass, length, time, volume) and
//! carries a factor to that dimension's base unit. Compound units compose
//! simple units with `*` and `/`, like `km / hr`.
//!
//! ### Measurements
//! A measurement pairs a magnitude with a unit. Addition and subtraction
//! require a shared dimension and produce base-unit results; multiplication
//! and division across dimensions build compound units.
//!
//! ### Expressions
//! Expression lines chain measurements with `+ - * /`. Evaluation follows
//! PEMDAS precedence with left associativity.

pub mod converter;
pub mod error;
pub mod evaluator;
pub mod measurement;
pub mod parser;
pub mod processor;
pub mod registry;
pub mod report;
pub mod resource_limits;
pub mod stats;
pub mod unit;

pub use converter::UnitConverter;
pub use error::UnitifyError;
pub use evaluator::{BinOp, Evaluator};
pub use measurement::Measurement;
pub use parser::{parse_expression, parse_measurement};
pub use processor::{FileProcessor, LineResult};
pub use registry::{UnitEntry, UnitRegistry};
pub use report::ReportGenerator;
pub use resource_limits::ResourceLimits;
pub use stats::StatisticsCalculator;
pub use unit::{CompoundUnit, Dimension, SimpleUnit, Unit, UnitOp};

/// Result type for Unitify operations
pub type UnitifyResult<T> = Result<T, UnitifyError>;

#[cfg(test)]
mod tests;
