use std::fmt;

/// Error types for the Unitify engine.
///
/// The core never recovers silently from a unit or dimension mismatch: every
/// such condition surfaces as one of these variants and callers decide
/// whether to skip a line, abort a batch, or report to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitifyError {
    /// A unit name that is not in the registry
    UnknownUnit(String),

    /// Compound unit built with an operator count that does not match its
    /// component count
    MalformedCompoundUnit { components: usize, operators: usize },

    /// Compound unit built with no components at all
    EmptyCompoundUnit,

    /// Operands whose dimensions (or base-unit structures) differ where a
    /// common dimension is required
    IncompatibleUnits { left: String, right: String },

    /// Division by a zero-magnitude right operand
    DivisionByZero,

    /// Operand/operator mismatch or stack underflow during expression
    /// evaluation
    MalformedExpression(String),

    /// Bad numeric or unit token while parsing text input
    Parse(String),

    /// Failure reading a measurement file
    Io(String),

    /// Input exceeded a configured resource limit
    ResourceLimitExceeded {
        limit_name: String,
        limit_value: String,
        actual_value: String,
    },

    /// Engine error without a more specific classification
    Internal(String),
}

impl fmt::Display for UnitifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitifyError::UnknownUnit(name) => write!(f, "Unknown unit: '{}'", name),
            UnitifyError::MalformedCompoundUnit {
                components,
                operators,
            } => write!(
                f,
                "Malformed compound unit: {} component(s) require {} operator(s), found {}",
                components,
                components.saturating_sub(1),
                operators
            ),
            UnitifyError::EmptyCompoundUnit => {
                write!(f, "Compound unit must have at least one component")
            }
            UnitifyError::IncompatibleUnits { left, right } => write!(
                f,
                "Incompatible units: '{}' and '{}' are not of the same dimension",
                left, right
            ),
            UnitifyError::DivisionByZero => write!(f, "Division by zero"),
            UnitifyError::MalformedExpression(msg) => {
                write!(f, "Malformed expression: {}", msg)
            }
            UnitifyError::Parse(msg) => write!(f, "Parse error: {}", msg),
            UnitifyError::Io(msg) => write!(f, "I/O error: {}", msg),
            UnitifyError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "Resource limit exceeded: {} is {}, limit is {}",
                limit_name, actual_value, limit_value
            ),
            UnitifyError::Internal(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for UnitifyError {}

impl From<std::io::Error> for UnitifyError {
    fn from(err: std::io::Error) -> Self {
        UnitifyError::Io(err.to_string())
    }
}
