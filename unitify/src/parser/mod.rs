//! Text parsing for measurements and measurement expressions.
//!
//! The grammar lives in `unitify.pest`. Parsing produces positional operand
//! and operator sequences for the evaluator rather than a tree; precedence is
//! the evaluator's concern.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::evaluator::BinOp;
use crate::measurement::Measurement;
use crate::registry::UnitRegistry;
use crate::resource_limits::ResourceLimits;
use crate::unit::Unit;
use crate::UnitifyError;
use crate::UnitifyResult;

#[derive(Parser)]
#[grammar = "src/parser/unitify.pest"]
pub struct LineParser;

/// Parse one expression line into its operand and operator sequences.
///
/// `operators[i]` sits between `measurements[i]` and `measurements[i + 1]`.
pub fn parse_expression(
    line: &str,
    limits: &ResourceLimits,
) -> UnitifyResult<(Vec<Measurement>, Vec<BinOp>)> {
    let mut pairs = LineParser::parse(Rule::expression_line, line)
        .map_err(|e| UnitifyError::Parse(format!("{}", e.variant)))?;

    let mut measurements = Vec::new();
    let mut operators = Vec::new();

    let line_pair = pairs.next().ok_or_else(|| {
        UnitifyError::Internal("expression line produced no parse output".to_string())
    })?;
    for pair in line_pair.into_inner() {
        if pair.as_rule() != Rule::expression {
            continue;
        }
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::measurement => {
                    if measurements.len() >= limits.max_expression_operands {
                        return Err(UnitifyError::ResourceLimitExceeded {
                            limit_name: "max_expression_operands".to_string(),
                            limit_value: limits.max_expression_operands.to_string(),
                            actual_value: format!(
                                "more than {} operands",
                                limits.max_expression_operands
                            ),
                        });
                    }
                    measurements.push(parse_measurement_pair(inner)?);
                }
                Rule::expr_op => operators.push(parse_bin_op(inner.as_str())?),
                _ => {}
            }
        }
    }

    Ok((measurements, operators))
}

/// Parse a single measurement such as `1.5 kg` or `72 km / hr`
pub fn parse_measurement(text: &str) -> UnitifyResult<Measurement> {
    let mut pairs = LineParser::parse(Rule::measurement_line, text)
        .map_err(|e| UnitifyError::Parse(format!("{}", e.variant)))?;

    let line_pair = pairs.next().ok_or_else(|| {
        UnitifyError::Internal("measurement line produced no parse output".to_string())
    })?;
    for pair in line_pair.into_inner() {
        if pair.as_rule() == Rule::measurement {
            return parse_measurement_pair(pair);
        }
    }
    Err(UnitifyError::Parse(format!(
        "expected a measurement, found '{}'",
        text
    )))
}

fn parse_measurement_pair(pair: Pair<Rule>) -> UnitifyResult<Measurement> {
    let mut magnitude = None;
    let mut unit = None;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::number => magnitude = Some(parse_magnitude(inner.as_str())?),
            Rule::unit_expr => unit = Some(parse_unit_expr(inner)?),
            _ => {}
        }
    }
    match (magnitude, unit) {
        (Some(magnitude), Some(unit)) => Ok(Measurement::new(magnitude, unit)),
        _ => Err(UnitifyError::Internal(
            "measurement missing magnitude or unit".to_string(),
        )),
    }
}

fn parse_magnitude(text: &str) -> UnitifyResult<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| UnitifyError::Parse(format!("invalid number '{}'", text)))?;
    if !value.is_finite() {
        return Err(UnitifyError::Parse(format!(
            "magnitude '{}' is not a finite number",
            text
        )));
    }
    Ok(value)
}

fn parse_unit_expr(pair: Pair<Rule>) -> UnitifyResult<Unit> {
    let tokens: Vec<&str> = pair.into_inner().map(|p| p.as_str()).collect();
    UnitRegistry::parse_compound(&tokens.join(" "))
}

fn parse_bin_op(text: &str) -> UnitifyResult<BinOp> {
    match text {
        "+" => Ok(BinOp::Add),
        "-" => Ok(BinOp::Subtract),
        "*" => Ok(BinOp::Multiply),
        "/" => Ok(BinOp::Divide),
        other => Err(UnitifyError::Parse(format!(
            "unknown operator '{}'",
            other
        ))),
    }
}
