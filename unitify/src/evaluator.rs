//! Infix expression evaluation over measurements with standard operator
//! precedence.
//!
//! The evaluator consumes pre-parsed operand and operator sequences and
//! applies the shunting-yard reduction: `*` and `/` bind tighter than `+` and
//! `-`, equal precedence associates left.

use std::fmt;

use crate::measurement::Measurement;
use crate::UnitifyError;
use crate::UnitifyResult;

/// Binary operator between two measurements in an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinOp {
    fn precedence(&self) -> u8 {
        match self {
            BinOp::Add | BinOp::Subtract => 1,
            BinOp::Multiply | BinOp::Divide => 2,
        }
    }

    /// Apply the operator via measurement arithmetic, including dimension
    /// checks
    pub fn apply(&self, left: &Measurement, right: &Measurement) -> UnitifyResult<Measurement> {
        match self {
            BinOp::Add => left.add(right),
            BinOp::Subtract => left.sub(right),
            BinOp::Multiply => left.mul(right),
            BinOp::Divide => left.div(right),
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinOp::Add => write!(f, "+"),
            BinOp::Subtract => write!(f, "-"),
            BinOp::Multiply => write!(f, "*"),
            BinOp::Divide => write!(f, "/"),
        }
    }
}

/// Evaluates operand/operator sequences with PEMDAS precedence
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Reduce an infix expression to a single measurement.
    ///
    /// `measurements` and `operators` are positional: `operators[i]` sits
    /// between `measurements[i]` and `measurements[i + 1]`. A lone operand
    /// evaluates to itself.
    pub fn evaluate(
        &self,
        measurements: &[Measurement],
        operators: &[BinOp],
    ) -> UnitifyResult<Measurement> {
        if measurements.is_empty() {
            return Err(UnitifyError::MalformedExpression(
                "expression has no operands".to_string(),
            ));
        }
        if operators.len() != measurements.len() - 1 {
            return Err(UnitifyError::MalformedExpression(format!(
                "{} operand(s) require {} operator(s), found {}",
                measurements.len(),
                measurements.len() - 1,
                operators.len()
            )));
        }

        let mut operands = vec![measurements[0].clone()];
        let mut pending: Vec<BinOp> = Vec::new();

        for (op, operand) in operators.iter().zip(&measurements[1..]) {
            while pending
                .last()
                .is_some_and(|top| top.precedence() >= op.precedence())
            {
                let top = pending.pop().ok_or_else(|| {
                    UnitifyError::MalformedExpression("operator stack underflow".to_string())
                })?;
                reduce(&mut operands, top)?;
            }
            pending.push(*op);
            operands.push(operand.clone());
        }

        while let Some(op) = pending.pop() {
            reduce(&mut operands, op)?;
        }

        operands.pop().ok_or_else(|| {
            UnitifyError::MalformedExpression("expression produced no result".to_string())
        })
    }
}

fn reduce(operands: &mut Vec<Measurement>, op: BinOp) -> UnitifyResult<()> {
    let right = operands.pop().ok_or_else(|| {
        UnitifyError::MalformedExpression(format!("missing right operand for '{}'", op))
    })?;
    let left = operands.pop().ok_or_else(|| {
        UnitifyError::MalformedExpression(format!("missing left operand for '{}'", op))
    })?;
    operands.push(op.apply(&left, &right)?);
    Ok(())
}
