//! Batch processing of measurement files.
//!
//! A file holds one expression per line. Processing evaluates every line
//! independently: a malformed line is recorded with its error and the batch
//! continues. Both the per-line outcomes and the full set of parsed operands
//! are retained for reporting and statistics.

use std::fs;
use std::path::Path;

use crate::error::UnitifyError;
use crate::evaluator::Evaluator;
use crate::measurement::Measurement;
use crate::parser;
use crate::resource_limits::ResourceLimits;
use crate::UnitifyResult;

/// Outcome of evaluating one line of a measurement file
#[derive(Debug, Clone)]
pub struct LineResult {
    /// 1-based line number within the input
    pub line: usize,
    /// The line's text as read, trimmed
    pub expression: String,
    pub outcome: Result<Measurement, UnitifyError>,
}

/// Evaluates measurement files line by line and accumulates the results
#[derive(Debug, Default)]
pub struct FileProcessor {
    evaluator: Evaluator,
    limits: ResourceLimits,
    lines: Vec<LineResult>,
    measurements: Vec<Measurement>,
}

impl FileProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ResourceLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// Read and process a measurement file
    pub fn load_file(&mut self, path: &Path) -> UnitifyResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| UnitifyError::Io(format!("{}: {}", path.display(), e)))?;
        self.load_str(&content)
    }

    /// Process measurement text, one expression per line. Blank lines are
    /// skipped; malformed lines are recorded but do not abort the batch.
    pub fn load_str(&mut self, content: &str) -> UnitifyResult<()> {
        if content.len() > self.limits.max_file_size_bytes {
            return Err(UnitifyError::ResourceLimitExceeded {
                limit_name: "max_file_size_bytes".to_string(),
                limit_value: format!("{} bytes", self.limits.max_file_size_bytes),
                actual_value: format!("{} bytes", content.len()),
            });
        }

        for (index, raw) in content.lines().enumerate() {
            let line = index + 1;
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }

            let outcome = self.evaluate_line(raw, text);
            self.lines.push(LineResult {
                line,
                expression: text.to_string(),
                outcome,
            });
        }
        Ok(())
    }

    fn evaluate_line(&mut self, raw: &str, text: &str) -> Result<Measurement, UnitifyError> {
        if raw.len() > self.limits.max_line_length_bytes {
            return Err(UnitifyError::ResourceLimitExceeded {
                limit_name: "max_line_length_bytes".to_string(),
                limit_value: format!("{} bytes", self.limits.max_line_length_bytes),
                actual_value: format!("{} bytes", raw.len()),
            });
        }
        let (operands, operators) = parser::parse_expression(text, &self.limits)?;
        self.measurements.extend(operands.iter().cloned());
        self.evaluator.evaluate(&operands, &operators)
    }

    /// Every processed line with its outcome, in input order
    pub fn line_results(&self) -> &[LineResult] {
        &self.lines
    }

    /// The successfully evaluated results, in input order
    pub fn results(&self) -> Vec<Measurement> {
        self.lines
            .iter()
            .filter_map(|l| l.outcome.as_ref().ok().cloned())
            .collect()
    }

    /// Every operand parsed from the input, in appearance order
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Parsed operands sorted ascending by raw magnitude
    pub fn sorted_measurements(&self) -> Vec<Measurement> {
        let mut sorted = self.measurements.clone();
        sorted.sort_by(|a, b| a.magnitude().total_cmp(&b.magnitude()));
        sorted
    }
}
