//! Report rendering for measurement batches in text, CSV, and JSON form.

use crate::measurement::Measurement;
use crate::UnitifyError;
use crate::UnitifyResult;

/// Renders a set of measurements in the supported output formats
pub struct ReportGenerator;

impl ReportGenerator {
    /// One measurement per line in `<magnitude> <unit>` form
    pub fn text_report(measurements: &[Measurement]) -> String {
        let mut out = String::new();
        for m in measurements {
            out.push_str(&m.to_string());
            out.push('\n');
        }
        out
    }

    /// CSV with a `magnitude,unit` header. Unit names containing commas do
    /// not occur in the registry, so fields are unquoted.
    pub fn csv_report(measurements: &[Measurement]) -> String {
        let mut out = String::from("magnitude,unit\n");
        for m in measurements {
            out.push_str(&format!("{},{}\n", m.magnitude(), m.unit().name()));
        }
        out
    }

    /// Pretty-printed JSON array of `{magnitude, unit}` objects
    pub fn json_report(measurements: &[Measurement]) -> UnitifyResult<String> {
        serde_json::to_string_pretty(measurements)
            .map_err(|e| UnitifyError::Internal(format!("JSON serialization failed: {}", e)))
    }
}
