//! Descriptive statistics over measurement magnitudes.
//!
//! The calculators operate on raw magnitudes without unit conversion; callers
//! that need comparable values convert to base units first.

use crate::measurement::Measurement;

/// Mean, median, and mode over measurement magnitudes
pub struct StatisticsCalculator;

impl StatisticsCalculator {
    /// Arithmetic mean, or `None` for an empty set
    pub fn mean(measurements: &[Measurement]) -> Option<f64> {
        if measurements.is_empty() {
            return None;
        }
        let sum: f64 = measurements.iter().map(Measurement::magnitude).sum();
        Some(sum / measurements.len() as f64)
    }

    /// Median of the magnitudes; the average of the two middle values for an
    /// even count
    pub fn median(measurements: &[Measurement]) -> Option<f64> {
        if measurements.is_empty() {
            return None;
        }
        let mut values: Vec<f64> = measurements.iter().map(Measurement::magnitude).collect();
        values.sort_by(f64::total_cmp);
        let mid = values.len() / 2;
        if values.len() % 2 == 0 {
            Some((values[mid - 1] + values[mid]) / 2.0)
        } else {
            Some(values[mid])
        }
    }

    /// Most frequent magnitude; ties resolve to the smallest value
    pub fn mode(measurements: &[Measurement]) -> Option<f64> {
        if measurements.is_empty() {
            return None;
        }
        let mut values: Vec<f64> = measurements.iter().map(Measurement::magnitude).collect();
        values.sort_by(f64::total_cmp);

        let mut best = values[0];
        let mut best_count = 0usize;
        let mut run_start = 0usize;
        for i in 0..=values.len() {
            if i == values.len() || values[i] != values[run_start] {
                let count = i - run_start;
                if count > best_count {
                    best_count = count;
                    best = values[run_start];
                }
                run_start = i;
            }
        }
        Some(best)
    }
}
