use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use unitify::{LineResult, Measurement, StatisticsCalculator, UnitEntry};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    /// Table of per-line evaluation outcomes
    pub fn format_line_outcomes(&self, lines: &[LineResult]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Line").set_alignment(CellAlignment::Right),
            Cell::new("Expression").set_alignment(CellAlignment::Left),
            Cell::new("Result").set_alignment(CellAlignment::Left),
        ]));

        for line in lines {
            let outcome = match &line.outcome {
                Ok(result) => result.to_string(),
                Err(e) => format!("error: {}", e),
            };
            table.add_row(Row::from(vec![
                Cell::new(line.line).set_alignment(CellAlignment::Right),
                Cell::new(&line.expression),
                Cell::new(outcome),
            ]));
        }

        table.to_string()
    }

    /// Table of parsed measurements in a given order
    pub fn format_measurements(&self, title: &str, measurements: &[Measurement]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![Cell::new(title)]));

        for m in measurements {
            table.add_row(Row::from(vec![Cell::new(m.to_string())]));
        }

        table.to_string()
    }

    /// Mean/median/mode summary over measurement magnitudes
    pub fn format_statistics(&self, measurements: &[Measurement]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Statistic").set_alignment(CellAlignment::Left),
            Cell::new("Value").set_alignment(CellAlignment::Right),
        ]));

        let rows = [
            ("Count", Some(measurements.len() as f64)),
            ("Mean", StatisticsCalculator::mean(measurements)),
            ("Median", StatisticsCalculator::median(measurements)),
            ("Mode", StatisticsCalculator::mode(measurements)),
        ];
        for (name, value) in rows {
            let value_str = value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string());
            table.add_row(Row::from(vec![
                Cell::new(name),
                Cell::new(value_str).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }

    /// Table of every registered unit with its dimension and base factor
    pub fn format_unit_table(&self, entries: &[UnitEntry]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Unit").set_alignment(CellAlignment::Left),
            Cell::new("Aliases").set_alignment(CellAlignment::Left),
            Cell::new("Dimension").set_alignment(CellAlignment::Left),
            Cell::new("Base factor").set_alignment(CellAlignment::Right),
        ]));

        for entry in entries {
            table.add_row(Row::from(vec![
                Cell::new(entry.canonical),
                Cell::new(entry.aliases.join(", ")),
                Cell::new(entry.dimension.to_string()),
                Cell::new(entry.base_factor.to_string()).set_alignment(CellAlignment::Right),
            ]));
        }

        table.to_string()
    }
}
