//! Console and JSON formatting of analysis results

use crate::error::Result;
use crate::scoring::{AnalysisResult, Outcome, Status};
use colored::{Color, Colorize};

use crate::output::spreadsheet::COLUMNS;

/// Trait for turning an analysis result into displayable text.
pub trait OutputFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String>;
}

/// Tabular console output with colored status and outcome lines.
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON output for scripting and downstream tooling.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        let mut output = String::new();

        // File column sized to the longest name, score columns to headers.
        let file_width = result
            .records
            .iter()
            .map(|r| r.file_name.len())
            .chain(std::iter::once(COLUMNS[0].len()))
            .max()
            .unwrap_or(4);

        output.push_str(&format!(
            "{:<file_width$}  {:>16}  {:>11}  {:>19}  {:>11}  {:<8}\n",
            COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4], COLUMNS[5],
        ));

        for record in &result.records {
            let status_color = match record.status {
                Status::Passed => Color::Green,
                Status::Rejected => Color::Red,
            };
            output.push_str(&format!(
                "{:<file_width$}  {:>16}  {:>11}  {:>19}  {:>11}  {}\n",
                record.file_name,
                record.experience_score,
                record.skill_score,
                record.certification_score,
                record.total_score,
                self.colorize(&record.status.to_string(), status_color),
            ));
        }

        let outcome_color = match result.outcome {
            Outcome::BothBelowThreshold => Color::Red,
            Outcome::Tie | Outcome::Winner { .. } => Color::Yellow,
        };
        output.push('\n');
        output.push_str(&self.colorize(&result.outcome.message(), outcome_color));
        output.push('\n');

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &AnalysisResult) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(result)?)
        } else {
            Ok(serde_json::to_string(result)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::CandidateRecord;

    fn sample_result() -> AnalysisResult {
        let records = [
            CandidateRecord {
                file_name: "alice.pdf".to_string(),
                experience_score: 5,
                skill_score: 9,
                certification_score: 4,
                total_score: 18,
                status: Status::Passed,
            },
            CandidateRecord {
                file_name: "bob.pdf".to_string(),
                experience_score: 5,
                skill_score: 3,
                certification_score: 0,
                total_score: 8,
                status: Status::Rejected,
            },
        ];
        AnalysisResult::from_records(records)
    }

    #[test]
    fn test_console_output_contains_records_and_outcome() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_result(&sample_result()).unwrap();

        assert!(output.contains("alice.pdf"));
        assert!(output.contains("bob.pdf"));
        assert!(output.contains("Passed"));
        assert!(output.contains("Rejected"));
        assert!(output.contains("Best Candidate: alice.pdf"));
    }

    #[test]
    fn test_console_output_without_colors_has_no_escapes() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_result(&sample_result()).unwrap();
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_json_output_round_trips() {
        let formatter = JsonFormatter::new(true);
        let output = formatter.format_result(&sample_result()).unwrap();

        let parsed: AnalysisResult = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, sample_result());
    }
}
