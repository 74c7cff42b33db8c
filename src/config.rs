//! Configuration for the CV analyzer
//!
//! All values are fixed at construction time; there is no config file and no
//! environment lookup. The defaults carry the scoring rules and artifact
//! names the tool has always used.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
}

/// Scoring rules, injected into the `Scorer` so they are explicit inputs
/// rather than literals buried in the scoring code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Minimum total score for a Passed status.
    pub threshold: u32,
    /// Skills checked as case-sensitive substrings, each counted once.
    pub skills: Vec<String>,
    /// Case-sensitive substring whose presence awards the experience points.
    pub experience_keyword: String,
    /// Word counted case-insensitively for the certification score.
    pub certification_keyword: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the three artifacts are written into.
    pub output_dir: PathBuf,
    pub chart_file: String,
    pub spreadsheet_file: String,
    pub report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                threshold: 10,
                skills: vec![
                    "Python".to_string(),
                    "Machine Learning".to_string(),
                    "Data Analysis".to_string(),
                    "Communication".to_string(),
                ],
                experience_keyword: "years".to_string(),
                certification_keyword: "certification".to_string(),
            },
            output: OutputConfig {
                output_dir: PathBuf::from("."),
                chart_file: "cv_analysis_graphs.png".to_string(),
                spreadsheet_file: "cv_analysis_results.xlsx".to_string(),
                report_file: "cv_analysis_report.pdf".to_string(),
            },
        }
    }
}

impl Config {
    pub fn with_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.output.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

impl OutputConfig {
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.chart_file)
    }

    pub fn spreadsheet_path(&self) -> PathBuf {
        self.output_dir.join(&self.spreadsheet_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.report_file)
    }
}
