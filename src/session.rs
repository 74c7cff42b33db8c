//! Session state machine
//!
//! One linear flow per run: Idle -> FilesSelected -> Analyzed, then either
//! export can fire from Analyzed. Selecting files again invalidates the
//! previous analysis. All transitions go through the methods here; there is
//! no ambient mutation of selection or results.

use crate::config::Config;
use crate::error::{CvAnalyzerError, Result};
use crate::input::text_extractor::{PdfExtractor, TextExtractor};
use crate::output::{chart, report, spreadsheet};
use crate::scoring::{AnalysisResult, CandidateRecord, Scorer};
use log::{info, warn};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    FilesSelected,
    Analyzed,
}

pub struct Session {
    config: Config,
    scorer: Scorer,
    extractor: Box<dyn TextExtractor>,
    files: Vec<PathBuf>,
    result: Option<AnalysisResult>,
    state: SessionState,
}

impl Session {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_extractor(config, Box::new(PdfExtractor))
    }

    /// Build a session with a custom text extractor. Front ends and tests
    /// use this to substitute the text source.
    pub fn with_extractor(config: Config, extractor: Box<dyn TextExtractor>) -> Result<Self> {
        let scorer = Scorer::new(&config.scoring)?;
        Ok(Self {
            config,
            scorer,
            extractor,
            files: Vec::new(),
            result: None,
            state: SessionState::Idle,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Select the CV files for the next run. Exactly two are required; a
    /// wrong count clears the selection and returns to Idle. Any selection
    /// attempt discards the previous analysis result.
    pub fn select_files(&mut self, files: &[PathBuf]) -> Result<()> {
        self.result = None;

        if files.len() != 2 {
            self.files.clear();
            self.state = SessionState::Idle;
            return Err(CvAnalyzerError::InvalidSelection(format!(
                "Please select exactly two PDF files (got {})",
                files.len()
            )));
        }

        self.files = files.to_vec();
        self.state = SessionState::FilesSelected;
        Ok(())
    }

    /// Score both selected files and build the comparison result. A file
    /// that cannot be read scores as empty text instead of aborting the
    /// run. Saves the comparison chart PNG as a side effect.
    pub fn analyze(&mut self) -> Result<&AnalysisResult> {
        if self.files.len() != 2 {
            return Err(CvAnalyzerError::InvalidSelection(
                "No CV files selected; select exactly two files first".to_string(),
            ));
        }

        let files = self.files.clone();
        let records = [
            self.evaluate_file(&files[0]),
            self.evaluate_file(&files[1]),
        ];
        let result = AnalysisResult::from_records(records);

        let chart_path = self.config.output.chart_path();
        chart::render_comparison(&result.records, &chart_path)?;
        info!("Comparison chart saved to {}", chart_path.display());

        self.state = SessionState::Analyzed;
        Ok(self.result.insert(result))
    }

    /// Export the results spreadsheet. Requires a completed analysis.
    pub fn export_spreadsheet(&self) -> Result<PathBuf> {
        let result = self.analyzed_result()?;
        let path = self.config.output.spreadsheet_path();
        spreadsheet::export(result, &path)?;
        info!("Results exported to {}", path.display());
        Ok(path)
    }

    /// Export the PDF report. Requires a completed analysis and the chart
    /// artifact from the analysis step still on disk.
    pub fn export_report(&self) -> Result<PathBuf> {
        let result = self.analyzed_result()?;
        let path = self.config.output.report_path();
        report::export(result, &self.config.output.chart_path(), &path)?;
        info!("Report exported to {}", path.display());
        Ok(path)
    }

    fn analyzed_result(&self) -> Result<&AnalysisResult> {
        self.result.as_ref().ok_or_else(|| {
            CvAnalyzerError::ExportPrecondition(
                "No analysis result available; run the analysis first".to_string(),
            )
        })
    }

    fn evaluate_file(&self, path: &Path) -> CandidateRecord {
        let text = match self.extractor.extract(path) {
            Ok(text) => text,
            Err(e) => {
                // Partial-failure tolerance: an unreadable file scores
                // minimally rather than aborting the comparison.
                warn!("Could not read file {}: {}", path.display(), e);
                String::new()
            }
        };

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        self.scorer.evaluate(&file_name, &text)
    }
}
