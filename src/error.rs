//! Error handling for the CV analyzer application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvAnalyzerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Chart rendering error: {0}")]
    ChartRender(String),

    #[error("Spreadsheet export error: {0}")]
    SpreadsheetExport(String),

    #[error("Report export error: {0}")]
    ReportExport(String),

    #[error("Export precondition not met: {0}")]
    ExportPrecondition(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CvAnalyzerError>;
