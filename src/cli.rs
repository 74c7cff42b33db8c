//! CLI interface for the CV analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cv-analyzer")]
#[command(about = "CV screening tool that scores and compares two PDF resumes")]
#[command(
    long_about = "Score two PDF resumes by keyword presence (experience, skills, certifications), compare them, and export the results as a PDF report or xlsx spreadsheet"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and compare two CV files
    Analyze {
        /// Paths to exactly two PDF files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Directory the chart and export files are written into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Export the analysis report as PDF
        #[arg(long)]
        export_pdf: bool,

        /// Export the results spreadsheet
        #[arg(long)]
        export_excel: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("cv.pdf"), &["pdf"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.PDF"), &["pdf"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("cv.txt"), &["pdf"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("cv"), &["pdf"]).is_err());
    }
}
