//! Spreadsheet export of analysis results

use crate::error::{CvAnalyzerError, Result};
use crate::scoring::AnalysisResult;
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Format, Workbook, XlsxError};
use std::fs;
use std::path::Path;

/// Column order matches the on-screen results table.
pub const COLUMNS: [&str; 6] = [
    "File",
    "Experience Score",
    "Skill Score",
    "Certification Score",
    "Total Score",
    "Status",
];

/// Write the two records as rows under a bold header. Overwrites any
/// previous export at the same path; the output is deterministic so
/// repeated exports of the same result are byte-identical.
pub fn export(result: &AnalysisResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut workbook = Workbook::new();

    // Fixed creation time keeps repeated exports byte-identical.
    let created = ExcelDateTime::from_ymd(2000, 1, 1).map_err(xlsx_err)?;
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let worksheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold();

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *name, &header_format)
            .map_err(xlsx_err)?;
    }

    for (i, record) in result.records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet
            .write_string(row, 0, record.file_name.as_str())
            .map_err(xlsx_err)?;
        worksheet
            .write_number(row, 1, record.experience_score as f64)
            .map_err(xlsx_err)?;
        worksheet
            .write_number(row, 2, record.skill_score as f64)
            .map_err(xlsx_err)?;
        worksheet
            .write_number(row, 3, record.certification_score as f64)
            .map_err(xlsx_err)?;
        worksheet
            .write_number(row, 4, record.total_score as f64)
            .map_err(xlsx_err)?;
        worksheet
            .write_string(row, 5, record.status.to_string())
            .map_err(xlsx_err)?;
    }

    workbook.save(path).map_err(xlsx_err)?;
    Ok(())
}

fn xlsx_err(e: XlsxError) -> CvAnalyzerError {
    CvAnalyzerError::SpreadsheetExport(e.to_string())
}
