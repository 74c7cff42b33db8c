//! PDF report export
//!
//! Builds the analysis report document: title, summary line, one result
//! line per candidate, and the comparison chart image. The chart PNG must
//! already exist on disk; the session checks that before calling in here.

use crate::error::{CvAnalyzerError, Result};
use crate::scoring::AnalysisResult;
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{
    BuiltinFont, CustomPdfConformance, Image, ImageTransform, Mm, OffsetDateTime, PdfConformance,
    PdfDocument,
};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub const REPORT_TITLE: &str = "CV Analysis Report";
pub const SUMMARY_LINE: &str =
    "Most candidates excelled in technical skills but lacked certifications.";

// Chart is 1500px wide; 212 dpi scales it to ~180mm, fitting A4 margins.
const CHART_DPI: f32 = 212.0;

/// Write the report PDF for one analysis result, embedding the chart image
/// found at `chart_path`. Overwrites any previous report at `out_path`.
pub fn export(result: &AnalysisResult, chart_path: &Path, out_path: &Path) -> Result<()> {
    if !chart_path.exists() {
        return Err(CvAnalyzerError::ExportPrecondition(format!(
            "chart image '{}' not found; run the analysis first",
            chart_path.display()
        )));
    }
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let (doc, page, layer) = PdfDocument::new(REPORT_TITLE, Mm(210.0), Mm(297.0), "Layer 1");

    // Pinned dates and no XMP block (which carries a per-document random
    // id) keep repeated exports of the same result byte-identical.
    let fixed_date = OffsetDateTime::UNIX_EPOCH;
    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_creation_date(fixed_date)
        .with_mod_date(fixed_date)
        .with_metadata_date(fixed_date);

    let layer_ref = doc.get_page(page).get_layer(layer);

    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;

    layer_ref.use_text(REPORT_TITLE, 16.0, Mm(72.0), Mm(275.0), &bold);
    layer_ref.use_text("Summary of Insights:", 12.0, Mm(15.0), Mm(260.0), &regular);
    layer_ref.use_text(SUMMARY_LINE, 12.0, Mm(15.0), Mm(253.0), &regular);
    layer_ref.use_text("Detailed Results:", 12.0, Mm(15.0), Mm(240.0), &bold);

    let mut y = 233.0;
    for record in &result.records {
        let line = format!(
            "File: {}, Total Score: {}, Status: {}",
            record.file_name, record.total_score, record.status
        );
        layer_ref.use_text(line, 12.0, Mm(15.0), Mm(y), &regular);
        y -= 7.0;
    }

    let mut reader = BufReader::new(File::open(chart_path)?);
    let decoder = PngDecoder::new(&mut reader).map_err(|e| {
        CvAnalyzerError::ReportExport(format!("Failed to decode chart image: {}", e))
    })?;
    let chart_image = Image::try_from(decoder).map_err(|e| {
        CvAnalyzerError::ReportExport(format!("Failed to embed chart image: {}", e))
    })?;
    chart_image.add_to_layer(
        layer_ref,
        ImageTransform {
            translate_x: Some(Mm(15.0)),
            translate_y: Some(Mm(165.0)),
            dpi: Some(CHART_DPI),
            ..Default::default()
        },
    );

    let mut writer = BufWriter::new(File::create(out_path)?);
    doc.save(&mut writer).map_err(pdf_err)?;
    Ok(())
}

fn pdf_err(e: printpdf::Error) -> CvAnalyzerError {
    CvAnalyzerError::ReportExport(e.to_string())
}
