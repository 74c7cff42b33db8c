//! Comparison chart rendering
//!
//! Renders the three-panel PNG that the PDF report later embeds: one
//! score-breakdown panel per candidate plus a total-score comparison.
//! Drawn without in-image text so rendering never depends on system fonts.

use crate::error::{CvAnalyzerError, Result};
use crate::scoring::CandidateRecord;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::fs;
use std::path::Path;

pub const CHART_WIDTH: u32 = 1500;
pub const CHART_HEIGHT: u32 = 400;

const BACKGROUND: RGBColor = RGBColor(0x2b, 0x2b, 0x2b);
const BAR_BLUE: RGBColor = RGBColor(0x34, 0x98, 0xdb);
const BAR_TEAL: RGBColor = RGBColor(0x1a, 0xbc, 0x9c);
const BAR_RED: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);

/// Render the comparison chart for a pair of records and save it as a PNG.
/// Overwrites any chart from a previous run.
pub fn render_comparison(records: &[CandidateRecord; 2], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    // Shared y-range across all panels: headroom of 5 above the best total.
    let y_max = records[0].total_score.max(records[1].total_score) + 5;

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&BACKGROUND).map_err(chart_err)?;

    let panels = root.split_evenly((1, 3));

    for (panel, record) in panels.iter().zip(records.iter()) {
        let values = [
            record.experience_score,
            record.skill_score,
            record.certification_score,
        ];
        draw_bars(panel, &values, y_max, &[BAR_BLUE, BAR_TEAL, BAR_RED])?;
    }

    let totals = [records[0].total_score, records[1].total_score];
    draw_bars(&panels[2], &totals, y_max, &[BAR_BLUE, BAR_TEAL])?;

    root.present().map_err(chart_err)?;
    Ok(())
}

fn draw_bars(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    values: &[u32],
    y_max: u32,
    colors: &[RGBColor],
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(16)
        .build_cartesian_2d(0.0..values.len() as f64, 0.0..y_max as f64)
        .map_err(|e| CvAnalyzerError::ChartRender(e.to_string()))?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, value)| {
            let color = colors[i % colors.len()];
            Rectangle::new(
                [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, *value as f64)],
                color.filled(),
            )
        }))
        .map_err(|e| CvAnalyzerError::ChartRender(e.to_string()))?;

    Ok(())
}

fn chart_err<E: std::fmt::Display>(e: E) -> CvAnalyzerError {
    CvAnalyzerError::ChartRender(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Status;

    fn record(file_name: &str, experience: u32, skills: u32, certs: u32) -> CandidateRecord {
        let total = experience + skills + certs;
        CandidateRecord {
            file_name: file_name.to_string(),
            experience_score: experience,
            skill_score: skills,
            certification_score: certs,
            total_score: total,
            status: if total >= 10 {
                Status::Passed
            } else {
                Status::Rejected
            },
        }
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv_analysis_graphs.png");
        let records = [record("a.pdf", 5, 9, 4), record("b.pdf", 0, 3, 2)];

        render_comparison(&records, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert!(!bytes.is_empty());
        // PNG signature
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn test_render_handles_all_zero_scores() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let records = [record("a.pdf", 0, 0, 0), record("b.pdf", 0, 0, 0)];

        render_comparison(&records, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_overwrites_previous_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let first = [record("a.pdf", 5, 12, 20), record("b.pdf", 5, 3, 0)];
        let second = [record("a.pdf", 0, 0, 0), record("b.pdf", 0, 3, 2)];

        render_comparison(&first, &path).unwrap();
        render_comparison(&second, &path).unwrap();
        assert!(path.exists());
    }
}
