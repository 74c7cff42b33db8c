//! Text extraction from CV files

use crate::error::{CvAnalyzerError, Result};
use std::fs;
use std::path::Path;

/// Pluggable text extraction seam. The session owns one of these; front
/// ends and tests can substitute their own source of candidate text.
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extracts the concatenated text of every page of a PDF. Pages with no
/// extractable text contribute nothing. Extraction is best-effort and
/// synchronous; the error is the caller's to downgrade.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(CvAnalyzerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            CvAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let result = PdfExtractor.extract(Path::new("no/such/file.pdf"));
        assert!(matches!(result, Err(CvAnalyzerError::Io(_))));
    }

    #[test]
    fn test_garbage_bytes_are_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"this is not a pdf").unwrap();

        let result = PdfExtractor.extract(&path);
        assert!(matches!(result, Err(CvAnalyzerError::PdfExtraction(_))));
    }
}
