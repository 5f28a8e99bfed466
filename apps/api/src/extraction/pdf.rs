use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::extraction::{ExtractionError, TextExtractor};

/// PDF backend built on `pdf-extract`. Parsing is CPU-bound, so it runs on the
/// blocking pool; a panic inside the parser is reported as `Aborted`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let path: PathBuf = path.to_path_buf();
        tokio::task::spawn_blocking(move || extract_pdf_text(&path))
            .await
            .map_err(|e| ExtractionError::Aborted(e.to_string()))?
    }
}

/// Reads every page and joins the page texts with a single space.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_by_pages(path)
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;
    debug!(pages = pages.len(), "extracted PDF pages");
    join_pages(pages)
}

fn join_pages(pages: Vec<String>) -> Result<String, ExtractionError> {
    let text = pages.join(" ");
    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(text)
}


#[cfg(test)]
mod tests {
    use super::fixtures::{pdf_with_missing_font, pdf_with_pages};
    use super::*;

    fn write_pdf(dir: &tempfile::TempDir, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_join_pages_uses_single_space() {
        let text = join_pages(vec!["Rust".to_string(), "Go".to_string()]).unwrap();
        assert_eq!(text, "Rust Go");
    }

    #[test]
    fn test_join_pages_keeps_empty_pages() {
        let text = join_pages(vec!["Rust".to_string(), String::new(), "Go".to_string()]).unwrap();
        assert_eq!(text, "Rust  Go");
    }

    #[test]
    fn test_join_pages_all_blank_is_no_text() {
        let err = join_pages(vec![String::new(), "  \n".to_string()]).unwrap_err();
        assert!(matches!(err, ExtractionError::NoText));
    }

    #[test]
    fn test_join_pages_no_pages_is_no_text() {
        assert!(matches!(join_pages(vec![]), Err(ExtractionError::NoText)));
    }

    #[tokio::test]
    async fn test_extracts_text_from_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(&dir, &pdf_with_pages(&[Some("Skilled in Rust and Docker")]));

        let text = PdfTextExtractor.extract(&path).await.unwrap();
        assert!(text.contains("Rust"));
        assert!(text.contains("Docker"));
    }

    #[tokio::test]
    async fn test_blank_page_does_not_abort_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(&dir, &pdf_with_pages(&[None, Some("Kubernetes")]));

        let text = PdfTextExtractor.extract(&path).await.unwrap();
        assert!(text.contains("Kubernetes"));
    }

    #[tokio::test]
    async fn test_pdf_without_text_is_no_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(&dir, &pdf_with_pages(&[None]));

        let err = PdfTextExtractor.extract(&path).await.unwrap_err();
        assert!(matches!(err, ExtractionError::NoText));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(&dir, b"%PDF-1.5\nthis is not really a pdf");

        assert!(PdfTextExtractor.extract(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_an_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PdfTextExtractor.extract(&dir.path().join("missing.pdf")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_parser_panic_is_aborted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pdf(&dir, &pdf_with_missing_font());

        let err = PdfTextExtractor.extract(&path).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Aborted(_)), "got {err:?}");
    }
}
