//! Text extraction — turns an uploaded document into plain text for skill matching.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so the PDF backend can be swapped
//! (or stubbed in tests) without touching the handlers.

pub mod pdf;

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

pub use pdf::PdfTextExtractor;

/// Why a document produced no usable text. Reported to clients as a
/// non-fatal `success: false` outcome, never as a server error.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("document could not be read: {0}")]
    Unreadable(String),

    #[error("document contains no extractable text")]
    NoText,

    #[error("extraction aborted: {0}")]
    Aborted(String),
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extracts the text of every page of the document at `path`.
    async fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}
