use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::AppError;

/// Name of the multipart field carrying the resume.
pub const FILE_FIELD: &str = "file";

/// An uploaded resume with its original filename.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// Only PDF documents are accepted, judged by extension.
pub fn is_supported_filename(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

/// Reads the `file` field from a multipart upload.
///
/// The filename is checked before the body is read, so unsupported
/// documents are rejected without buffering them.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            // Ignore unknown fields
            let _ = field.bytes().await.map_err(multipart_error)?;
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !is_supported_filename(&filename) {
            return Err(AppError::Validation(
                "Only PDF files are supported".to_string(),
            ));
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        return Ok(UploadedFile { filename, data });
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::Validation(format!("Failed to read upload: {}", e.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_extension_is_supported() {
        assert!(is_supported_filename("resume.pdf"));
        assert!(is_supported_filename("Jane_Doe.PDF"));
    }

    #[test]
    fn test_other_extensions_are_rejected() {
        assert!(!is_supported_filename("resume.docx"));
        assert!(!is_supported_filename("resume.pdf.txt"));
        assert!(!is_supported_filename("pdf"));
        assert!(!is_supported_filename(""));
    }
}
