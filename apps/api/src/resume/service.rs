use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::extraction::TextExtractor;
use crate::skills::SkillMatcher;

pub const EXTRACTION_FAILED_MESSAGE: &str = "Failed to extract text from resume";

/// Result of parsing one resume. Extraction failures are reported here
/// with `success: false` rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub skills: Vec<String>,
}

impl ParseOutcome {
    pub fn parsed(skills: Vec<String>) -> Self {
        Self {
            success: true,
            message: None,
            skills,
        }
    }

    pub fn extraction_failed() -> Self {
        Self {
            success: false,
            message: Some(EXTRACTION_FAILED_MESSAGE.to_string()),
            skills: vec![],
        }
    }
}

/// Stores an upload in `upload_dir` under a random name, parses it, and
/// deletes it again. The temporary file is removed on every exit path:
/// explicitly on success, by `Drop` on errors and panics.
pub async fn parse_resume(
    data: &[u8],
    extractor: &dyn TextExtractor,
    matcher: &SkillMatcher,
    upload_dir: &Path,
) -> Result<ParseOutcome, AppError> {
    let temp = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile_in(upload_dir)?;
    tokio::fs::write(temp.path(), data).await?;
    debug!(path = %temp.path().display(), bytes = data.len(), "stored upload");

    let outcome = parse_resume_file(temp.path(), extractor, matcher).await;

    release(temp);
    Ok(outcome)
}

/// Parses a document that is already on disk.
pub async fn parse_resume_file(
    path: &Path,
    extractor: &dyn TextExtractor,
    matcher: &SkillMatcher,
) -> ParseOutcome {
    match extractor.extract(path).await {
        Ok(text) => ParseOutcome::parsed(matcher.extract_skills(&text)),
        Err(e) => {
            warn!("text extraction failed: {e}");
            ParseOutcome::extraction_failed()
        }
    }
}

fn release(temp: NamedTempFile) {
    let path = temp.path().to_path_buf();
    if let Err(e) = temp.close() {
        warn!(path = %path.display(), "failed to remove temporary upload: {e}");
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::StubExtractor;
    use super::*;
    use std::sync::Arc;

    use crate::extraction::pdf::fixtures::{pdf_with_missing_font, pdf_with_pages};
    use crate::extraction::PdfTextExtractor;

    fn dir_is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn test_success_returns_canonical_skills() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = StubExtractor::returning("Experienced in golang and k8s deployments");

        let outcome = parse_resume(b"%PDF-", &extractor, &SkillMatcher::default(), dir.path())
            .await
            .unwrap();

        assert!(outcome.success);
        assert!(outcome.message.is_none());
        assert!(outcome.skills.contains(&"Go".to_string()));
        assert!(outcome.skills.contains(&"Kubernetes".to_string()));
        assert_eq!(extractor.call_count(), 1);
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_extraction_failure_is_structured_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let extractor = StubExtractor::failing();

        let outcome = parse_resume(b"%PDF-", &extractor, &SkillMatcher::default(), dir.path())
            .await
            .unwrap();

        assert_eq!(outcome, ParseOutcome::extraction_failed());
        assert_eq!(outcome.message.as_deref(), Some(EXTRACTION_FAILED_MESSAGE));
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_unwritable_upload_dir_is_internal_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let extractor = StubExtractor::returning("Rust");

        let result = parse_resume(b"%PDF-", &extractor, &SkillMatcher::default(), &missing).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
        assert_eq!(extractor.call_count(), 0);
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_real_pdf_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = pdf_with_pages(&[Some("Strong communication and teamwork")]);

        let outcome = parse_resume(&pdf, &PdfTextExtractor, &SkillMatcher::default(), dir.path())
            .await
            .unwrap();

        assert!(outcome.success);
        assert!(outcome.skills.contains(&"Communication".to_string()));
        assert!(outcome.skills.contains(&"Teamwork".to_string()));
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_textless_pdf_fails_without_crash() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = pdf_with_pages(&[None]);

        let outcome = parse_resume(&pdf, &PdfTextExtractor, &SkillMatcher::default(), dir.path())
            .await
            .unwrap();

        assert!(!outcome.success);
        assert!(outcome.skills.is_empty());
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_parser_panic_is_extraction_failure() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = pdf_with_missing_font();

        let outcome = parse_resume(&pdf, &PdfTextExtractor, &SkillMatcher::default(), dir.path())
            .await
            .unwrap();

        assert_eq!(outcome, ParseOutcome::extraction_failed());
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_uploads_share_upload_dir() {
        let dir = tempfile::tempdir().unwrap();
        let upload_dir = Arc::new(dir.path().to_path_buf());
        let extractor = Arc::new(StubExtractor::returning("golang and k8s"));
        let matcher = Arc::new(SkillMatcher::default());

        let tasks: Vec<_> = (0..200)
            .map(|i| {
                let upload_dir = upload_dir.clone();
                let extractor = extractor.clone();
                let matcher = matcher.clone();
                tokio::spawn(async move {
                    let data = format!("%PDF-1.5 upload {i}");
                    parse_resume(data.as_bytes(), extractor.as_ref(), &matcher, &upload_dir).await
                })
            })
            .collect();

        for task in tasks {
            let outcome = task.await.unwrap().unwrap();
            assert!(outcome.success);
            assert_eq!(outcome.skills, vec!["Go".to_string(), "Kubernetes".to_string()]);
        }
        assert_eq!(extractor.call_count(), 200);
        assert!(dir_is_empty(dir.path()));
    }

    #[test]
    fn test_outcome_serialization_omits_missing_message() {
        let json = serde_json::to_value(ParseOutcome::parsed(vec!["Rust".to_string()])).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "skills": ["Rust"] }));

        let json = serde_json::to_value(ParseOutcome::extraction_failed()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "message": "Failed to extract text from resume",
                "skills": []
            })
        );
    }
}
