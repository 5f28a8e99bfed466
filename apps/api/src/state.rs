use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::skills::SkillMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Compiled skill vocabulary, built once at startup.
    pub matcher: Arc<SkillMatcher>,
}
