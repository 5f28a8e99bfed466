use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::service::{parse_resume, ParseOutcome};
use crate::resume::upload::read_upload;
use crate::state::AppState;

/// POST /parse-resume/
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ParseOutcome>, AppError> {
    let span = info_span!("parse_resume", request_id = %Uuid::new_v4());

    async move {
        let upload = read_upload(multipart).await?;
        info!(filename = %upload.filename, bytes = upload.data.len(), "received resume");

        let outcome = parse_resume(
            &upload.data,
            state.extractor.as_ref(),
            &state.matcher,
            &state.config.upload_dir,
        )
        .await?;

        info!(
            success = outcome.success,
            skills = outcome.skills.len(),
            "resume parsed"
        );
        Ok(Json(outcome))
    }
    .instrument(span)
    .await
}
