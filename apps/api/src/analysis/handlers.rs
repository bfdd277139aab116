use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::analysis::pipeline::{run_analysis, AnalysisInput};
use crate::errors::AppError;
use crate::report::Report;
use crate::resume::{extract_facts, FactsRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractFactsRequest {
    pub resume_text: String,
}

fn check_resume_size(text: &str, max_chars: usize) -> Result<(), AppError> {
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AppError::PayloadTooLarge(format!(
            "resume_text has {chars} characters; the limit is {max_chars}"
        )));
    }
    Ok(())
}

fn unwrap_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AppError::UnprocessableEntity(rejection.body_text()))
}

/// POST /api/v1/resumes/facts
pub async fn handle_extract_facts(
    State(state): State<AppState>,
    payload: Result<Json<ExtractFactsRequest>, JsonRejection>,
) -> Result<Json<FactsRecord>, AppError> {
    let req = unwrap_json(payload)?;
    check_resume_size(&req.resume_text, state.config.max_resume_chars)?;

    let facts = tokio::task::spawn_blocking(move || extract_facts(&req.resume_text))
        .await
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(Json(facts))
}

/// POST /api/v1/candidates/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisInput>, JsonRejection>,
) -> Result<Json<Report>, AppError> {
    let input = unwrap_json(payload)?;
    check_resume_size(&input.resume_text, state.config.max_resume_chars)?;
    if input
        .candidate_id
        .as_deref()
        .is_some_and(|id| id.trim().is_empty())
    {
        return Err(AppError::Validation("candidate_id must not be blank".to_string()));
    }

    let engine = state.engine.clone();
    let report = tokio::task::spawn_blocking(move || run_analysis(input, &engine))
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    info!(
        "Report {} ready: {}/10 ({})",
        report.meta.analysis_id,
        report.total_score,
        report.interpretation.recommendation.as_str()
    );
    Ok(Json(report))
}
