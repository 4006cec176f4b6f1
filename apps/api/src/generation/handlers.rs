//! Axum route handlers for the two user actions.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::forms::{validate_form, CareerForm};
use crate::generation::pipeline::{
    generate_cover_letter, run_resume_pipeline, CoverLetter, ResumeWithAts,
};
use crate::state::AppState;

/// POST /api/v1/resume
///
/// Validates the form, then runs resume → ATS score → improvement suggestions.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(form): Json<CareerForm>,
) -> Result<Json<ResumeWithAts>, AppError> {
    let payload = validate_form(&form).map_err(AppError::InvalidForm)?;
    let result = run_resume_pipeline(state.llm.as_ref(), &payload).await?;
    Ok(Json(result))
}

/// POST /api/v1/cover-letter
///
/// Takes the same form as the resume action.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(form): Json<CareerForm>,
) -> Result<Json<CoverLetter>, AppError> {
    let payload = validate_form(&form).map_err(AppError::InvalidForm)?;
    let letter = generate_cover_letter(state.llm.as_ref(), &payload).await?;
    Ok(Json(letter))
}
