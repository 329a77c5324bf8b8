//! Axum route handlers for skill extraction and match scoring.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::documents::pdf::extract_pdf_text;
use crate::errors::AppError;
use crate::matching::form::UploadForm;
use crate::skills::scoring::{compute_match, MatchResult};
use crate::state::AppState;

pub const NO_JOB_DESCRIPTION: &str = "No job description provided.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub skills: Vec<String>,
}

/// Body of `POST /match-score`. A missing job description is reported in-band.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchScoreResponse {
    Scored(MatchResult),
    Rejected { error: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /extract
///
/// Extracts the known skills mentioned in an uploaded PDF (`file` field).
pub async fn handle_extract(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let pdf = form.require_file("file")?;

    let text = extract_pdf_text(pdf).await?;
    let skills = state.matcher.extract(&text);
    info!("Extracted skills: {:?}", skills);

    Ok(Json(ExtractResponse { skills }))
}

/// POST /match-score
///
/// Scores a resume PDF against a job description given either as a PDF
/// (`job_description`) or as plain text (`job_description_text`).
pub async fn handle_match_score(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchScoreResponse>, AppError> {
    let mut form = UploadForm::read(multipart).await?;
    let resume_pdf = form.require_file("resume")?;

    let resume_text = extract_pdf_text(resume_pdf).await?;
    let resume_skills = state.matcher.extract(&resume_text);

    // A PDF upload wins over pasted text.
    let jd_text = match (form.file("job_description"), form.text("job_description_text")) {
        (Some(pdf), _) => extract_pdf_text(pdf).await?,
        (None, Some(text)) => text,
        (None, None) => {
            return Ok(Json(MatchScoreResponse::Rejected {
                error: NO_JOB_DESCRIPTION.to_string(),
            }))
        }
    };
    let jd_skills = state.matcher.extract(&jd_text);

    info!("Extracted resume skills: {:?}", resume_skills);
    info!("Extracted JD skills: {:?}", jd_skills);

    let result = compute_match(resume_skills, jd_skills);
    info!("Match score: {}", result.score);

    Ok(Json(MatchScoreResponse::Scored(result)))
}
