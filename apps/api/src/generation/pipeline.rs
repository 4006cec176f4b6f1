//! Result assembly for the resume/ATS pipeline and the cover letter flow.
//!
//! Resume flow: generate resume → score resume → suggest improvements.
//! Each stage awaits the previous one; scoring needs the resume text and the
//! suggestions need both the resume text and the score feedback.
//!
//! Failure policy:
//! - resume stage: no usable text aborts the whole run, scoring is never called
//! - score / suggestion stages: unusable output is replaced by a placeholder
//! - transport or API failures abort at any stage
//!
//! Partial results are never returned.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::forms::FormPayload;
use crate::generation::assembler::{CoverLetterPromptVars, ResumePromptVars};
use crate::generation::prompts::{
    ATS_IMPROVEMENT_PROMPT_TEMPLATE, ATS_IMPROVEMENT_SYSTEM, ATS_IMPROVEMENT_TEMPLATE_NAME,
    ATS_SCORE_CONTEXT, ATS_SCORE_PROMPT_TEMPLATE, ATS_SCORE_SYSTEM, ATS_SCORE_TEMPLATE_NAME,
    COVER_LETTER_SYSTEM, COVER_LETTER_TEMPLATE_NAME, RESUME_SYSTEM, RESUME_TEMPLATE_NAME,
};
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{call_json, LlmError, LlmGateway, PromptRequest};

pub const ATS_SCORE_PLACEHOLDER: u8 = 0;
pub const ATS_FEEDBACK_PLACEHOLDER: &str = "Could not generate ATS score. Please try again.";
pub const SUGGESTIONS_PLACEHOLDER: &str = "Could not generate improvement suggestions. \
    Ensure the resume text is comprehensive and try again.";

const RESUME_FAILED: &str = "Resume generation failed to produce content.";
const COVER_LETTER_FAILED: &str = "Cover letter generation failed to produce content.";

// ────────────────────────────────────────────────────────────────────────────
// LLM output shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ResumeOutput {
    resume: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AtsScoreOutput {
    ats_score: f64,
    ats_feedback: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImprovementOutput {
    improvement_suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoverLetterOutput {
    cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Results
// ────────────────────────────────────────────────────────────────────────────

/// ATS score clamped to 0–100, with its feedback text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsScore {
    pub score: u8,
    pub feedback: String,
}

impl AtsScore {
    pub fn placeholder() -> Self {
        Self {
            score: ATS_SCORE_PLACEHOLDER,
            feedback: ATS_FEEDBACK_PLACEHOLDER.to_string(),
        }
    }
}

/// Combined output of the resume pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeWithAts {
    pub request_id: Uuid,
    pub resume: String,
    pub ats_score: u8,
    pub ats_feedback: String,
    pub ats_improvement_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetter {
    pub request_id: Uuid,
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipelines
// ────────────────────────────────────────────────────────────────────────────

/// Runs resume → score → suggestions for one validated form.
pub async fn run_resume_pipeline(
    llm: &dyn LlmGateway,
    payload: &FormPayload,
) -> Result<ResumeWithAts, AppError> {
    let request_id = Uuid::new_v4();
    info!("Resume pipeline {request_id} started");

    let vars = ResumePromptVars::from_payload(payload);
    info!(
        "Resume pipeline {request_id}: {} experience, {} education, {} project entries",
        vars.experience_entries.len(),
        vars.education_entries.len(),
        vars.project_entries.as_ref().map_or(0, Vec::len)
    );

    // Stage 1
    let resume = generate_resume(llm, &vars).await?;

    // Stage 2
    let ats = score_resume(llm, &resume).await?;
    info!("Resume pipeline {request_id}: ATS score {}/100", ats.score);

    // Stage 3
    let suggestions = suggest_improvements(llm, &resume, &ats).await?;

    info!(
        "Resume pipeline {request_id} finished with {} suggestions",
        suggestions.len()
    );

    Ok(ResumeWithAts {
        request_id,
        resume,
        ats_score: ats.score,
        ats_feedback: ats.feedback,
        ats_improvement_suggestions: suggestions,
    })
}

/// Stage 1. Returns the resume text or fails; there is no fallback.
pub async fn generate_resume(
    llm: &dyn LlmGateway,
    vars: &ResumePromptVars<'_>,
) -> Result<String, AppError> {
    let request = PromptRequest {
        template: RESUME_TEMPLATE_NAME,
        system: RESUME_SYSTEM,
        prompt: vars.render()?,
    };

    let output: ResumeOutput = call_json(llm, &request)
        .await
        .map_err(|e| stage_error(RESUME_TEMPLATE_NAME, RESUME_FAILED, e))?;

    let resume = output.resume.trim();
    if resume.is_empty() {
        warn!("Resume stage returned blank text");
        return Err(failed_to_process(RESUME_FAILED));
    }

    Ok(resume.to_string())
}

/// Stage 2. Unusable output becomes `AtsScore::placeholder()`.
pub async fn score_resume(llm: &dyn LlmGateway, resume_text: &str) -> Result<AtsScore, AppError> {
    let request = PromptRequest {
        template: ATS_SCORE_TEMPLATE_NAME,
        system: ATS_SCORE_SYSTEM,
        prompt: fill_template(ATS_SCORE_PROMPT_TEMPLATE, &[("resume_text", resume_text)]),
    };

    match call_json::<AtsScoreOutput>(llm, &request).await {
        Ok(output) => Ok(AtsScore {
            score: clamp_score(output.ats_score),
            feedback: output.ats_feedback,
        }),
        Err(e) if e.is_unusable_output() => {
            warn!("ATS score stage produced no usable output ({e}); using placeholder");
            Ok(AtsScore::placeholder())
        }
        Err(e) => Err(AppError::Llm(format!("ATS score call failed: {e}"))),
    }
}

/// Stage 3. Unusable output, or a list with no non-blank suggestion, becomes
/// a single placeholder suggestion.
pub async fn suggest_improvements(
    llm: &dyn LlmGateway,
    resume_text: &str,
    ats: &AtsScore,
) -> Result<Vec<String>, AppError> {
    let score = ats.score.to_string();
    let score_context = fill_template(
        ATS_SCORE_CONTEXT,
        &[("ats_score", score.as_str()), ("ats_feedback", ats.feedback.as_str())],
    );
    let request = PromptRequest {
        template: ATS_IMPROVEMENT_TEMPLATE_NAME,
        system: ATS_IMPROVEMENT_SYSTEM,
        prompt: fill_template(
            ATS_IMPROVEMENT_PROMPT_TEMPLATE,
            &[
                ("resume_text", resume_text),
                ("score_context", score_context.as_str()),
            ],
        ),
    };

    let suggestions = match call_json::<ImprovementOutput>(llm, &request).await {
        Ok(output) => output
            .improvement_suggestions
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>(),
        Err(e) if e.is_unusable_output() => {
            warn!("Improvement stage produced no usable output ({e})");
            Vec::new()
        }
        Err(e) => return Err(AppError::Llm(format!("Improvement suggestion call failed: {e}"))),
    };

    if suggestions.is_empty() {
        return Ok(vec![SUGGESTIONS_PLACEHOLDER.to_string()]);
    }
    Ok(suggestions)
}

/// Single-stage cover letter flow.
pub async fn generate_cover_letter(
    llm: &dyn LlmGateway,
    payload: &FormPayload,
) -> Result<CoverLetter, AppError> {
    let request_id = Uuid::new_v4();
    info!("Cover letter {request_id} started");

    let vars = CoverLetterPromptVars::from_payload(payload);
    let request = PromptRequest {
        template: COVER_LETTER_TEMPLATE_NAME,
        system: COVER_LETTER_SYSTEM,
        prompt: vars.render(),
    };

    let output: CoverLetterOutput = call_json(llm, &request).await.map_err(|e| {
        if e.is_unusable_output() {
            warn!("Cover letter stage produced no usable output ({e})");
            AppError::Generation(format!("Failed to generate cover letter: {COVER_LETTER_FAILED}"))
        } else {
            AppError::Llm(format!("Cover letter call failed: {e}"))
        }
    })?;

    let cover_letter = output.cover_letter.trim();
    if cover_letter.is_empty() {
        return Err(AppError::Generation(format!(
            "Failed to generate cover letter: {COVER_LETTER_FAILED}"
        )));
    }

    info!("Cover letter {request_id} finished");
    Ok(CoverLetter {
        request_id,
        cover_letter: cover_letter.to_string(),
    })
}

/// Clamps a model-reported score into 0–100. NaN counts as 0.
pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}

fn failed_to_process(reason: &str) -> AppError {
    AppError::Generation(format!("Failed to process: {reason}"))
}

fn stage_error(stage: &str, reason: &str, e: LlmError) -> AppError {
    if e.is_unusable_output() {
        warn!("Stage '{stage}' produced no usable output ({e})");
        failed_to_process(reason)
    } else {
        AppError::Llm(format!("Stage '{stage}' call failed: {e}"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
