//! Axum route handlers for the ATS Review API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ai::enrichment::{ReviewEnricher, ReviewEnrichment};
use crate::ats::assemble::flatten_resume;
use crate::ats::{self, AtsReport};
use crate::errors::AppError;
use crate::models::resume::{PersonalInfo, Resume};
use crate::state::AppState;

/// Uploaded PDFs are reviewed through a stub resume whose summary holds the
/// extracted text, capped to keep prompts bounded.
const UPLOAD_SUMMARY_CAP: usize = 5000;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReviewRequest {
    pub resume: Resume,
    pub target_role: String,
    #[serde(default)]
    pub job_description: Option<String>,
}

/// The four formatting flags without the issue strings — issue strings are
/// already flattened into `issues`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingFlags {
    pub has_proper_headings: bool,
    pub has_consistent_formatting: bool,
    pub readable_font: bool,
    pub appropriate_length: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReviewResponse {
    pub score: u32,
    pub issues: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub optimized_content: String,
    pub formatting: FormattingFlags,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/review
///
/// Flattens the structured resume, runs the deterministic analyzer against
/// the job description (or the target role as fallback context), then layers
/// role-tailored enrichment on top.
pub async fn handle_review(
    State(state): State<AppState>,
    Json(request): Json<AtsReviewRequest>,
) -> Result<Json<AtsReviewResponse>, AppError> {
    if request.target_role.trim().is_empty() {
        return Err(AppError::Validation("targetRole cannot be empty".to_string()));
    }

    let response = review_resume(
        state.enricher.as_ref(),
        &request.resume,
        &request.target_role,
        request.job_description.as_deref(),
    )
    .await;

    Ok(Json(response))
}

/// POST /api/v1/ats/review-upload
///
/// Multipart variant: extracts text from an uploaded PDF and reviews it as a
/// stub resume. Fields: `file` (required), `targetRole` (required),
/// `jobDescription` (optional).
pub async fn handle_review_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AtsReviewResponse>, AppError> {
    let mut file: Option<Bytes> = None;
    let mut target_role: Option<String> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                file = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("Could not read uploaded file: {e}"))
                })?);
            }
            "targetRole" => {
                target_role = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read targetRole field: {e}"))
                })?);
            }
            "jobDescription" => {
                job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read jobDescription field: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let target_role = target_role
        .filter(|role| !role.trim().is_empty())
        .ok_or_else(|| AppError::Validation("targetRole is required".to_string()))?;
    let file = file.ok_or_else(|| AppError::Validation("file (PDF) is required".to_string()))?;

    let text = pdf_extract::extract_text_from_mem(&file).map_err(|e| {
        AppError::UnprocessableEntity(format!("Could not extract text from PDF: {e}"))
    })?;
    info!(
        pdf_bytes = file.len(),
        extracted_chars = text.len(),
        "reviewing uploaded PDF"
    );

    let resume = uploaded_resume_stub(&text);
    let response = review_resume(
        state.enricher.as_ref(),
        &resume,
        &target_role,
        job_description.as_deref(),
    )
    .await;

    Ok(Json(response))
}

// ────────────────────────────────────────────────────────────────────────────
// Review pipeline
// ────────────────────────────────────────────────────────────────────────────

async fn review_resume(
    enricher: &dyn ReviewEnricher,
    resume: &Resume,
    target_role: &str,
    job_description: Option<&str>,
) -> AtsReviewResponse {
    let text = flatten_resume(resume);
    let job_context = effective_job_context(job_description, target_role);

    let report = ats::analyze(&text, Some(job_context));
    let enrichment = enricher
        .enrich(resume, target_role, job_context, &report)
        .await;

    build_review_response(report, enrichment)
}

/// A blank or missing job description falls back to the role name, so the
/// analyzer always has keyword context.
fn effective_job_context<'a>(job_description: Option<&'a str>, target_role: &'a str) -> &'a str {
    match job_description {
        Some(jd) if !jd.trim().is_empty() => jd,
        _ => target_role,
    }
}

fn build_review_response(report: AtsReport, enrichment: ReviewEnrichment) -> AtsReviewResponse {
    AtsReviewResponse {
        score: report.score,
        issues: report.issues.into_iter().map(|i| i.message).collect(),
        missing_keywords: report.keywords.missing,
        suggestions: enrichment.suggestions,
        optimized_content: enrichment.optimized_content,
        formatting: FormattingFlags {
            has_proper_headings: report.formatting.has_proper_headings,
            has_consistent_formatting: report.formatting.has_consistent_formatting,
            readable_font: report.formatting.readable_font,
            appropriate_length: report.formatting.appropriate_length,
        },
    }
}

fn uploaded_resume_stub(text: &str) -> Resume {
    Resume {
        title: "Uploaded Resume".to_string(),
        personal_info: PersonalInfo {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            linkedin: None,
            portfolio: None,
        },
        professional_summary: text.chars().take(UPLOAD_SUMMARY_CAP).collect(),
        work_experience: Vec::new(),
        education: Vec::new(),
        skills: Vec::new(),
        projects: Vec::new(),
        template_id: "modern-professional".to_string(),
    }
}
