//! Axum route handlers for the AI Generation API.
//!
//! Validation rejects empty inputs up front; past that point every endpoint
//! succeeds, because generation degrades to deterministic fallbacks instead
//! of failing.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::ai::generation::{
    self, AchievementsContext, AtsOptimization, ExperienceRef, JobAnalysis, SummaryContext,
};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct AchievementsResponse {
    pub achievements: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestSkillsRequest {
    pub work_experience: Vec<ExperienceRef>,
    pub target_role: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestSkillsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJobRequest {
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeAtsRequest {
    pub resume_content: String,
    pub job_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/generate-summary
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    Json(request): Json<SummaryContext>,
) -> Result<Json<SummaryResponse>, AppError> {
    if request.job_title.trim().is_empty() {
        return Err(AppError::Validation("jobTitle cannot be empty".to_string()));
    }
    if request.experience.trim().is_empty() {
        return Err(AppError::Validation("experience cannot be empty".to_string()));
    }

    let summary = generation::generate_summary(&state.llm, &request).await;
    Ok(Json(SummaryResponse { summary }))
}

/// POST /api/v1/ai/generate-achievements
pub async fn handle_generate_achievements(
    State(state): State<AppState>,
    Json(request): Json<AchievementsContext>,
) -> Result<Json<AchievementsResponse>, AppError> {
    if request.position.trim().is_empty() {
        return Err(AppError::Validation("position cannot be empty".to_string()));
    }
    if request.company.trim().is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let achievements = generation::generate_achievements(&state.llm, &request).await;
    Ok(Json(AchievementsResponse { achievements }))
}

/// POST /api/v1/ai/suggest-skills
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(request): Json<SuggestSkillsRequest>,
) -> Result<Json<SuggestSkillsResponse>, AppError> {
    if request.target_role.trim().is_empty() {
        return Err(AppError::Validation(
            "targetRole cannot be empty".to_string(),
        ));
    }

    let suggestions =
        generation::suggest_skills(&state.llm, &request.work_experience, &request.target_role)
            .await;
    Ok(Json(SuggestSkillsResponse { suggestions }))
}

/// POST /api/v1/ai/analyze-job
pub async fn handle_analyze_job(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeJobRequest>,
) -> Result<Json<JobAnalysis>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription is required".to_string(),
        ));
    }

    let analysis = generation::analyze_job(&state.llm, &request.job_description).await;
    Ok(Json(analysis))
}

/// POST /api/v1/ai/optimize-ats
pub async fn handle_optimize_ats(
    State(state): State<AppState>,
    Json(request): Json<OptimizeAtsRequest>,
) -> Result<Json<AtsOptimization>, AppError> {
    if request.resume_content.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeContent cannot be empty".to_string(),
        ));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "jobDescription cannot be empty".to_string(),
        ));
    }

    let optimization =
        generation::optimize_for_ats(&state.llm, &request.resume_content, &request.job_description)
            .await;
    Ok(Json(optimization))
}
