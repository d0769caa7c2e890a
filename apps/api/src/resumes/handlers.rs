//! Axum route handlers for the Resume CRUD API.
//!
//! Resumes are stored whole as JSONB in `resumes.content`; the row carries
//! denormalized columns only for listing and lookup. Ownership checks are
//! deferred to the identity-provider integration — callers pass `userId`
//! explicitly.

use anyhow::Context;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeRow};
use crate::resumes::validation::validate_resume;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    pub user_id: Uuid,
    pub resume: Resume,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResumeRequest {
    pub resume: Resume,
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    Json(request): Json<CreateResumeRequest>,
) -> Result<(StatusCode, Json<ResumeRow>), AppError> {
    reject_invalid(&request.resume)?;

    let content =
        serde_json::to_value(&request.resume).context("failed to serialize resume content")?;

    let row = sqlx::query_as::<_, ResumeRow>(
        "INSERT INTO resumes (id, user_id, title, content, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, now(), now()) RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(request.user_id)
    .bind(&request.resume.title)
    .bind(content)
    .fetch_one(&state.db)
    .await?;

    info!(resume_id = %row.id, user_id = %row.user_id, "resume created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/resumes/user/:user_id
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = sqlx::query_as::<_, ResumeRow>(
        "SELECT * FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(rows))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<ResumeRow>, AppError> {
    let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
        .bind(resume_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    Ok(Json(row))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(request): Json<UpdateResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    reject_invalid(&request.resume)?;

    let content =
        serde_json::to_value(&request.resume).context("failed to serialize resume content")?;

    let row = sqlx::query_as::<_, ResumeRow>(
        "UPDATE resumes SET title = $2, content = $3, updated_at = now() \
         WHERE id = $1 RETURNING *",
    )
    .bind(resume_id)
    .bind(&request.resume.title)
    .bind(content)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    info!(resume_id = %row.id, "resume updated");
    Ok(Json(row))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
        .bind(resume_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Resume {resume_id} not found")));
    }

    info!(%resume_id, "resume deleted");
    Ok(StatusCode::NO_CONTENT)
}

fn reject_invalid(resume: &Resume) -> Result<(), AppError> {
    let violations = validate_resume(resume);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(violations.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::sample_resume;

    #[test]
    fn test_reject_invalid_joins_violations() {
        let mut resume = sample_resume();
        resume.title.clear();
        resume.personal_info.phone.clear();
        let err = reject_invalid(&resume).unwrap_err();
        match err {
            AppError::Validation(message) => {
                assert!(message.contains("title is required"));
                assert!(message.contains("personalInfo.phone is required"));
                assert!(message.contains("; "));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_reject_invalid_passes_valid_resume() {
        assert!(reject_invalid(&sample_resume()).is_ok());
    }
}
