pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai_handlers;
use crate::ats::handlers as ats_handlers;
use crate::middleware::rate_limit::rate_limit;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes", post(resume_handlers::handle_create_resume))
        .route(
            "/api/v1/resumes/user/:user_id",
            get(resume_handlers::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume)
                .put(resume_handlers::handle_update_resume)
                .delete(resume_handlers::handle_delete_resume),
        )
        // ATS Review API
        .route("/api/v1/ats/review", post(ats_handlers::handle_review))
        .route(
            "/api/v1/ats/review-upload",
            post(ats_handlers::handle_review_upload),
        )
        // AI Generation API
        .route(
            "/api/v1/ai/generate-summary",
            post(ai_handlers::handle_generate_summary),
        )
        .route(
            "/api/v1/ai/generate-achievements",
            post(ai_handlers::handle_generate_achievements),
        )
        .route(
            "/api/v1/ai/suggest-skills",
            post(ai_handlers::handle_suggest_skills),
        )
        .route("/api/v1/ai/analyze-job", post(ai_handlers::handle_analyze_job))
        .route("/api/v1/ai/optimize-ats", post(ai_handlers::handle_optimize_ats))
        .layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .with_state(state)
}
