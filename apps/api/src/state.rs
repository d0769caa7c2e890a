use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::ai::enrichment::ReviewEnricher;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Backs the fixed-window rate limiter; the limiter fails open when Redis
    /// is unreachable.
    pub redis: RedisClient,
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable review enrichment. Default: LlmEnricher. Swap via
    /// DISABLE_LLM_ENRICHMENT env.
    pub enricher: Arc<dyn ReviewEnricher>,
}
