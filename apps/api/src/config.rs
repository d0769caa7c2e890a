use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails fast if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub anthropic_api_key: String,
    pub frontend_url: String,
    pub port: u16,
    pub rust_log: String,
    /// When set, ATS review responses use the deterministic enricher instead
    /// of the LLM.
    pub disable_llm_enrichment: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            disable_llm_enrichment: env_flag("DISABLE_LLM_ENRICHMENT"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// A flag variable is on for any value except the usual negatives.
fn env_flag(key: &str) -> bool {
    match std::env::var(key) {
        Ok(value) => !matches!(value.to_lowercase().as_str(), "" | "0" | "false" | "no"),
        Err(_) => false,
    }
}
