//! Review Enrichment — pluggable, trait-based layer that turns the
//! deterministic ATS report into role-tailored suggestions and a rewritten
//! summary.
//!
//! Default: `LlmEnricher` (prompts Claude, degrades to the deterministic
//! fallback on any failure). Alternative: `HeuristicEnricher` (no LLM at
//! all), selected at startup via `DISABLE_LLM_ENRICHMENT`.
//!
//! `AppState` holds an `Arc<dyn ReviewEnricher>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::prompts::{REVIEW_PROMPT_TEMPLATE, REVIEW_SYSTEM};
use crate::ats::AtsReport;
use crate::llm_client::LlmClient;
use crate::models::resume::Resume;

/// How many report recommendations the fallback surfaces as suggestions.
const FALLBACK_SUGGESTION_CAP: usize = 6;

/// Role-tailored additions layered on top of an `AtsReport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEnrichment {
    pub suggestions: Vec<String>,
    pub optimized_content: String,
}

/// The enrichment seam. Implementations must not mutate the report and must
/// always return a usable value — degradation, not failure.
#[async_trait]
pub trait ReviewEnricher: Send + Sync {
    async fn enrich(
        &self,
        resume: &Resume,
        target_role: &str,
        job_context: &str,
        report: &AtsReport,
    ) -> ReviewEnrichment;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEnricher — default backend
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmEnricher(pub LlmClient);

#[async_trait]
impl ReviewEnricher for LlmEnricher {
    async fn enrich(
        &self,
        resume: &Resume,
        target_role: &str,
        job_context: &str,
        report: &AtsReport,
    ) -> ReviewEnrichment {
        let prompt = build_review_prompt(resume, target_role, job_context, report);

        match self
            .0
            .call_json::<ReviewEnrichment>(&prompt, REVIEW_SYSTEM)
            .await
        {
            Ok(enrichment) if !enrichment.suggestions.is_empty() => ReviewEnrichment {
                optimized_content: if enrichment.optimized_content.trim().is_empty() {
                    resume.professional_summary.clone()
                } else {
                    enrichment.optimized_content
                },
                suggestions: enrichment.suggestions,
            },
            Ok(_) => {
                warn!("LLM enrichment returned no suggestions, using report recommendations");
                fallback_enrichment(resume, report)
            }
            Err(e) => {
                warn!("LLM enrichment failed ({e}), using report recommendations");
                fallback_enrichment(resume, report)
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicEnricher — deterministic backend
// ────────────────────────────────────────────────────────────────────────────

/// Pure fallback enricher: the report's own recommendations and the
/// untouched summary. Used when LLM enrichment is disabled, and by tests.
pub struct HeuristicEnricher;

#[async_trait]
impl ReviewEnricher for HeuristicEnricher {
    async fn enrich(
        &self,
        resume: &Resume,
        _target_role: &str,
        _job_context: &str,
        report: &AtsReport,
    ) -> ReviewEnrichment {
        fallback_enrichment(resume, report)
    }
}

/// The deterministic degradation path shared by both backends.
pub fn fallback_enrichment(resume: &Resume, report: &AtsReport) -> ReviewEnrichment {
    ReviewEnrichment {
        suggestions: report
            .recommendations
            .iter()
            .take(FALLBACK_SUGGESTION_CAP)
            .cloned()
            .collect(),
        optimized_content: resume.professional_summary.clone(),
    }
}

fn build_review_prompt(
    resume: &Resume,
    target_role: &str,
    job_context: &str,
    report: &AtsReport,
) -> String {
    let other_issues: Vec<String> = report.issues.iter().map(|i| i.message.clone()).collect();

    REVIEW_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{score}", &report.score.to_string())
        .replace(
            "{missing_keywords}",
            &join_or_none(&report.keywords.missing, ", "),
        )
        .replace(
            "{formatting_issues}",
            &join_or_none(&report.formatting.issues, "; "),
        )
        .replace("{other_issues}", &join_or_none(&other_issues, "; "))
        .replace(
            "{resume_json}",
            &serde_json::to_string(resume).unwrap_or_default(),
        )
        .replace("{job_context}", job_context)
}

fn join_or_none(items: &[String], separator: &str) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(separator)
    }
}
