//! LLM-backed content generation with deterministic fallbacks.
//!
//! Every function in this module returns a usable value even when the LLM
//! call fails or comes back malformed: the fallback is templated from the
//! caller's own input, so the endpoints never surface an LLM error.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ai::prompts::{
    ACHIEVEMENTS_PROMPT_TEMPLATE, ACHIEVEMENTS_SYSTEM, ANALYZE_JOB_PROMPT_TEMPLATE,
    ANALYZE_JOB_SYSTEM, OPTIMIZE_ATS_PROMPT_TEMPLATE, SUGGEST_SKILLS_PROMPT_TEMPLATE,
    SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM,
};
use crate::ats;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;

/// Minimum stripped bullet length worth keeping.
const MIN_BULLET_LEN: usize = 11;

/// Starter skills offered when the LLM cannot produce suggestions.
const DEFAULT_SKILLS: &[&str] = &["JavaScript", "React", "Node.js", "Python", "SQL", "Git"];

// ────────────────────────────────────────────────────────────────────────────
// Input / output types (shared with the route handlers)
// ────────────────────────────────────────────────────────────────────────────

/// A skill reference as sent by the builder; extra fields (level, category)
/// are accepted and ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRef {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRef {
    pub position: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryContext {
    pub job_title: String,
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<SkillRef>,
    #[serde(default)]
    pub work_experience: Vec<ExperienceRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsContext {
    pub position: String,
    pub company: String,
    pub description: String,
}

/// Structured JD analysis. Partial LLM output deserializes field-by-field;
/// anything missing takes the fallback value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalysis {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
    #[serde(default = "default_industry")]
    pub industry: String,
}

fn default_experience_level() -> String {
    "Mid".to_string()
}

fn default_industry() -> String {
    "Technology".to_string()
}

impl Default for JobAnalysis {
    fn default() -> Self {
        Self {
            required_skills: Vec::new(),
            preferred_skills: Vec::new(),
            keywords: Vec::new(),
            experience_level: default_experience_level(),
            industry: default_industry(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsOptimization {
    pub optimized_content: String,
    pub suggestions: Vec<String>,
    pub score: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LlmOptimization {
    #[serde(default)]
    optimized_content: Option<String>,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    score: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Generation functions
// ────────────────────────────────────────────────────────────────────────────

/// Generates a 3-4 sentence professional summary.
pub async fn generate_summary(llm: &LlmClient, ctx: &SummaryContext) -> String {
    let prompt = build_summary_prompt(ctx);
    match llm.call_text(&prompt, SUMMARY_SYSTEM).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!("LLM returned an empty summary, using fallback");
            fallback_summary(ctx)
        }
        Err(e) => {
            warn!("Summary generation failed ({e}), using fallback");
            fallback_summary(ctx)
        }
    }
}

/// Generates achievement bullets for one work experience entry.
pub async fn generate_achievements(llm: &LlmClient, ctx: &AchievementsContext) -> Vec<String> {
    let prompt = build_achievements_prompt(ctx);
    let parsed = match llm.call_text(&prompt, ACHIEVEMENTS_SYSTEM).await {
        Ok(text) => parse_bullet_lines(&text),
        Err(e) => {
            warn!("Achievement generation failed ({e}), using fallback");
            Vec::new()
        }
    };

    if parsed.is_empty() {
        fallback_achievements(&ctx.position)
    } else {
        parsed
    }
}

/// Suggests skills for a target role from prior work experience.
pub async fn suggest_skills(
    llm: &LlmClient,
    work_experience: &[ExperienceRef],
    target_role: &str,
) -> Vec<String> {
    let prompt = build_suggest_skills_prompt(work_experience, target_role);
    match llm.call_json::<Vec<String>>(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(skills) if !skills.is_empty() => skills,
        Ok(_) => {
            warn!("LLM returned no skill suggestions, using starter list");
            DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
        }
        Err(e) => {
            warn!("Skill suggestion failed ({e}), using starter list");
            DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect()
        }
    }
}

/// Extracts structured signals from a job description.
pub async fn analyze_job(llm: &LlmClient, job_description: &str) -> JobAnalysis {
    let prompt = ANALYZE_JOB_PROMPT_TEMPLATE.replace("{jd_text}", job_description);
    match llm.call_json::<JobAnalysis>(&prompt, ANALYZE_JOB_SYSTEM).await {
        Ok(analysis) => analysis,
        Err(e) => {
            warn!("JD analysis failed ({e}), returning defaults");
            JobAnalysis::default()
        }
    }
}

/// Optimizes raw resume content against a job description.
///
/// The deterministic analyzer grounds the result: whenever the LLM omits a
/// score or suggestions (or fails outright), the analyzer's own score and
/// recommendations stand in — never a made-up constant.
pub async fn optimize_for_ats(
    llm: &LlmClient,
    resume_content: &str,
    job_description: &str,
) -> AtsOptimization {
    let report = ats::analyze(resume_content, Some(job_description));

    let prompt = OPTIMIZE_ATS_PROMPT_TEMPLATE
        .replace("{resume_content}", resume_content)
        .replace("{job_description}", job_description);

    match llm.call_json::<LlmOptimization>(&prompt, JSON_ONLY_SYSTEM).await {
        Ok(llm_result) => AtsOptimization {
            optimized_content: llm_result
                .optimized_content
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| resume_content.to_string()),
            suggestions: if llm_result.suggestions.is_empty() {
                report.recommendations
            } else {
                llm_result.suggestions
            },
            score: llm_result.score.map(|s| s.min(100)).unwrap_or(report.score),
        },
        Err(e) => {
            warn!("ATS optimization failed ({e}), falling back to analyzer output");
            AtsOptimization {
                optimized_content: resume_content.to_string(),
                suggestions: report.recommendations,
                score: report.score,
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders and fallbacks
// ────────────────────────────────────────────────────────────────────────────

fn build_summary_prompt(ctx: &SummaryContext) -> String {
    let skills: Vec<&str> = ctx.skills.iter().map(|s| s.name.as_str()).collect();
    SUMMARY_PROMPT_TEMPLATE
        .replace("{job_title}", &ctx.job_title)
        .replace("{experience}", &ctx.experience)
        .replace("{skills}", &skills.join(", "))
}

fn build_achievements_prompt(ctx: &AchievementsContext) -> String {
    ACHIEVEMENTS_PROMPT_TEMPLATE
        .replace("{position}", &ctx.position)
        .replace("{company}", &ctx.company)
        .replace("{description}", &ctx.description)
}

fn build_suggest_skills_prompt(work_experience: &[ExperienceRef], target_role: &str) -> String {
    let lines: Vec<String> = work_experience
        .iter()
        .map(|exp| format!("{} at {}: {}", exp.position, exp.company, exp.description))
        .collect();
    SUGGEST_SKILLS_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{experience_lines}", &lines.join("\n"))
}

/// Keeps lines that look like bullets ('•' or '-' prefixed), stripped of the
/// bullet marker, long enough to carry content.
fn parse_bullet_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            trimmed
                .strip_prefix('•')
                .or_else(|| trimmed.strip_prefix('-'))
                .map(str::trim_start)
        })
        .filter(|body| body.len() >= MIN_BULLET_LEN)
        .map(str::to_string)
        .collect()
}

fn fallback_summary(ctx: &SummaryContext) -> String {
    let top_skills: Vec<&str> = ctx
        .skills
        .iter()
        .take(3)
        .map(|s| s.name.as_str())
        .collect();
    format!(
        "Results-driven {} with {} of experience. Proven expertise in {}. \
         Strong track record of delivering high-quality solutions and driving business growth.",
        ctx.job_title,
        ctx.experience,
        top_skills.join(", ")
    )
}

fn fallback_achievements(position: &str) -> Vec<String> {
    vec![
        format!(
            "Led key initiatives that improved {} processes by 20%",
            position.to_lowercase()
        ),
        "Collaborated with cross-functional teams to deliver high-quality results".to_string(),
        "Implemented best practices that enhanced team productivity and efficiency".to_string(),
        "Contributed to company growth through innovative solutions and strategic thinking"
            .to_string(),
    ]
}
