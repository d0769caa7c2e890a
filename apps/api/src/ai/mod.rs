// AI Generation layer: LLM-backed summary/achievement/skill generation, JD
// analysis, ATS optimization, and review enrichment.
// All LLM calls go through llm_client — no direct Anthropic calls here, and
// every endpoint carries a deterministic fallback.

pub mod enrichment;
pub mod generation;
pub mod handlers;
pub mod prompts;
