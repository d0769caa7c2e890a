// Cross-cutting prompt fragments. Each service that makes LLM calls keeps
// its own prompts.rs alongside its handlers; only fragments shared by more
// than one of them live here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
