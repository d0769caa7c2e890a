// All LLM prompt constants for the ai module. JSON-returning calls reuse
// the cross-cutting fragment from llm_client::prompts.

/// System prompt for professional summary generation — plain prose output.
pub const SUMMARY_SYSTEM: &str = "You are an expert resume writer. \
    Respond with the summary text only — no preamble, no markdown, no quotes.";

/// Summary prompt template. Replace `{job_title}`, `{experience}`, `{skills}`.
pub const SUMMARY_PROMPT_TEMPLATE: &str = "Write a professional resume summary for a {job_title} \
    with {experience} experience. Skills: {skills}. \
    Make it 3-4 sentences, professional and ATS-friendly.";

/// System prompt for achievement generation — bullet lines, parsed not
/// deserialized, so markdown bullets are expected here.
pub const ACHIEVEMENTS_SYSTEM: &str = "You are an expert resume writer. \
    Respond with bullet lines only, one achievement per line, each starting with '•'. \
    No preamble and no closing remarks.";

/// Achievements prompt template. Replace `{position}`, `{company}`, `{description}`.
pub const ACHIEVEMENTS_PROMPT_TEMPLATE: &str = "Generate 4 professional achievements for a \
    {position} at {company}. Job: {description}. \
    Format as bullet points with action verbs and metrics. \
    Example: \"• Increased sales by 25% through strategic client relationships\"";

/// Skill suggestion prompt template. Replace `{target_role}`, `{experience_lines}`.
/// Used with `llm_client::prompts::JSON_ONLY_SYSTEM`.
pub const SUGGEST_SKILLS_PROMPT_TEMPLATE: &str = r#"Suggest relevant skills for a {target_role} based on this work experience:

{experience_lines}

Requirements:
- Focus on technical skills, tools, and technologies
- Include both hard and soft skills relevant to the role
- Prioritize in-demand skills for the target position
- Return 8-12 skills maximum

Return a JSON array of skill names only."#;

/// System prompt for job description analysis.
pub const ANALYZE_JOB_SYSTEM: &str = "You are an expert job description analyst. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// JD analysis prompt template. Replace `{jd_text}`.
pub const ANALYZE_JOB_PROMPT_TEMPLATE: &str = r#"Analyze this job description and extract key information:

{jd_text}

Return a JSON object with this EXACT schema (no extra fields):
{
  "requiredSkills": ["skill"],
  "preferredSkills": ["skill"],
  "keywords": ["keyword important for ATS"],
  "experienceLevel": "Entry" | "Mid" | "Senior" | "Executive",
  "industry": "industry or sector"
}"#;

/// ATS optimization prompt template. Replace `{resume_content}`, `{job_description}`.
/// Used with `llm_client::prompts::JSON_ONLY_SYSTEM`.
pub const OPTIMIZE_ATS_PROMPT_TEMPLATE: &str = r#"Analyze this resume content against the job description and provide ATS optimization suggestions.

Resume Content: {resume_content}
Job Description: {job_description}

Return a JSON object with keys: score (0-100), suggestions (array of strings), optimizedContent (string)."#;

/// System prompt for review enrichment.
pub const REVIEW_SYSTEM: &str = "You are an ATS and career expert. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Review enrichment prompt template. Replace `{target_role}`, `{score}`,
/// `{missing_keywords}`, `{formatting_issues}`, `{other_issues}`,
/// `{resume_json}`, `{job_context}`.
pub const REVIEW_PROMPT_TEMPLATE: &str = r#"Given the target role "{target_role}", and this ATS analysis summary:
Score: {score}
Missing Keywords: {missing_keywords}
Formatting Issues: {formatting_issues}
Other Issues: {other_issues}

Resume (structured): {resume_json}
Job Context: {job_context}

Return a concise JSON object:
{
  "suggestions": ["short actionable bullets tailored to the target role"],
  "optimizedContent": "Rewrite the professional summary to better fit the role and include missing keywords naturally (150-220 words)."
}"#;
