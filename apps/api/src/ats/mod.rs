// ATS Analysis Engine.
// Pure, deterministic, rule-based scoring of a flattened resume against an
// optional job description. No I/O, no LLM calls — the ai module layers
// enrichment on top of the report this module produces.

pub mod assemble;
pub mod formatting;
pub mod handlers;
pub mod issues;
pub mod keywords;
pub mod recommendations;
pub mod scoring;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ats::issues::{Issue, IssueCategory, Severity};

/// Keyword comparison between the resume and the job description.
///
/// `missing` and `present` follow job-description first-appearance order.
/// `density` maps each JD keyword to its whole-word occurrence percentage
/// of the resume word count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub missing: Vec<String>,
    pub present: Vec<String>,
    pub density: BTreeMap<String, f64>,
    pub suggestions: Vec<String>,
}

/// Formatting signals extracted from the resume text.
///
/// `readable_font` feeds the score indirectly but is never appended to
/// `issues` — the flag is reported as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingAnalysis {
    pub has_proper_headings: bool,
    pub has_consistent_formatting: bool,
    pub readable_font: bool,
    pub appropriate_length: bool,
    pub issues: Vec<String>,
}

/// Full analyzer output. One report per `analyze` call, immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub score: u32,
    pub issues: Vec<Issue>,
    pub keywords: KeywordAnalysis,
    pub formatting: FormattingAnalysis,
    pub recommendations: Vec<String>,
}

/// Analyzes a flattened resume against an optional job description (or the
/// target role name as a fallback context).
///
/// Deterministic: identical inputs always produce an identical report.
/// Formatting violations are counted twice by design — once as a warning
/// deduction and again through the missed formatting bonus.
pub fn analyze(resume_text: &str, job_description: Option<&str>) -> AtsReport {
    let keywords = keywords::analyze_keywords(resume_text, job_description);
    let formatting = formatting::analyze_formatting(resume_text);

    let mut issues = issues::check_common_issues(resume_text);
    issues.extend(formatting.issues.iter().map(|message| Issue {
        severity: Severity::Warning,
        category: IssueCategory::Formatting,
        message: message.clone(),
        section: None,
    }));

    let score = scoring::calculate_score(&issues, &keywords, &formatting);
    let recommendations = recommendations::generate_recommendations(&issues, &keywords);

    AtsReport {
        score,
        issues,
        keywords,
        formatting,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A resume that passes every check: headings, contact info, 200+ words,
    /// one date family.
    fn clean_resume() -> String {
        let filler = "delivered scalable backend services using rust and postgres ".repeat(29);
        format!("SUMMARY\nJohn Doe john@example.com 555-123-4567 Austin TX\n{filler}")
    }

    #[test]
    fn test_clean_resume_has_no_contact_issues() {
        let report = analyze(&clean_resume(), None);
        assert!(report.formatting.has_proper_headings);
        assert!(!report
            .issues
            .iter()
            .any(|i| i.message.contains("email") || i.message.contains("phone")));
    }

    #[test]
    fn test_formatting_violations_reenter_issue_list_as_warnings() {
        // Short text: missing headings + length violation, both formatting strings.
        let report = analyze("plain text with no sections", None);
        let formatting_warnings: Vec<_> = report
            .issues
            .iter()
            .filter(|i| {
                i.severity == Severity::Warning && i.category == IssueCategory::Formatting
            })
            .collect();
        for message in &report.formatting.issues {
            assert!(
                formatting_warnings.iter().any(|i| &i.message == message),
                "formatting issue {message:?} missing from report.issues"
            );
        }
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let text = "EXPERIENCE\nBuilt image pipelines | 2020-01-02 | March 2021";
        let jd = Some("Rust engineer with Kafka experience");
        assert_eq!(analyze(text, jd), analyze(text, jd));
    }

    #[test]
    fn test_empty_resume_yields_well_formed_report() {
        let report = analyze("", None);
        assert!(report.keywords.present.is_empty());
        assert!(report.keywords.missing.is_empty());
        assert!(!report.formatting.appropriate_length);
        assert!(report
            .issues
            .iter()
            .any(|i| i.severity == Severity::Critical && i.message.contains("email")));
        assert!(report.issues.iter().any(|i| i.message.contains("phone")));
    }

    #[test]
    fn test_score_always_in_range() {
        let clean = clean_resume();
        let inputs = [
            "",
            "image graphic <table> | Comic Sans",
            clean.as_str(),
            "short",
        ];
        for text in inputs {
            let report = analyze(text, Some("python sql aws"));
            assert!(report.score <= 100, "score {} out of range", report.score);
        }
    }

    #[test]
    fn test_recommendations_always_include_standing_advice() {
        let report = analyze(&clean_resume(), None);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("Arial, Calibri")));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("PDF and Word")));
    }
}
