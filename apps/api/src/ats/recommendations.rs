//! Report-level recommendations, appended in a fixed order.
//!
//! Distinct from the per-keyword suggestions inside `KeywordAnalysis`: these
//! summarize the whole report for the caller.

use crate::ats::issues::{Issue, IssueCategory, Severity};
use crate::ats::KeywordAnalysis;

/// Missing keywords named in the keyword recommendation line.
const KEYWORD_LIST_CAP: usize = 5;

pub fn generate_recommendations(issues: &[Issue], keywords: &KeywordAnalysis) -> Vec<String> {
    let mut recommendations = Vec::new();

    if issues
        .iter()
        .any(|i| i.category == IssueCategory::Formatting)
    {
        recommendations
            .push("Use a simple, clean format with standard section headings".to_string());
    }

    if !keywords.missing.is_empty() {
        let listed: Vec<&str> = keywords
            .missing
            .iter()
            .take(KEYWORD_LIST_CAP)
            .map(String::as_str)
            .collect();
        recommendations.push(format!("Add relevant keywords: {}", listed.join(", ")));
    }

    if issues.iter().any(|i| i.severity == Severity::Critical) {
        recommendations
            .push("Address critical issues first to improve ATS compatibility".to_string());
    }

    recommendations.push("Use standard fonts like Arial, Calibri, or Times New Roman".to_string());
    recommendations.push("Save resume as both PDF and Word document formats".to_string());

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn issue(severity: Severity, category: IssueCategory) -> Issue {
        Issue {
            severity,
            category,
            message: "test".to_string(),
            section: None,
        }
    }

    fn keywords(missing: &[&str]) -> KeywordAnalysis {
        KeywordAnalysis {
            missing: missing.iter().map(|s| s.to_string()).collect(),
            present: Vec::new(),
            density: BTreeMap::new(),
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_no_issues_yields_only_standing_advice() {
        let recs = generate_recommendations(&[], &keywords(&[]));
        assert_eq!(
            recs,
            vec![
                "Use standard fonts like Arial, Calibri, or Times New Roman",
                "Save resume as both PDF and Word document formats",
            ]
        );
    }

    #[test]
    fn test_formatting_issue_adds_clean_format_line_first() {
        let issues = vec![issue(Severity::Warning, IssueCategory::Formatting)];
        let recs = generate_recommendations(&issues, &keywords(&[]));
        assert_eq!(
            recs[0],
            "Use a simple, clean format with standard section headings"
        );
    }

    #[test]
    fn test_missing_keywords_listed_top_five_comma_joined() {
        let recs = generate_recommendations(
            &[],
            &keywords(&["python", "sql", "aws", "docker", "kafka", "redis"]),
        );
        assert_eq!(
            recs[0],
            "Add relevant keywords: python, sql, aws, docker, kafka"
        );
    }

    #[test]
    fn test_critical_issue_adds_priority_line() {
        let issues = vec![issue(Severity::Critical, IssueCategory::Content)];
        let recs = generate_recommendations(&issues, &keywords(&[]));
        assert!(recs.contains(&"Address critical issues first to improve ATS compatibility".to_string()));
    }

    #[test]
    fn test_full_ordering() {
        let issues = vec![
            issue(Severity::Critical, IssueCategory::Content),
            issue(Severity::Warning, IssueCategory::Formatting),
        ];
        let recs = generate_recommendations(&issues, &keywords(&["rust"]));
        assert_eq!(recs.len(), 5);
        assert!(recs[0].contains("simple, clean format"));
        assert!(recs[1].contains("Add relevant keywords: rust"));
        assert!(recs[2].contains("Address critical issues"));
        assert!(recs[3].contains("standard fonts"));
        assert!(recs[4].contains("PDF and Word"));
    }
}
