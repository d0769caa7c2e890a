//! Common ATS-hostile content checks, each independent of the others.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How strongly an issue should weigh on the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Suggestion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Formatting,
    Content,
    Keywords,
    Structure,
}

/// A single finding raised during analysis. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// 3-3-4 digit phone shape with optional `-` or `.` separators.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{3}[-.]?\d{3}[-.]?\d{4}").expect("valid phone pattern"));

/// Runs every common-issue check against the resume text. Checks are not
/// mutually exclusive: zero, some, or all four may fire.
pub fn check_common_issues(resume_text: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    // Naive case-sensitive substring probe for embedded media references.
    if resume_text.contains("image") || resume_text.contains("graphic") {
        issues.push(Issue {
            severity: Severity::Critical,
            category: IssueCategory::Formatting,
            message: "Images and graphics may not be readable by ATS systems".to_string(),
            section: None,
        });
    }

    if resume_text.contains("<table>") || resume_text.contains('|') {
        issues.push(Issue {
            severity: Severity::Warning,
            category: IssueCategory::Formatting,
            message: "Complex tables may cause parsing issues in ATS systems".to_string(),
            section: None,
        });
    }

    if !resume_text.contains('@') {
        issues.push(Issue {
            severity: Severity::Critical,
            category: IssueCategory::Content,
            message: "Missing email address in contact information".to_string(),
            section: None,
        });
    }

    if !PHONE_RE.is_match(resume_text) {
        issues.push(Issue {
            severity: Severity::Warning,
            category: IssueCategory::Content,
            message: "Missing phone number in contact information".to_string(),
            section: None,
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONTACT: &str = "reach me at jane@corp.example or 555-123-4567";

    #[test]
    fn test_clean_text_with_contact_has_no_issues() {
        assert!(check_common_issues(FULL_CONTACT).is_empty());
    }

    #[test]
    fn test_image_reference_is_critical_formatting() {
        let issues = check_common_issues(&format!("{FULL_CONTACT} profile image attached"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].category, IssueCategory::Formatting);
    }

    #[test]
    fn test_graphic_reference_fires_same_check() {
        let issues = check_common_issues(&format!("{FULL_CONTACT} designed graphic layouts"));
        assert!(issues.iter().any(|i| i.message.contains("Images and graphics")));
    }

    #[test]
    fn test_image_check_is_case_sensitive() {
        assert!(check_common_issues(&format!("{FULL_CONTACT} Image editing")).is_empty());
    }

    #[test]
    fn test_pipe_character_flags_tables() {
        let issues = check_common_issues(&format!("{FULL_CONTACT} skills | tools"));
        assert!(issues.iter().any(|i| i.message.contains("Complex tables")));
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_table_tag_flags_tables() {
        let issues = check_common_issues(&format!("{FULL_CONTACT} <table>cells</table>"));
        assert!(issues.iter().any(|i| i.message.contains("Complex tables")));
    }

    #[test]
    fn test_missing_email_and_phone_both_fire() {
        let issues = check_common_issues("no contact details anywhere");
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Critical && i.message.contains("email")));
        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::Warning && i.message.contains("phone")));
    }

    #[test]
    fn test_phone_pattern_accepts_common_shapes() {
        for phone in ["555-123-4567", "555.123.4567", "5551234567", "555123-4567"] {
            let text = format!("jane@corp.example {phone}");
            assert!(
                check_common_issues(&text).is_empty(),
                "{phone} not recognized"
            );
        }
    }

    #[test]
    fn test_short_digit_run_is_not_a_phone() {
        let issues = check_common_issues("jane@corp.example call 12345");
        assert!(issues.iter().any(|i| i.message.contains("phone")));
    }

    #[test]
    fn test_all_four_checks_can_fire_together() {
        // image/graphic collapse into one check; tables, email, phone follow.
        let issues = check_common_issues("image | graphic only");
        assert_eq!(issues.len(), 4);
    }
}
