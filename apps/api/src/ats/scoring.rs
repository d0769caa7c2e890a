//! Score synthesis: issue deductions, keyword and formatting bonuses,
//! clamped to 0-100.

use crate::ats::issues::{Issue, Severity};
use crate::ats::{FormattingAnalysis, KeywordAnalysis};

const CRITICAL_PENALTY: i32 = 15;
const WARNING_PENALTY: i32 = 8;
const SUGGESTION_PENALTY: i32 = 3;

const KEYWORD_BONUS_PER_MATCH: i32 = 2;
const KEYWORD_BONUS_CAP: i32 = 20;
const FORMATTING_BONUS: i32 = 5;

/// Computes the 0-100 ATS score.
///
/// The caller passes formatting violations inside `issues` as warnings AND
/// the raw formatting flags here, so a formatting violation costs both the
/// warning deduction and the missed +5 bonus. That compounding is
/// intentional — it is a severity amplifier the score fixtures depend on.
pub fn calculate_score(
    issues: &[Issue],
    keywords: &KeywordAnalysis,
    formatting: &FormattingAnalysis,
) -> u32 {
    let mut score: i32 = 100;

    for issue in issues {
        score -= match issue.severity {
            Severity::Critical => CRITICAL_PENALTY,
            Severity::Warning => WARNING_PENALTY,
            Severity::Suggestion => SUGGESTION_PENALTY,
        };
    }

    score += (keywords.present.len() as i32 * KEYWORD_BONUS_PER_MATCH).min(KEYWORD_BONUS_CAP);

    if formatting.has_proper_headings {
        score += FORMATTING_BONUS;
    }
    if formatting.has_consistent_formatting {
        score += FORMATTING_BONUS;
    }
    if formatting.appropriate_length {
        score += FORMATTING_BONUS;
    }
    // readable_font carries no bonus: the flag is informational only.

    score.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::issues::IssueCategory;
    use std::collections::BTreeMap;

    fn issue(severity: Severity) -> Issue {
        Issue {
            severity,
            category: IssueCategory::Content,
            message: "test".to_string(),
            section: None,
        }
    }

    fn keywords(present: usize) -> KeywordAnalysis {
        KeywordAnalysis {
            missing: Vec::new(),
            present: (0..present).map(|i| format!("kw{i}")).collect(),
            density: BTreeMap::new(),
            suggestions: Vec::new(),
        }
    }

    fn formatting(headings: bool, consistent: bool, length: bool) -> FormattingAnalysis {
        FormattingAnalysis {
            has_proper_headings: headings,
            has_consistent_formatting: consistent,
            readable_font: true,
            appropriate_length: length,
            issues: Vec::new(),
        }
    }

    #[test]
    fn test_perfect_input_caps_at_100() {
        let score = calculate_score(&[], &keywords(10), &formatting(true, true, true));
        assert_eq!(score, 100);
    }

    #[test]
    fn test_severity_deductions() {
        let issues = vec![
            issue(Severity::Critical),
            issue(Severity::Warning),
            issue(Severity::Suggestion),
        ];
        // 100 - 15 - 8 - 3 = 74
        assert_eq!(
            calculate_score(&issues, &keywords(0), &formatting(false, false, false)),
            74
        );
    }

    // Bonus tests run against a deduction baseline so the 100 clamp never
    // swallows the delta under inspection.
    fn baseline() -> Vec<Issue> {
        vec![issue(Severity::Critical), issue(Severity::Critical)]
    }

    #[test]
    fn test_keyword_bonus_two_points_per_match() {
        let base = calculate_score(&baseline(), &keywords(0), &formatting(false, false, false));
        let boosted = calculate_score(&baseline(), &keywords(3), &formatting(false, false, false));
        assert_eq!(boosted - base, 6);
    }

    #[test]
    fn test_keyword_bonus_capped_at_20() {
        let ten = calculate_score(&baseline(), &keywords(10), &formatting(false, false, false));
        let fifty = calculate_score(&baseline(), &keywords(50), &formatting(false, false, false));
        assert_eq!(ten, fifty);
        assert_eq!(ten, 100 - 30 + 20);
    }

    #[test]
    fn test_each_formatting_flag_worth_five() {
        let none = calculate_score(&baseline(), &keywords(0), &formatting(false, false, false));
        let all = calculate_score(&baseline(), &keywords(0), &formatting(true, true, true));
        assert_eq!(all - none, 15);
    }

    #[test]
    fn test_readable_font_carries_no_bonus() {
        let mut with_bad_font = formatting(true, true, true);
        with_bad_font.readable_font = false;
        assert_eq!(
            calculate_score(&baseline(), &keywords(0), &with_bad_font),
            calculate_score(&baseline(), &keywords(0), &formatting(true, true, true))
        );
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let issues: Vec<Issue> = (0..10).map(|_| issue(Severity::Critical)).collect();
        assert_eq!(
            calculate_score(&issues, &keywords(0), &formatting(false, false, false)),
            0
        );
    }

    #[test]
    fn test_formatting_violation_double_counted() {
        // One formatting violation: -8 as a warning and -5 missed bonus = 13
        // points worse than the same input without the violation.
        let clean = calculate_score(&baseline(), &keywords(0), &formatting(true, true, true));
        let mut violated_issues = baseline();
        violated_issues.push(issue(Severity::Warning));
        let violated =
            calculate_score(&violated_issues, &keywords(0), &formatting(false, true, true));
        assert_eq!(clean - violated, 13);
    }
}
