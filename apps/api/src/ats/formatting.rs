//! Formatting analysis: section headings, length, date-format consistency,
//! and the naive readable-font probe.

use std::sync::LazyLock;

use regex::Regex;

use crate::ats::FormattingAnalysis;

const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 800;

/// Standard section headings, anchored at the start of a line.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^(EXPERIENCE|EDUCATION|SKILLS|SUMMARY)").expect("valid heading pattern")
});

/// Three mutually exclusive date-pattern families. A resume that mixes more
/// than one family reads as inconsistent.
static DATE_FAMILIES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // 1/2/2020, 01/02/2020
        Regex::new(r"\d{1,2}/\d{1,2}/\d{4}").expect("valid slash date pattern"),
        // 2020-01-02
        Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid iso date pattern"),
        // March 2020
        Regex::new(r"[A-Za-z]+ \d{4}").expect("valid textual date pattern"),
    ]
});

/// Substrings that flag an ATS-hostile font choice. A textual proxy, not
/// font introspection — flattened resume text carries no font data unless
/// the builder injected the name.
const UNREADABLE_FONTS: &[&str] = &["Comic Sans", "Papyrus"];

/// Inspects formatting signals of the flattened resume text.
///
/// `issues` collects violations in heading, length, consistency order. The
/// font flag never contributes an issue string.
pub fn analyze_formatting(resume_text: &str) -> FormattingAnalysis {
    let mut issues = Vec::new();

    let has_proper_headings = HEADING_RE.is_match(resume_text);
    if !has_proper_headings {
        issues.push(
            "Missing standard section headings (Experience, Education, Skills, etc.)".to_string(),
        );
    }

    let word_count = resume_text.split_whitespace().count();
    let appropriate_length = (MIN_WORDS..=MAX_WORDS).contains(&word_count);
    if !appropriate_length {
        issues.push(format!(
            "Resume length ({word_count} words) should be between {MIN_WORDS}-{MAX_WORDS} words"
        ));
    }

    let has_consistent_formatting = date_families_used(resume_text) <= 1;
    if !has_consistent_formatting {
        issues.push("Inconsistent date formatting or bullet point style detected".to_string());
    }

    let readable_font = !UNREADABLE_FONTS
        .iter()
        .any(|font| resume_text.contains(font));

    FormattingAnalysis {
        has_proper_headings,
        has_consistent_formatting,
        readable_font,
        appropriate_length,
        issues,
    }
}

/// Counts how many of the three date-pattern families appear at least once.
fn date_families_used(text: &str) -> usize {
    DATE_FAMILIES.iter().filter(|re| re.is_match(text)).count()
}
