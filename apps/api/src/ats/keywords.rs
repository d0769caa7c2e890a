//! Keyword extraction and resume-vs-JD keyword comparison.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;

use crate::ats::KeywordAnalysis;

/// Missing keywords reported to the caller, in JD order.
const MISSING_CAP: usize = 10;
/// Per-keyword suggestion strings derived from the missing list.
const SUGGESTION_CAP: usize = 8;

/// English function words and first-person pronouns excluded from keyword
/// extraction. Closed set — do not extend without revisiting score fixtures.
const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "from", "up",
    "about", "into", "through", "during", "before", "after", "above", "below", "between", "among",
    "this", "that", "these", "those", "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
];

/// Extracts keywords from free text: lower-cased, punctuation stripped to
/// spaces, tokens of length <= 2 and stop words dropped, deduplicated in
/// first-seen order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut seen = HashSet::new();
    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .filter(|token| seen.insert(token.to_string()))
        .map(str::to_string)
        .collect()
}

/// Compares resume keywords against the job description.
///
/// Without a job description the resume keywords are reported as `present`
/// and everything else stays empty. An empty JD string counts as absent.
pub fn analyze_keywords(resume_text: &str, job_description: Option<&str>) -> KeywordAnalysis {
    let resume_keywords = extract_keywords(resume_text);

    let jd = match job_description {
        Some(jd) if !jd.is_empty() => jd,
        _ => {
            return KeywordAnalysis {
                missing: Vec::new(),
                present: resume_keywords,
                density: BTreeMap::new(),
                suggestions: Vec::new(),
            }
        }
    };

    let jd_keywords = extract_keywords(jd);
    // extract_keywords already lower-cases both sides, so a set lookup is an
    // exact case-insensitive comparison.
    let resume_set: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();

    let missing: Vec<String> = jd_keywords
        .iter()
        .filter(|kw| !resume_set.contains(kw.as_str()))
        .take(MISSING_CAP)
        .cloned()
        .collect();

    let present: Vec<String> = jd_keywords
        .iter()
        .filter(|kw| resume_set.contains(kw.as_str()))
        .cloned()
        .collect();

    let density = keyword_density(resume_text, &jd_keywords);
    let suggestions = keyword_suggestions(&missing);

    KeywordAnalysis {
        missing,
        present,
        density,
        suggestions,
    }
}

/// Whole-word, case-insensitive occurrence percentage for each keyword,
/// relative to the resume's whitespace-token count. Zero resume words means
/// zero density for every keyword — never a division.
fn keyword_density(resume_text: &str, keywords: &[String]) -> BTreeMap<String, f64> {
    let total_words = resume_text.split_whitespace().count();

    keywords
        .iter()
        .map(|keyword| {
            let matches = if total_words == 0 {
                0
            } else {
                count_whole_word(resume_text, keyword)
            };
            let density = if total_words == 0 {
                0.0
            } else {
                matches as f64 / total_words as f64 * 100.0
            };
            (keyword.clone(), density)
        })
        .collect()
}

fn count_whole_word(text: &str, keyword: &str) -> usize {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(text).count(),
        // Keywords come out of extract_keywords as plain word characters, so
        // the escaped pattern always compiles; treat a failure as no matches.
        Err(_) => 0,
    }
}

fn keyword_suggestions(missing: &[String]) -> Vec<String> {
    missing
        .iter()
        .take(SUGGESTION_CAP)
        .map(|keyword| format!("Consider adding \"{keyword}\" to relevant sections"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty_input() {
        assert!(extract_keywords("").is_empty());
    }

    #[test]
    fn test_extract_drops_stop_words_and_short_tokens() {
        let keywords = extract_keywords("the cat sat on a big database");
        assert_eq!(keywords, vec!["cat", "sat", "big", "database"]);
    }

    #[test]
    fn test_extract_strips_punctuation_without_merging_words() {
        let keywords = extract_keywords("rust,kafka;redis");
        assert_eq!(keywords, vec!["rust", "kafka", "redis"]);
    }

    #[test]
    fn test_extract_dedupes_preserving_first_seen_order() {
        let keywords = extract_keywords("Python SQL AWS Python");
        assert_eq!(keywords, vec!["python", "sql", "aws"]);
    }

    #[test]
    fn test_extract_no_stemming() {
        let keywords = extract_keywords("manage managed managing");
        assert_eq!(keywords, vec!["manage", "managed", "managing"]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let first = extract_keywords("Led migration of 14 services to Kubernetes, cut costs 30%");
        let second = extract_keywords(&first.join(" "));
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_job_description_reports_resume_keywords_as_present() {
        let analysis = analyze_keywords("rust engineer building systems", None);
        assert_eq!(analysis.present, vec!["rust", "engineer", "building", "systems"]);
        assert!(analysis.missing.is_empty());
        assert!(analysis.density.is_empty());
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_empty_job_description_treated_as_absent() {
        let analysis = analyze_keywords("rust engineer", Some(""));
        assert!(analysis.missing.is_empty());
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_short_resume_against_repeated_jd() {
        // "short text" has 2 words, neither a JD keyword.
        let analysis = analyze_keywords("short text", Some("Python SQL AWS Python"));
        assert!(analysis.present.is_empty());
        assert_eq!(analysis.missing, vec!["python", "sql", "aws"]);
        assert!(analysis.density.values().all(|&d| d == 0.0));
    }

    #[test]
    fn test_missing_capped_at_ten_in_jd_order() {
        let jd = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let analysis = analyze_keywords("unrelated resume content", Some(jd));
        assert_eq!(analysis.missing.len(), 10);
        assert_eq!(analysis.missing[0], "alpha");
        assert_eq!(analysis.missing[9], "juliet");
    }

    #[test]
    fn test_suggestions_capped_at_eight() {
        let jd = "alpha bravo charlie delta echo foxtrot golf hotel india juliet";
        let analysis = analyze_keywords("unrelated resume content", Some(jd));
        assert_eq!(analysis.suggestions.len(), 8);
        assert_eq!(
            analysis.suggestions[0],
            "Consider adding \"alpha\" to relevant sections"
        );
    }

    #[test]
    fn test_present_keeps_jd_order_uncapped() {
        let analysis = analyze_keywords(
            "kafka redis postgres rust tokio axum sqlx serde tracing reqwest chrono uuid",
            Some("rust tokio axum sqlx serde tracing reqwest chrono uuid kafka redis postgres"),
        );
        assert_eq!(analysis.present.len(), 12);
        assert_eq!(analysis.present[0], "rust");
    }

    #[test]
    fn test_density_counts_whole_words_only() {
        // "rust" appears twice as a word; "rustacean" must not count.
        let analysis = analyze_keywords("rust code and rust tooling for a rustacean", Some("rust"));
        let density = analysis.density["rust"];
        // 2 matches / 8 words * 100
        assert!((density - 25.0).abs() < 1e-9, "density was {density}");
    }

    #[test]
    fn test_density_is_case_insensitive() {
        let analysis = analyze_keywords("Rust and RUST", Some("rust"));
        let density = analysis.density["rust"];
        assert!((density - 2.0 / 3.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_zero_word_resume_guard() {
        let analysis = analyze_keywords("", Some("python sql"));
        assert_eq!(analysis.density.len(), 2);
        assert!(analysis.density.values().all(|&d| d == 0.0));
    }
}
