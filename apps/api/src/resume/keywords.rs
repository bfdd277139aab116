//! Controlled technology vocabulary and whole-document keyword counting.

use std::sync::LazyLock;

use regex::Regex;

use crate::resume::models::SkillKeyword;

pub const TECH_VOCABULARY: &[&str] = &[
    // Languages
    "python", "javascript", "typescript", "java", "c++", "c#", "go", "golang",
    "rust", "ruby", "php", "swift", "kotlin", "scala", "r", "matlab",
    // Frontend
    "react", "angular", "vue", "svelte", "next.js", "nuxt", "html", "css",
    "sass", "tailwind", "bootstrap", "jquery",
    // Backend
    "node.js", "express", "fastapi", "django", "flask", "spring", "rails",
    ".net", "asp.net", "laravel", "nestjs",
    // Data
    "sql", "postgresql", "mysql", "mongodb", "redis", "elasticsearch",
    "snowflake", "bigquery", "spark", "hadoop", "kafka",
    // Cloud
    "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "terraform",
    "jenkins", "github actions", "ci/cd",
    // ML/AI
    "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy", "keras",
    "machine learning", "deep learning", "nlp", "computer vision",
];

// `\b` next to a symbol only matches before/after a word character, so terms
// like "c++" are only counted when glued to a following word.
static VOCABULARY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    TECH_VOCABULARY
        .iter()
        .map(|term| {
            let re = Regex::new(&format!(r"\b{}\b", regex::escape(term)))
                .expect("invalid vocabulary pattern");
            (*term, re)
        })
        .collect()
});

/// Counts whole-word, case-insensitive occurrences of every vocabulary term across
/// the entire document. Zero-count terms are omitted; ties keep vocabulary order.
pub fn extract_skill_keywords(text: &str) -> Vec<SkillKeyword> {
    let lower = text.to_lowercase();

    let mut keywords: Vec<SkillKeyword> = VOCABULARY_PATTERNS
        .iter()
        .filter_map(|(term, re)| {
            let count = re.find_iter(&lower).count() as u32;
            (count > 0).then(|| SkillKeyword {
                keyword: term.to_string(),
                count,
            })
        })
        .collect();

    keywords.sort_by(|a, b| b.count.cmp(&a.count));
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_of(keywords: &[SkillKeyword], term: &str) -> Option<u32> {
        keywords.iter().find(|k| k.keyword == term).map(|k| k.count)
    }

    #[test]
    fn test_counts_whole_words_case_insensitively() {
        let kws = extract_skill_keywords("Python, PYTHON and python3. Built APIs in Python.");
        assert_eq!(count_of(&kws, "python"), Some(3));
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let kws = extract_skill_keywords("JavaScript everywhere");
        assert_eq!(count_of(&kws, "javascript"), Some(1));
        assert_eq!(count_of(&kws, "java"), None);
    }

    #[test]
    fn test_multiword_and_dotted_terms() {
        let kws = extract_skill_keywords("Machine learning with Node.js and GitHub Actions");
        assert_eq!(count_of(&kws, "machine learning"), Some(1));
        assert_eq!(count_of(&kws, "node.js"), Some(1));
        assert_eq!(count_of(&kws, "github actions"), Some(1));
    }

    #[test]
    fn test_sorted_by_count_descending_and_nonzero() {
        let kws = extract_skill_keywords("aws aws aws docker docker rust");
        let order: Vec<_> = kws.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(order, vec!["aws", "docker", "rust"]);
        assert!(kws.iter().all(|k| k.count >= 1));
    }

    #[test]
    fn test_empty_text_has_no_keywords() {
        assert!(extract_skill_keywords("").is_empty());
    }
}
