//! Fact Extractor: turns raw résumé text into a `FactsRecord`.
//!
//! Never fails: absent sections become empty structures, unparseable dates fall
//! back to "today" (marked on the entry). Deterministic for a given `today`.

use std::sync::LazyLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use tracing::{debug, info};

use crate::resume::contact::extract_contact;
use crate::resume::experience::extract_experience;
use crate::resume::keywords::extract_skill_keywords;
use crate::resume::models::{EducationMention, ExperienceEntry, FactsRecord, MentionKind};
use crate::resume::sections::{extract_section, Section};
use crate::resume::text::{char_len, take_chars};

const MAX_SKILLS: usize = 30;
const MAX_SKILL_CHARS: usize = 50;
const MAX_CERTIFICATIONS: usize = 10;
const MIN_CERTIFICATION_CHARS: usize = 5;
const MAX_SUMMARY_CHARS: usize = 1000;
const EDUCATION_CONTEXT_CHARS: usize = 500;

static DEGREE_PATTERNS: LazyLock<Vec<(MentionKind, Regex)>> = LazyLock::new(|| {
    [
        (
            MentionKind::Degree,
            r"(?i)(bachelor|master|phd|doctor|associate|b\.s\.|m\.s\.|b\.a\.|m\.a\.|mba)",
        ),
        (
            MentionKind::Field,
            r"(?i)(computer science|engineering|business|data science|information technology)",
        ),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("invalid degree pattern")))
    .collect()
});

/// Extracts facts using the current UTC date to resolve "present".
pub fn extract_facts(raw_text: &str) -> FactsRecord {
    extract_facts_at(raw_text, Utc::now().date_naive())
}

/// Extracts facts with an explicit reference date.
pub fn extract_facts_at(raw_text: &str, today: NaiveDate) -> FactsRecord {
    let experience = extract_section(raw_text, Section::Experience)
        .map(|section| extract_experience(section, today))
        .unwrap_or_default();

    let education = extract_section(raw_text, Section::Education)
        .map(extract_education)
        .unwrap_or_default();

    let skills = extract_section(raw_text, Section::Skills)
        .map(extract_skills)
        .unwrap_or_default();

    let certifications = extract_section(raw_text, Section::Certifications)
        .map(extract_certifications)
        .unwrap_or_default();

    let summary = extract_section(raw_text, Section::Summary)
        .map(|s| take_chars(s, MAX_SUMMARY_CHARS).to_string());

    let total_years_experience = total_years(&experience);
    let skill_keywords = extract_skill_keywords(raw_text);

    let fallbacks = experience.iter().filter(|e| e.used_fallback).count();
    if fallbacks > 0 {
        debug!("{fallbacks} experience entries used the date fallback");
    }
    info!(
        "Extracted {} experience entries ({} years), {} skill keywords",
        experience.len(),
        total_years_experience,
        skill_keywords.len()
    );

    FactsRecord {
        raw_text_length: char_len(raw_text),
        contact: extract_contact(raw_text),
        experience,
        education,
        skills,
        certifications,
        summary,
        total_years_experience,
        skill_keywords,
    }
}

/// Sum of entry durations in years, rounded to one decimal.
pub fn total_years(experience: &[ExperienceEntry]) -> f64 {
    let months: u32 = experience.iter().map(|e| e.duration_months).sum();
    round1(months as f64 / 12.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn extract_education(section: &str) -> Vec<EducationMention> {
    let context = take_chars(section, EDUCATION_CONTEXT_CHARS);
    DEGREE_PATTERNS
        .iter()
        .flat_map(|(kind, re)| {
            re.find_iter(section).map(move |m| EducationMention {
                kind: *kind,
                degree_mention: m.as_str().to_string(),
                section_text: context.to_string(),
            })
        })
        .collect()
}

fn extract_skills(section: &str) -> Vec<String> {
    section
        .split([',', '|', '•', '\n', ';'])
        .map(str::trim)
        .filter(|s| {
            let len = char_len(s);
            len > 1 && len < MAX_SKILL_CHARS
        })
        .take(MAX_SKILLS)
        .map(str::to_string)
        .collect()
}

fn extract_certifications(section: &str) -> Vec<String> {
    section
        .split(['\n', '•'])
        .map(str::trim)
        .filter(|s| char_len(s) > MIN_CERTIFICATION_CHARS)
        .take(MAX_CERTIFICATIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "Jane Doe\n\
        jane@example.com | +1 415 555 0134\n\
        github.com/janedoe\n\
        Summary\n\
        Backend developer building APIs in Python and Rust.\n\
        Work Experience\n\
        Senior Engineer at Acme\n\
        Jan 2020 - Present\n\
        • Ran Python services on AWS with Docker\n\
        Engineer at Initech\n\
        Jun 2017 - Dec 2019\n\
        • Python and PostgreSQL\n\
        Education\n\
        B.S. Computer Science, State University\n\
        Skills\n\
        Python, Rust | AWS; Docker\n\
        • PostgreSQL\n\
        Certifications\n\
        AWS Certified Solutions Architect\n\
        CKA\n";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_full_resume_extraction() {
        let facts = extract_facts_at(SAMPLE_RESUME, today());

        assert_eq!(facts.contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(facts.contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(facts.contact.github.as_deref(), Some("https://github.com/janedoe"));

        assert_eq!(facts.experience.len(), 2);
        assert_eq!(facts.experience[0].duration_months, 53);
        assert_eq!(facts.experience[1].duration_months, 30);
        // (53 + 30) / 12 = 6.9166…
        assert_eq!(facts.total_years_experience, 6.9);

        assert_eq!(
            facts.summary.as_deref(),
            Some("Backend developer building APIs in Python and Rust.")
        );
        assert_eq!(facts.skills, vec!["Python", "Rust", "AWS", "Docker", "PostgreSQL"]);
        assert_eq!(facts.certifications, vec!["AWS Certified Solutions Architect"]);
    }

    #[test]
    fn test_education_mentions_keep_kind_and_order() {
        let facts = extract_facts_at(SAMPLE_RESUME, today());
        let mentions: Vec<_> = facts
            .education
            .iter()
            .map(|m| (m.kind, m.degree_mention.as_str()))
            .collect();
        assert_eq!(
            mentions,
            vec![
                (MentionKind::Degree, "B.S."),
                (MentionKind::Field, "Computer Science")
            ]
        );
    }

    #[test]
    fn test_keywords_cover_whole_document() {
        let facts = extract_facts_at(SAMPLE_RESUME, today());
        assert_eq!(facts.skill_keywords[0].keyword, "python");
        assert_eq!(facts.skill_keywords[0].count, 4);
        assert!(facts
            .skill_keywords
            .windows(2)
            .all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_total_years_matches_duration_sum() {
        let facts = extract_facts_at(SAMPLE_RESUME, today());
        let months: u32 = facts.experience.iter().map(|e| e.duration_months).sum();
        assert_eq!(facts.total_years_experience, round1(months as f64 / 12.0));
        assert!(facts.total_years_experience >= 0.0);
    }

    #[test]
    fn test_empty_text_yields_empty_record() {
        let facts = extract_facts_at("", today());
        assert_eq!(facts, FactsRecord::default());
        assert_eq!(facts.total_years_experience, 0.0);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(
            extract_facts_at(SAMPLE_RESUME, today()),
            extract_facts_at(SAMPLE_RESUME, today())
        );
    }

    #[test]
    fn test_skill_tokens_filtered_by_length_and_capped() {
        let long = "x".repeat(60);
        let many: Vec<String> = (0..40).map(|i| format!("skill{i}")).collect();
        let section = format!("a, {long}, {}", many.join(", "));
        let skills = extract_skills(&section);
        assert_eq!(skills.len(), MAX_SKILLS);
        assert_eq!(skills[0], "skill0");
    }

    #[test]
    fn test_certifications_capped_at_ten() {
        let section: String = (0..15).map(|i| format!("Certified Thing {i}\n")).collect();
        let certs = extract_certifications(&section);
        assert_eq!(certs.len(), MAX_CERTIFICATIONS);
        assert_eq!(certs[9], "Certified Thing 9");
    }

    #[test]
    fn test_repeated_degree_terms_are_all_kept() {
        let mentions = extract_education("Master of Science\nMaster of Business Administration");
        let degrees: Vec<_> = mentions
            .iter()
            .filter(|m| m.kind == MentionKind::Degree)
            .map(|m| m.degree_mention.as_str())
            .collect();
        assert_eq!(degrees, vec!["Master", "Master"]);
        assert_eq!(
            mentions.iter().filter(|m| m.kind == MentionKind::Field).count(),
            1
        );
    }

    #[test]
    fn test_summary_capped_at_limit() {
        let text = format!("Summary\n{}", "z".repeat(3000));
        let facts = extract_facts_at(&text, today());
        assert_eq!(char_len(facts.summary.as_deref().unwrap()), MAX_SUMMARY_CHARS);
    }
}
