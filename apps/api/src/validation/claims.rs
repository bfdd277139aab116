//! Résumé-only plausibility checks: technology age and total experience.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use crate::resume::FactsRecord;
use crate::validation::models::{Flag, FlagType, Severity};

/// Approximate public introduction year per technology. Lookup is a substring
/// match in table order and the first hit wins, so "react native" resolves to
/// "react".
pub const TECH_INTRODUCTION_YEARS: &[(&str, i32)] = &[
    // Frontend
    ("react", 2013),
    ("react native", 2015),
    ("vue", 2014),
    ("vue.js", 2014),
    ("angular", 2016),
    ("svelte", 2016),
    ("next.js", 2016),
    ("tailwind", 2017),
    ("tailwindcss", 2017),
    // Backend
    ("fastapi", 2018),
    ("nestjs", 2017),
    ("deno", 2018),
    // Cloud/DevOps
    ("kubernetes", 2014),
    ("terraform", 2014),
    ("github actions", 2019),
    ("docker", 2013),
    ("aws lambda", 2014),
    // Data/ML
    ("pytorch", 2016),
    ("tensorflow", 2015),
    ("gpt", 2018),
    ("langchain", 2022),
    ("openai api", 2020),
    ("llm", 2020),
    // Languages
    ("rust", 2010),
    ("go", 2009),
    ("golang", 2009),
    ("kotlin", 2011),
    ("swift", 2014),
    ("typescript", 2012),
    // Databases
    ("snowflake", 2014),
    ("cockroachdb", 2015),
    ("planetscale", 2018),
];

/// Grace year on top of a technology's age.
const AGE_TOLERANCE_YEARS: i32 = 1;
const EXCESSIVE_TOTAL_YEARS: f64 = 30.0;

#[derive(Debug, Clone, Copy)]
enum ClaimShape {
    YearsThenTech,
    TechThenYears,
}

const CLAIM_RULES: &[(ClaimShape, &str)] = &[
    (
        ClaimShape::YearsThenTech,
        r"(\d+)\+?\s*years?\s+(?:of\s+)?(?:experience\s+)?(?:with|in|using)\s+([a-zA-Z\s\.\-]+)",
    ),
    (
        ClaimShape::TechThenYears,
        r"([a-zA-Z\s\.\-]+)\s+expert\s+with\s+(\d+)\+?\s*years?",
    ),
    (
        ClaimShape::YearsThenTech,
        r"(\d+)\+?\s*years?\s+([a-zA-Z\s\.\-]+)\s+(?:developer|engineer)",
    ),
];

static CLAIM_PATTERNS: LazyLock<Vec<(ClaimShape, Regex)>> = LazyLock::new(|| {
    CLAIM_RULES
        .iter()
        .map(|(shape, pattern)| (*shape, Regex::new(pattern).expect("invalid claim pattern")))
        .collect()
});

/// First table entry whose name occurs in `phrase`.
pub fn lookup_introduction_year(phrase: &str) -> Option<(&'static str, i32)> {
    TECH_INTRODUCTION_YEARS
        .iter()
        .find(|(name, _)| phrase.contains(name))
        .copied()
}

/// Flags "N years with X" claims where N exceeds X's age (plus one year of grace).
/// Scans the summary and every experience excerpt.
pub fn check_technology_age(facts: &FactsRecord, current_year: i32) -> Vec<Flag> {
    let mut full_text = facts.summary.as_deref().unwrap_or_default().to_lowercase();
    for entry in &facts.experience {
        full_text.push(' ');
        full_text.push_str(&entry.raw_text.to_lowercase());
    }

    let mut flags = Vec::new();

    for (shape, re) in CLAIM_PATTERNS.iter() {
        for caps in re.captures_iter(&full_text) {
            let (years_raw, tech_raw) = match shape {
                ClaimShape::YearsThenTech => (&caps[1], &caps[2]),
                ClaimShape::TechThenYears => (&caps[2], &caps[1]),
            };
            let Ok(claimed_years) = years_raw.parse::<i32>() else {
                continue;
            };
            let phrase = tech_raw.trim();

            let Some((technology, introduction_year)) = lookup_introduction_year(phrase) else {
                continue;
            };

            let max_possible_years = current_year - introduction_year;
            if claimed_years > max_possible_years + AGE_TOLERANCE_YEARS {
                flags.push(Flag {
                    flag_type: FlagType::ExperienceMismatch,
                    severity: Severity::High,
                    description: format!(
                        "Claims {claimed_years} years experience with {technology}, but it was introduced in {introduction_year} ({max_possible_years} years ago)"
                    ),
                    evidence: json!({
                        "claimed_years": claimed_years,
                        "max_possible_years": max_possible_years,
                        "technology": technology,
                        "introduction_year": introduction_year,
                    }),
                });
            }
        }
    }

    flags
}

/// Flags a total experience above thirty years.
pub fn check_timeline(facts: &FactsRecord) -> Vec<Flag> {
    let total = facts.total_years_experience;
    if total <= EXCESSIVE_TOTAL_YEARS {
        return vec![];
    }
    vec![Flag {
        flag_type: FlagType::ExcessiveExperience,
        severity: Severity::Medium,
        description: format!(
            "Total experience claimed is {total} years, which is unusually high"
        ),
        evidence: json!({ "total_years": total }),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::models::ExperienceEntry;

    fn facts_with_summary(summary: &str) -> FactsRecord {
        FactsRecord {
            summary: Some(summary.to_string()),
            ..FactsRecord::default()
        }
    }

    #[test]
    fn test_fastapi_claim_exceeding_age_is_high() {
        let facts = facts_with_summary("8 years of experience with FastAPI");
        let flags = check_technology_age(&facts, 2024);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].severity, Severity::High);
        assert_eq!(flags[0].flag_type, FlagType::ExperienceMismatch);
        assert_eq!(flags[0].evidence["max_possible_years"], 6);
        assert_eq!(flags[0].evidence["claimed_years"], 8);
        assert_eq!(flags[0].evidence["technology"], "fastapi");
        assert_eq!(flags[0].evidence["introduction_year"], 2018);
    }

    #[test]
    fn test_claim_within_grace_year_is_not_flagged() {
        // 7 == 6 + 1 → allowed
        let facts = facts_with_summary("7 years of experience with FastAPI");
        assert!(check_technology_age(&facts, 2024).is_empty());
    }

    #[test]
    fn test_first_table_entry_wins_over_better_match() {
        // "react native" resolves to "react" (2013), so 12 years passes in 2024.
        let facts = facts_with_summary("12 years of experience in React Native");
        let flags = check_technology_age(&facts, 2024);
        assert_eq!(flags.len(), 0);
        assert_eq!(lookup_introduction_year("react native"), Some(("react", 2013)));
    }

    #[test]
    fn test_tech_then_years_variant() {
        let facts = facts_with_summary("LangChain expert with 5+ years");
        let flags = check_technology_age(&facts, 2024);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].evidence["technology"], "langchain");
    }

    #[test]
    fn test_years_role_variant_in_experience_excerpt() {
        let facts = FactsRecord {
            experience: vec![ExperienceEntry::fixture(
                "Hired as a 9 years kubernetes engineer",
                12,
                None,
            )],
            ..FactsRecord::default()
        };
        let flags = check_technology_age(&facts, 2020);
        assert_eq!(flags.len(), 1);
        assert_eq!(flags[0].evidence["max_possible_years"], 6);
    }

    #[test]
    fn test_claim_between_two_positions_is_flagged_once() {
        let text = "Experience\nAcme\n2016 - 2018\nLed 8 years with FastAPI rollout.\nInitech\n2018 - 2020\n";
        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let facts = crate::resume::extract_facts_at(text, today);
        assert_eq!(facts.experience.len(), 2);

        let flags = check_technology_age(&facts, 2024);
        assert_eq!(flags.len(), 1);
        assert_eq!(crate::validation::credibility_score(&flags), 7.0);
    }

    #[test]
    fn test_unknown_technology_is_ignored() {
        let facts = facts_with_summary("40 years of experience with COBOL");
        assert!(check_technology_age(&facts, 2024).is_empty());
    }

    #[test]
    fn test_timeline_flags_above_thirty_years() {
        let mut facts = FactsRecord::default();
        facts.total_years_experience = 30.0;
        assert!(check_timeline(&facts).is_empty());
        facts.total_years_experience = 31.5;
        let flags = check_timeline(&facts);
        assert_eq!(flags[0].severity, Severity::Medium);
        assert_eq!(flags[0].evidence["total_years"], 31.5);
    }
}
