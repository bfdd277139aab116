//! Consistency checks between the résumé and the external profiles.

use std::collections::BTreeSet;

use serde_json::json;

use crate::profiles::{ActivityProfile, NetworkProfile};
use crate::resume::FactsRecord;
use crate::validation::models::{Flag, FlagType, Severity};

/// Languages whose résumé claims we expect to see in activity.
const MAJOR_LANGUAGES: &[&str] = &["python", "javascript", "java", "go", "rust", "typescript", "c++"];

const UNVERIFIED_SKILL_MIN_REPOS: u32 = 5;

const LOW_ACTIVITY_MIN_YEARS: f64 = 5.0;
const LOW_ACTIVITY_MAX_COMMITS: u32 = 50;
const LOW_ACTIVITY_MAX_REPOS: u32 = 5;

const TITLE_MISMATCH_MIN_TITLES: usize = 2;
const TITLE_EVIDENCE_LIMIT: usize = 3;

/// Flags each major-language keyword that no reported activity language contains.
/// Only raised for profiles with more than five public repositories.
pub fn check_skills_vs_activity(facts: &FactsRecord, activity: &ActivityProfile) -> Vec<Flag> {
    if activity.public_repos <= UNVERIFIED_SKILL_MIN_REPOS {
        return vec![];
    }

    let languages = activity.language_names();
    let mut seen = BTreeSet::new();
    let mut flags = Vec::new();

    for keyword in &facts.skill_keywords {
        let skill = keyword.keyword.to_lowercase();
        if !MAJOR_LANGUAGES.contains(&skill.as_str()) || !seen.insert(skill.clone()) {
            continue;
        }

        let variants = [skill.clone(), skill.replace("++", "pp")];
        let backed = variants
            .iter()
            .any(|variant| languages.iter().any(|lang| lang.contains(variant.as_str())));
        if backed {
            continue;
        }

        let upper = skill.to_uppercase();
        flags.push(Flag {
            flag_type: FlagType::SkillNotVerified,
            severity: Severity::Medium,
            description: format!(
                "Claims {upper} expertise on resume, but no {upper} activity was reported"
            ),
            evidence: json!({
                "claimed_skill": skill,
                "activity_languages": languages,
            }),
        });
    }

    flags
}

/// Flags a senior claim (five or more years) with almost no public activity.
pub fn check_activity_level(facts: &FactsRecord, activity: &ActivityProfile) -> Vec<Flag> {
    let total_years = facts.total_years_experience;
    let commits = activity.commits_12_months;
    let repos = activity.public_repos;

    if total_years < LOW_ACTIVITY_MIN_YEARS
        || commits >= LOW_ACTIVITY_MAX_COMMITS
        || repos >= LOW_ACTIVITY_MAX_REPOS
    {
        return vec![];
    }

    vec![Flag {
        flag_type: FlagType::LowActivity,
        severity: Severity::Low,
        description: format!(
            "Claims {total_years} years experience but has minimal public activity ({commits} commits, {repos} repos in last year)"
        ),
        evidence: json!({
            "years_experience": total_years,
            "commits_12_months": commits,
            "public_repos": repos,
        }),
    }]
}

/// Flags disjoint title sets when both sides list more than two titles.
/// A network profile carrying a failure marker is skipped.
pub fn check_title_overlap(facts: &FactsRecord, network: &NetworkProfile) -> Vec<Flag> {
    let Some(details) = network.details() else {
        return vec![];
    };

    let resume_titles: BTreeSet<String> = facts.titles().into_iter().collect();
    let network_titles: BTreeSet<String> = details.titles().into_iter().collect();

    if resume_titles.len() <= TITLE_MISMATCH_MIN_TITLES
        || network_titles.len() <= TITLE_MISMATCH_MIN_TITLES
        || !resume_titles.is_disjoint(&network_titles)
    {
        return vec![];
    }

    let sample = |titles: &BTreeSet<String>| -> Vec<String> {
        titles.iter().take(TITLE_EVIDENCE_LIMIT).cloned().collect()
    };

    vec![Flag {
        flag_type: FlagType::TitleMismatch,
        severity: Severity::Medium,
        description: "Job titles on resume don't match the professional network profile".to_string(),
        evidence: json!({
            "resume_titles": sample(&resume_titles),
            "network_titles": sample(&network_titles),
        }),
    }]
}
