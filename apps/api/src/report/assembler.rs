//! Report Assembler: merges the pipeline outputs into one report.
//!
//! No extraction or validation happens here; every field is a projection of
//! data the earlier stages already produced.

use tracing::debug;

use crate::profiles::network::NetworkDetails;
use crate::profiles::{ActivityProfile, NetworkProfile, SemanticAssessment};
use crate::report::models::{
    ActivitySummary, AssessmentSection, NetworkSummary, Report, ReportMeta, ResumeSummary,
    VerifiedSkill,
};
use crate::resume::FactsRecord;
use crate::scoring::{explain_score, ScoreBreakdown};
use crate::validation::{credibility_score, Flag, Severity};

const MAX_VERIFIED_SKILLS: usize = 20;
const REASONING_LIST_LIMIT: usize = 2;
const SUMMARY_LANGUAGE_LIMIT: usize = 5;

const BASE_CONFIDENCE: f64 = 0.5;
const ACTIVITY_CONFIDENCE: f64 = 0.3;
const ASSESSMENT_CONFIDENCE: f64 = 0.2;

const DEFAULT_NETWORK_MESSAGE: &str = "Professional network data not available";

/// The optional upstream records a report draws on.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportSources<'a> {
    pub facts: Option<&'a FactsRecord>,
    pub activity: Option<&'a ActivityProfile>,
    pub network: Option<&'a NetworkProfile>,
    pub assessment: Option<&'a SemanticAssessment>,
}

pub fn assemble_report(
    meta: ReportMeta,
    breakdown: &ScoreBreakdown,
    flags: &[Flag],
    sources: ReportSources<'_>,
) -> Report {
    let verified_skills = verified_skills(sources);
    debug!("Report carries {} verified skills", verified_skills.len());

    Report {
        meta,
        total_score: breakdown.total_score,
        reasoning_summary: reasoning_summary(breakdown, sources.assessment, flags),
        verified_skills,
        flags: flags.to_vec(),
        credibility_score: credibility_score(flags),
        detailed_breakdown: breakdown.breakdown.clone(),
        interpretation: breakdown.interpretation.clone(),
        score_explanation: explain_score(breakdown, sources.assessment, flags),
        activity_summary: sources.activity.map(summarize_activity),
        network_summary: sources.network.map(summarize_network),
        resume_summary: sources.facts.map(summarize_resume),
        semantic_assessment: sources.assessment.map(format_assessment),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reasoning
// ────────────────────────────────────────────────────────────────────────────

fn reasoning_summary(
    breakdown: &ScoreBreakdown,
    assessment: Option<&SemanticAssessment>,
    flags: &[Flag],
) -> String {
    let mut parts = vec![format!(
        "Candidate scored {}/10 ({}).",
        breakdown.total_score,
        breakdown.interpretation.rating.as_str()
    )];

    if let Some(a) = assessment {
        if !a.summary.is_empty() {
            parts.push(a.summary.clone());
        }
        if !a.strengths.is_empty() {
            parts.push(format!(
                "Key strengths include: {}.",
                first_n(&a.strengths, REASONING_LIST_LIMIT)
            ));
        }
        if !a.concerns.is_empty() {
            parts.push(format!(
                "Areas of concern: {}.",
                first_n(&a.concerns, REASONING_LIST_LIMIT)
            ));
        }
    }

    let high = flags.iter().filter(|f| f.severity == Severity::High).count();
    if high > 0 {
        parts.push(format!("Found {high} critical discrepancy(ies) in claims."));
    }

    parts.join(" ")
}

fn first_n(items: &[String], n: usize) -> String {
    items.iter().take(n).cloned().collect::<Vec<_>>().join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Verified skills
// ────────────────────────────────────────────────────────────────────────────

/// Every résumé keyword with a confidence raised by each corroborating source.
fn verified_skills(sources: ReportSources<'_>) -> Vec<VerifiedSkill> {
    let Some(facts) = sources.facts else {
        return vec![];
    };

    let languages = sources
        .activity
        .map(ActivityProfile::language_names)
        .unwrap_or_default();
    let matching: Vec<String> = sources
        .assessment
        .map(|a| a.key_matching_skills.iter().map(|s| s.to_lowercase()).collect())
        .unwrap_or_default();

    let mut skills: Vec<VerifiedSkill> = facts
        .skill_keywords
        .iter()
        .map(|kw| {
            let skill = kw.keyword.to_lowercase();
            let mut confidence = BASE_CONFIDENCE;
            let mut evidence = vec!["Resume"];

            if languages.iter().any(|l| l.contains(&skill)) {
                confidence += ACTIVITY_CONFIDENCE;
                evidence.push("Activity profile");
            }
            if matching.iter().any(|m| m.contains(&skill)) {
                confidence += ASSESSMENT_CONFIDENCE;
                evidence.push("Semantic assessment");
            }

            VerifiedSkill {
                skill: title_case(&skill),
                confidence: round2(confidence.min(1.0)),
                evidence: evidence.join(", "),
            }
        })
        .collect();

    skills.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    skills.truncate(MAX_VERIFIED_SKILLS);
    skills
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uppercases the first letter of every alphabetic run: "node.js" → "Node.Js".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Source summaries
// ────────────────────────────────────────────────────────────────────────────

fn summarize_activity(activity: &ActivityProfile) -> ActivitySummary {
    ActivitySummary {
        username: activity.username.clone(),
        commits_12_months: activity.commits_12_months,
        public_repos: activity.public_repos,
        top_languages: activity
            .top_languages
            .iter()
            .take(SUMMARY_LANGUAGE_LIMIT)
            .map(|l| l.name().to_string())
            .collect(),
        content_quality: activity.content_quality_score,
        contribution_streak: activity.contribution_streak,
        followers: activity.followers,
    }
}

fn summarize_network(network: &NetworkProfile) -> NetworkSummary {
    match network {
        NetworkProfile::Unavailable(failure) => NetworkSummary::Unavailable {
            message: failure
                .message
                .clone()
                .unwrap_or_else(|| DEFAULT_NETWORK_MESSAGE.to_string()),
        },
        NetworkProfile::Available(details) => summarize_network_details(details),
    }
}

fn summarize_network_details(details: &NetworkDetails) -> NetworkSummary {
    NetworkSummary::Available {
        name: details.name.clone(),
        headline: details.headline.clone(),
        location: details.location.clone(),
        experience_count: details.experience.len(),
        education_count: details.education.len(),
        skills_count: details.skills.len(),
    }
}

fn summarize_resume(facts: &FactsRecord) -> ResumeSummary {
    ResumeSummary {
        name: facts.contact.name.clone(),
        email: facts.contact.email.clone(),
        total_experience_years: facts.total_years_experience,
        positions_held: facts.experience.len(),
        skills_detected: facts.skill_keywords.len(),
        certifications: facts.certifications.len(),
    }
}

fn format_assessment(a: &SemanticAssessment) -> AssessmentSection {
    AssessmentSection {
        technical_match_score: a.technical_match_score,
        experience_relevance_score: a.experience_relevance_score,
        hiring_recommendation: a.hiring_recommendation.clone(),
        matching_skills: a.key_matching_skills.clone(),
        missing_skills: a.missing_skills.clone(),
        strengths: a.strengths.clone(),
        concerns: a.concerns.clone(),
    }
}
