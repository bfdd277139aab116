//! Composite Scorer: four category sub-scores and one weighted total.
//!
//! Every input is optional; a missing input degrades to a neutral sub-score.
//! The total is computed from the rounded sub-scores, so the published
//! breakdown always reproduces the published total.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::profiles::{ActivityProfile, SemanticAssessment};
use crate::resume::parser::round1;
use crate::resume::FactsRecord;
use crate::scoring::interpretation::{interpret, Interpretation};
use crate::scoring::weights::{tier, ScoringWeights, ACTIVITY_BENCHMARKS};
use crate::validation::{credibility_score, Flag, Severity};

pub const NEUTRAL_SCORE: f64 = 5.0;
pub const MAX_SCORE: f64 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub technical_match: f64,
    pub experience_depth: f64,
    pub activity_score: f64,
    pub credibility: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_score: f64, // 0 – 10
    pub breakdown: SubScores,
    pub weights: ScoringWeights,
    pub interpretation: Interpretation,
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

pub fn score(
    activity: Option<&ActivityProfile>,
    facts: Option<&FactsRecord>,
    assessment: Option<&SemanticAssessment>,
    flags: Option<&[Flag]>,
) -> ScoreBreakdown {
    score_with_weights(activity, facts, assessment, flags, ScoringWeights::default())
}

pub fn score_with_weights(
    activity: Option<&ActivityProfile>,
    facts: Option<&FactsRecord>,
    assessment: Option<&SemanticAssessment>,
    flags: Option<&[Flag]>,
    weights: ScoringWeights,
) -> ScoreBreakdown {
    let breakdown = SubScores {
        technical_match: round1(technical_match(facts, assessment)),
        experience_depth: round1(experience_depth(facts, assessment)),
        activity_score: round1(activity_score(activity)),
        credibility: credibility_score(flags.unwrap_or_default()),
    };

    let total_score = round1(
        breakdown.technical_match * weights.technical_match
            + breakdown.experience_depth * weights.experience_depth
            + breakdown.activity_score * weights.activity_score
            + breakdown.credibility * weights.credibility,
    );
    let interpretation = interpret(total_score);

    info!(
        "Composite score {total_score}/10 ({}): technical {}, experience {}, activity {}, credibility {}",
        interpretation.rating.as_str(),
        breakdown.technical_match,
        breakdown.experience_depth,
        breakdown.activity_score,
        breakdown.credibility
    );

    ScoreBreakdown {
        total_score,
        breakdown,
        weights,
        interpretation,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, MAX_SCORE)
}

/// Assessment first (with matching/missing skill adjustments), then the
/// keyword-count step function, else neutral.
fn technical_match(facts: Option<&FactsRecord>, assessment: Option<&SemanticAssessment>) -> f64 {
    let score = if let Some(a) = assessment {
        let matching = a.key_matching_skills.len();
        let missing = a.missing_skills.len();

        let bonus = match matching {
            n if n >= 5 => 0.5,
            n if n >= 3 => 0.25,
            _ => 0.0,
        };
        let penalty = match missing {
            n if n >= 4 => 1.0,
            n if n >= 2 => 0.5,
            _ => 0.0,
        };
        a.technical_match_score + bonus - penalty
    } else if let Some(facts) = facts {
        tier(
            facts.skill_keywords.len(),
            &[(15, 8.0), (10, 7.0), (5, 6.0)],
            NEUTRAL_SCORE,
        )
    } else {
        NEUTRAL_SCORE
    };
    clamp_score(score)
}

fn experience_depth(facts: Option<&FactsRecord>, assessment: Option<&SemanticAssessment>) -> f64 {
    let mut score = match facts {
        Some(facts) => {
            let years = tier(
                facts.total_years_experience,
                &[(10.0, 9.0), (7.0, 8.0), (5.0, 7.0), (3.0, 6.0), (1.0, 5.0)],
                4.0,
            );
            let progression = if facts.experience.len() >= 4 { 0.5 } else { 0.0 };
            years + progression
        }
        None => NEUTRAL_SCORE,
    };

    if let Some(a) = assessment {
        score = (score + a.experience_relevance_score) / 2.0;
    }
    clamp_score(score)
}

fn activity_score(activity: Option<&ActivityProfile>) -> f64 {
    let Some(activity) = activity else {
        return NEUTRAL_SCORE;
    };
    let b = &ACTIVITY_BENCHMARKS;

    let commits = tier(activity.commits_12_months, b.commits, b.commits_floor);
    let repos = tier(activity.public_repos, b.repos, b.repos_floor);
    let quality = (activity.content_quality_score / b.quality_divisor).clamp(0.0, b.quality_cap);
    let streak = (activity.contribution_streak as f64 / b.streak_days_per_point).min(b.streak_cap);

    clamp_score(commits + repos + quality + streak)
}

// ────────────────────────────────────────────────────────────────────────────
// Explanation
// ────────────────────────────────────────────────────────────────────────────

fn percent(weight: f64) -> String {
    format!("{:.0}%", weight * 100.0)
}

/// Markdown explanation of a breakdown, with assessment strengths/concerns and
/// HIGH-severity flag descriptions when present.
pub fn explain_score(
    result: &ScoreBreakdown,
    assessment: Option<&SemanticAssessment>,
    flags: &[Flag],
) -> String {
    let b = &result.breakdown;
    let w = &result.weights;
    let rating = result.interpretation.rating.as_str();
    let rec = result.interpretation.recommendation.as_str();

    let mut lines = vec![
        format!("**Overall Score: {}/10 ({rating})**", result.total_score),
        String::new(),
        "**Score Breakdown:**".to_string(),
        format!("- Technical Match: {}/10 (weight: {})", b.technical_match, percent(w.technical_match)),
        format!("- Experience Depth: {}/10 (weight: {})", b.experience_depth, percent(w.experience_depth)),
        format!("- Activity Score: {}/10 (weight: {})", b.activity_score, percent(w.activity_score)),
        format!("- Credibility: {}/10 (weight: {})", b.credibility, percent(w.credibility)),
        String::new(),
    ];

    if let Some(a) = assessment {
        for (heading, items) in [("**Strengths:**", &a.strengths), ("**Concerns:**", &a.concerns)] {
            if items.is_empty() {
                continue;
            }
            lines.push(heading.to_string());
            lines.extend(items.iter().map(|item| format!("- {item}")));
            lines.push(String::new());
        }
    }

    let critical: Vec<&Flag> = flags.iter().filter(|f| f.severity == Severity::High).collect();
    if !critical.is_empty() {
        lines.push("**Critical Flags:**".to_string());
        lines.extend(critical.iter().map(|f| format!("- {}", f.description)));
        lines.push(String::new());
    }

    lines.push(format!("**Recommendation:** {rec}"));
    lines.push(format!("_{}_", result.interpretation.description));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::activity::LanguageEntry;
    use crate::resume::extract_facts_at;
    use crate::resume::models::{ExperienceEntry, SkillKeyword};
    use crate::scoring::interpretation::{Rating, Recommendation};
    use crate::validation::FlagType;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn facts_with_keyword_count(n: usize) -> FactsRecord {
        FactsRecord {
            skill_keywords: (0..n)
                .map(|i| SkillKeyword::fixture(&format!("kw{i}"), 1))
                .collect(),
            ..FactsRecord::default()
        }
    }

    fn sample_assessment() -> SemanticAssessment {
        SemanticAssessment {
            technical_match_score: 8.0,
            experience_relevance_score: 7.0,
            key_matching_skills: vec!["Python".into(), "AWS".into(), "Docker".into()],
            missing_skills: vec!["Kubernetes".into()],
            strengths: vec!["Strong Python background".into()],
            ..SemanticAssessment::default()
        }
    }

    fn flag(severity: Severity, description: &str) -> Flag {
        Flag {
            flag_type: FlagType::ExperienceMismatch,
            severity,
            description: description.to_string(),
            evidence: Value::Null,
        }
    }

    fn assert_total_matches_breakdown(result: &ScoreBreakdown) {
        let b = &result.breakdown;
        let w = &result.weights;
        let expected = round1(
            b.technical_match * w.technical_match
                + b.experience_depth * w.experience_depth
                + b.activity_score * w.activity_score
                + b.credibility * w.credibility,
        );
        assert_eq!(result.total_score, expected);
        for s in [b.technical_match, b.experience_depth, b.activity_score, b.credibility] {
            assert!((0.0..=10.0).contains(&s), "Sub-score out of range: {s}");
        }
    }

    #[test]
    fn test_keyword_step_function_boundaries() {
        let tech = |n| score(None, Some(&facts_with_keyword_count(n)), None, None).breakdown.technical_match;
        assert_eq!(tech(2), 5.0);
        assert_eq!(tech(4), 5.0);
        assert_eq!(tech(5), 6.0);
        assert_eq!(tech(10), 7.0);
        assert_eq!(tech(15), 8.0);
    }

    #[test]
    fn test_full_activity_profile_scores_ten() {
        let activity = ActivityProfile {
            commits_12_months: 600,
            public_repos: 40,
            content_quality_score: 10.0,
            contribution_streak: 45,
            ..ActivityProfile::default()
        };
        assert_eq!(score(Some(&activity), None, None, None).breakdown.activity_score, 10.0);
    }

    #[test]
    fn test_missing_activity_profile_is_neutral() {
        let facts = FactsRecord {
            total_years_experience: 5.0,
            ..FactsRecord::default()
        };
        let result = score(None, Some(&facts), None, None);
        assert_eq!(result.breakdown.activity_score, NEUTRAL_SCORE);
        assert_eq!(result.breakdown.experience_depth, 7.0);
    }

    #[test]
    fn test_empty_resume_still_yields_full_breakdown() {
        let facts = extract_facts_at("", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let result = score(None, Some(&facts), None, Some(&[]));
        assert_eq!(result.breakdown.technical_match, 5.0);
        assert_eq!(result.breakdown.experience_depth, 4.0);
        assert_eq!(result.breakdown.activity_score, 5.0);
        assert_eq!(result.breakdown.credibility, 10.0);
        // 2.0 + 1.0 + 1.0 + 1.5
        assert_eq!(result.total_score, 5.5);
        assert_eq!(result.interpretation.rating, Rating::Fair);
    }

    #[test]
    fn test_no_inputs_at_all() {
        let result = score(None, None, None, None);
        assert_eq!(result.breakdown.technical_match, 5.0);
        assert_eq!(result.breakdown.experience_depth, 5.0);
        assert_eq!(result.breakdown.activity_score, 5.0);
        assert_eq!(result.breakdown.credibility, 10.0);
        assert_eq!(result.total_score, 5.8);
        assert_total_matches_breakdown(&result);
    }

    #[test]
    fn test_all_sources_combined() {
        let activity = ActivityProfile {
            commits_12_months: 234,
            public_repos: 25,
            content_quality_score: 7.5,
            contribution_streak: 15,
            top_languages: vec![LanguageEntry::Bare("Python".into())],
            ..ActivityProfile::default()
        };
        let facts = FactsRecord {
            total_years_experience: 5.0,
            experience: (0..3).map(|_| ExperienceEntry::fixture("", 20, None)).collect(),
            ..facts_with_keyword_count(3)
        };
        let assessment = sample_assessment();

        let result = score(Some(&activity), Some(&facts), Some(&assessment), Some(&[]));
        // 8 + 0.25 (3 matching) − 0 (1 missing)
        assert_eq!(result.breakdown.technical_match, 8.3);
        // (7 + 7) / 2
        assert_eq!(result.breakdown.experience_depth, 7.0);
        // 3 + 2 + 1.5 + 0.5
        assert_eq!(result.breakdown.activity_score, 7.0);
        assert_eq!(result.total_score, 8.0);
        assert_eq!(result.interpretation.recommendation, Recommendation::Yes);
        assert_total_matches_breakdown(&result);
    }

    #[test]
    fn test_assessment_adjustments_are_clamped() {
        let assessment = SemanticAssessment {
            technical_match_score: 10.0,
            key_matching_skills: vec!["a".into(); 6],
            ..SemanticAssessment::default()
        };
        assert_eq!(score(None, None, Some(&assessment), None).breakdown.technical_match, 10.0);

        let weak = SemanticAssessment {
            technical_match_score: 0.5,
            missing_skills: vec!["a".into(); 4],
            ..SemanticAssessment::default()
        };
        assert_eq!(score(None, None, Some(&weak), None).breakdown.technical_match, 0.0);
    }

    #[test]
    fn test_progression_bonus_for_four_positions() {
        let facts = FactsRecord {
            total_years_experience: 10.0,
            experience: (0..4).map(|_| ExperienceEntry::fixture("", 30, None)).collect(),
            ..FactsRecord::default()
        };
        assert_eq!(score(None, Some(&facts), None, None).breakdown.experience_depth, 9.5);
    }

    #[test]
    fn test_flags_reduce_credibility_and_total() {
        let flags = vec![flag(Severity::High, "x"), flag(Severity::Medium, "y")];
        let result = score(None, None, None, Some(&flags));
        assert_eq!(result.breakdown.credibility, 5.5);
        assert_total_matches_breakdown(&result);
    }

    #[test]
    fn test_explain_score_lists_sections() {
        let assessment = sample_assessment();
        let flags = vec![
            flag(Severity::High, "Claims 8 years with fastapi"),
            flag(Severity::Low, "quiet profile"),
        ];
        let result = score(None, None, Some(&assessment), Some(&flags));
        let text = explain_score(&result, Some(&assessment), &flags);

        assert!(text.starts_with(&format!("**Overall Score: {}/10 (", result.total_score)));
        assert!(text.contains("- Technical Match: "));
        assert!(text.contains("(weight: 40%)"));
        assert!(text.contains("**Strengths:**\n- Strong Python background"));
        assert!(!text.contains("**Concerns:**"));
        assert!(text.contains("**Critical Flags:**\n- Claims 8 years with fastapi"));
        assert!(!text.contains("quiet profile"));
        assert!(text.contains("**Recommendation:** "));
    }
}
