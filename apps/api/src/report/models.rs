use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{Interpretation, SubScores};
use crate::validation::Flag;

/// Run metadata supplied by the caller, so assembly itself stays clock-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    pub analysis_id: Uuid,
    pub candidate_id: String,
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub engine: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedSkill {
    pub skill: String,
    pub confidence: f64, // 0.5 – 1.0
    pub evidence: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummary {
    pub username: Option<String>,
    pub commits_12_months: u32,
    pub public_repos: u32,
    pub top_languages: Vec<String>,
    pub content_quality: f64,
    pub contribution_streak: u32,
    pub followers: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NetworkSummary {
    Unavailable {
        message: String,
    },
    Available {
        name: Option<String>,
        headline: Option<String>,
        location: Option<String>,
        experience_count: usize,
        education_count: usize,
        skills_count: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub name: Option<String>,
    pub email: Option<String>,
    pub total_experience_years: f64,
    pub positions_held: usize,
    pub skills_detected: usize,
    pub certifications: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSection {
    pub technical_match_score: f64,
    pub experience_relevance_score: f64,
    pub hiring_recommendation: String,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
}

/// The final candidate report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub total_score: f64,
    pub reasoning_summary: String,
    pub verified_skills: Vec<VerifiedSkill>,
    pub flags: Vec<Flag>,
    pub credibility_score: f64,
    pub detailed_breakdown: SubScores,
    pub interpretation: Interpretation,
    pub score_explanation: String,
    pub activity_summary: Option<ActivitySummary>,
    pub network_summary: Option<NetworkSummary>,
    pub resume_summary: Option<ResumeSummary>,
    pub semantic_assessment: Option<AssessmentSection>,
}
