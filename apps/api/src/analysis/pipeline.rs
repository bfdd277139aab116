//! The strict sequential chain: extract → validate → score → assemble.
//!
//! Each run builds its own records and shares nothing with other runs.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::profiles::assessment::parse_model_response;
use crate::profiles::{ActivityProfile, NetworkProfile, SemanticAssessment};
use crate::report::{assemble_report, Report, ReportMeta, ReportSources};
use crate::resume::extract_facts_at;
use crate::scoring::score;
use crate::validation::validate_at;

/// Semantic assessment as delivered by the collaborator: already structured,
/// or the raw model text that still needs normalizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssessmentInput {
    Structured(SemanticAssessment),
    Raw(String),
}

impl AssessmentInput {
    pub fn into_assessment(self) -> SemanticAssessment {
        match self {
            AssessmentInput::Structured(assessment) => assessment,
            AssessmentInput::Raw(text) => parse_model_response(&text),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub candidate_id: Option<String>,
    pub resume_text: String,
    #[serde(default)]
    pub activity_profile: Option<ActivityProfile>,
    #[serde(default)]
    pub network_profile: Option<NetworkProfile>,
    #[serde(default)]
    pub semantic_assessment: Option<AssessmentInput>,
}

/// Caller-side identity of the producing service, stamped into report metadata.
#[derive(Debug, Clone)]
pub struct Engine {
    pub name: String,
    pub version: String,
}

/// Runs the pipeline against the current clock.
pub fn run_analysis(input: AnalysisInput, engine: &Engine) -> Report {
    let meta = ReportMeta {
        analysis_id: Uuid::new_v4(),
        candidate_id: input.candidate_id.clone().unwrap_or_else(|| "anonymous".to_string()),
        generated_at: Utc::now(),
        version: engine.version.clone(),
        engine: engine.name.clone(),
    };
    run_analysis_at(input, meta, Utc::now().date_naive())
}

/// Runs the pipeline with explicit metadata and reference date.
pub fn run_analysis_at(input: AnalysisInput, meta: ReportMeta, today: NaiveDate) -> Report {
    let AnalysisInput {
        resume_text,
        activity_profile,
        network_profile,
        semantic_assessment,
        ..
    } = input;
    let assessment = semantic_assessment.map(AssessmentInput::into_assessment);

    let facts = extract_facts_at(&resume_text, today);
    let flags = validate_at(
        &facts,
        activity_profile.as_ref(),
        network_profile.as_ref(),
        today.year(),
    );
    let breakdown = score(
        activity_profile.as_ref(),
        Some(&facts),
        assessment.as_ref(),
        Some(&flags),
    );

    info!(
        "Analysis {} for candidate {}: {}/10, {} flags",
        meta.analysis_id,
        meta.candidate_id,
        breakdown.total_score,
        flags.len()
    );

    let sources = ReportSources {
        facts: Some(&facts),
        activity: activity_profile.as_ref(),
        network: network_profile.as_ref(),
        assessment: assessment.as_ref(),
    };
    assemble_report(meta, &breakdown, &flags, sources)
}
