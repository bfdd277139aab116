//! Semantic assessment: the language-model collaborator's judgment of résumé vs JD.
//!
//! The pipeline only ever sees a well-typed `SemanticAssessment`. Raw model text is
//! normalized here, at the boundary, by `parse_model_response`.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::resume::text::take_chars;

pub const NEUTRAL_SUB_SCORE: f64 = 5.0;
const FALLBACK_SUMMARY_CHARS: usize = 500;
const DEFAULT_SUMMARY: &str = "Analysis completed";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticAssessment {
    /// 1 – 10
    pub technical_match_score: f64,
    /// 1 – 10
    pub experience_relevance_score: f64,
    pub key_matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub strengths: Vec<String>,
    pub concerns: Vec<String>,
    /// STRONG_YES | YES | MAYBE | NO | STRONG_NO
    pub hiring_recommendation: String,
    pub summary: String,
}

impl Default for SemanticAssessment {
    fn default() -> Self {
        Self {
            technical_match_score: NEUTRAL_SUB_SCORE,
            experience_relevance_score: NEUTRAL_SUB_SCORE,
            key_matching_skills: Vec::new(),
            missing_skills: Vec::new(),
            strengths: Vec::new(),
            concerns: Vec::new(),
            hiring_recommendation: "MAYBE".to_string(),
            summary: DEFAULT_SUMMARY.to_string(),
        }
    }
}

/// Normalizes raw model output into an assessment.
///
/// Accepts JSON optionally wrapped in markdown fences or surrounded by prose.
/// Anything unparseable yields neutral scores with the raw text (truncated) as
/// the summary.
pub fn parse_model_response(text: &str) -> SemanticAssessment {
    let body = strip_json_fences(text);

    let parsed = extract_json_object(body)
        .ok_or_else(|| "no JSON object found".to_string())
        .and_then(|json| {
            serde_json::from_str::<SemanticAssessment>(json).map_err(|e| e.to_string())
        });

    match parsed {
        Ok(assessment) => assessment,
        Err(reason) => {
            warn!("Semantic assessment could not be parsed ({reason}); using neutral fallback");
            let summary = if text.trim().is_empty() {
                "Analysis could not be completed".to_string()
            } else {
                take_chars(text, FALLBACK_SUMMARY_CHARS).to_string()
            };
            SemanticAssessment {
                summary,
                ..SemanticAssessment::default()
            }
        }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(stripped) => stripped
            .trim_start()
            .strip_suffix("```")
            .map(str::trim)
            .unwrap_or(stripped.trim_start()),
        None => text,
    }
}

/// Widest `{ ... }` span: first opening brace to last closing brace.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
