use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagType {
    /// Claimed years with a technology exceed its age.
    ExperienceMismatch,
    ExcessiveExperience,
    /// Major language on the résumé absent from reported activity.
    SkillNotVerified,
    LowActivity,
    /// No overlap between résumé and network-profile job titles.
    TitleMismatch,
}

/// A detected inconsistency. `evidence` holds the concrete values that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    #[serde(rename = "type")]
    pub flag_type: FlagType,
    pub severity: Severity,
    pub description: String,
    pub evidence: Value,
}
