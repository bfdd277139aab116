use serde::{Deserialize, Serialize};

/// Neutral content-quality score assumed when the collaborator reports none.
pub const NEUTRAL_CONTENT_QUALITY: f64 = 5.0;

/// A language reported by the code-hosting collaborator, either as a bare name
/// or as `{ "name": .., "percentage": .. }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageEntry {
    Ranked {
        name: String,
        #[serde(default)]
        percentage: Option<f64>,
    },
    Bare(String),
}

impl LanguageEntry {
    pub fn name(&self) -> &str {
        match self {
            LanguageEntry::Ranked { name, .. } => name,
            LanguageEntry::Bare(name) => name,
        }
    }
}

/// Summary of code-hosting contribution activity. Missing keys take the
/// values from `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityProfile {
    pub username: Option<String>,
    #[serde(alias = "recent_contributions")]
    pub commits_12_months: u32,
    pub public_repos: u32,
    pub top_languages: Vec<LanguageEntry>,
    /// 0 – 10
    #[serde(alias = "readme_complexity_score")]
    pub content_quality_score: f64,
    /// Days.
    pub contribution_streak: u32,
    pub followers: u32,
}

impl Default for ActivityProfile {
    fn default() -> Self {
        Self {
            username: None,
            commits_12_months: 0,
            public_repos: 0,
            top_languages: Vec::new(),
            content_quality_score: NEUTRAL_CONTENT_QUALITY,
            contribution_streak: 0,
            followers: 0,
        }
    }
}

impl ActivityProfile {
    /// Lowercased language names in ranked order.
    pub fn language_names(&self) -> Vec<String> {
        self.top_languages
            .iter()
            .map(|l| l.name().to_lowercase())
            .collect()
    }
}
