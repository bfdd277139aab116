use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStatus {
    ScrapingFailed,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkFailure {
    pub status: FailureStatus,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkPosition {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkEducation {
    pub school: Option<String>,
    pub degree: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkDetails {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub about: Option<String>,
    pub experience: Vec<NetworkPosition>,
    pub education: Vec<NetworkEducation>,
    pub skills: Vec<String>,
}

/// Professional-network profile: either the collaborator's failure marker or
/// the scraped details. The failure shape is tried first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NetworkProfile {
    Unavailable(NetworkFailure),
    Available(NetworkDetails),
}

impl NetworkProfile {
    pub fn details(&self) -> Option<&NetworkDetails> {
        match self {
            NetworkProfile::Available(details) => Some(details),
            NetworkProfile::Unavailable(_) => None,
        }
    }
}

impl NetworkDetails {
    /// Lowercased job titles.
    pub fn titles(&self) -> Vec<String> {
        self.experience
            .iter()
            .filter_map(|p| p.title.as_deref())
            .map(str::to_lowercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_marker_deserializes_as_unavailable() {
        let json = r#"{"status": "scraping_failed", "message": "blocked"}"#;
        let profile: NetworkProfile = serde_json::from_str(json).unwrap();
        assert!(matches!(profile, NetworkProfile::Unavailable(_)));
        assert!(profile.details().is_none());
    }

    #[test]
    fn test_details_deserialize_with_partial_keys() {
        let json = r#"{
            "name": "Jane Doe",
            "experience": [{"title": "Staff Engineer", "company": "Acme"}, {"company": "NoTitle"}]
        }"#;
        let profile: NetworkProfile = serde_json::from_str(json).unwrap();
        let details = profile.details().unwrap();
        assert_eq!(details.name.as_deref(), Some("Jane Doe"));
        assert_eq!(details.titles(), vec!["staff engineer"]);
        assert!(details.skills.is_empty());
    }

    #[test]
    fn test_unknown_status_is_treated_as_details() {
        let json = r#"{"status": "ok", "headline": "Engineer"}"#;
        let profile: NetworkProfile = serde_json::from_str(json).unwrap();
        assert_eq!(
            profile.details().and_then(|d| d.headline.as_deref()),
            Some("Engineer")
        );
    }
}
