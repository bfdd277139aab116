use serde::{Deserialize, Serialize};

/// Contact details scraped from anywhere in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub location: Option<String>,
}

/// Which entry of the date-rule table produced an experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateRule {
    /// "Jan 2020 – Mar 2022", "January 2020 - present"
    MonthYear,
    /// "01/2020 – 03/2022"
    NumericMonthYear,
    /// "2020 – 2022"
    YearOnly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    /// May be the literal "present", "current" or "now".
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub raw_text: String,
    pub dates: DateRange,
    pub date_rule: DateRule,
    pub duration_months: u32,
    /// True when either date could not be parsed and "now" was substituted.
    pub used_fallback: bool,
    pub title: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionKind {
    Degree,
    Field,
}

/// A loose degree/field mention. Duplicates are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationMention {
    pub kind: MentionKind,
    pub degree_mention: String,
    pub section_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillKeyword {
    pub keyword: String,
    pub count: u32, // always ≥ 1
}

/// Structured facts pulled from one résumé. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactsRecord {
    pub raw_text_length: usize,
    pub contact: ContactInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationMention>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub summary: Option<String>,
    pub total_years_experience: f64,
    /// Sorted by count, descending.
    pub skill_keywords: Vec<SkillKeyword>,
}

impl FactsRecord {
    /// Lowercased résumé job titles, for cross-source comparison.
    pub fn titles(&self) -> Vec<String> {
        self.experience
            .iter()
            .filter_map(|e| e.title.as_deref())
            .map(str::to_lowercase)
            .collect()
    }
}

#[cfg(test)]
impl ExperienceEntry {
    /// Minimal entry for tests in other modules.
    pub fn fixture(raw_text: &str, duration_months: u32, title: Option<&str>) -> Self {
        ExperienceEntry {
            raw_text: raw_text.to_string(),
            dates: DateRange {
                start: "2020".to_string(),
                end: "present".to_string(),
            },
            date_rule: DateRule::YearOnly,
            duration_months,
            used_fallback: false,
            title: title.map(str::to_string),
            company: None,
        }
    }
}

#[cfg(test)]
impl SkillKeyword {
    pub fn fixture(keyword: &str, count: u32) -> Self {
        SkillKeyword {
            keyword: keyword.to_string(),
            count,
        }
    }
}
