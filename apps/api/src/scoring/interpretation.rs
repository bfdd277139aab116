use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    BelowAverage,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    StrongYes,
    Yes,
    Maybe,
    ProbablyNo,
    No,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "EXCELLENT",
            Rating::Good => "GOOD",
            Rating::Fair => "FAIR",
            Rating::BelowAverage => "BELOW_AVERAGE",
            Rating::Poor => "POOR",
        }
    }
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::StrongYes => "STRONG_YES",
            Recommendation::Yes => "YES",
            Recommendation::Maybe => "MAYBE",
            Recommendation::ProbablyNo => "PROBABLY_NO",
            Recommendation::No => "NO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub rating: Rating,
    pub recommendation: Recommendation,
    pub description: String,
}

/// (minimum total, rating, recommendation, description), best bucket first.
const BUCKETS: &[(f64, Rating, Recommendation, &str)] = &[
    (
        8.5,
        Rating::Excellent,
        Recommendation::StrongYes,
        "Outstanding candidate with strong technical alignment",
    ),
    (
        7.0,
        Rating::Good,
        Recommendation::Yes,
        "Well-qualified candidate worth interviewing",
    ),
    (
        5.5,
        Rating::Fair,
        Recommendation::Maybe,
        "Candidate has potential but may lack some requirements",
    ),
    (
        4.0,
        Rating::BelowAverage,
        Recommendation::ProbablyNo,
        "Significant gaps in qualifications for this role",
    ),
];

const POOR_DESCRIPTION: &str = "Candidate does not meet minimum requirements";

pub fn interpret(total: f64) -> Interpretation {
    let (rating, recommendation, description) = BUCKETS
        .iter()
        .find(|(min, ..)| total >= *min)
        .map(|(_, r, rec, d)| (*r, *rec, *d))
        .unwrap_or((Rating::Poor, Recommendation::No, POOR_DESCRIPTION));

    Interpretation {
        rating,
        recommendation,
        description: description.to_string(),
    }
}
