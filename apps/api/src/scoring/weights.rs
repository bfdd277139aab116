use serde::{Deserialize, Serialize};

/// Category weights of the composite score. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub technical_match: f64,
    pub experience_depth: f64,
    pub activity_score: f64,
    pub credibility: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            technical_match: 0.40,
            experience_depth: 0.25,
            activity_score: 0.20,
            credibility: 0.15,
        }
    }
}

/// Thresholds for the activity sub-score, highest tier first.
pub struct ActivityBenchmarks {
    /// (min commits in the last 12 months, points)
    pub commits: &'static [(u32, f64)],
    pub commits_floor: f64,
    /// (min public repositories, points)
    pub repos: &'static [(u32, f64)],
    pub repos_floor: f64,
    pub quality_divisor: f64,
    pub quality_cap: f64,
    pub streak_days_per_point: f64,
    pub streak_cap: f64,
}

pub const ACTIVITY_BENCHMARKS: ActivityBenchmarks = ActivityBenchmarks {
    commits: &[(500, 4.0), (200, 3.0), (50, 2.0)],
    commits_floor: 1.0,
    repos: &[(30, 3.0), (15, 2.0), (5, 1.5)],
    repos_floor: 1.0,
    quality_divisor: 5.0,
    quality_cap: 2.0,
    streak_days_per_point: 30.0,
    streak_cap: 1.0,
};

/// First tier whose threshold `value` reaches, else `floor`.
pub fn tier<T: PartialOrd + Copy>(value: T, tiers: &[(T, f64)], floor: f64) -> f64 {
    tiers
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(floor)
}
