// Composite Scorer: optional inputs → four sub-scores, a weighted total and
// its interpretation. Missing inputs fall back to neutral sub-scores.

pub mod composite;
pub mod interpretation;
pub mod weights;

pub use composite::{explain_score, score, ScoreBreakdown, SubScores};
pub use interpretation::{Interpretation, Rating, Recommendation};
pub use weights::ScoringWeights;
