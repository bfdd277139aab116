// Sequential pipeline run and its HTTP handlers.

pub mod handlers;
pub mod pipeline;

pub use pipeline::{run_analysis, run_analysis_at, AnalysisInput, Engine};
