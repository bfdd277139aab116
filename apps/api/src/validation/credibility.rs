use crate::resume::parser::round1;
use crate::validation::models::{Flag, Severity};

pub const MAX_CREDIBILITY: f64 = 10.0;

fn deduction(severity: Severity) -> f64 {
    match severity {
        Severity::High => 3.0,
        Severity::Medium => 1.5,
        Severity::Low => 0.5,
    }
}

/// 10 minus a per-severity deduction for each flag, clamped to [0, 10].
pub fn credibility_score(flags: &[Flag]) -> f64 {
    let deductions: f64 = flags.iter().map(|f| deduction(f.severity)).sum();
    round1((MAX_CREDIBILITY - deductions).clamp(0.0, MAX_CREDIBILITY))
}
