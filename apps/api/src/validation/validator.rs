//! Runs every plausibility check in a fixed order and concatenates their flags.

use chrono::{Datelike, Utc};
use tracing::{debug, info};

use crate::profiles::{ActivityProfile, NetworkProfile};
use crate::resume::FactsRecord;
use crate::validation::claims::{check_technology_age, check_timeline};
use crate::validation::cross_source::{
    check_activity_level, check_skills_vs_activity, check_title_overlap,
};
use crate::validation::models::{Flag, Severity};

/// Validates against the current UTC year.
pub fn validate(
    facts: &FactsRecord,
    activity: Option<&ActivityProfile>,
    network: Option<&NetworkProfile>,
) -> Vec<Flag> {
    validate_at(facts, activity, network, Utc::now().year())
}

/// Order: technology age, timeline, then (with an activity profile) skills and
/// activity level, then (with a network profile) title overlap.
pub fn validate_at(
    facts: &FactsRecord,
    activity: Option<&ActivityProfile>,
    network: Option<&NetworkProfile>,
    current_year: i32,
) -> Vec<Flag> {
    let mut flags = check_technology_age(facts, current_year);
    flags.extend(check_timeline(facts));

    match activity {
        Some(activity) => {
            flags.extend(check_skills_vs_activity(facts, activity));
            flags.extend(check_activity_level(facts, activity));
        }
        None => debug!("No activity profile; skipping activity checks"),
    }

    if let Some(network) = network {
        flags.extend(check_title_overlap(facts, network));
    }

    let high = flags.iter().filter(|f| f.severity == Severity::High).count();
    info!("Validation produced {} flags ({} high)", flags.len(), high);

    flags
}
