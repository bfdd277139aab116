//! Candidate vetting: résumé fact extraction, cross-source validation,
//! composite scoring and report assembly, plus the HTTP service around them.
//!
//! The four pipeline entry points are total functions over typed, optional inputs:
//! [`resume::extract_facts`], [`validation::validate`], [`scoring::score`] and
//! [`report::assemble_report`].

pub mod analysis;
pub mod config;
pub mod errors;
pub mod profiles;
pub mod report;
pub mod resume;
pub mod routes;
pub mod scoring;
pub mod state;
pub mod validation;
