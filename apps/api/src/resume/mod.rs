// Fact Extractor: raw résumé text → FactsRecord.
// Pure and synchronous; all tables are compiled once and never mutated.

pub mod contact;
pub mod experience;
pub mod keywords;
pub mod models;
pub mod parser;
pub mod sections;
pub mod text;

pub use models::FactsRecord;
pub use parser::{extract_facts, extract_facts_at};
