// Cross-Source Validator: facts + external profiles → ordered credibility flags.
// Checks run in a fixed order and never suppress one another.

pub mod claims;
pub mod credibility;
pub mod cross_source;
pub mod models;
pub mod validator;

pub use credibility::credibility_score;
pub use models::{Flag, FlagType, Severity};
pub use validator::{validate, validate_at};
