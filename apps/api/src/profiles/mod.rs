// Typed boundary adapters for the external collaborators.
// Every default for a missing key lives here, not in the pipeline.

pub mod activity;
pub mod assessment;
pub mod network;

pub use activity::ActivityProfile;
pub use assessment::SemanticAssessment;
pub use network::NetworkProfile;
