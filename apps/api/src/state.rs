use crate::analysis::pipeline::Engine;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds configuration only; every analysis run builds its own records.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Name and version stamped into report metadata.
    pub engine: Engine,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let engine = Engine {
            name: config.engine_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };
        Self { config, engine }
    }
}
