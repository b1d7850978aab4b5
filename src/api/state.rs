//! Application state for shared services

use crate::domain::CostEngine;
use crate::infrastructure::batch::BatchService;

/// Shared state: the engine and the services built over it. Everything
/// here is immutable and cheap to clone (the catalog sits behind an
/// `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub engine: CostEngine,
    pub batch_service: BatchService,
}

impl AppState {
    pub fn new(engine: CostEngine) -> Self {
        Self {
            batch_service: BatchService::new(engine.clone()),
            engine,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CostEngine::standard())
    }
}
