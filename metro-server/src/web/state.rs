//! Application state for the web layer.

use std::sync::Arc;

use crate::network::MetroGraph;

/// Shared application state.
///
/// The graph is never modified after startup, so handlers share it freely.
#[derive(Clone)]
pub struct AppState {
    /// The metro network
    pub graph: Arc<MetroGraph>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: MetroGraph) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }
}
