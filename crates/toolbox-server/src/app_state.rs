use std::sync::Arc;

use toolbox_mcp::ToolRegistry;

/// Shared application state. The registry is fixed once the server starts.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
}

impl AppState {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
