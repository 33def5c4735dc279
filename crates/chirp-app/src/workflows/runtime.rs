//! Runtime access helpers for workflows.

use std::sync::Arc;

use async_lock::RwLock;
use chirp_core::ChirpError;

use crate::runtime_bridge::BoxedRuntimeBridge;
use crate::AppCore;

/// Get the runtime bridge or return a consistent error.
pub async fn require_runtime(
    app_core: &Arc<RwLock<AppCore>>,
) -> Result<BoxedRuntimeBridge, ChirpError> {
    let core = app_core.read().await;
    core.runtime()
        .cloned()
        .ok_or_else(|| ChirpError::internal("Runtime bridge not available"))
}
