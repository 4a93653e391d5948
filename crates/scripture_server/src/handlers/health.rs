//! GET /health - liveness plus the installed module list.

use std::sync::Arc;

use axum::{Extension, Json};
use scripture_core::{types::HealthStatus, ScriptureService};

pub async fn health(
    Extension(service): Extension<Arc<dyn ScriptureService>>,
) -> Json<HealthStatus> {
    Json(service.health())
}
