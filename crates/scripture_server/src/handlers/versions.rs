//! GET /versions - installed module identifiers.

use std::sync::Arc;

use axum::{Extension, Json};
use scripture_core::{types::Version, ScriptureService};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct VersionsResponse {
    pub versions: Vec<Version>,
}

pub async fn list_versions(
    Extension(service): Extension<Arc<dyn ScriptureService>>,
) -> Result<Json<VersionsResponse>, AppError> {
    let versions = service.versions()?;
    Ok(Json(VersionsResponse { versions }))
}
