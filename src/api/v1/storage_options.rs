//! Storage comparison endpoint handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{StorageComparisonResult, TierAllocation};

fn default_database_count() -> u32 {
    1
}

fn default_include_aws() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageOptionsRequest {
    /// Informational; the allocation is authoritative
    #[serde(default)]
    pub total_size_gb: Option<f64>,
    pub tier_allocation: TierAllocation,
    #[serde(default = "default_database_count")]
    pub number_of_databases: u32,
    #[serde(default = "default_include_aws")]
    pub include_aws: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageOptionsResponse {
    pub options: Vec<StorageComparisonResult>,
}

/// POST /v1/storage-options
pub async fn compare_storage_options(
    State(state): State<AppState>,
    Json(request): Json<StorageOptionsRequest>,
) -> Result<Json<StorageOptionsResponse>, ApiError> {
    debug!(
        databases = request.number_of_databases,
        include_aws = request.include_aws,
        "comparing storage options"
    );

    let total_size_gb = request
        .total_size_gb
        .unwrap_or_else(|| request.tier_allocation.total());

    let options = state
        .engine
        .all_storage_options(
            total_size_gb,
            &request.tier_allocation,
            request.number_of_databases,
            request.include_aws,
        )
        .map_err(ApiError::from)?;

    Ok(Json(StorageOptionsResponse { options }))
}
