//! Read-only pricing catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{ReplicationType, S3PricingConfig, StorageConfig, StorageType};

/// GET /v1/pricing/{storage_type}/{replication}
pub async fn get_azure_pricing(
    State(state): State<AppState>,
    Path((storage_type, replication)): Path<(String, String)>,
) -> Result<Json<StorageConfig>, ApiError> {
    debug!(%storage_type, %replication, "pricing lookup");

    let storage_type: StorageType = storage_type
        .parse()
        .map_err(|e: String| ApiError::bad_request(e).with_param("storage_type"))?;
    let replication: ReplicationType = replication
        .parse()
        .map_err(|e: String| ApiError::bad_request(e).with_param("replication"))?;

    let config = state
        .engine
        .catalog()
        .azure_config(storage_type, replication)
        .map_err(ApiError::from)?;

    Ok(Json(config.clone()))
}

/// GET /v1/pricing/aws
pub async fn get_aws_pricing(State(state): State<AppState>) -> Json<S3PricingConfig> {
    Json(state.engine.catalog().aws_config().clone())
}
