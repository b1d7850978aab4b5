//! Incremental cost endpoint handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{
    AwsTransactionInputs, IncrementalCostBreakdown, ReplicationType, StorageType, TierAllocation,
    TransactionInputs,
};

fn default_database_count() -> u32 {
    1
}

/// Provider-tagged incremental cost request
#[derive(Debug, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum IncrementalCostsRequest {
    #[serde(rename_all = "camelCase")]
    Azure {
        tier_allocation: TierAllocation,
        #[serde(default)]
        transactions: TransactionInputs,
        storage_type: StorageType,
        replication: ReplicationType,
        #[serde(default = "default_database_count")]
        number_of_databases: u32,
    },
    #[serde(rename_all = "camelCase")]
    Aws {
        tier_allocation: TierAllocation,
        #[serde(default)]
        transactions: AwsTransactionInputs,
        #[serde(default = "default_database_count")]
        number_of_databases: u32,
    },
}

/// POST /v1/incremental-costs
///
/// Every figure in the response is already scaled to the whole fleet.
pub async fn calculate_incremental_costs(
    State(state): State<AppState>,
    Json(request): Json<IncrementalCostsRequest>,
) -> Result<Json<IncrementalCostBreakdown>, ApiError> {
    let breakdown = match request {
        IncrementalCostsRequest::Azure {
            tier_allocation,
            transactions,
            storage_type,
            replication,
            number_of_databases,
        } => {
            debug!(%storage_type, %replication, number_of_databases, "incremental costs (tiered)");
            state
                .engine
                .incremental_costs(
                    &tier_allocation,
                    &transactions,
                    storage_type,
                    replication,
                    number_of_databases,
                )
                .map_err(ApiError::from)?
        }
        IncrementalCostsRequest::Aws {
            tier_allocation,
            transactions,
            number_of_databases,
        } => {
            debug!(number_of_databases, "incremental costs (s3-like)");
            state
                .engine
                .aws_incremental_costs(&tier_allocation, &transactions, number_of_databases)
        }
    };

    Ok(Json(breakdown))
}
