//! Heterogeneous-fleet cost endpoint handlers

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::{AggregateCosts, DatabaseConfig, ReplicationType, StorageType};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseCostsRequest {
    pub databases: Vec<DatabaseConfig>,
    pub storage_type: StorageType,
    pub replication: ReplicationType,
}

/// POST /v1/database-costs
pub async fn calculate_database_costs(
    State(state): State<AppState>,
    Json(request): Json<DatabaseCostsRequest>,
) -> Result<Json<AggregateCosts>, ApiError> {
    debug!(
        databases = request.databases.len(),
        storage_type = %request.storage_type,
        replication = %request.replication,
        "aggregating database costs"
    );

    let aggregate = state
        .engine
        .aggregate_costs(&request.databases, request.storage_type, request.replication)
        .map_err(ApiError::from)?;

    Ok(Json(aggregate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TierAllocation;

    #[tokio::test]
    async fn test_aggregate_endpoint() {
        let request = DatabaseCostsRequest {
            databases: vec![
                DatabaseConfig::new(TierAllocation::new(100.0, 50.0, 0.0)),
                DatabaseConfig::new(TierAllocation::new(200.0, 0.0, 25.0)),
            ],
            storage_type: StorageType::Blob,
            replication: ReplicationType::Lrs,
        };

        let Json(aggregate) = calculate_database_costs(State(AppState::default()), Json(request))
            .await
            .unwrap();
        assert_eq!(aggregate.by_database.len(), 2);
        assert!(aggregate.total_monthly > 0.0);
    }

    #[test]
    fn test_request_deserialization() {
        let request: DatabaseCostsRequest = serde_json::from_str(
            r#"{
                "databases": [
                    {"id": "db-1", "tierAllocation": {"hot": 10.0, "cold": 0.0, "archive": 0.0}}
                ],
                "storageType": "data-lake",
                "replication": "GRS"
            }"#,
        )
        .unwrap();
        assert_eq!(request.databases[0].id, "db-1");
        assert_eq!(request.storage_type, StorageType::DataLake);
    }
}
