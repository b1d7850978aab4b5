//! v1 API endpoints

pub mod databases;
pub mod incremental;
pub mod pricing;
pub mod storage_options;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/storage-options",
            post(storage_options::compare_storage_options),
        )
        .route(
            "/incremental-costs",
            post(incremental::calculate_incremental_costs),
        )
        .route("/database-costs", post(databases::calculate_database_costs))
        .route("/pricing/aws", get(pricing::get_aws_pricing))
        .route(
            "/pricing/{storage_type}/{replication}",
            get(pricing::get_azure_pricing),
        )
}
