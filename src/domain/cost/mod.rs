//! Cost functions and orchestration

mod breakdown;
mod early_deletion;
mod engine;
mod inputs;
mod operations;
mod storage;

pub use breakdown::{
    AggregateCosts, DatabaseCostBreakdown, IncrementalCostBreakdown, StorageComparisonResult,
    StorageOnlyBreakdown, TierCostBreakdown, TierTotals,
};
pub use early_deletion::early_deletion_penalty;
pub use engine::{CostEngine, AZURE_COMPARISON_ORDER};
pub use inputs::{
    AwsTierTransactionInputs, AwsTransactionInputs, DatabaseConfig, TierTransactionInputs,
    TransactionInputs,
};
pub use operations::{index_cost, query_acceleration_cost, retrieval_cost, transaction_cost};
pub use storage::storage_cost;
