//! Domain layer - pricing catalog and cost calculation engine

pub mod cost;
pub mod error;
pub mod pricing;
pub mod storage;

pub use cost::{
    AggregateCosts, AwsTierTransactionInputs, AwsTransactionInputs, CostEngine,
    DatabaseConfig, DatabaseCostBreakdown, IncrementalCostBreakdown, StorageComparisonResult,
    StorageOnlyBreakdown, TierCostBreakdown, TierTransactionInputs, TransactionInputs,
};
pub use error::DomainError;
pub use pricing::{
    PricingCatalog, RetrievalRates, RetrievalSpeed, S3PricingConfig, S3TierPricing,
    StorageConfig, StoragePricingSlab, TierPricing,
};
pub use storage::{Provider, ReplicationType, StorageTier, StorageType, TierAllocation};
