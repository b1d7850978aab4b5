//! Cost breakdown value objects
//!
//! All figures are USD per month. Breakdowns are produced fresh per
//! calculation and never mutated afterwards. No currency rounding is
//! applied here; rounding is a display concern.

use serde::{Deserialize, Serialize};

use crate::domain::storage::{Provider, ReplicationType, StorageTier, StorageType};

/// Cost components for one tier of one database
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCostBreakdown {
    pub storage: f64,
    pub transactions: f64,
    pub retrieval: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_acceleration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<f64>,
    pub total: f64,
}

/// Full cost breakdown for one database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseCostBreakdown {
    pub database_id: String,
    pub hot: TierCostBreakdown,
    pub cold: TierCostBreakdown,
    pub archive: TierCostBreakdown,
    pub total: f64,
}

impl DatabaseCostBreakdown {
    pub fn tier(&self, tier: StorageTier) -> &TierCostBreakdown {
        match tier {
            StorageTier::Hot => &self.hot,
            StorageTier::Cold => &self.cold,
            StorageTier::Archive => &self.archive,
        }
    }
}

/// Monthly totals rolled up across a heterogeneous fleet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateCosts {
    pub total_monthly: f64,
    pub by_tier: TierTotals,
    pub by_database: Vec<DatabaseCostBreakdown>,
}

/// Per-tier totals across all databases
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TierTotals {
    pub hot: f64,
    pub cold: f64,
    pub archive: f64,
}

/// Storage-only cost for one database, one billing period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageOnlyBreakdown {
    pub hot: f64,
    pub cold: f64,
    pub archive: f64,
    pub total: f64,
    /// Data-lake hot/cold index surcharge; absent when zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<f64>,
}

/// Incremental (beyond-storage) cost, already scaled to the whole fleet
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementalCostBreakdown {
    pub transactions: f64,
    pub retrieval: f64,
    pub query_acceleration: f64,
    /// AWS alias of `transactions`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_deletion: Option<f64>,
    pub total: f64,
}

/// One enumerated provider/type/replication comparison entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageComparisonResult {
    pub provider: Provider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication: Option<ReplicationType>,
    pub breakdown: StorageOnlyBreakdown,
    /// `breakdown.total` multiplied by the database count
    pub total_for_all_databases: f64,
    /// Display label, e.g. "Azure Data Lake Storage (LRS)" or "AWS S3"
    pub label: String,
}
