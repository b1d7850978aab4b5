//! Usage inputs for one billing period
//!
//! All operation counters are raw counts; the cost functions apply the
//! billing granularity (per 10,000 / per 100 / per 1,000). Absent or
//! non-positive values contribute zero cost.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::pricing::RetrievalSpeed;
use crate::domain::storage::{StorageTier, TierAllocation};

/// Tiered-model usage counters for one tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TierTransactionInputs {
    pub read_operations: Option<f64>,
    pub write_operations: Option<f64>,
    pub iterative_read_operations: Option<f64>,
    pub iterative_write_operations: Option<f64>,
    pub other_operations: Option<f64>,
    /// Archive tier only
    pub archive_high_priority_read: Option<f64>,
    pub query_acceleration_scanned_gb: Option<f64>,
    pub query_acceleration_returned_gb: Option<f64>,
    pub data_retrieval_gb: Option<f64>,
    /// Archive tier only; takes precedence over `data_retrieval_gb`
    pub archive_high_priority_retrieval_gb: Option<f64>,
    /// How long the data has resided in the tier, for early-deletion
    /// proration. `None` disables the penalty entirely.
    pub storage_duration_days: Option<f64>,
}

/// Tier-keyed tiered-model usage for one billing period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionInputs {
    pub hot: TierTransactionInputs,
    pub cold: TierTransactionInputs,
    pub archive: TierTransactionInputs,
}

impl TransactionInputs {
    pub fn tier(&self, tier: StorageTier) -> &TierTransactionInputs {
        match tier {
            StorageTier::Hot => &self.hot,
            StorageTier::Cold => &self.cold,
            StorageTier::Archive => &self.archive,
        }
    }
}

/// S3-like usage counters for one tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwsTierTransactionInputs {
    pub put_copy_post_list_requests: Option<f64>,
    pub get_select_requests: Option<f64>,
    pub data_retrieval_gb: Option<f64>,
    /// Archive tier only
    pub data_retrieval_requests: Option<f64>,
    /// Archive tier only; defaults to standard when unset
    pub retrieval_type: Option<RetrievalSpeed>,
    pub storage_duration_days: Option<f64>,
}

/// Tier-keyed S3-like usage for one billing period
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwsTransactionInputs {
    pub hot: AwsTierTransactionInputs,
    pub cold: AwsTierTransactionInputs,
    pub archive: AwsTierTransactionInputs,
}

impl AwsTransactionInputs {
    pub fn tier(&self, tier: StorageTier) -> &AwsTierTransactionInputs {
        match tier {
            StorageTier::Hot => &self.hot,
            StorageTier::Cold => &self.cold,
            StorageTier::Archive => &self.archive,
        }
    }
}

/// One database's allocation and usage, for the heterogeneous-fleet path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseConfig {
    pub id: String,
    /// Per-tier capacity in GB
    pub tier_allocation: TierAllocation,
    #[serde(default)]
    pub transactions: TransactionInputs,
}

impl DatabaseConfig {
    pub fn new(tier_allocation: TierAllocation) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tier_allocation,
            transactions: TransactionInputs::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_transactions(mut self, transactions: TransactionInputs) -> Self {
        self.transactions = transactions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_default_to_empty() {
        let inputs = TransactionInputs::default();
        for tier in StorageTier::ALL {
            assert_eq!(*inputs.tier(tier), TierTransactionInputs::default());
        }
    }

    #[test]
    fn test_inputs_deserialize_with_missing_fields() {
        let inputs: TransactionInputs =
            serde_json::from_str(r#"{"hot":{"readOperations":50000}}"#).unwrap();
        assert_eq!(inputs.hot.read_operations, Some(50_000.0));
        assert_eq!(inputs.hot.write_operations, None);
        assert_eq!(inputs.cold, TierTransactionInputs::default());
    }

    #[test]
    fn test_aws_inputs_deserialize_retrieval_type() {
        let inputs: AwsTierTransactionInputs =
            serde_json::from_str(r#"{"dataRetrievalGb": 10.0, "retrievalType": "expedited"}"#)
                .unwrap();
        assert_eq!(inputs.data_retrieval_gb, Some(10.0));
        assert_eq!(inputs.retrieval_type, Some(RetrievalSpeed::Expedited));
        assert_eq!(inputs.storage_duration_days, None);
    }

    #[test]
    fn test_database_config_builder() {
        let db = DatabaseConfig::new(TierAllocation::new(600.0, 300.0, 100.0)).with_id("db-1");
        assert_eq!(db.id, "db-1");
        assert_eq!(db.tier_allocation.hot, 600.0);
        assert_eq!(db.transactions, TransactionInputs::default());
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let alloc = TierAllocation::default();
        let a = DatabaseConfig::new(alloc);
        let b = DatabaseConfig::new(alloc);
        assert_ne!(a.id, b.id);
    }
}
