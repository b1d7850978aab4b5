//! Tiered (Azure) pricing records and the canonical price tables
//!
//! Prices are USD per month. Operation prices are per 10,000 operations
//! except iterative writes, which are billed per 100. An unset optional
//! price means the operation is free for that tier, never an error.

use serde::{Deserialize, Serialize};

use crate::domain::storage::{ReplicationType, StorageTier, StorageType};

use super::slab::{slab, StoragePricingSlab};

/// Pricing parameters for one (storage type, replication, tier) cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPricing {
    /// Volume-tiered storage slabs, ordered ascending
    pub storage: Vec<StoragePricingSlab>,
    /// Per 10,000 operations
    pub write_operations: f64,
    /// Per 10,000 operations
    pub read_operations: f64,
    /// Per 10,000 operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterative_read_operations: Option<f64>,
    /// Per 100 operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterative_write_operations: Option<f64>,
    /// Per 10,000 operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_operations: Option<f64>,
    /// Per 10,000 operations, archive tier only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_high_priority_read: Option<f64>,
    /// Per GB retrieved; 0 means retrieval is free
    pub data_retrieval: f64,
    /// Per GB, archive tier only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_high_priority_retrieval: Option<f64>,
    /// Per GB scanned by query acceleration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_acceleration_scanned: Option<f64>,
    /// Per GB returned by query acceleration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_acceleration_returned: Option<f64>,
    /// Per GB per month, data-lake hierarchical namespace index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<f64>,
    /// Minimum committed residency before deletion is penalty-free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_storage_duration_days: Option<f64>,
    /// Per GB, prorated by the unserved fraction of the minimum duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_deletion_penalty: Option<f64>,
}

/// Per-tier pricing for one (storage type, replication) combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    #[serde(rename = "type")]
    pub storage_type: StorageType,
    pub replication: ReplicationType,
    pub hot: TierPricing,
    pub cold: TierPricing,
    pub archive: TierPricing,
}

impl StorageConfig {
    pub fn tier(&self, tier: StorageTier) -> &TierPricing {
        match tier {
            StorageTier::Hot => &self.hot,
            StorageTier::Cold => &self.cold,
            StorageTier::Archive => &self.archive,
        }
    }
}

pub(super) fn data_lake_lrs() -> StorageConfig {
    StorageConfig {
        storage_type: StorageType::DataLake,
        replication: ReplicationType::Lrs,
        hot: TierPricing {
            storage: vec![
                slab(0.0, Some(51_200.0), 0.021),
                slab(51_200.0, Some(512_000.0), 0.020),
                slab(512_000.0, None, 0.020),
            ],
            write_operations: 0.065,
            read_operations: 0.0052,
            iterative_read_operations: Some(0.065),
            iterative_write_operations: Some(0.065),
            other_operations: Some(0.0052),
            query_acceleration_scanned: Some(0.002),
            query_acceleration_returned: Some(0.0007),
            index: Some(0.0297),
            ..Default::default()
        },
        cold: TierPricing {
            storage: vec![slab(0.0, None, 0.0036)],
            write_operations: 0.234,
            read_operations: 0.13,
            iterative_write_operations: Some(0.065),
            data_retrieval: 0.03,
            query_acceleration_scanned: Some(0.002),
            query_acceleration_returned: Some(0.01),
            index: Some(0.0297),
            minimum_storage_duration_days: Some(90.0),
            early_deletion_penalty: Some(0.0036),
            ..Default::default()
        },
        archive: TierPricing {
            storage: vec![slab(0.0, None, 0.001)],
            write_operations: 0.13,
            read_operations: 6.50,
            archive_high_priority_read: Some(65.00),
            iterative_write_operations: Some(0.065),
            data_retrieval: 0.02,
            archive_high_priority_retrieval: Some(0.10),
            minimum_storage_duration_days: Some(180.0),
            early_deletion_penalty: Some(0.001),
            ..Default::default()
        },
    }
}

pub(super) fn data_lake_grs() -> StorageConfig {
    StorageConfig {
        storage_type: StorageType::DataLake,
        replication: ReplicationType::Grs,
        hot: TierPricing {
            storage: vec![
                slab(0.0, Some(51_200.0), 0.046),
                slab(51_200.0, Some(512_000.0), 0.044),
                slab(512_000.0, None, 0.043),
            ],
            write_operations: 0.13,
            read_operations: 0.0052,
            iterative_read_operations: Some(0.13),
            iterative_write_operations: Some(0.13),
            other_operations: Some(0.0052),
            query_acceleration_scanned: Some(0.002),
            query_acceleration_returned: Some(0.0007),
            index: Some(0.0655),
            ..Default::default()
        },
        cold: TierPricing {
            storage: vec![slab(0.0, None, 0.0081)],
            write_operations: 0.468,
            read_operations: 0.13,
            iterative_write_operations: Some(0.13),
            data_retrieval: 0.01,
            query_acceleration_scanned: Some(0.002),
            query_acceleration_returned: Some(0.01),
            index: Some(0.0655),
            minimum_storage_duration_days: Some(90.0),
            early_deletion_penalty: Some(0.0081),
            ..Default::default()
        },
        archive: TierPricing {
            storage: vec![slab(0.0, None, 0.003)],
            write_operations: 0.273,
            read_operations: 6.50,
            archive_high_priority_read: Some(65.00),
            iterative_write_operations: Some(0.13),
            data_retrieval: 0.02,
            archive_high_priority_retrieval: Some(0.10),
            minimum_storage_duration_days: Some(180.0),
            early_deletion_penalty: Some(0.003),
            ..Default::default()
        },
    }
}

pub(super) fn blob_lrs() -> StorageConfig {
    StorageConfig {
        storage_type: StorageType::Blob,
        replication: ReplicationType::Lrs,
        hot: TierPricing {
            storage: vec![
                slab(0.0, Some(51_200.0), 0.021),
                slab(51_200.0, Some(512_000.0), 0.02),
                slab(512_000.0, None, 0.0191),
            ],
            write_operations: 0.065,
            read_operations: 0.005,
            iterative_read_operations: Some(0.0052),
            iterative_write_operations: Some(0.065),
            other_operations: Some(0.005),
            ..Default::default()
        },
        cold: TierPricing {
            storage: vec![
                slab(0.0, Some(51_200.0), 0.0036),
                slab(51_200.0, Some(512_000.0), 0.0036),
                slab(512_000.0, None, 0.0036),
            ],
            write_operations: 0.234,
            read_operations: 0.13,
            iterative_read_operations: Some(0.0052),
            iterative_write_operations: Some(0.065),
            other_operations: Some(0.005),
            data_retrieval: 0.03,
            minimum_storage_duration_days: Some(90.0),
            early_deletion_penalty: Some(0.0036),
            ..Default::default()
        },
        archive: TierPricing {
            storage: vec![
                slab(0.0, Some(51_200.0), 0.00099),
                slab(51_200.0, Some(512_000.0), 0.00099),
                slab(512_000.0, None, 0.00099),
            ],
            write_operations: 0.13,
            read_operations: 6.50,
            archive_high_priority_read: Some(65.00),
            iterative_read_operations: Some(0.0052),
            iterative_write_operations: Some(0.065),
            other_operations: Some(0.005),
            data_retrieval: 0.02,
            archive_high_priority_retrieval: Some(0.10),
            minimum_storage_duration_days: Some(180.0),
            early_deletion_penalty: Some(0.00099),
            ..Default::default()
        },
    }
}

pub(super) fn blob_grs() -> StorageConfig {
    StorageConfig {
        storage_type: StorageType::Blob,
        replication: ReplicationType::Grs,
        hot: TierPricing {
            storage: vec![
                slab(0.0, Some(51_200.0), 0.046),
                slab(51_200.0, Some(512_000.0), 0.044),
                slab(512_000.0, None, 0.0421),
            ],
            write_operations: 0.13,
            read_operations: 0.005,
            iterative_read_operations: Some(0.0052),
            iterative_write_operations: Some(0.13),
            other_operations: Some(0.005),
            ..Default::default()
        },
        cold: TierPricing {
            storage: vec![
                slab(0.0, Some(51_200.0), 0.0081),
                slab(51_200.0, Some(512_000.0), 0.0081),
                slab(512_000.0, None, 0.0081),
            ],
            write_operations: 0.468,
            read_operations: 0.13,
            iterative_read_operations: Some(0.0052),
            iterative_write_operations: Some(0.13),
            other_operations: Some(0.005),
            data_retrieval: 0.03,
            minimum_storage_duration_days: Some(90.0),
            early_deletion_penalty: Some(0.0081),
            ..Default::default()
        },
        archive: TierPricing {
            storage: vec![
                slab(0.0, Some(51_200.0), 0.00299),
                slab(51_200.0, Some(512_000.0), 0.00299),
                slab(512_000.0, None, 0.00299),
            ],
            write_operations: 0.273,
            read_operations: 6.50,
            archive_high_priority_read: Some(65.00),
            iterative_read_operations: Some(0.0052),
            iterative_write_operations: Some(0.065),
            other_operations: Some(0.005),
            data_retrieval: 0.02,
            archive_high_priority_retrieval: Some(0.10),
            minimum_storage_duration_days: Some(180.0),
            early_deletion_penalty: Some(0.00299),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_slabs_well_formed(pricing: &TierPricing) {
        let slabs = &pricing.storage;
        assert!(!slabs.is_empty());
        assert_eq!(slabs[0].min_gb, 0.0);
        for pair in slabs.windows(2) {
            // Contiguous and ascending
            assert_eq!(pair[0].max_gb, Some(pair[1].min_gb));
        }
        assert!(slabs.last().unwrap().max_gb.is_none());
    }

    #[test]
    fn test_all_slab_lists_well_formed() {
        for config in [data_lake_lrs(), data_lake_grs(), blob_lrs(), blob_grs()] {
            for tier in StorageTier::ALL {
                assert_slabs_well_formed(config.tier(tier));
            }
        }
    }

    #[test]
    fn test_index_priced_only_for_data_lake() {
        for config in [blob_lrs(), blob_grs()] {
            for tier in StorageTier::ALL {
                assert!(config.tier(tier).index.is_none());
            }
        }
        for config in [data_lake_lrs(), data_lake_grs()] {
            assert!(config.hot.index.is_some());
            assert!(config.cold.index.is_some());
            assert!(config.archive.index.is_none());
        }
    }

    #[test]
    fn test_minimum_durations() {
        for config in [data_lake_lrs(), data_lake_grs(), blob_lrs(), blob_grs()] {
            assert_eq!(config.hot.minimum_storage_duration_days, None);
            assert_eq!(config.cold.minimum_storage_duration_days, Some(90.0));
            assert_eq!(config.archive.minimum_storage_duration_days, Some(180.0));
        }
    }

    #[test]
    fn test_early_deletion_penalty_tracks_storage_rate() {
        let config = data_lake_grs();
        assert_eq!(
            config.cold.early_deletion_penalty,
            Some(config.cold.storage[0].price_per_gb)
        );
        assert_eq!(
            config.archive.early_deletion_penalty,
            Some(config.archive.storage[0].price_per_gb)
        );
    }

    #[test]
    fn test_archive_has_no_query_acceleration_pricing() {
        for config in [data_lake_lrs(), data_lake_grs(), blob_lrs(), blob_grs()] {
            assert!(config.archive.query_acceleration_scanned.is_none());
            assert!(config.archive.query_acceleration_returned.is_none());
        }
    }
}
