//! Process-wide immutable pricing catalog
//!
//! The catalog is built once and never mutated. Lookups for a
//! combination the catalog does not carry are a caller programming
//! error (enumeration drift) and fail loudly rather than defaulting.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::domain::error::DomainError;
use crate::domain::storage::{ReplicationType, StorageType};

use super::aws::{s3_pricing, S3PricingConfig};
use super::azure::{blob_grs, blob_lrs, data_lake_grs, data_lake_lrs, StorageConfig};

static STANDARD: Lazy<Arc<PricingCatalog>> = Lazy::new(|| Arc::new(PricingCatalog::build()));

/// Immutable pricing tables for both provider models
#[derive(Debug)]
pub struct PricingCatalog {
    azure: HashMap<(StorageType, ReplicationType), StorageConfig>,
    aws: S3PricingConfig,
}

impl PricingCatalog {
    fn build() -> Self {
        let mut azure = HashMap::new();
        for config in [data_lake_lrs(), data_lake_grs(), blob_lrs(), blob_grs()] {
            azure.insert((config.storage_type, config.replication), config);
        }

        Self {
            azure,
            aws: s3_pricing(),
        }
    }

    /// Shared handle to the canonical catalog, built on first use
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Pricing for one tiered-model combination.
    ///
    /// Errors with `DomainError::Configuration` if the catalog carries
    /// no entry for the pair.
    pub fn azure_config(
        &self,
        storage_type: StorageType,
        replication: ReplicationType,
    ) -> Result<&StorageConfig, DomainError> {
        self.azure.get(&(storage_type, replication)).ok_or_else(|| {
            DomainError::configuration(format!(
                "no pricing configured for {}-{}",
                storage_type, replication
            ))
        })
    }

    /// The single fixed S3-like pricing configuration
    pub fn aws_config(&self) -> &S3PricingConfig {
        &self.aws
    }

    /// All tiered-model combinations the catalog carries
    pub fn azure_combinations(&self) -> usize {
        self.azure.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_carries_all_four_combinations() {
        let catalog = PricingCatalog::standard();
        assert_eq!(catalog.azure_combinations(), 4);

        for storage_type in [StorageType::DataLake, StorageType::Blob] {
            for replication in [ReplicationType::Lrs, ReplicationType::Grs] {
                let config = catalog.azure_config(storage_type, replication).unwrap();
                assert_eq!(config.storage_type, storage_type);
                assert_eq!(config.replication, replication);
            }
        }
    }

    #[test]
    fn test_missing_combination_fails_loudly() {
        // A catalog missing an entry must error, not silently default.
        let mut catalog = PricingCatalog::build();
        catalog
            .azure
            .remove(&(StorageType::Blob, ReplicationType::Grs));

        let err = catalog
            .azure_config(StorageType::Blob, ReplicationType::Grs)
            .unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
        assert!(err.to_string().contains("blob-GRS"));
    }

    #[test]
    fn test_aws_config_always_available() {
        let catalog = PricingCatalog::standard();
        assert!(!catalog.aws_config().hot.storage.is_empty());
    }

    #[test]
    fn test_standard_is_shared() {
        let a = PricingCatalog::standard();
        let b = PricingCatalog::standard();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
