//! Cost engine - assembles per-tier costs into breakdowns and
//! comparison results
//!
//! Every method is a stateless pure transform over the immutable
//! catalog and the caller-supplied inputs; each call produces fresh
//! output objects. All returned figures are monthly. Incremental
//! breakdowns are scaled to the whole fleet before being returned;
//! callers must not multiply again at display time.

use std::sync::Arc;

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::pricing::{PricingCatalog, RetrievalSpeed};
use crate::domain::storage::{
    Provider, ReplicationType, StorageTier, StorageType, TierAllocation,
};

use super::breakdown::{
    AggregateCosts, DatabaseCostBreakdown, IncrementalCostBreakdown, StorageComparisonResult,
    StorageOnlyBreakdown, TierCostBreakdown, TierTotals,
};
use super::early_deletion::early_deletion_penalty;
use super::inputs::{AwsTransactionInputs, DatabaseConfig, TransactionInputs};
use super::operations::{index_cost, query_acceleration_cost, retrieval_cost, transaction_cost};
use super::storage::storage_cost;

/// Requests per billing unit for the S3-like model
const REQUESTS_PER_UNIT: f64 = 1_000.0;

/// Tiered-model combinations enumerated by the comparison view, in
/// their observable order. AWS is appended after these.
pub const AZURE_COMPARISON_ORDER: [(StorageType, ReplicationType); 4] = [
    (StorageType::DataLake, ReplicationType::Lrs),
    (StorageType::DataLake, ReplicationType::Grs),
    (StorageType::Blob, ReplicationType::Lrs),
    (StorageType::Blob, ReplicationType::Grs),
];

/// Cost calculation engine over a shared immutable pricing catalog
#[derive(Debug, Clone)]
pub struct CostEngine {
    catalog: Arc<PricingCatalog>,
}

impl CostEngine {
    pub fn new(catalog: Arc<PricingCatalog>) -> Self {
        Self { catalog }
    }

    /// Engine over the canonical compiled-in catalog
    pub fn standard() -> Self {
        Self::new(PricingCatalog::standard())
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    /// Full monthly cost breakdown for one database
    pub fn database_costs(
        &self,
        database: &DatabaseConfig,
        storage_type: StorageType,
        replication: ReplicationType,
    ) -> Result<DatabaseCostBreakdown, DomainError> {
        let config = self.catalog.azure_config(storage_type, replication)?;

        let mut tiers = [TierCostBreakdown::default(); 3];

        for (slot, tier) in tiers.iter_mut().zip(StorageTier::ALL) {
            let size_gb = database.tier_allocation.get(tier);
            let pricing = config.tier(tier);
            let inputs = database.transactions.tier(tier);

            slot.storage = storage_cost(size_gb, &pricing.storage);
            slot.transactions = transaction_cost(tier, inputs, pricing);
            slot.retrieval = retrieval_cost(tier, inputs, pricing);

            if tier != StorageTier::Archive {
                slot.query_acceleration = Some(query_acceleration_cost(tier, inputs, pricing));
                if storage_type == StorageType::DataLake && pricing.index.is_some() {
                    slot.index = Some(index_cost(size_gb, pricing));
                }
            }

            slot.total = slot.storage
                + slot.transactions
                + slot.retrieval
                + slot.query_acceleration.unwrap_or(0.0)
                + slot.index.unwrap_or(0.0);
        }

        let [hot, cold, archive] = tiers;
        Ok(DatabaseCostBreakdown {
            database_id: database.id.clone(),
            total: hot.total + cold.total + archive.total,
            hot,
            cold,
            archive,
        })
    }

    /// Roll-up across a heterogeneous fleet
    pub fn aggregate_costs(
        &self,
        databases: &[DatabaseConfig],
        storage_type: StorageType,
        replication: ReplicationType,
    ) -> Result<AggregateCosts, DomainError> {
        let by_database = databases
            .iter()
            .map(|db| self.database_costs(db, storage_type, replication))
            .collect::<Result<Vec<_>, _>>()?;

        let total_monthly = by_database.iter().map(|db| db.total).sum();
        let by_tier = TierTotals {
            hot: by_database.iter().map(|db| db.hot.total).sum(),
            cold: by_database.iter().map(|db| db.cold.total).sum(),
            archive: by_database.iter().map(|db| db.archive.total).sum(),
        };

        Ok(AggregateCosts {
            total_monthly,
            by_tier,
            by_database,
        })
    }

    /// Storage-only monthly cost for one database, tiered model
    pub fn storage_only_costs(
        &self,
        total_size_gb: f64,
        tier_allocation: &TierAllocation,
        storage_type: StorageType,
        replication: ReplicationType,
    ) -> Result<StorageOnlyBreakdown, DomainError> {
        debug!(
            total_size_gb,
            %storage_type,
            %replication,
            "calculating storage-only costs"
        );
        let config = self.catalog.azure_config(storage_type, replication)?;

        let mut breakdown = StorageOnlyBreakdown::default();
        let mut total_index = 0.0;

        for tier in StorageTier::ALL {
            let size_gb = tier_allocation.get(tier);
            let pricing = config.tier(tier);

            let cost = storage_cost(size_gb, &pricing.storage);
            match tier {
                StorageTier::Hot => breakdown.hot = cost,
                StorageTier::Cold => breakdown.cold = cost,
                StorageTier::Archive => breakdown.archive = cost,
            }

            if storage_type == StorageType::DataLake && tier != StorageTier::Archive {
                total_index += index_cost(size_gb, pricing);
            }
        }

        breakdown.total = breakdown.hot + breakdown.cold + breakdown.archive;
        if total_index > 0.0 {
            breakdown.index = Some(total_index);
            breakdown.total += total_index;
        }

        Ok(breakdown)
    }

    /// Storage-only monthly cost for one database, S3-like model
    pub fn aws_storage_only_costs(
        &self,
        total_size_gb: f64,
        tier_allocation: &TierAllocation,
    ) -> StorageOnlyBreakdown {
        debug!(total_size_gb, "calculating AWS storage-only costs");
        let config = self.catalog.aws_config();

        let mut breakdown = StorageOnlyBreakdown::default();
        for tier in StorageTier::ALL {
            let cost = storage_cost(tier_allocation.get(tier), &config.tier(tier).storage);
            match tier {
                StorageTier::Hot => breakdown.hot = cost,
                StorageTier::Cold => breakdown.cold = cost,
                StorageTier::Archive => breakdown.archive = cost,
            }
        }

        breakdown.total = breakdown.hot + breakdown.cold + breakdown.archive;
        breakdown
    }

    /// Storage-only comparison across every supported option.
    ///
    /// Order is an observable contract: data-lake LRS, data-lake GRS,
    /// blob LRS, blob GRS, then the S3-like option when requested.
    pub fn all_storage_options(
        &self,
        total_size_gb: f64,
        tier_allocation: &TierAllocation,
        number_of_databases: u32,
        include_aws: bool,
    ) -> Result<Vec<StorageComparisonResult>, DomainError> {
        let mut results = Vec::with_capacity(AZURE_COMPARISON_ORDER.len() + 1);

        for (storage_type, replication) in AZURE_COMPARISON_ORDER {
            let breakdown =
                self.storage_only_costs(total_size_gb, tier_allocation, storage_type, replication)?;

            results.push(StorageComparisonResult {
                provider: Provider::Azure,
                storage_type: Some(storage_type),
                replication: Some(replication),
                total_for_all_databases: breakdown.total * f64::from(number_of_databases),
                label: format!("{} ({})", storage_type.display_name(), replication),
                breakdown,
            });
        }

        if include_aws {
            let breakdown = self.aws_storage_only_costs(total_size_gb, tier_allocation);
            results.push(StorageComparisonResult {
                provider: Provider::Aws,
                storage_type: None,
                replication: None,
                total_for_all_databases: breakdown.total * f64::from(number_of_databases),
                label: "AWS S3".to_string(),
                breakdown,
            });
        }

        Ok(results)
    }

    /// Incremental monthly cost for a fleet of identically-configured
    /// databases, tiered model. Every field is scaled by
    /// `number_of_databases` before being returned.
    pub fn incremental_costs(
        &self,
        tier_allocation: &TierAllocation,
        transactions: &TransactionInputs,
        storage_type: StorageType,
        replication: ReplicationType,
        number_of_databases: u32,
    ) -> Result<IncrementalCostBreakdown, DomainError> {
        let config = self.catalog.azure_config(storage_type, replication)?;

        let mut total_transactions = 0.0;
        let mut total_retrieval = 0.0;
        let mut total_query_acceleration = 0.0;
        let mut total_early_deletion = 0.0;

        for tier in StorageTier::ALL {
            let pricing = config.tier(tier);
            let inputs = transactions.tier(tier);

            total_transactions += transaction_cost(tier, inputs, pricing);
            total_retrieval += retrieval_cost(tier, inputs, pricing);

            if tier != StorageTier::Archive {
                total_query_acceleration += query_acceleration_cost(tier, inputs, pricing);
            }

            if matches!(tier, StorageTier::Cold | StorageTier::Archive) {
                total_early_deletion += early_deletion_penalty(
                    tier_allocation.get(tier),
                    pricing.minimum_storage_duration_days,
                    pricing.early_deletion_penalty,
                    inputs.storage_duration_days,
                );
            }
        }

        let scale = f64::from(number_of_databases);
        Ok(IncrementalCostBreakdown {
            transactions: total_transactions * scale,
            retrieval: total_retrieval * scale,
            query_acceleration: total_query_acceleration * scale,
            requests: None,
            early_deletion: Some(total_early_deletion * scale),
            total: (total_transactions
                + total_retrieval
                + total_query_acceleration
                + total_early_deletion)
                * scale,
        })
    }

    /// Incremental monthly cost for a fleet, S3-like model. Scaled to
    /// the whole fleet before return, like the tiered path.
    pub fn aws_incremental_costs(
        &self,
        tier_allocation: &TierAllocation,
        transactions: &AwsTransactionInputs,
        number_of_databases: u32,
    ) -> IncrementalCostBreakdown {
        let config = self.catalog.aws_config();

        let mut total_requests = 0.0;
        let mut total_retrieval = 0.0;
        let mut total_early_deletion = 0.0;

        for tier in StorageTier::ALL {
            let pricing = config.tier(tier);
            let inputs = transactions.tier(tier);

            if let Some(requests) = inputs.put_copy_post_list_requests.filter(|v| *v > 0.0) {
                total_requests += (requests / REQUESTS_PER_UNIT) * pricing.put_copy_post_list_requests;
            }
            if let Some(requests) = inputs.get_select_requests.filter(|v| *v > 0.0) {
                total_requests += (requests / REQUESTS_PER_UNIT) * pricing.get_select_requests;
            }

            if let Some(retrieval_gb) = inputs.data_retrieval_gb.filter(|v| *v > 0.0) {
                match tier {
                    StorageTier::Hot => {}
                    StorageTier::Cold => {
                        if let Some(price) = pricing
                            .data_retrieval
                            .and_then(|rates| rates.rate(RetrievalSpeed::Standard))
                        {
                            total_retrieval += retrieval_gb * price;
                        }
                    }
                    StorageTier::Archive => {
                        let speed = inputs.retrieval_type.unwrap_or_default();
                        if let Some(price) =
                            pricing.data_retrieval.and_then(|rates| rates.rate(speed))
                        {
                            total_retrieval += retrieval_gb * price;
                        }
                        // Glacier retrieval requests are billed alongside
                        // the per-GB retrieval, at the same speed class.
                        if let (Some(requests), Some(rates)) = (
                            inputs.data_retrieval_requests.filter(|v| *v > 0.0),
                            pricing.data_retrieval_requests,
                        ) {
                            if let Some(price) = rates.rate(speed) {
                                total_retrieval += (requests / REQUESTS_PER_UNIT) * price;
                            }
                        }
                    }
                }
            }

            total_early_deletion += early_deletion_penalty(
                tier_allocation.get(tier),
                pricing.minimum_storage_duration_days,
                pricing.early_deletion_penalty,
                inputs.storage_duration_days,
            );
        }

        let scale = f64::from(number_of_databases);
        IncrementalCostBreakdown {
            transactions: total_requests * scale,
            retrieval: total_retrieval * scale,
            query_acceleration: 0.0,
            requests: Some(total_requests * scale),
            early_deletion: Some(total_early_deletion * scale),
            total: (total_requests + total_retrieval + total_early_deletion) * scale,
        }
    }
}

impl Default for CostEngine {
    fn default() -> Self {
        Self::standard()
    }
}
