//! Per-tier transaction, retrieval, query-acceleration and index costs
//!
//! Each function sums only the components present in both the usage
//! input (> 0) and the pricing record. There are no fixed fees or
//! minimums; absent usage costs exactly zero.

use crate::domain::pricing::TierPricing;
use crate::domain::storage::StorageTier;

use super::inputs::TierTransactionInputs;

/// Operations per billing unit for most operation categories
pub const OPS_PER_UNIT: f64 = 10_000.0;
/// Iterative writes are billed per 100 operations
pub const ITERATIVE_WRITE_OPS_PER_UNIT: f64 = 100.0;

fn usage(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Operation-count cost for one tier
pub fn transaction_cost(
    tier: StorageTier,
    inputs: &TierTransactionInputs,
    pricing: &TierPricing,
) -> f64 {
    let mut cost = 0.0;

    if let Some(ops) = usage(inputs.write_operations) {
        cost += (ops / OPS_PER_UNIT) * pricing.write_operations;
    }

    if let Some(ops) = usage(inputs.read_operations) {
        cost += (ops / OPS_PER_UNIT) * pricing.read_operations;
    }

    if let (Some(ops), Some(price)) = (
        usage(inputs.iterative_read_operations),
        pricing.iterative_read_operations,
    ) {
        cost += (ops / OPS_PER_UNIT) * price;
    }

    if let (Some(ops), Some(price)) = (
        usage(inputs.iterative_write_operations),
        pricing.iterative_write_operations,
    ) {
        cost += (ops / ITERATIVE_WRITE_OPS_PER_UNIT) * price;
    }

    if let (Some(ops), Some(price)) = (usage(inputs.other_operations), pricing.other_operations) {
        cost += (ops / OPS_PER_UNIT) * price;
    }

    if tier == StorageTier::Archive {
        if let (Some(ops), Some(price)) = (
            usage(inputs.archive_high_priority_read),
            pricing.archive_high_priority_read,
        ) {
            cost += (ops / OPS_PER_UNIT) * price;
        }
    }

    cost
}

/// Per-GB retrieval cost for one tier.
///
/// Hot retrieval is free. For archive, a high-priority GB figure takes
/// precedence over the standard retrieval figure.
pub fn retrieval_cost(
    tier: StorageTier,
    inputs: &TierTransactionInputs,
    pricing: &TierPricing,
) -> f64 {
    match tier {
        StorageTier::Hot => 0.0,
        StorageTier::Cold => match usage(inputs.data_retrieval_gb) {
            Some(gb) if pricing.data_retrieval > 0.0 => gb * pricing.data_retrieval,
            _ => 0.0,
        },
        StorageTier::Archive => {
            if let (Some(gb), Some(price)) = (
                usage(inputs.archive_high_priority_retrieval_gb),
                pricing.archive_high_priority_retrieval,
            ) {
                gb * price
            } else if let Some(gb) = usage(inputs.data_retrieval_gb) {
                if pricing.data_retrieval > 0.0 {
                    gb * pricing.data_retrieval
                } else {
                    0.0
                }
            } else {
                0.0
            }
        }
    }
}

/// Query-acceleration scan/return cost. Never applies to archive.
pub fn query_acceleration_cost(
    tier: StorageTier,
    inputs: &TierTransactionInputs,
    pricing: &TierPricing,
) -> f64 {
    if tier == StorageTier::Archive {
        return 0.0;
    }

    let mut cost = 0.0;

    if let (Some(gb), Some(price)) = (
        usage(inputs.query_acceleration_scanned_gb),
        pricing.query_acceleration_scanned,
    ) {
        cost += gb * price;
    }

    if let (Some(gb), Some(price)) = (
        usage(inputs.query_acceleration_returned_gb),
        pricing.query_acceleration_returned,
    ) {
        cost += gb * price;
    }

    cost
}

/// Hierarchical-namespace index surcharge. Priced only for data-lake
/// hot/cold tiers; the catalog leaves `index` unset everywhere else.
pub fn index_cost(size_gb: f64, pricing: &TierPricing) -> f64 {
    match pricing.index {
        Some(price) if size_gb > 0.0 => size_gb * price,
        _ => 0.0,
    }
}
