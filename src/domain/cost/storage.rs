//! Slab-based storage cost

use crate::domain::pricing::StoragePricingSlab;

/// Marginal tiered billing over an ordered slab list.
///
/// GB within a price band are billed at that band's rate; capacity
/// beyond the last (open-ended) slab is billed entirely at its rate.
/// Non-positive sizes cost nothing.
pub fn storage_cost(size_gb: f64, slabs: &[StoragePricingSlab]) -> f64 {
    if size_gb <= 0.0 {
        return 0.0;
    }

    let mut remaining_gb = size_gb;
    let mut total = 0.0;

    for slab in slabs {
        if remaining_gb <= 0.0 {
            break;
        }

        let slab_size = match slab.capacity() {
            Some(capacity) => remaining_gb.min(capacity),
            None => remaining_gb,
        };

        if slab_size > 0.0 {
            total += slab_size * slab.price_per_gb;
            remaining_gb -= slab_size;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::PricingCatalog;
    use crate::domain::storage::{ReplicationType, StorageType};

    fn slabs() -> Vec<StoragePricingSlab> {
        vec![
            StoragePricingSlab::new(0.0, Some(51_200.0), 0.021),
            StoragePricingSlab::new(51_200.0, Some(512_000.0), 0.020),
            StoragePricingSlab::new(512_000.0, None, 0.019),
        ]
    }

    #[test]
    fn test_zero_and_negative_sizes_are_free() {
        assert_eq!(storage_cost(0.0, &slabs()), 0.0);
        assert_eq!(storage_cost(-10.0, &slabs()), 0.0);
    }

    #[test]
    fn test_within_first_slab() {
        let cost = storage_cost(1000.0, &slabs());
        assert!((cost - 1000.0 * 0.021).abs() < 1e-9);
    }

    #[test]
    fn test_exact_slab_boundary_bills_in_first_slab() {
        // 51,200 GB fills the first slab exactly; nothing spills over.
        let cost = storage_cost(51_200.0, &slabs());
        assert!((cost - 1075.20).abs() < 1e-9);
    }

    #[test]
    fn test_spanning_two_slabs_is_marginal_not_retroactive() {
        let cost = storage_cost(60_000.0, &slabs());
        let expected = 51_200.0 * 0.021 + 8_800.0 * 0.020;
        assert!((cost - expected).abs() < 1e-9);
    }

    #[test]
    fn test_beyond_last_slab_billed_at_open_rate() {
        let cost = storage_cost(1_000_000.0, &slabs());
        let expected = 51_200.0 * 0.021 + 460_800.0 * 0.020 + 488_000.0 * 0.019;
        assert!((cost - expected).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic_in_size() {
        let sizes = [0.0, 1.0, 51_199.0, 51_200.0, 51_201.0, 600_000.0];
        let mut last = -1.0;
        for size in sizes {
            let cost = storage_cost(size, &slabs());
            assert!(cost >= last, "cost decreased at {} GB", size);
            last = cost;
        }
    }

    #[test]
    fn test_continuous_at_slab_boundary() {
        let eps = 1e-6;
        let below = storage_cost(51_200.0 - eps, &slabs());
        let above = storage_cost(51_200.0 + eps, &slabs());
        // Crossing the boundary adds 2*eps GB: eps at the first rate
        // plus eps at the next rate. No jump beyond that.
        assert!((above - below - eps * 0.021 - eps * 0.020).abs() < 1e-12);
    }

    #[test]
    fn test_catalog_scenario_data_lake_lrs_hot_boundary() {
        let catalog = PricingCatalog::standard();
        let config = catalog
            .azure_config(StorageType::DataLake, ReplicationType::Lrs)
            .unwrap();
        let cost = storage_cost(51_200.0, &config.hot.storage);
        assert!((cost - 1075.20).abs() < 1e-9);
    }
}
