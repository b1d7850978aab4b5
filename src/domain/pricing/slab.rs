//! Volume-tiered storage price slabs

use serde::{Deserialize, Serialize};

/// One contiguous GB range billed at a fixed per-GB rate.
///
/// Slab lists are ordered ascending by `min_gb`, contiguous and
/// non-overlapping; the last slab carries `max_gb = None` (open-ended).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoragePricingSlab {
    /// Inclusive lower bound of the slab, in GB
    pub min_gb: f64,
    /// Exclusive upper bound of the slab, in GB; `None` means unbounded
    pub max_gb: Option<f64>,
    /// Price per GB per month within this slab
    pub price_per_gb: f64,
}

impl StoragePricingSlab {
    pub const fn new(min_gb: f64, max_gb: Option<f64>, price_per_gb: f64) -> Self {
        Self {
            min_gb,
            max_gb,
            price_per_gb,
        }
    }

    /// Capacity of the slab in GB, `None` for the open-ended slab
    pub fn capacity(&self) -> Option<f64> {
        self.max_gb.map(|max| max - self.min_gb)
    }
}

/// Convenience constructor for static pricing tables
pub const fn slab(min_gb: f64, max_gb: Option<f64>, price_per_gb: f64) -> StoragePricingSlab {
    StoragePricingSlab::new(min_gb, max_gb, price_per_gb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slab_capacity() {
        let bounded = slab(0.0, Some(51_200.0), 0.021);
        assert_eq!(bounded.capacity(), Some(51_200.0));

        let open = slab(512_000.0, None, 0.020);
        assert_eq!(open.capacity(), None);
    }

    #[test]
    fn test_slab_serialization() {
        let s = slab(0.0, Some(51_200.0), 0.021);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"minGb\":0.0"));
        assert!(json.contains("\"pricePerGb\":0.021"));
    }
}
