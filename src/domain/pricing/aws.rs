//! S3-like (AWS) pricing records and the fixed configuration
//!
//! Request prices are per 1,000 requests; retrieval prices are per GB.
//! Tiers map to S3 Standard (hot), Standard-IA (cold) and Glacier
//! Flexible Retrieval (archive).

use serde::{Deserialize, Serialize};

use crate::domain::storage::StorageTier;

use super::slab::{slab, StoragePricingSlab};

/// Retrieval speed class for the archive tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalSpeed {
    #[default]
    Standard,
    Expedited,
}

/// Per-GB or per-1,000-request rates split by retrieval speed
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RetrievalRates {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expedited: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<f64>,
}

impl RetrievalRates {
    pub fn rate(&self, speed: RetrievalSpeed) -> Option<f64> {
        match speed {
            RetrievalSpeed::Expedited => self.expedited,
            RetrievalSpeed::Standard => self.standard,
        }
    }
}

/// Pricing parameters for one S3-like tier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3TierPricing {
    /// Volume-tiered storage slabs, ordered ascending
    pub storage: Vec<StoragePricingSlab>,
    /// Per 1,000 requests
    pub put_copy_post_list_requests: f64,
    /// Per 1,000 requests
    pub get_select_requests: f64,
    /// Per 1,000 requests, archive tier only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_retrieval_requests: Option<RetrievalRates>,
    /// Per GB retrieved; absent means retrieval is free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_retrieval: Option<RetrievalRates>,
    /// Minimum committed residency before deletion is penalty-free
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_storage_duration_days: Option<f64>,
    /// Per GB, prorated by the unserved fraction of the minimum duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_deletion_penalty: Option<f64>,
}

/// The single fixed S3-like pricing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3PricingConfig {
    pub hot: S3TierPricing,
    pub cold: S3TierPricing,
    pub archive: S3TierPricing,
}

impl S3PricingConfig {
    pub fn tier(&self, tier: StorageTier) -> &S3TierPricing {
        match tier {
            StorageTier::Hot => &self.hot,
            StorageTier::Cold => &self.cold,
            StorageTier::Archive => &self.archive,
        }
    }
}

pub(super) fn s3_pricing() -> S3PricingConfig {
    S3PricingConfig {
        hot: S3TierPricing {
            storage: vec![
                slab(0.0, Some(51_200.0), 0.023),
                slab(51_200.0, Some(512_000.0), 0.022),
                slab(512_000.0, None, 0.021),
            ],
            put_copy_post_list_requests: 0.005,
            get_select_requests: 0.0004,
            ..Default::default()
        },
        cold: S3TierPricing {
            storage: vec![slab(0.0, None, 0.0125)],
            put_copy_post_list_requests: 0.01,
            get_select_requests: 0.0001,
            data_retrieval: Some(RetrievalRates {
                standard: Some(0.01),
                expedited: None,
            }),
            minimum_storage_duration_days: Some(30.0),
            early_deletion_penalty: Some(0.0125),
            ..Default::default()
        },
        archive: S3TierPricing {
            storage: vec![slab(0.0, None, 0.0036)],
            put_copy_post_list_requests: 0.03,
            get_select_requests: 0.0004,
            data_retrieval_requests: Some(RetrievalRates {
                expedited: Some(10.00),
                standard: Some(0.05),
            }),
            data_retrieval: Some(RetrievalRates {
                expedited: Some(0.03),
                standard: Some(0.01),
            }),
            minimum_storage_duration_days: Some(90.0),
            early_deletion_penalty: Some(0.0036),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retrieval_rate_lookup() {
        let rates = RetrievalRates {
            expedited: Some(0.03),
            standard: Some(0.01),
        };
        assert_eq!(rates.rate(RetrievalSpeed::Expedited), Some(0.03));
        assert_eq!(rates.rate(RetrievalSpeed::Standard), Some(0.01));
    }

    #[test]
    fn test_hot_tier_has_no_retrieval_fees() {
        let config = s3_pricing();
        assert!(config.hot.data_retrieval.is_none());
        assert!(config.hot.minimum_storage_duration_days.is_none());
    }

    #[test]
    fn test_minimum_durations() {
        let config = s3_pricing();
        assert_eq!(config.cold.minimum_storage_duration_days, Some(30.0));
        assert_eq!(config.archive.minimum_storage_duration_days, Some(90.0));
    }

    #[test]
    fn test_archive_speed_classes_priced() {
        let config = s3_pricing();
        let retrieval = config.archive.data_retrieval.unwrap();
        assert_eq!(retrieval.rate(RetrievalSpeed::Expedited), Some(0.03));
        let requests = config.archive.data_retrieval_requests.unwrap();
        assert_eq!(requests.rate(RetrievalSpeed::Expedited), Some(10.00));
    }

    #[test]
    fn test_retrieval_speed_default_is_standard() {
        assert_eq!(RetrievalSpeed::default(), RetrievalSpeed::Standard);
        assert_eq!(
            serde_json::to_string(&RetrievalSpeed::Expedited).unwrap(),
            "\"expedited\""
        );
    }
}
