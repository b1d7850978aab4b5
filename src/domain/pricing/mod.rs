//! Pricing catalog - static price tables for both provider models

mod aws;
mod azure;
mod catalog;
mod slab;

pub use aws::{RetrievalRates, RetrievalSpeed, S3PricingConfig, S3TierPricing};
pub use azure::{StorageConfig, TierPricing};
pub use catalog::PricingCatalog;
pub use slab::StoragePricingSlab;
