//! Storage classification types shared across the pricing and cost layers

use serde::{Deserialize, Serialize};

/// Storage access tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageTier {
    Hot,
    Cold,
    Archive,
}

impl StorageTier {
    /// All tiers in billing order. Iteration order is observable in
    /// aggregated breakdowns, so keep hot/cold/archive fixed.
    pub const ALL: [StorageTier; 3] = [StorageTier::Hot, StorageTier::Cold, StorageTier::Archive];

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageTier::Hot => "hot",
            StorageTier::Cold => "cold",
            StorageTier::Archive => "archive",
        }
    }
}

impl std::fmt::Display for StorageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Azure storage account flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageType {
    DataLake,
    Blob,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::DataLake => "data-lake",
            StorageType::Blob => "blob",
        }
    }

    /// Human-readable product name used in comparison labels
    pub fn display_name(&self) -> &'static str {
        match self {
            StorageType::DataLake => "Azure Data Lake Storage",
            StorageType::Blob => "Azure Blob Storage",
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "data-lake" => Ok(StorageType::DataLake),
            "blob" => Ok(StorageType::Blob),
            other => Err(format!(
                "unknown storage type '{}', expected 'data-lake' or 'blob'",
                other
            )),
        }
    }
}

/// Replication scheme for the tiered (Azure) model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReplicationType {
    #[serde(rename = "LRS")]
    Lrs,
    #[serde(rename = "GRS")]
    Grs,
}

impl ReplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplicationType::Lrs => "LRS",
            ReplicationType::Grs => "GRS",
        }
    }
}

impl std::fmt::Display for ReplicationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReplicationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LRS" | "lrs" => Ok(ReplicationType::Lrs),
            "GRS" | "grs" => Ok(ReplicationType::Grs),
            other => Err(format!(
                "unknown replication type '{}', expected 'LRS' or 'GRS'",
                other
            )),
        }
    }
}

/// Cloud provider of a comparison result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Azure,
    Aws,
}

/// Capacity allocated to each tier, in gigabytes.
///
/// This is the authoritative per-tier capacity for every storage and
/// early-deletion calculation; the sum is not required to match any
/// externally supplied total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierAllocation {
    pub hot: f64,
    pub cold: f64,
    pub archive: f64,
}

impl TierAllocation {
    pub fn new(hot: f64, cold: f64, archive: f64) -> Self {
        Self { hot, cold, archive }
    }

    pub fn get(&self, tier: StorageTier) -> f64 {
        match tier {
            StorageTier::Hot => self.hot,
            StorageTier::Cold => self.cold,
            StorageTier::Archive => self.archive,
        }
    }

    pub fn total(&self) -> f64 {
        self.hot + self.cold + self.archive
    }
}
