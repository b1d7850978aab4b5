//! Row-by-row batch evaluation
//!
//! Mirrors the spreadsheet workflow: each row is an independent
//! scenario evaluated against the engine. A row that cannot be
//! evaluated is reported as a per-row error; it never aborts the rest
//! of the batch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::cost::{AwsTransactionInputs, TransactionInputs};
use crate::domain::{
    CostEngine, DomainError, IncrementalCostBreakdown, Provider, ReplicationType,
    StorageOnlyBreakdown, StorageType, TierAllocation,
};

fn default_database_count() -> u32 {
    1
}

/// One scenario row of a batch file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub provider: Provider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<StorageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replication: Option<ReplicationType>,
    pub tier_allocation: TierAllocation,
    #[serde(default = "default_database_count")]
    pub number_of_databases: u32,
    #[serde(default)]
    pub transactions: TransactionInputs,
    #[serde(default)]
    pub aws_transactions: AwsTransactionInputs,
}

/// Costs computed for one successful row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowCosts {
    pub storage: StorageOnlyBreakdown,
    /// Storage for the whole fleet
    pub storage_for_all_databases: f64,
    /// Already fleet-scaled by the engine
    pub incremental: IncrementalCostBreakdown,
    pub total_monthly: f64,
}

/// Outcome of one row: costs, or the error that stopped it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RowOutcome {
    Ok {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        costs: RowCosts,
    },
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        error: String,
    },
}

/// Full batch report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub succeeded: usize,
    pub failed: usize,
    pub rows: Vec<RowOutcome>,
}

/// Evaluates batch rows against a shared engine
#[derive(Debug, Clone, Default)]
pub struct BatchService {
    engine: CostEngine,
}

impl BatchService {
    pub fn new(engine: CostEngine) -> Self {
        Self { engine }
    }

    /// Evaluate every row; failures become per-row errors.
    pub fn evaluate(&self, rows: &[BatchRow]) -> BatchReport {
        let outcomes: Vec<RowOutcome> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| match self.evaluate_row(row) {
                Ok(costs) => RowOutcome::Ok {
                    id: row.id.clone(),
                    costs,
                },
                Err(err) => {
                    warn!(row = index, error = %err, "batch row failed");
                    RowOutcome::Error {
                        id: row.id.clone(),
                        error: err.to_string(),
                    }
                }
            })
            .collect();

        let succeeded = outcomes
            .iter()
            .filter(|o| matches!(o, RowOutcome::Ok { .. }))
            .count();

        BatchReport {
            generated_at: Utc::now(),
            succeeded,
            failed: outcomes.len() - succeeded,
            rows: outcomes,
        }
    }

    fn evaluate_row(&self, row: &BatchRow) -> Result<RowCosts, DomainError> {
        let total_size_gb = row.tier_allocation.total();
        let fleet = f64::from(row.number_of_databases);

        let (storage, incremental) = match row.provider {
            Provider::Azure => {
                let storage_type = row.storage_type.ok_or_else(|| {
                    DomainError::validation("azure row is missing storageType")
                })?;
                let replication = row.replication.ok_or_else(|| {
                    DomainError::validation("azure row is missing replication")
                })?;

                let storage = self.engine.storage_only_costs(
                    total_size_gb,
                    &row.tier_allocation,
                    storage_type,
                    replication,
                )?;
                let incremental = self.engine.incremental_costs(
                    &row.tier_allocation,
                    &row.transactions,
                    storage_type,
                    replication,
                    row.number_of_databases,
                )?;
                (storage, incremental)
            }
            Provider::Aws => {
                let storage = self
                    .engine
                    .aws_storage_only_costs(total_size_gb, &row.tier_allocation);
                let incremental = self.engine.aws_incremental_costs(
                    &row.tier_allocation,
                    &row.aws_transactions,
                    row.number_of_databases,
                );
                (storage, incremental)
            }
        };

        let storage_for_all_databases = storage.total * fleet;
        Ok(RowCosts {
            total_monthly: storage_for_all_databases + incremental.total,
            storage,
            storage_for_all_databases,
            incremental,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn azure_row() -> BatchRow {
        BatchRow {
            id: Some("row-1".to_string()),
            provider: Provider::Azure,
            storage_type: Some(StorageType::DataLake),
            replication: Some(ReplicationType::Lrs),
            tier_allocation: TierAllocation::new(600.0, 300.0, 100.0),
            number_of_databases: 2,
            transactions: TransactionInputs::default(),
            aws_transactions: AwsTransactionInputs::default(),
        }
    }

    #[test]
    fn test_azure_row_evaluates() {
        let report = BatchService::default().evaluate(&[azure_row()]);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 0);

        match &report.rows[0] {
            RowOutcome::Ok { id, costs } => {
                assert_eq!(id.as_deref(), Some("row-1"));
                assert!(costs.storage.total > 0.0);
                assert!(
                    (costs.storage_for_all_databases - costs.storage.total * 2.0).abs() < 1e-9
                );
                assert_eq!(costs.incremental.total, 0.0);
            }
            RowOutcome::Error { .. } => panic!("expected success"),
        }
    }

    #[test]
    fn test_aws_row_ignores_azure_fields() {
        let row = BatchRow {
            provider: Provider::Aws,
            storage_type: None,
            replication: None,
            id: None,
            ..azure_row()
        };
        let report = BatchService::default().evaluate(&[row]);
        assert_eq!(report.succeeded, 1);
    }

    #[test]
    fn test_bad_row_does_not_abort_batch() {
        let bad = BatchRow {
            storage_type: None,
            ..azure_row()
        };
        let report = BatchService::default().evaluate(&[bad, azure_row()]);
        assert_eq!(report.failed, 1);
        assert_eq!(report.succeeded, 1);

        match &report.rows[0] {
            RowOutcome::Error { error, .. } => assert!(error.contains("storageType")),
            RowOutcome::Ok { .. } => panic!("expected error"),
        }
        assert!(matches!(report.rows[1], RowOutcome::Ok { .. }));
    }

    #[test]
    fn test_row_deserializes_with_defaults() {
        let row: BatchRow = serde_json::from_str(
            r#"{
                "provider": "azure",
                "storageType": "blob",
                "replication": "LRS",
                "tierAllocation": {"hot": 100.0, "cold": 0.0, "archive": 0.0}
            }"#,
        )
        .unwrap();
        assert_eq!(row.number_of_databases, 1);
        assert_eq!(row.transactions, TransactionInputs::default());
    }
}
