//! Infrastructure layer - logging and batch evaluation

pub mod batch;
pub mod logging;

pub use batch::{BatchReport, BatchRow, BatchService, RowCosts, RowOutcome};
