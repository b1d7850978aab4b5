//! API request/response envelope types

pub mod error;

pub use error::{ApiError, ApiErrorResponse};
