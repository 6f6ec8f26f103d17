//! Application layer: single-record services and bulk orchestration.
//!
//! # Modules
//!
//! - [`services`] - thin CRUD services, one per entity
//! - [`bulk`] - multi-record workflows with duplicate recovery and
//!   per-entity transactional policies

pub mod bulk;
pub mod services;

use crate::domain::values::Id;
use crate::error::AppError;

/// Resolves the operator id that every mutating call must carry.
///
/// Session handling lives outside this crate; the operator arrives as an
/// opaque header value and is re-validated here regardless.
pub(crate) fn require_operator(operator: Option<&str>) -> Result<Id, AppError> {
    Ok(Id::required(operator.unwrap_or_default(), "user id")?)
}
