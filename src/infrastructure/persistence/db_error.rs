//! Classification helpers for storage-engine errors.
//!
//! Repositories translate three conflict classes into typed
//! [`AppError`](crate::error::AppError) values at the persistence boundary;
//! anything unrecognized becomes an internal error and is logged here so the
//! original engine message never reaches a client.

use serde_json::json;

use crate::error::AppError;

pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_foreign_key_violation())
}

/// The violated constraint's name, when the engine reports one.
pub fn constraint_name(e: &sqlx::Error) -> Option<&str> {
    e.as_database_error().and_then(|db| db.constraint())
}

/// Logs and wraps an unclassified storage error.
pub fn unexpected(e: sqlx::Error) -> AppError {
    tracing::error!(error = %e, "unclassified database error");
    AppError::internal("Database error", json!({}))
}

/// A persisted row that no longer passes entity validation.
pub fn corrupted_row(resource: &'static str, e: crate::domain::values::ValueError) -> AppError {
    AppError::internal(
        "Corrupted row in storage",
        json!({ "resource": resource, "reason": e.to_string() }),
    )
}
