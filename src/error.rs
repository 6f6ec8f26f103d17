use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Classifies a [`AppError::Conflict`] so callers can branch on the conflict
/// shape without matching message text.
///
/// Bulk create paths recover from `Duplicate` by re-reading the existing row;
/// every other kind aborts the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// A unique constraint rejected the write — the target row already exists.
    Duplicate,
    /// A delete was rejected because other rows still reference the target.
    DependentsExist,
    /// Any other storage-level conflict.
    Other,
}

#[derive(Debug)]
pub enum AppError {
    Validation {
        message: String,
        details: Value,
    },
    NotFound {
        message: String,
        details: Value,
    },
    Conflict {
        kind: ConflictKind,
        message: String,
        details: Value,
    },
    Internal {
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    /// A unique-constraint conflict — the only recoverable conflict kind.
    pub fn duplicate(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            kind: ConflictKind::Duplicate,
            message: message.into(),
            details,
        }
    }

    /// A delete rejected because dependent rows still reference the target.
    pub fn dependents_exist(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            kind: ConflictKind::DependentsExist,
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            kind: ConflictKind::Other,
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// True when this error is a recoverable duplicate-row conflict.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::Conflict {
                kind: ConflictKind::Duplicate,
                ..
            }
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            // Conflicts are client errors in this API: the admin UI shows the
            // message next to the offending field rather than retrying.
            AppError::Conflict {
                message, details, ..
            } => (StatusCode::BAD_REQUEST, "conflict", message, details),
            AppError::Internal { message, details } => {
                tracing::error!(%message, %details, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                    Value::Null,
                )
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
