//! Ledger Error Types
//!
//! This module provides ledger-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Every variant lands in one of two buckets: 400 for anything the client
//! can fix, 500 for storage or internal failures.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::UserId;
use platform::password::{PasswordHashError, PasswordPolicyError};
use thiserror::Error;

/// Ledger-specific result type alias
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-specific error variants
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A request field is missing or malformed
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// The request body is not valid JSON for the endpoint
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// Referenced user does not exist
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// Debit larger than the current balance
    #[error("Insufficient coin balance: user {user_id} has {balance}, requested {requested}")]
    InsufficientBalance {
        user_id: UserId,
        balance: i64,
        requested: i64,
    },

    /// Credit would overflow the balance
    #[error("Coin balance overflow for user {0}")]
    BalanceOverflow(UserId),

    /// Password rejected by policy
    #[error("Password validation failed: {0}")]
    PasswordPolicy(#[from] PasswordPolicyError),

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LedgerError {
    /// Shorthand for a field validation failure
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        LedgerError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::Validation { .. }
            | LedgerError::MalformedBody(_)
            | LedgerError::UserNotFound(_)
            | LedgerError::InsufficientBalance { .. }
            | LedgerError::BalanceOverflow(_)
            | LedgerError::PasswordPolicy(_) => ErrorKind::BadRequest,
            LedgerError::PasswordHash(_) | LedgerError::Database(_) | LedgerError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            LedgerError::Validation { .. }
            | LedgerError::MalformedBody(_)
            | LedgerError::PasswordPolicy(_) => "VALIDATION_ERROR",
            LedgerError::UserNotFound(_) => "USER_NOT_FOUND",
            LedgerError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            LedgerError::BalanceOverflow(_) => "BALANCE_OVERFLOW",
            LedgerError::PasswordHash(_) | LedgerError::Database(_) | LedgerError::Internal(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the logs and the error source, never in
    /// the response message.
    pub fn into_app_error(self) -> AppError {
        let code = self.code();
        let err = match self {
            LedgerError::Database(e) => AppError::internal("Database error").with_source(e),
            LedgerError::PasswordHash(e) => AppError::internal("Internal server error").with_source(e),
            LedgerError::Internal(_) => AppError::internal("Internal server error"),
            LedgerError::UserNotFound(_) => AppError::bad_request(self.to_string())
                .with_action("Register the user before operating on coins"),
            LedgerError::InsufficientBalance { .. } => AppError::bad_request(self.to_string())
                .with_action("Add coins or request a smaller amount"),
            other => AppError::new(other.kind(), other.to_string()),
        };
        err.with_code(code)
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            LedgerError::Database(e) => {
                tracing::error!(error = %e, "Ledger database error");
            }
            LedgerError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            LedgerError::Internal(msg) => {
                tracing::error!(message = %msg, "Ledger internal error");
            }
            LedgerError::InsufficientBalance {
                user_id,
                balance,
                requested,
            } => {
                tracing::warn!(
                    user_id = %user_id,
                    balance = balance,
                    requested = requested,
                    "Rejected debit: insufficient balance"
                );
            }
            LedgerError::BalanceOverflow(user_id) => {
                tracing::warn!(user_id = %user_id, "Rejected credit: balance overflow");
            }
            _ => {
                tracing::debug!(error = %self, "Ledger request rejected");
            }
        }
    }
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for LedgerError {
    fn from(rejection: JsonRejection) -> Self {
        LedgerError::MalformedBody(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_details_are_hidden() {
        let err = LedgerError::Database(sqlx::Error::PoolTimedOut).into_app_error();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert_eq!(err.message(), "Database error");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_insufficient_balance_is_distinguishable() {
        let err = LedgerError::InsufficientBalance {
            user_id: UserId::from_i64(1),
            balance: 3,
            requested: 5,
        }
        .into_app_error();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.code(), "INSUFFICIENT_BALANCE");
        assert!(err.action().is_some());
    }

    #[test]
    fn test_validation_message_names_field() {
        let err = LedgerError::validation("amount", "is required").into_app_error();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.message(), "Invalid amount: is required");
    }
}
