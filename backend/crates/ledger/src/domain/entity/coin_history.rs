//! Coin History Entity
//!
//! Append-only record of one balance movement for one user.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    amount::Amount,
    operation::Operation,
    user_id::{CoinHistoryId, UserId},
};

/// Persisted history row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinHistory {
    pub coin_history_id: CoinHistoryId,
    pub user_id: UserId,
    pub operation: Operation,
    /// Signed: credits positive, debits negative
    pub amount: i64,
    pub operation_timestamp: DateTime<Utc>,
}

/// History row waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoinHistory {
    pub user_id: UserId,
    pub operation: Operation,
    pub amount: i64,
    pub operation_timestamp: DateTime<Utc>,
}

impl NewCoinHistory {
    pub fn new(
        user_id: UserId,
        operation: Operation,
        amount: Amount,
        operation_timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            operation,
            amount: operation.signed(amount),
            operation_timestamp,
        }
    }
}
