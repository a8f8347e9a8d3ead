//! List Histories Use Case
//!
//! An unknown user simply has no history, so this never reports
//! `UserNotFound`.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::repository::CoinHistoryRepository;
use crate::domain::value_object::{operation::Operation, user_id::parse_user_id};
use crate::error::LedgerResult;

/// List histories input
pub struct ListHistoriesInput {
    pub user_id: String,
}

/// One row of the history listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub operation: Operation,
    pub operation_timestamp: DateTime<Utc>,
    pub amount: i64,
}

/// List histories use case
pub struct ListHistoriesUseCase<H>
where
    H: CoinHistoryRepository,
{
    history_repo: Arc<H>,
}

impl<H> ListHistoriesUseCase<H>
where
    H: CoinHistoryRepository,
{
    pub fn new(history_repo: Arc<H>) -> Self {
        Self { history_repo }
    }

    pub async fn execute(&self, input: ListHistoriesInput) -> LedgerResult<Vec<HistoryEntry>> {
        let user_id = parse_user_id("userid", &input.user_id)?;

        let entries: Vec<HistoryEntry> = self
            .history_repo
            .find_by_user_id(user_id)
            .await?
            .into_iter()
            .map(|h| HistoryEntry {
                operation: h.operation,
                operation_timestamp: h.operation_timestamp,
                amount: h.amount,
            })
            .collect();

        tracing::debug!(user_id = %user_id, count = entries.len(), "Histories listed");

        Ok(entries)
    }
}
