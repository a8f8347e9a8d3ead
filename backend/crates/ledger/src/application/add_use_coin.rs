//! Add / Use Coin Use Case
//!
//! Credits (`ADD`) or debits (`USE`) a single user's balance and records
//! one history row in the same transaction.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::repository::{LedgerUnitOfWork, UserRepository};
use crate::domain::services;
use crate::domain::value_object::{
    amount::Amount,
    operation::{Operation, UnknownOperation},
    user_id::{UserId, parse_user_id},
};
use crate::error::{LedgerError, LedgerResult};

/// Add / use coin input
pub struct AddUseCoinInput {
    pub user_id: String,
    pub operation: String,
    pub amount: String,
}

/// Add / use coin output
#[derive(Debug)]
pub struct AddUseCoinOutput {
    pub user_id: UserId,
    pub operation: Operation,
    /// Signed amount as recorded in history
    pub amount: i64,
    pub coin_balance: i64,
}

/// Add / use coin use case
pub struct AddUseCoinUseCase<U, L>
where
    U: UserRepository,
    L: LedgerUnitOfWork,
{
    user_repo: Arc<U>,
    ledger: Arc<L>,
}

impl<U, L> AddUseCoinUseCase<U, L>
where
    U: UserRepository,
    L: LedgerUnitOfWork,
{
    pub fn new(user_repo: Arc<U>, ledger: Arc<L>) -> Self {
        Self { user_repo, ledger }
    }

    pub async fn execute(&self, input: AddUseCoinInput) -> LedgerResult<AddUseCoinOutput> {
        let user_id = parse_user_id("userid", &input.user_id)?;
        let operation: Operation = input
            .operation
            .parse()
            .map_err(|e: UnknownOperation| LedgerError::validation("operation", e.to_string()))?;
        if !operation.is_self_service() {
            return Err(LedgerError::validation(
                "operation",
                format!("must be ADD or USE, got {operation}"),
            ));
        }
        let amount = Amount::parse("amount", &input.amount)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(LedgerError::UserNotFound(user_id))?;

        let posting = services::post_single(&user, operation, amount, Utc::now())?;
        let coin_balance = posting
            .balance_of(user_id)
            .ok_or_else(|| LedgerError::Internal("posting lost its balance update".into()))?;

        let histories = self.ledger.apply(&posting).await?;
        let recorded = histories
            .first()
            .map(|h| h.amount)
            .ok_or_else(|| LedgerError::Internal("posting recorded no history row".into()))?;

        tracing::info!(
            user_id = %user_id,
            operation = %operation,
            amount = recorded,
            coin_balance = coin_balance.value(),
            "Coin balance updated"
        );

        Ok(AddUseCoinOutput {
            user_id,
            operation,
            amount: recorded,
            coin_balance: coin_balance.value(),
        })
    }
}
