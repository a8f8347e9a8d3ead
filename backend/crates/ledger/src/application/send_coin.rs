//! Send Coin Use Case
//!
//! Moves coins from one user to another. The debit, the credit and both
//! history rows commit together or not at all.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::repository::{LedgerUnitOfWork, UserRepository};
use crate::domain::services;
use crate::domain::value_object::{
    amount::Amount,
    user_id::{UserId, parse_user_id},
};
use crate::error::{LedgerError, LedgerResult};

/// Send coin input
pub struct SendCoinInput {
    pub sender: String,
    pub receiver: String,
    pub amount: String,
}

/// Send coin output
#[derive(Debug)]
pub struct SendCoinOutput {
    pub sender: UserId,
    pub receiver: UserId,
    pub amount: i64,
    pub sender_balance: i64,
}

/// Send coin use case
pub struct SendCoinUseCase<U, L>
where
    U: UserRepository,
    L: LedgerUnitOfWork,
{
    user_repo: Arc<U>,
    ledger: Arc<L>,
}

impl<U, L> SendCoinUseCase<U, L>
where
    U: UserRepository,
    L: LedgerUnitOfWork,
{
    pub fn new(user_repo: Arc<U>, ledger: Arc<L>) -> Self {
        Self { user_repo, ledger }
    }

    pub async fn execute(&self, input: SendCoinInput) -> LedgerResult<SendCoinOutput> {
        let sender_id = parse_user_id("sender", &input.sender)?;
        let receiver_id = parse_user_id("receiver", &input.receiver)?;
        if sender_id == receiver_id {
            return Err(LedgerError::validation("receiver", "must differ from sender"));
        }
        let amount = Amount::parse("amount", &input.amount)?;

        let sender = self
            .user_repo
            .find_by_id(sender_id)
            .await?
            .ok_or(LedgerError::UserNotFound(sender_id))?;
        let receiver = self
            .user_repo
            .find_by_id(receiver_id)
            .await?
            .ok_or(LedgerError::UserNotFound(receiver_id))?;

        let posting = services::post_transfer(&sender, &receiver, amount, Utc::now())?;
        let sender_balance = posting
            .balance_of(sender_id)
            .ok_or_else(|| LedgerError::Internal("posting lost the sender update".into()))?;

        self.ledger.apply(&posting).await?;

        tracing::info!(
            sender = %sender_id,
            receiver = %receiver_id,
            amount = amount.value(),
            sender_balance = sender_balance.value(),
            "Coins sent"
        );

        Ok(SendCoinOutput {
            sender: sender_id,
            receiver: receiver_id,
            amount: amount.value(),
            sender_balance: sender_balance.value(),
        })
    }
}
