//! Ledger Service
//!
//! Pure balance arithmetic. Turns loaded users plus a requested movement
//! into a [`LedgerPosting`]: the new balances and the history rows that
//! must be committed together. Nothing here touches storage.

use chrono::{DateTime, Utc};

use crate::domain::entity::{coin_history::NewCoinHistory, user::User};
use crate::domain::value_object::{
    amount::Amount, coin_balance::CoinBalance, operation::Operation, user_id::UserId,
};
use crate::error::{LedgerError, LedgerResult};

/// New absolute balance for one user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceUpdate {
    pub user_id: UserId,
    pub balance: CoinBalance,
}

/// Balance updates and history rows of a single operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerPosting {
    pub updates: Vec<BalanceUpdate>,
    pub histories: Vec<NewCoinHistory>,
}

impl LedgerPosting {
    /// Balance a user will have once the posting is applied
    pub fn balance_of(&self, user_id: UserId) -> Option<CoinBalance> {
        self.updates
            .iter()
            .find(|u| u.user_id == user_id)
            .map(|u| u.balance)
    }
}

fn apply(user: &User, operation: Operation, amount: Amount) -> LedgerResult<CoinBalance> {
    let current = user.coin_balance;
    if operation.is_debit() {
        current
            .debit(amount)
            .ok_or(LedgerError::InsufficientBalance {
                user_id: user.user_id,
                balance: current.value(),
                requested: amount.value(),
            })
    } else {
        current
            .credit(amount)
            .ok_or(LedgerError::BalanceOverflow(user.user_id))
    }
}

/// Movement on a single user's balance
///
/// Callers restrict `operation` to `ADD` / `USE`; transfers go through
/// [`post_transfer`].
pub fn post_single(
    user: &User,
    operation: Operation,
    amount: Amount,
    at: DateTime<Utc>,
) -> LedgerResult<LedgerPosting> {
    let balance = apply(user, operation, amount)?;

    Ok(LedgerPosting {
        updates: vec![BalanceUpdate {
            user_id: user.user_id,
            balance,
        }],
        histories: vec![NewCoinHistory::new(user.user_id, operation, amount, at)],
    })
}

/// `SEND` from `sender` paired with `RECEIVE` for `receiver`
///
/// Both history rows carry the same timestamp.
pub fn post_transfer(
    sender: &User,
    receiver: &User,
    amount: Amount,
    at: DateTime<Utc>,
) -> LedgerResult<LedgerPosting> {
    if sender.user_id == receiver.user_id {
        return Err(LedgerError::validation(
            "receiver",
            "must differ from sender",
        ));
    }

    let sender_balance = apply(sender, Operation::Send, amount)?;
    let receiver_balance = apply(receiver, Operation::Receive, amount)?;

    Ok(LedgerPosting {
        updates: vec![
            BalanceUpdate {
                user_id: sender.user_id,
                balance: sender_balance,
            },
            BalanceUpdate {
                user_id: receiver.user_id,
                balance: receiver_balance,
            },
        ],
        histories: vec![
            NewCoinHistory::new(sender.user_id, Operation::Send, amount, at),
            NewCoinHistory::new(receiver.user_id, Operation::Receive, amount, at),
        ],
    })
}
