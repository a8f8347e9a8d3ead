//! Get Balance Use Case

use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::{UserId, parse_user_id};
use crate::error::{LedgerError, LedgerResult};

/// Get balance input
pub struct GetBalanceInput {
    pub user_id: String,
}

/// Get balance output
#[derive(Debug)]
pub struct GetBalanceOutput {
    pub user_id: UserId,
    pub coin_balance: i64,
}

/// Get balance use case
pub struct GetBalanceUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetBalanceUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: GetBalanceInput) -> LedgerResult<GetBalanceOutput> {
        let user_id = parse_user_id("userid", &input.user_id)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(LedgerError::UserNotFound(user_id))?;

        tracing::debug!(
            user_id = %user.user_id,
            coin_balance = user.coin_balance.value(),
            "Balance fetched"
        );

        Ok(GetBalanceOutput {
            user_id: user.user_id,
            coin_balance: user.coin_balance.value(),
        })
    }
}
