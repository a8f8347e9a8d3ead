//! Register User Use Case
//!
//! Creates a new user with a zero balance.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::LedgerConfig;
use crate::domain::entity::user::NewUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::{LedgerError, LedgerResult};

/// Register user input
pub struct RegisterUserInput {
    pub user_name: String,
    pub password: String,
}

/// Register user output
#[derive(Debug)]
pub struct RegisterUserOutput {
    pub user_id: UserId,
    pub user_name: String,
    pub coin_balance: i64,
}

/// Register user use case
pub struct RegisterUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<LedgerConfig>,
}

impl<U> RegisterUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<LedgerConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> LedgerResult<RegisterUserOutput> {
        let user_name = UserName::new(&input.user_name)
            .map_err(|e| LedgerError::validation("username", e.to_string()))?;

        // Validate and hash password
        let password = ClearTextPassword::new(input.password, &self.config.password_policy)?;
        let password_hash = password.hash(self.config.pepper())?;

        let user = self
            .user_repo
            .create(&NewUser::new(user_name, password_hash))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(RegisterUserOutput {
            user_id: user.user_id,
            user_name: user.user_name.into(),
            coin_balance: user.coin_balance.value(),
        })
    }
}
