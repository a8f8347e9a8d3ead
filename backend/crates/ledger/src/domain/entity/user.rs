//! User Entity
//!
//! Account holder with a coin balance.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{coin_balance::CoinBalance, user_id::UserId, user_name::UserName};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub user_id: UserId,
    /// Display name (not unique)
    pub user_name: UserName,
    /// Argon2id PHC string; never leaves the backend
    pub password_hash: HashedPassword,
    pub coin_balance: CoinBalance,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User about to be registered (no id yet)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub password_hash: HashedPassword,
    pub coin_balance: CoinBalance,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// New registrations always start with an empty balance
    pub fn new(user_name: UserName, password_hash: HashedPassword) -> Self {
        Self {
            user_name,
            password_hash,
            coin_balance: CoinBalance::ZERO,
            created_at: Utc::now(),
        }
    }
}
