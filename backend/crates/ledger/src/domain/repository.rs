//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{
    coin_history::CoinHistory,
    user::{NewUser, User},
};
use crate::domain::services::LedgerPosting;
use crate::domain::value_object::user_id::UserId;
use crate::error::LedgerResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return it with its assigned id
    async fn create(&self, user: &NewUser) -> LedgerResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: UserId) -> LedgerResult<Option<User>>;
}

/// Coin history repository trait
#[trait_variant::make(CoinHistoryRepository: Send)]
pub trait LocalCoinHistoryRepository {
    /// All history rows of a user, oldest first (ties broken by id)
    async fn find_by_user_id(&self, user_id: UserId) -> LedgerResult<Vec<CoinHistory>>;
}

/// Atomic writer for balance-affecting operations
#[trait_variant::make(LedgerUnitOfWork: Send)]
pub trait LocalLedgerUnitOfWork {
    /// Write every balance update and history row of `posting` in one
    /// transaction. Nothing is written if any step fails.
    ///
    /// Returns the inserted history rows in posting order.
    async fn apply(&self, posting: &LedgerPosting) -> LedgerResult<Vec<CoinHistory>>;
}
