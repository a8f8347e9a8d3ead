//! Domain Layer
//!
//! Contains entities, value objects, ledger arithmetic and repository traits.

pub mod entity;
pub mod repository;
pub mod services;
pub mod value_object;

// Re-exports
pub use entity::{
    coin_history::{CoinHistory, NewCoinHistory},
    user::{NewUser, User},
};
pub use repository::{CoinHistoryRepository, LedgerUnitOfWork, UserRepository};
pub use services::{BalanceUpdate, LedgerPosting};
