//! Application Layer
//!
//! Use cases and application services.

pub mod add_use_coin;
pub mod config;
pub mod get_balance;
pub mod list_histories;
pub mod register_user;
pub mod send_coin;

// Re-exports
pub use add_use_coin::{AddUseCoinInput, AddUseCoinOutput, AddUseCoinUseCase};
pub use config::LedgerConfig;
pub use get_balance::{GetBalanceInput, GetBalanceOutput, GetBalanceUseCase};
pub use list_histories::{HistoryEntry, ListHistoriesInput, ListHistoriesUseCase};
pub use register_user::{RegisterUserInput, RegisterUserOutput, RegisterUserUseCase};
pub use send_coin::{SendCoinInput, SendCoinOutput, SendCoinUseCase};
