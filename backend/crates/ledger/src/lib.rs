//! Coin Ledger Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, ledger arithmetic, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User registration with a zero starting balance
//! - `ADD` / `USE` on a user's own balance
//! - `SEND` / `RECEIVE` transfers between two users
//! - Per-user coin history
//!
//! ## Invariants
//! - A balance never goes negative
//! - A balance always equals the sum of the user's history amounts: every
//!   balance change and its history rows commit in one transaction

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::LedgerConfig;
pub use error::{LedgerError, LedgerResult};
pub use infra::postgres::PgLedgerRepository;
pub use presentation::router::{ledger_router, ledger_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
