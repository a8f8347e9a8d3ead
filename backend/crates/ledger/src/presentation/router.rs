//! Ledger Router

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::LedgerConfig;
use crate::domain::repository::{CoinHistoryRepository, LedgerUnitOfWork, UserRepository};
use crate::infra::postgres::PgLedgerRepository;
use crate::presentation::handlers::{self, LedgerAppState};

/// Create the Ledger router with PostgreSQL repository
pub fn ledger_router(repo: PgLedgerRepository, config: LedgerConfig) -> Router {
    ledger_router_generic(repo, config)
}

/// Create a generic Ledger router for any repository implementation
pub fn ledger_router_generic<R>(repo: R, config: LedgerConfig) -> Router
where
    R: UserRepository + CoinHistoryRepository + LedgerUnitOfWork + Clone + Send + Sync + 'static,
{
    let state = LedgerAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/user", post(handlers::register_user::<R>))
        .route("/user/{userid}", get(handlers::get_balance::<R>))
        .route("/coin", put(handlers::add_use_coin::<R>))
        .route("/coin/send", put(handlers::send_coin::<R>))
        .route("/coin/{userid}", get(handlers::list_histories::<R>))
        .with_state(state)
}
