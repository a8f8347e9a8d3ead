//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use std::sync::Arc;

use crate::application::config::LedgerConfig;
use crate::application::{
    AddUseCoinInput, AddUseCoinUseCase, GetBalanceInput, GetBalanceUseCase, ListHistoriesInput,
    ListHistoriesUseCase, RegisterUserInput, RegisterUserUseCase, SendCoinInput, SendCoinUseCase,
};
use crate::domain::repository::{CoinHistoryRepository, LedgerUnitOfWork, UserRepository};
use crate::error::LedgerResult;
use crate::presentation::dto::{
    AddUseCoinRequest, AddUseCoinResponse, BalanceResponse, HistoryResponse,
    RegisterUserRequest, RegisterUserResponse, SendCoinRequest, SendCoinResponse, raw_digits,
};

/// Shared state for ledger handlers
#[derive(Clone)]
pub struct LedgerAppState<R>
where
    R: UserRepository + CoinHistoryRepository + LedgerUnitOfWork + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<LedgerConfig>,
}

// ============================================================================
// User
// ============================================================================

/// POST /v1/user
pub async fn register_user<R>(
    State(state): State<LedgerAppState<R>>,
    body: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> LedgerResult<Json<RegisterUserResponse>>
where
    R: UserRepository + CoinHistoryRepository + LedgerUnitOfWork + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let use_case = RegisterUserUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(RegisterUserInput {
            user_name: req.username.unwrap_or_default(),
            password: req.password.unwrap_or_default(),
        })
        .await?;

    Ok(Json(RegisterUserResponse {
        user_id: output.user_id.as_i64(),
        user_name: output.user_name,
        balance: output.coin_balance,
    }))
}

/// GET /v1/user/{userid}
pub async fn get_balance<R>(
    State(state): State<LedgerAppState<R>>,
    Path(user_id): Path<String>,
) -> LedgerResult<Json<BalanceResponse>>
where
    R: UserRepository + CoinHistoryRepository + LedgerUnitOfWork + Clone + Send + Sync + 'static,
{
    let use_case = GetBalanceUseCase::new(state.repo.clone());
    let output = use_case.execute(GetBalanceInput { user_id }).await?;

    Ok(Json(BalanceResponse {
        user_id: output.user_id.as_i64(),
        balance: output.coin_balance,
    }))
}

// ============================================================================
// Coin
// ============================================================================

/// PUT /v1/coin
pub async fn add_use_coin<R>(
    State(state): State<LedgerAppState<R>>,
    body: Result<Json<AddUseCoinRequest>, JsonRejection>,
) -> LedgerResult<Json<AddUseCoinResponse>>
where
    R: UserRepository + CoinHistoryRepository + LedgerUnitOfWork + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let use_case = AddUseCoinUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case
        .execute(AddUseCoinInput {
            user_id: raw_digits(req.user_id),
            operation: req.operation.unwrap_or_default(),
            amount: raw_digits(req.amount),
        })
        .await?;

    Ok(Json(AddUseCoinResponse {
        user_id: output.user_id.as_i64(),
        operation: output.operation,
        amount: output.amount,
        balance: output.coin_balance,
    }))
}

/// PUT /v1/coin/send
pub async fn send_coin<R>(
    State(state): State<LedgerAppState<R>>,
    body: Result<Json<SendCoinRequest>, JsonRejection>,
) -> LedgerResult<Json<SendCoinResponse>>
where
    R: UserRepository + CoinHistoryRepository + LedgerUnitOfWork + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;
    let use_case = SendCoinUseCase::new(state.repo.clone(), state.repo.clone());

    let output = use_case
        .execute(SendCoinInput {
            sender: raw_digits(req.sender),
            receiver: raw_digits(req.receiver),
            amount: raw_digits(req.amount),
        })
        .await?;

    Ok(Json(SendCoinResponse {
        sender: output.sender.as_i64(),
        receiver: output.receiver.as_i64(),
        amount: output.amount,
        sender_balance: output.sender_balance,
    }))
}

/// GET /v1/coin/{userid}
pub async fn list_histories<R>(
    State(state): State<LedgerAppState<R>>,
    Path(user_id): Path<String>,
) -> LedgerResult<Json<Vec<HistoryResponse>>>
where
    R: UserRepository + CoinHistoryRepository + LedgerUnitOfWork + Clone + Send + Sync + 'static,
{
    let use_case = ListHistoriesUseCase::new(state.repo.clone());
    let entries = use_case.execute(ListHistoriesInput { user_id }).await?;

    Ok(Json(
        entries
            .into_iter()
            .map(|e| HistoryResponse {
                operation: e.operation,
                operation_timestamp: e.operation_timestamp,
                amount: e.amount,
            })
            .collect(),
    ))
}
