//! API DTOs (Data Transfer Objects)
//!
//! Request fields are all optional so that a missing field reaches
//! validation and produces a field-specific error instead of a generic
//! deserialization failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::operation::Operation;

/// Numeric request field: accepts `"42"` as well as `42`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DigitField {
    Text(String),
    Number(serde_json::Number),
}

impl DigitField {
    /// Raw text handed to validation
    pub fn into_raw(self) -> String {
        match self {
            DigitField::Text(s) => s,
            DigitField::Number(n) => n.to_string(),
        }
    }
}

/// Missing fields become an empty string, which validation rejects
pub(crate) fn raw_digits(field: Option<DigitField>) -> String {
    field.map(DigitField::into_raw).unwrap_or_default()
}

// ============================================================================
// User
// ============================================================================

/// Register user request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Register user response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUserResponse {
    #[serde(rename = "userid")]
    pub user_id: i64,
    #[serde(rename = "username")]
    pub user_name: String,
    pub balance: i64,
}

/// Balance response
#[derive(Debug, Clone, Serialize)]
pub struct BalanceResponse {
    #[serde(rename = "userid")]
    pub user_id: i64,
    pub balance: i64,
}

// ============================================================================
// Coin
// ============================================================================

/// Add / use coin request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddUseCoinRequest {
    #[serde(rename = "userid")]
    pub user_id: Option<DigitField>,
    pub operation: Option<String>,
    pub amount: Option<DigitField>,
}

/// Add / use coin response
#[derive(Debug, Clone, Serialize)]
pub struct AddUseCoinResponse {
    #[serde(rename = "userid")]
    pub user_id: i64,
    pub operation: Operation,
    pub amount: i64,
    pub balance: i64,
}

/// Send coin request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendCoinRequest {
    pub sender: Option<DigitField>,
    pub receiver: Option<DigitField>,
    pub amount: Option<DigitField>,
}

/// Send coin response
#[derive(Debug, Clone, Serialize)]
pub struct SendCoinResponse {
    pub sender: i64,
    pub receiver: i64,
    pub amount: i64,
    pub sender_balance: i64,
}

/// One entry of `GET /coin/{userid}`
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub operation: Operation,
    pub operation_timestamp: DateTime<Utc>,
    pub amount: i64,
}
