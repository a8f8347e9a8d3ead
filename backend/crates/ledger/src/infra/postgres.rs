//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::{PgConnection, PgPool};

use crate::domain::entity::{
    coin_history::{CoinHistory, NewCoinHistory},
    user::{NewUser, User},
};
use crate::domain::repository::{CoinHistoryRepository, LedgerUnitOfWork, UserRepository};
use crate::domain::services::{BalanceUpdate, LedgerPosting};
use crate::domain::value_object::{
    coin_balance::CoinBalance,
    operation::UnknownOperation,
    user_id::{CoinHistoryId, UserId},
    user_name::UserName,
};
use crate::error::{LedgerError, LedgerResult};

/// PostgreSQL-backed ledger repository
#[derive(Clone)]
pub struct PgLedgerRepository {
    pool: PgPool,
}

impl PgLedgerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgLedgerRepository {
    async fn create(&self, user: &NewUser) -> LedgerResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (
                user_name,
                password_hash,
                coin_balance,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $4)
            RETURNING
                user_id,
                user_name,
                password_hash,
                coin_balance,
                created_at,
                updated_at
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.coin_balance.value())
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        row.into_user()
    }

    async fn find_by_id(&self, user_id: UserId) -> LedgerResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                user_name,
                password_hash,
                coin_balance,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Coin History Repository Implementation
// ============================================================================

impl CoinHistoryRepository for PgLedgerRepository {
    async fn find_by_user_id(&self, user_id: UserId) -> LedgerResult<Vec<CoinHistory>> {
        let rows = sqlx::query_as::<_, CoinHistoryRow>(
            r#"
            SELECT
                coin_history_id,
                user_id,
                operation,
                amount,
                operation_timestamp
            FROM coin_histories
            WHERE user_id = $1
            ORDER BY operation_timestamp ASC, coin_history_id ASC
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_history()).collect()
    }
}

// ============================================================================
// Ledger Unit of Work Implementation
// ============================================================================

impl LedgerUnitOfWork for PgLedgerRepository {
    async fn apply(&self, posting: &LedgerPosting) -> LedgerResult<Vec<CoinHistory>> {
        let mut tx = self.pool.begin().await?;

        match write_posting(&mut *tx, posting).await {
            Ok(histories) => {
                tx.commit().await?;
                Ok(histories)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Rolling back ledger posting");
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "Ledger rollback failed");
                }
                Err(e)
            }
        }
    }
}

async fn write_posting(
    conn: &mut PgConnection,
    posting: &LedgerPosting,
) -> LedgerResult<Vec<CoinHistory>> {
    for update in &posting.updates {
        update_balance(conn, update).await?;
    }

    let mut inserted = Vec::with_capacity(posting.histories.len());
    for history in &posting.histories {
        inserted.push(insert_history(conn, history).await?);
    }

    Ok(inserted)
}

async fn update_balance(conn: &mut PgConnection, update: &BalanceUpdate) -> LedgerResult<()> {
    let affected = sqlx::query(
        r#"
        UPDATE users SET
            coin_balance = $2,
            updated_at = NOW()
        WHERE user_id = $1
        "#,
    )
    .bind(update.user_id.as_i64())
    .bind(update.balance.value())
    .execute(&mut *conn)
    .await?
    .rows_affected();

    if affected == 0 {
        return Err(LedgerError::UserNotFound(update.user_id));
    }

    Ok(())
}

async fn insert_history(
    conn: &mut PgConnection,
    history: &NewCoinHistory,
) -> LedgerResult<CoinHistory> {
    let row = sqlx::query_as::<_, CoinHistoryRow>(
        r#"
        INSERT INTO coin_histories (
            user_id,
            operation,
            amount,
            operation_timestamp
        ) VALUES ($1, $2, $3, $4)
        RETURNING
            coin_history_id,
            user_id,
            operation,
            amount,
            operation_timestamp
        "#,
    )
    .bind(history.user_id.as_i64())
    .bind(history.operation.as_str())
    .bind(history.amount)
    .bind(history.operation_timestamp)
    .fetch_one(&mut *conn)
    .await?;

    row.into_history()
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    user_name: String,
    password_hash: String,
    coin_balance: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> LedgerResult<User> {
        let user_id = UserId::from_i64(self.user_id);

        let coin_balance = self
            .coin_balance
            .ok_or_else(|| LedgerError::Internal(format!("user {user_id} has no coin balance")))
            .and_then(|v| {
                CoinBalance::new(v).ok_or_else(|| {
                    LedgerError::Internal(format!("user {user_id} has negative coin balance {v}"))
                })
            })?;

        Ok(User {
            user_id,
            user_name: UserName::from_db(self.user_name),
            password_hash: HashedPassword::from_phc_string(self.password_hash)?,
            coin_balance,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct CoinHistoryRow {
    coin_history_id: i64,
    user_id: i64,
    operation: String,
    amount: i64,
    operation_timestamp: DateTime<Utc>,
}

impl CoinHistoryRow {
    fn into_history(self) -> LedgerResult<CoinHistory> {
        Ok(CoinHistory {
            coin_history_id: CoinHistoryId::from_i64(self.coin_history_id),
            user_id: UserId::from_i64(self.user_id),
            operation: self
                .operation
                .parse()
                .map_err(|e: UnknownOperation| LedgerError::Internal(e.to_string()))?,
            amount: self.amount,
            operation_timestamp: self.operation_timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::operation::Operation;

    const PHC: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

    fn user_row(coin_balance: Option<i64>) -> UserRow {
        let now = Utc::now();
        UserRow {
            user_id: 7,
            user_name: "alice".to_string(),
            password_hash: PHC.to_string(),
            coin_balance,
            created_at: now,
            updated_at: now,
        }
    }

    fn history_row(operation: &str) -> CoinHistoryRow {
        CoinHistoryRow {
            coin_history_id: 1,
            user_id: 7,
            operation: operation.to_string(),
            amount: -5,
            operation_timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_user_row_into_user() {
        let user = user_row(Some(40)).into_user().unwrap();
        assert_eq!(user.user_id.as_i64(), 7);
        assert_eq!(user.user_name.as_str(), "alice");
        assert_eq!(user.coin_balance.value(), 40);
    }

    #[test]
    fn test_null_balance_is_internal_error() {
        let err = user_row(None).into_user().unwrap_err();
        assert!(matches!(err, LedgerError::Internal(_)));
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_negative_balance_is_internal_error() {
        let err = user_row(Some(-1)).into_user().unwrap_err();
        assert!(matches!(err, LedgerError::Internal(_)));
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_invalid_password_hash_is_internal_error() {
        let mut row = user_row(Some(0));
        row.password_hash = "plain-text".to_string();
        let err = row.into_user().unwrap_err();
        assert!(matches!(err, LedgerError::PasswordHash(_)));
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_history_row_into_history() {
        let history = history_row("USE").into_history().unwrap();
        assert_eq!(history.operation, Operation::Use);
        assert_eq!(history.amount, -5);
    }

    #[test]
    fn test_unknown_operation_is_internal_error() {
        let err = history_row("REFUND").into_history().unwrap_err();
        assert!(matches!(err, LedgerError::Internal(_)));
        assert_eq!(err.code(), "INTERNAL_ERROR");
    }
}
