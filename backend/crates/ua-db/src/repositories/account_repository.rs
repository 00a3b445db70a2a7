//! SQLite-backed account store.
//!
//! Timestamps are stored as Unix seconds and birth dates as `YYYY-MM-DD`
//! text. Every read filters out soft-deleted rows, so a deleted account is
//! indistinguishable from one that never existed.

use crate::{DbError, Result as DbErrorResult, UserStore};

use ua_core::{Account, AccountChanges, ErrorLocation, NewAccount, PasswordDigest};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const ACCOUNT_COLUMNS: &str =
    "id, name, email, password_digest, birth_date, created_at, updated_at, deleted_at";

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for AccountRepository {
    async fn create(&self, account: &NewAccount) -> DbErrorResult<Account> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp();

        let sql = format!(
            r#"
                INSERT INTO accounts (
                    id, name, email, password_digest, birth_date,
                    created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, NULL)
                RETURNING {ACCOUNT_COLUMNS}
            "#
        );

        let row = sqlx::query(&sql)
            .bind(&id)
            .bind(&account.name)
            .bind(&account.email)
            .bind(account.password_digest.as_str())
            .bind(account.birth_date.map(format_birth_date))
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(map_unique_violation)?;

        account_from_row(&row)
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Account>> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = ? AND deleted_at IS NULL"
        );

        let row = sqlx::query(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Account>> {
        let sql =
            format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = ? AND deleted_at IS NULL");

        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    async fn update(&self, id: Uuid, changes: &AccountChanges) -> DbErrorResult<Option<Account>> {
        let now = Utc::now().timestamp();

        let sql = format!(
            r#"
                UPDATE accounts
                SET name = COALESCE(?, name),
                    birth_date = CASE WHEN ? THEN ? ELSE birth_date END,
                    updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
                RETURNING {ACCOUNT_COLUMNS}
            "#
        );

        // Present birth date (including an explicit clear) is written as-is
        let birth_date = changes.birth_date.map(|date| date.map(format_birth_date));

        let row = sqlx::query(&sql)
            .bind(changes.name.as_deref())
            .bind(birth_date.is_some())
            .bind(birth_date.flatten())
            .bind(now)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(account_from_row).transpose()
    }

    async fn soft_delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET deleted_at = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn format_birth_date(date: NaiveDate) -> String {
    date.format(BIRTH_DATE_FORMAT).to_string()
}

#[track_caller]
fn map_unique_violation(source: sqlx::Error) -> DbError {
    match &source {
        sqlx::Error::Database(db) if db.is_unique_violation() => DbError::DuplicateEmail {
            location: ErrorLocation::from(Location::caller()),
        },
        _ => DbError::from(source),
    }
}

#[track_caller]
fn decode_error(column: &'static str, message: impl ToString) -> DbError {
    DbError::Decode {
        column,
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

fn timestamp(value: i64, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| decode_error(column, format!("{} is out of range", value)))
}

fn account_from_row(row: &SqliteRow) -> DbErrorResult<Account> {
    let id: String = row.try_get("id")?;
    let digest: String = row.try_get("password_digest")?;
    let birth_date: Option<String> = row.try_get("birth_date")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;
    let deleted_at: Option<i64> = row.try_get("deleted_at")?;

    Ok(Account {
        id: Uuid::parse_str(&id).map_err(|e| decode_error("id", e))?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        password_digest: PasswordDigest::new(digest)
            .map_err(|e| decode_error("password_digest", e))?,
        birth_date: birth_date
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, BIRTH_DATE_FORMAT)
                    .map_err(|e| decode_error("birth_date", e))
            })
            .transpose()?,
        created_at: timestamp(created_at, "created_at")?,
        updated_at: timestamp(updated_at, "updated_at")?,
        deleted_at: deleted_at
            .map(|ts| timestamp(ts, "deleted_at"))
            .transpose()?,
    })
}
