use std::str::FromStr;
use std::time::Duration;

use roster_core::models::User;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use crate::queries::Queries;

pub struct RosterDatabase {
    pub pool: SqlitePool,
}

impl RosterDatabase {
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            // Serialize concurrent writers instead of failing with SQLITE_BUSY
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Insert a new user and return the persisted row. A duplicate username
    /// is rejected by the UNIQUE constraint inside the same statement, so a
    /// failed insert leaves no row behind.
    pub async fn create_user(&self, username: &str) -> Result<User, sqlx::Error> {
        let row = sqlx::query(Queries::CREATE_USER)
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        Ok(User {
            id: row.get("id"),
            username: row.get("username"),
        })
    }

    /// All users, in storage order.
    pub async fn list_users(&self) -> Result<Vec<User>, sqlx::Error> {
        let rows = sqlx::query(Queries::LIST_USERS)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| User {
                id: row.get("id"),
                username: row.get("username"),
            })
            .collect())
    }

    pub async fn count_users_named(&self, username: &str) -> Result<i64, sqlx::Error> {
        let row = sqlx::query(Queries::COUNT_USERS_NAMED)
            .bind(username)
            .fetch_one(&self.pool)
            .await?;

        let count: i64 = row.get("count");
        Ok(count)
    }
}
