//! SQLite-backed recording store.
//!
//! Handlers and the export tool hold no recording state of their own;
//! every call reads or writes directly against the pool. Connections are
//! scoped to each query and released on all exit paths.

mod models;

pub use models::{Recording, StoreStats};

use crate::error::Result;
use chrono::{DateTime, Utc};
use futures::stream::BoxStream;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct RecordingStore {
    pool: Pool<Sqlite>,
}

impl RecordingStore {
    /// Connect to the store, creating the database file if missing.
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to recording store at {}", database_url);

        let opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            // Prevent transient "database is locked" errors under concurrent access
            .busy_timeout(Duration::from_secs(5));

        // SQLite permits limited write concurrency; a single connection
        // avoids "database is locked" failures under axum concurrency.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await?;

        Ok(Self { pool })
    }

    /// Create the recordings table if it does not exist. Idempotent;
    /// safe against a table left by a previous run.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS recordings (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                prompt TEXT NOT NULL,
                audio BLOB NOT NULL,
                created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Insert one recording; the store assigns id and timestamp.
    pub async fn insert(&self, prompt: &str, audio: &[u8]) -> Result<i64> {
        let result = sqlx::query("INSERT INTO recordings (prompt, audio) VALUES (?1, ?2)")
            .bind(prompt)
            .bind(audio)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Total number of stored recordings, fresh at call time.
    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recordings")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Stream every recording, newest first. The id tiebreak makes the
    /// order total even when timestamps collide within one second.
    pub fn fetch_all_newest_first(&self) -> BoxStream<'_, sqlx::Result<Recording>> {
        sqlx::query_as::<_, Recording>(
            "SELECT id, prompt, audio, created_at FROM recordings \
             ORDER BY created_at DESC, id DESC",
        )
        .fetch(&self.pool)
    }

    /// Row count, summed audio size, and created_at range.
    pub async fn stats(&self) -> Result<StoreStats> {
        let row: (i64, i64, Option<DateTime<Utc>>, Option<DateTime<Utc>>) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(LENGTH(audio)), 0), MIN(created_at), MAX(created_at) \
             FROM recordings",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(StoreStats {
            total_recordings: row.0,
            total_audio_bytes: row.1,
            earliest: row.2,
            latest: row.3,
        })
    }
}
