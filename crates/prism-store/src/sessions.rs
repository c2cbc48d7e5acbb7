//! # Ordered-Sessions Ledger
//!
//! The persistence adapter for the checkout flow: records which photo
//! sessions have already been turned into print orders.
//!
//! ## Storage Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Storage Layout                                │
//! │                                                                         │
//! │  kv_store table                                                        │
//! │  ┌──────────────────┬──────────────────────────────┬────────────────┐  │
//! │  │ key              │ value                        │ updated_at     │  │
//! │  ├──────────────────┼──────────────────────────────┼────────────────┤  │
//! │  │ "orderedSessions"│ ["sess41","sess42","sess43"] │ 2026-08-08T... │  │
//! │  └──────────────────┴──────────────────────────────┴────────────────┘  │
//! │                                                                         │
//! │  One fixed key; the value is a JSON array of session-id strings.       │
//! │  The browser original held the same array in localStorage.             │
//! │                                                                         │
//! │  CONCURRENCY: single writer by design - one checkout happens at a      │
//! │  time on a kiosk. `record` does read-merge-write without a lock.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use std::collections::BTreeSet;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

/// Fixed key the ledger lives under.
pub const ORDERED_SESSIONS_KEY: &str = "orderedSessions";

/// Repository for the ordered-sessions ledger.
#[derive(Debug, Clone)]
pub struct SessionLedger {
    pool: SqlitePool,
}

impl SessionLedger {
    /// Creates a new SessionLedger.
    pub fn new(pool: SqlitePool) -> Self {
        SessionLedger { pool }
    }

    /// Reads the persisted set of ordered session ids.
    ///
    /// ## Returns
    /// - Empty set when the key has never been written
    /// - [`StoreError::Corrupt`] when the stored value is not a JSON string
    ///   array
    pub async fn read(&self) -> StoreResult<BTreeSet<String>> {
        debug!(key = ORDERED_SESSIONS_KEY, "Reading ordered sessions");

        let raw: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
                .bind(ORDERED_SESSIONS_KEY)
                .fetch_optional(&self.pool)
                .await?;

        match raw {
            None => Ok(BTreeSet::new()),
            Some(json) => serde_json::from_str::<BTreeSet<String>>(&json)
                .map_err(|e| StoreError::corrupt(ORDERED_SESSIONS_KEY, e.to_string())),
        }
    }

    /// Writes the full set of ordered session ids, replacing any prior value.
    ///
    /// The set serializes as a sorted JSON array, so repeated writes of the
    /// same set are byte-identical on disk.
    pub async fn write(&self, sessions: &BTreeSet<String>) -> StoreResult<()> {
        let json = serde_json::to_string(sessions)
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        debug!(
            key = ORDERED_SESSIONS_KEY,
            count = sessions.len(),
            "Writing ordered sessions"
        );

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(ORDERED_SESSIONS_KEY)
        .bind(json)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Merges `sessions` into the persisted set and writes it back.
    ///
    /// ## Returns
    /// The merged set, for the caller's confirmation record.
    ///
    /// ## Idempotency
    /// Recording sessions that are already in the ledger is a no-op on the
    /// set's contents; calling twice with the same cart leaves the ledger
    /// unchanged after the first call.
    pub async fn record(
        &self,
        sessions: impl IntoIterator<Item = String>,
    ) -> StoreResult<BTreeSet<String>> {
        let mut merged = self.read().await?;
        merged.extend(sessions);
        self.write(&merged).await?;

        info!(total = merged.len(), "Ordered sessions recorded");

        Ok(merged)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
