//! Visit persistence: the visit log, per-country aggregates, and the
//! last-known-country marker.
//!
//! The store is the durability boundary for the tracker. Its two invariants:
//!
//! - `record_visit` writes the visit row and the stats upsert in a single
//!   transaction, so a crash can never leave one without the other.
//! - The stats upsert is `INSERT .. ON CONFLICT DO UPDATE SET
//!   visit_count = visit_count + 1`, so increments are exact even with a
//!   second process writing to the same database file.

use log::debug;
use sqlx::{FromRow, Row, SqlitePool};

use crate::config::LAST_COUNTRY_KEY;
use crate::error_handling::StoreError;
use crate::models::CountryId;

/// Aggregate visit statistics for one country.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CountryStats {
    /// Country display name.
    pub country: String,
    /// Number of recorded visits (transitions into this country).
    pub visit_count: i64,
    /// Timestamp of the first recorded visit.
    pub first_visit: i64,
    /// Timestamp of the most recent recorded visit.
    pub last_visit: i64,
}

/// SQLite-backed store for visits, statistics, and the last-country marker.
///
/// The store has no write policy of its own; the tracker decides *when* to
/// write, the store guarantees *how* (atomically, exactly once).
#[derive(Clone)]
pub struct VisitStore {
    pool: SqlitePool,
}

impl VisitStore {
    /// Creates a store over an initialized pool (migrations already applied).
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the last known country, or `None` before the first visit.
    pub async fn last_country(&self) -> Result<Option<CountryId>, StoreError> {
        let row = sqlx::query("SELECT value FROM app_state WHERE key = ?")
            .bind(LAST_COUNTRY_KEY)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| CountryId::from(r.get::<String, _>(0))))
    }

    /// Updates the last known country marker.
    pub async fn set_last_country(&self, country: &CountryId) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO app_state (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(LAST_COUNTRY_KEY)
        .bind(country.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Records a country visit: appends to the visit log and upserts the
    /// per-country counters in one transaction.
    pub async fn record_visit(
        &self,
        country: &CountryId,
        latitude: f64,
        longitude: f64,
        timestamp: i64,
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO visits (country, latitude, longitude, timestamp)
             VALUES (?, ?, ?, ?)",
        )
        .bind(country.as_str())
        .bind(latitude)
        .bind(longitude)
        .bind(timestamp)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO country_stats (country, visit_count, first_visit, last_visit)
             VALUES (?, 1, ?, ?)
             ON CONFLICT(country) DO UPDATE SET
                 visit_count = visit_count + 1,
                 last_visit = excluded.last_visit",
        )
        .bind(country.as_str())
        .bind(timestamp)
        .bind(timestamp)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!("Recorded visit: {country} at {latitude}, {longitude}");

        Ok(())
    }

    /// Returns per-country statistics ordered by visit count descending.
    ///
    /// Ties are broken by rowid, i.e. by the order countries were first
    /// visited, so the ordering is deterministic.
    pub async fn visit_stats(&self) -> Result<Vec<CountryStats>, StoreError> {
        let stats = sqlx::query_as::<_, CountryStats>(
            "SELECT country, visit_count, first_visit, last_visit
             FROM country_stats
             ORDER BY visit_count DESC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stats)
    }

    /// Returns the total number of rows in the visit log.
    pub async fn visit_log_len(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visits")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_helpers::create_test_pool;

    #[tokio::test]
    async fn last_country_is_none_on_fresh_database() {
        let store = VisitStore::new(create_test_pool().await);
        assert_eq!(store.last_country().await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_last_country_is_read_after_write_consistent() {
        let store = VisitStore::new(create_test_pool().await);

        store
            .set_last_country(&CountryId::from("Brazil"))
            .await
            .unwrap();
        assert_eq!(
            store.last_country().await.unwrap(),
            Some(CountryId::from("Brazil"))
        );

        // Overwriting keeps a single row
        store
            .set_last_country(&CountryId::from("Chile"))
            .await
            .unwrap();
        assert_eq!(
            store.last_country().await.unwrap(),
            Some(CountryId::from("Chile"))
        );
    }

    #[tokio::test]
    async fn record_visit_creates_log_row_and_stats_row() {
        let store = VisitStore::new(create_test_pool().await);
        let country = CountryId::from("Japan");

        store.record_visit(&country, 35.6, 139.7, 1000).await.unwrap();

        assert_eq!(store.visit_log_len().await.unwrap(), 1);
        let stats = store.visit_stats().await.unwrap();
        assert_eq!(
            stats,
            vec![CountryStats {
                country: "Japan".to_string(),
                visit_count: 1,
                first_visit: 1000,
                last_visit: 1000,
            }]
        );
    }

    #[tokio::test]
    async fn repeated_visits_increment_count_and_keep_first_visit() {
        let store = VisitStore::new(create_test_pool().await);
        let country = CountryId::from("Japan");

        store.record_visit(&country, 35.6, 139.7, 1000).await.unwrap();
        store.record_visit(&country, 36.0, 140.0, 2000).await.unwrap();
        store.record_visit(&country, 34.9, 139.1, 3000).await.unwrap();

        let stats = store.visit_stats().await.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].visit_count, 3);
        assert_eq!(stats[0].first_visit, 1000);
        assert_eq!(stats[0].last_visit, 3000);
        assert_eq!(store.visit_log_len().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn stats_are_ordered_by_count_descending() {
        let store = VisitStore::new(create_test_pool().await);

        let australia = CountryId::from("Australia");
        let brazil = CountryId::from("Brazil");
        store.record_visit(&australia, -25.0, 134.0, 1000).await.unwrap();
        store.record_visit(&brazil, -10.0, -55.0, 2000).await.unwrap();
        store.record_visit(&brazil, -11.0, -54.0, 3000).await.unwrap();

        let stats = store.visit_stats().await.unwrap();
        assert_eq!(stats[0].country, "Brazil");
        assert_eq!(stats[0].visit_count, 2);
        assert_eq!(stats[1].country, "Australia");
        assert_eq!(stats[1].visit_count, 1);
    }

    #[tokio::test]
    async fn tied_counts_keep_insertion_order() {
        let store = VisitStore::new(create_test_pool().await);

        for name in ["Chile", "Argentina", "Peru"] {
            store
                .record_visit(&CountryId::from(name), 0.0, 0.0, 1000)
                .await
                .unwrap();
        }

        let stats = store.visit_stats().await.unwrap();
        let names: Vec<&str> = stats.iter().map(|s| s.country.as_str()).collect();
        assert_eq!(names, vec!["Chile", "Argentina", "Peru"]);
    }
}
