//! `SQLite` implementation of [`ShipmentRepository`].
//!
//! Records are stored as their JSON payload keyed by tracking number; the
//! timestamps are duplicated into columns for ordering.

use std::future::Future;

use chrono::SecondsFormat;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use bayanchor_app::ports::ShipmentRepository;
use bayanchor_domain::error::BayanchorError;
use bayanchor_domain::id::TrackingNumber;
use bayanchor_domain::shipment::TrackingData;
use bayanchor_domain::time::Timestamp;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`TrackingData`].
struct Wrapper(TrackingData);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<TrackingData> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let payload: String = row.try_get("payload")?;
        let data: TrackingData =
            serde_json::from_str(&payload).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        Ok(Self(data))
    }
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
fn column_time(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

const UPSERT: &str = "INSERT INTO shipments (tracking_number, payload, created_at, updated_at) \
     VALUES (?, ?, ?, ?) \
     ON CONFLICT(tracking_number) DO UPDATE SET \
     payload = excluded.payload, created_at = excluded.created_at, updated_at = excluded.updated_at";
const SELECT_BY_NUMBER: &str = "SELECT payload FROM shipments WHERE tracking_number = ?";
const SELECT_ALL: &str =
    "SELECT payload FROM shipments ORDER BY updated_at DESC, tracking_number ASC";

/// `SQLite`-backed shipment repository.
pub struct SqliteShipmentRepository {
    pool: SqlitePool,
}

impl SqliteShipmentRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ShipmentRepository for SqliteShipmentRepository {
    fn upsert(
        &self,
        data: TrackingData,
    ) -> impl Future<Output = Result<TrackingData, BayanchorError>> + Send {
        let pool = self.pool.clone();
        async move {
            let payload = serde_json::to_string(&data).map_err(StorageError::from)?;

            sqlx::query(UPSERT)
                .bind(data.tracking_number.as_str())
                .bind(payload)
                .bind(column_time(&data.created_at))
                .bind(column_time(&data.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(data)
        }
    }

    fn get_by_tracking_number(
        &self,
        number: &TrackingNumber,
    ) -> impl Future<Output = Result<Option<TrackingData>, BayanchorError>> + Send {
        let pool = self.pool.clone();
        let number = number.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NUMBER)
                .bind(number)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<TrackingData>, BayanchorError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
