//! Storage port: repository trait for shipment records.

use std::future::Future;

use bayanchor_domain::error::BayanchorError;
use bayanchor_domain::id::TrackingNumber;
use bayanchor_domain::shipment::TrackingData;

/// Repository for persisting and querying [`TrackingData`] records.
pub trait ShipmentRepository {
    /// Insert a record, or replace the one with the same tracking number.
    fn upsert(
        &self,
        data: TrackingData,
    ) -> impl Future<Output = Result<TrackingData, BayanchorError>> + Send;

    /// Get a record by its tracking number.
    fn get_by_tracking_number(
        &self,
        number: &TrackingNumber,
    ) -> impl Future<Output = Result<Option<TrackingData>, BayanchorError>> + Send;

    /// Get all records, most recently updated first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<TrackingData>, BayanchorError>> + Send;
}
