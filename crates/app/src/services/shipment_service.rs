//! Shipment service: use-cases behind the tracking page.

use bayanchor_domain::error::{BayanchorError, NotFoundError, ValidationError};
use bayanchor_domain::id::TrackingNumber;
use bayanchor_domain::presenter::ShipmentDetailsView;
use bayanchor_domain::shipment::TrackingData;

use crate::ports::ShipmentRepository;

/// Application service for shipment records.
pub struct ShipmentService<R> {
    repo: R,
}

impl<R: ShipmentRepository> ShipmentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and store a record, replacing any previous version.
    ///
    /// # Errors
    ///
    /// Returns [`BayanchorError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, data), fields(tracking_number = %data.tracking_number))]
    pub async fn register(&self, data: TrackingData) -> Result<TrackingData, BayanchorError> {
        data.validate()?;
        self.repo.upsert(data).await
    }

    /// Store `data` under the tracking number taken from a request path.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TrackingNumberMismatch`] when `number` and
    /// the record disagree, otherwise the same errors as
    /// [`register`](Self::register).
    #[tracing::instrument(skip(self, data))]
    pub async fn replace(
        &self,
        number: &TrackingNumber,
        data: TrackingData,
    ) -> Result<TrackingData, BayanchorError> {
        if &data.tracking_number != number {
            return Err(ValidationError::TrackingNumberMismatch {
                path: number.to_string(),
                body: data.tracking_number.to_string(),
            }
            .into());
        }
        self.register(data).await
    }

    /// Look up a shipment, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`BayanchorError::NotFound`] when no shipment has `number`,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_shipment(&self, number: &TrackingNumber) -> Result<TrackingData, BayanchorError> {
        self.repo
            .get_by_tracking_number(number)
            .await?
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Shipment",
                    id: number.to_string(),
                }
                .into()
            })
    }

    /// Look up a shipment and format it for the details card.
    ///
    /// # Errors
    ///
    /// Same as [`get_shipment`](Self::get_shipment).
    #[tracing::instrument(skip(self))]
    pub async fn shipment_details(
        &self,
        number: &TrackingNumber,
    ) -> Result<ShipmentDetailsView, BayanchorError> {
        let data = self.get_shipment(number).await?;
        Ok(ShipmentDetailsView::from(&data))
    }

    /// List all shipments.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_shipments(&self) -> Result<Vec<TrackingData>, BayanchorError> {
        self.repo.get_all().await
    }
}
