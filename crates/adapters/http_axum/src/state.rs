//! Shared application state for axum handlers.

use std::sync::Arc;

use bayanchor_app::ports::ShipmentRepository;
use bayanchor_app::services::shipment_service::ShipmentService;
use bayanchor_domain::stat::Stat;

/// Application state shared across all axum handlers.
///
/// Generic over the shipment repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<SR> {
    /// Shipment lookup service.
    pub shipment_service: Arc<ShipmentService<SR>>,
    /// Homepage statistics, fixed at startup.
    pub stats: Arc<Vec<Stat>>,
}

impl<SR> Clone for AppState<SR> {
    fn clone(&self) -> Self {
        Self {
            shipment_service: Arc::clone(&self.shipment_service),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<SR> AppState<SR>
where
    SR: ShipmentRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(shipment_service: ShipmentService<SR>, stats: Vec<Stat>) -> Self {
        Self {
            shipment_service: Arc::new(shipment_service),
            stats: Arc::new(stats),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also needed outside the HTTP layer,
    /// e.g. for seeding at startup.
    pub fn from_arcs(shipment_service: Arc<ShipmentService<SR>>, stats: Vec<Stat>) -> Self {
        Self {
            shipment_service,
            stats: Arc::new(stats),
        }
    }
}
