//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod shipments;
pub mod stats;

use axum::Router;
use axum::routing::get;

use bayanchor_app::ports::ShipmentRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<SR>() -> Router<AppState<SR>>
where
    SR: ShipmentRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/stats", get(stats::list::<SR>))
        .route("/shipments", get(shipments::list::<SR>))
        .route(
            "/shipments/{tracking_number}",
            get(shipments::get::<SR>).put(shipments::put::<SR>),
        )
        .route(
            "/shipments/{tracking_number}/details",
            get(shipments::details::<SR>),
        )
}
