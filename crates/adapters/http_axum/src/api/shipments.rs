//! JSON handlers for shipment lookup.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use bayanchor_app::ports::ShipmentRepository;
use bayanchor_domain::id::TrackingNumber;
use bayanchor_domain::presenter::ShipmentDetailsView;
use bayanchor_domain::shipment::TrackingData;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<TrackingData>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and put endpoints.
pub enum GetResponse {
    Ok(Json<TrackingData>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the details endpoint.
pub enum DetailsResponse {
    Ok(Json<ShipmentDetailsView>),
}

impl IntoResponse for DetailsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/shipments`
pub async fn list<SR>(State(state): State<AppState<SR>>) -> Result<ListResponse, ApiError>
where
    SR: ShipmentRepository + Send + Sync + 'static,
{
    let shipments = state.shipment_service.list_shipments().await?;
    Ok(ListResponse::Ok(Json(shipments)))
}

/// `GET /api/shipments/{tracking_number}`
pub async fn get<SR>(
    State(state): State<AppState<SR>>,
    Path(raw): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: ShipmentRepository + Send + Sync + 'static,
{
    let number: TrackingNumber = raw.parse()?;
    let shipment = state.shipment_service.get_shipment(&number).await?;
    Ok(GetResponse::Ok(Json(shipment)))
}

/// `GET /api/shipments/{tracking_number}/details`
pub async fn details<SR>(
    State(state): State<AppState<SR>>,
    Path(raw): Path<String>,
) -> Result<DetailsResponse, ApiError>
where
    SR: ShipmentRepository + Send + Sync + 'static,
{
    let number: TrackingNumber = raw.parse()?;
    let view = state.shipment_service.shipment_details(&number).await?;
    Ok(DetailsResponse::Ok(Json(view)))
}

/// `PUT /api/shipments/{tracking_number}`
///
/// A body that does not decode into a record is a validation failure.
pub async fn put<SR>(
    State(state): State<AppState<SR>>,
    Path(raw): Path<String>,
    body: Result<Json<TrackingData>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    SR: ShipmentRepository + Send + Sync + 'static,
{
    let number: TrackingNumber = raw.parse()?;
    let Json(data) = body?;
    let stored = state.shipment_service.replace(&number, data).await?;
    Ok(GetResponse::Ok(Json(stored)))
}
