//! Homepage statistics.

use axum::Json;
use axum::extract::State;

use bayanchor_app::ports::ShipmentRepository;
use bayanchor_domain::stat::Stat;

use crate::state::AppState;

/// `GET /api/stats`
pub async fn list<SR>(State(state): State<AppState<SR>>) -> Json<Vec<Stat>>
where
    SR: ShipmentRepository + Send + Sync + 'static,
{
    Json(state.stats.as_ref().clone())
}
