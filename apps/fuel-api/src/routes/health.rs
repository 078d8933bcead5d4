//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use fuel_core::ConsumptionPolicy;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub policy: ConsumptionPolicy,
    pub vehicles: usize,
    pub fuel_records: usize,
    pub server_time: DateTime<Utc>,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (vehicles, fuel_records) = state.store.counts();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        policy: state.ledger.policy(),
        vehicles,
        fuel_records,
        server_time: Utc::now(),
    })
}
