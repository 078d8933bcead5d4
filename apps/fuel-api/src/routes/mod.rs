//! HTTP route handlers.
//!
//! ## Route Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /health                                                         │
//! │                                                                         │
//! │  GET    /api/vehicles                 POST /api/vehicles                │
//! │  GET    /api/vehicles/{id}            PUT  /api/vehicles/{id}           │
//! │  DELETE /api/vehicles/{id}            (cascades to fuel records)        │
//! │  GET    /api/vehicles/{id}/fuel       POST /api/vehicles/{id}/fuel      │
//! │  GET    /api/vehicles/{id}/fuel/stats                                   │
//! │                                                                         │
//! │  GET    /api/fuel-records             POST /api/fuel-records            │
//! │  GET    /api/fuel-records/{id}        PUT  /api/fuel-records/{id}       │
//! │  DELETE /api/fuel-records/{id}                                          │
//! │                                                                         │
//! │  GET    /api/fuel-stats?vehicleId=N                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every success body is `{ "success": true, "data": ..., "message"?: ... }`.

use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::state::AppState;

pub mod fuel_records;
pub mod health;
pub mod stats;
pub mod vehicles;

/// Success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        ApiResponse {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// All `/api` routes, ready to be nested.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/vehicles",
            get(vehicles::list_vehicles).post(vehicles::create_vehicle),
        )
        .route(
            "/vehicles/{id}",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        )
        .route(
            "/vehicles/{id}/fuel",
            get(fuel_records::list_for_vehicle).post(fuel_records::create_for_vehicle),
        )
        .route("/vehicles/{id}/fuel/stats", get(stats::vehicle_stats))
        .route(
            "/fuel-records",
            get(fuel_records::list_fuel_records).post(fuel_records::create_fuel_record),
        )
        .route(
            "/fuel-records/{id}",
            get(fuel_records::get_fuel_record)
                .put(fuel_records::update_fuel_record)
                .delete(fuel_records::delete_fuel_record),
        )
        .route("/fuel-stats", get(stats::stats_by_query))
}
