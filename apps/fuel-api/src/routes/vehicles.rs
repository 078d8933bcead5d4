//! Vehicle endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fuel_core::{Vehicle, VehicleId, VehicleInput};

use super::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/vehicles`
pub async fn list_vehicles(State(state): State<AppState>) -> Json<ApiResponse<Vec<Vehicle>>> {
    Json(ApiResponse::data(state.vehicles().list()))
}

/// `GET /api/vehicles/{id}`
pub async fn get_vehicle(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<ApiResponse<Vehicle>>> {
    let Path(id) = id?;
    let vehicle = state.vehicles().get(VehicleId::new(id))?;
    Ok(Json(ApiResponse::data(vehicle)))
}

/// `POST /api/vehicles`
pub async fn create_vehicle(
    State(state): State<AppState>,
    body: Result<Json<VehicleInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Vehicle>>)> {
    let Json(input) = body?;
    let vehicle = state.vehicles().create(&input)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(vehicle, "Vehicle created successfully")),
    ))
}

/// `PUT /api/vehicles/{id}`
pub async fn update_vehicle(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<VehicleInput>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<Vehicle>>> {
    let Path(id) = id?;
    let Json(input) = body?;
    let vehicle = state.vehicles().update(VehicleId::new(id), &input)?;
    Ok(Json(ApiResponse::with_message(
        vehicle,
        "Vehicle updated successfully",
    )))
}

/// `DELETE /api/vehicles/{id}`
pub async fn delete_vehicle(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let Path(id) = id?;
    state.vehicles().delete(VehicleId::new(id))?;
    Ok(Json(ApiResponse::message(format!(
        "Vehicle with ID {} has been successfully deleted",
        id
    ))))
}
