//! Fuel record endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use fuel_core::{FuelRecord, FuelRecordId, FuelRecordInput, VehicleId};

use super::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/fuel-records`
pub async fn list_fuel_records(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<FuelRecord>>> {
    Json(ApiResponse::data(state.fuel().list()))
}

/// `GET /api/fuel-records/{id}`
pub async fn get_fuel_record(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<ApiResponse<FuelRecord>>> {
    let Path(id) = id?;
    let record = state.fuel().get(FuelRecordId::new(id))?;
    Ok(Json(ApiResponse::data(record)))
}

/// `POST /api/fuel-records` (vehicle id in the body)
pub async fn create_fuel_record(
    State(state): State<AppState>,
    body: Result<Json<FuelRecordInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse<FuelRecord>>)> {
    let Json(input) = body?;
    let record = state.fuel().create(&input)?;
    Ok(created(record))
}

/// `PUT /api/fuel-records/{id}`
pub async fn update_fuel_record(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<FuelRecordInput>, JsonRejection>,
) -> ApiResult<Json<ApiResponse<FuelRecord>>> {
    let Path(id) = id?;
    let Json(input) = body?;
    let record = state.fuel().update(FuelRecordId::new(id), &input)?;
    Ok(Json(ApiResponse::with_message(
        record,
        "Fuel record updated successfully",
    )))
}

/// `DELETE /api/fuel-records/{id}`
pub async fn delete_fuel_record(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let Path(id) = id?;
    state.fuel().delete(FuelRecordId::new(id))?;
    Ok(Json(ApiResponse::message(format!(
        "Fuel record with ID {} has been successfully deleted",
        id
    ))))
}

/// `GET /api/vehicles/{id}/fuel`
pub async fn list_for_vehicle(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<ApiResponse<Vec<FuelRecord>>>> {
    let Path(id) = id?;
    let records = state.fuel().list_for_vehicle(VehicleId::new(id))?;
    Ok(Json(ApiResponse::data(records)))
}

/// `POST /api/vehicles/{id}/fuel` (vehicle id from the path)
pub async fn create_for_vehicle(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<FuelRecordInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse<FuelRecord>>)> {
    let Path(id) = id?;
    let Json(input) = body?;
    let record = state.fuel().create_for_vehicle(VehicleId::new(id), &input)?;
    Ok(created(record))
}

fn created(record: FuelRecord) -> (StatusCode, Json<ApiResponse<FuelRecord>>) {
    (
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            record,
            "Fuel record created successfully",
        )),
    )
}
