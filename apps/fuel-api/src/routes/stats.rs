//! Consumption statistics endpoints.
//!
//! Two spellings of the same lookup: the id in the path, or in a
//! `vehicleId` query parameter that is parsed by hand so a bad value gets a
//! precise message.

use std::collections::HashMap;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use fuel_core::{FuelStats, VehicleId};

use super::ApiResponse;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// `GET /api/vehicles/{id}/fuel/stats`
pub async fn vehicle_stats(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<ApiResponse<FuelStats>>> {
    let Path(id) = id?;
    let stats = state.fuel().stats(VehicleId::new(id))?;
    Ok(Json(ApiResponse::data(stats)))
}

/// `GET /api/fuel-stats?vehicleId=N`
pub async fn stats_by_query(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ApiResponse<FuelStats>>> {
    let vehicle_id = parse_vehicle_id(params.get("vehicleId").map(String::as_str))?;
    let stats = state.fuel().stats(vehicle_id)?;
    Ok(Json(ApiResponse::data(stats)))
}

fn parse_vehicle_id(raw: Option<&str>) -> ApiResult<VehicleId> {
    let raw = raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::invalid_request("vehicleId parameter is required"))?;

    raw.parse::<u64>().map(VehicleId::new).map_err(|_| {
        ApiError::invalid_request(format!(
            "vehicleId must be a valid number. Received: '{}'",
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_vehicle_id() {
        assert_eq!(parse_vehicle_id(Some(" 12 ")).unwrap(), VehicleId::new(12));

        let err = parse_vehicle_id(None).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
        assert_eq!(err.message, "vehicleId parameter is required");

        let err = parse_vehicle_id(Some("  ")).unwrap_err();
        assert_eq!(err.message, "vehicleId parameter is required");

        let err = parse_vehicle_id(Some("abc")).unwrap_err();
        assert_eq!(err.message, "vehicleId must be a valid number. Received: 'abc'");
    }
}
