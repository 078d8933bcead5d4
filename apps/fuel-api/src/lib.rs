//! # Fuel API
//!
//! HTTP server for the vehicle fuel ledger.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Fuel API Layers                                │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  routes        │  │  services      │  │  fuel-core                 ││
//! │  │                │  │                │  │                            ││
//! │  │ • vehicles     │─►│ • Vehicle      │─►│ • RecordValidator          ││
//! │  │ • fuel_records │  │ • Fuel         │  │ • OdometerLedger           ││
//! │  │ • stats        │  │                │  │                            ││
//! │  │ • health       │  │ per-vehicle    │  └────────────────────────────┘│
//! │  └────────────────┘  │ VehicleLocks   │  ┌────────────────────────────┐│
//! │                      │                │─►│  fuel-store (in memory)    ││
//! │                      └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  Middleware: TraceLayer ─► CatchPanicLayer ─► CorsLayer                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `FUEL_API_HOST` - bind address (default: 0.0.0.0)
//! - `FUEL_API_PORT` - HTTP port (default: 8080)
//! - `FUEL_CONSUMPTION_POLICY` - `tank-excluded` (default) or `all-fuel`
//! - `FUEL_CORS_ORIGINS` - comma-separated allowed origins (default: any)

pub mod config;
pub mod error;
pub mod locks;
pub mod routes;
pub mod services;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use state::AppState;

/// Builds the full application router.
///
/// An empty origin list allows any origin; unparseable origins are skipped.
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .nest("/api", routes::api_routes())
        .with_state(state)
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|s| s.parse().ok()).collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use fuel_core::ConsumptionPolicy;
    use fuel_store::Store;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(policy: ConsumptionPolicy) -> Router {
        build_router(AppState::new(Store::new(), policy), &[])
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create_vehicle(app: &Router) -> u64 {
        let (status, body) = send(
            app,
            "POST",
            "/api/vehicles",
            Some(json!({ "brand": "Toyota", "model": "Corolla", "year": 2018 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["id"].as_u64().unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(ConsumptionPolicy::TankExcluded);
        let (status, body) = send(&app, "GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["policy"], "tank-excluded");
        assert_eq!(body["vehicles"], 0);
    }

    #[tokio::test]
    async fn test_vehicle_lifecycle() {
        let app = app(ConsumptionPolicy::TankExcluded);
        let id = create_vehicle(&app).await;

        let (status, body) = send(&app, "GET", &format!("/api/vehicles/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["brand"], "Toyota");

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/vehicles/{}", id),
            Some(json!({ "brand": " Honda ", "model": "Civic", "year": 2020 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["brand"], "Honda");

        let (status, body) = send(&app, "DELETE", &format!("/api/vehicles/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            format!("Vehicle with ID {} has been successfully deleted", id)
        );

        let (status, body) = send(&app, "GET", &format!("/api/vehicles/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(
            body["error"]["message"],
            format!("Vehicle with ID {} not found", id)
        );
    }

    #[tokio::test]
    async fn test_vehicle_validation_errors() {
        let app = app(ConsumptionPolicy::TankExcluded);

        let (status, body) = send(
            &app,
            "POST",
            "/api/vehicles",
            Some(json!({ "model": "Corolla", "year": 2018 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MISSING_FIELD");
        assert_eq!(body["error"]["message"], "Brand is required and cannot be null");

        let (status, body) = send(
            &app,
            "POST",
            "/api/vehicles",
            Some(json!({ "brand": "Benz", "model": "Wagen", "year": 1885 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "OUT_OF_RANGE");
        assert_eq!(body["error"]["message"], "Year must be 1886 or greater");
    }

    #[tokio::test]
    async fn test_malformed_requests() {
        let app = app(ConsumptionPolicy::TankExcluded);

        let request = Request::builder()
            .method("POST")
            .uri("/api/vehicles")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "GET", "/api/vehicles/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_REQUEST");
    }

    #[tokio::test]
    async fn test_fuel_records_and_stats() {
        let app = app(ConsumptionPolicy::TankExcluded);
        let id = create_vehicle(&app).await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/fuel-records",
            Some(json!({
                "vehicleId": id, "liters": 40.0, "price": 2.0, "odometer": 10000,
                "timestamp": "2024-01-01T08:00:00Z"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/vehicles/{}/fuel", id),
            Some(json!({
                "liters": 30.0, "price": 2.0, "odometer": 10500,
                "timestamp": "2024-01-08T08:00:00Z"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["vehicleId"], id);
        assert_eq!(body["data"]["totalPrice"], 60.0);

        let (status, body) = send(
            &app,
            "POST",
            "/api/fuel-records",
            Some(json!({ "vehicleId": id, "liters": 10.0, "price": 2.0, "odometer": 10400 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ODOMETER");
        assert_eq!(
            body["error"]["message"],
            "Odometer cannot decrease. Maximum odometer: 10500, New: 10400"
        );

        let (status, body) = send(&app, "GET", &format!("/api/vehicles/{}/fuel", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let (status, body) =
            send(&app, "GET", &format!("/api/fuel-stats?vehicleId={}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["totalLiters"], 70.0);
        assert_eq!(body["data"]["totalPrice"], 140.0);
        assert_eq!(body["data"]["avgPer100km"], 8.0);

        let (_, by_path) =
            send(&app, "GET", &format!("/api/vehicles/{}/fuel/stats", id), None).await;
        assert_eq!(by_path["data"], body["data"]);
    }

    #[tokio::test]
    async fn test_stats_query_errors() {
        let app = app(ConsumptionPolicy::TankExcluded);

        let (status, body) = send(&app, "GET", "/api/fuel-stats", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "vehicleId parameter is required");

        let (status, body) = send(&app, "GET", "/api/fuel-stats?vehicleId=abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "vehicleId must be a valid number. Received: 'abc'"
        );

        let (status, body) = send(&app, "GET", "/api/fuel-stats?vehicleId=42", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Vehicle with ID 42 not found");
    }

    #[tokio::test]
    async fn test_vehicle_delete_cascades() {
        let app = app(ConsumptionPolicy::AllFuelCounted);
        let id = create_vehicle(&app).await;

        let (_, body) = send(
            &app,
            "POST",
            &format!("/api/vehicles/{}/fuel", id),
            Some(json!({ "liters": 30.0, "price": 1.5, "odometer": 500 })),
        )
        .await;
        let record_id = body["data"]["id"].as_u64().unwrap();

        send(&app, "DELETE", &format!("/api/vehicles/{}", id), None).await;

        let (status, body) =
            send(&app, "GET", &format!("/api/fuel-records/{}", record_id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body["error"]["message"],
            format!("Fuel record with ID {} not found", record_id)
        );

        let (_, health) = send(&app, "GET", "/health", None).await;
        assert_eq!(health["fuelRecords"], 0);
    }

    #[tokio::test]
    async fn test_fuel_record_update_and_delete() {
        let app = app(ConsumptionPolicy::TankExcluded);
        let id = create_vehicle(&app).await;

        let (_, body) = send(
            &app,
            "POST",
            "/api/fuel-records",
            Some(json!({ "vehicleId": id, "liters": 30.0, "price": 1.5, "odometer": 500 })),
        )
        .await;
        let record_id = body["data"]["id"].as_u64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/fuel-records/{}", record_id),
            Some(json!({ "vehicleId": id, "liters": 32.0, "price": 1.5, "odometer": 520 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["odometer"], 520);
        assert_eq!(body["data"]["totalPrice"], 48.0);

        let (status, body) = send(
            &app,
            "DELETE",
            &format!("/api/fuel-records/{}", record_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            format!("Fuel record with ID {} has been successfully deleted", record_id)
        );

        let (status, _) = send(
            &app,
            "DELETE",
            &format!("/api/fuel-records/{}", record_id),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
