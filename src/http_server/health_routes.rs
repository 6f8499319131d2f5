//! Health HTTP Routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::errors::route_not_found;
use crate::service::InternService;
use crate::store::ConnectionStatus;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub database: ConnectionStatus,
    pub version: String,
}

/// Health check route, mounted at `/health` under the API prefix
pub fn health_routes(service: Arc<InternService>) -> Router {
    Router::new()
        .route("/health", get(health_handler).fallback(route_not_found))
        .with_state(service)
}

/// Reports process liveness and store connectivity. Always 200: a
/// disconnected store is reported in the body, not the status.
async fn health_handler(State(service): State<Arc<InternService>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        message: "Server is running".to_string(),
        database: service.connection().status(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            message: "Server is running".to_string(),
            database: ConnectionStatus::Disconnected,
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["database"], "disconnected");
    }
}
