//! JSON API handlers

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Json};
use serde::Serialize;

use crate::server::AppState;

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub mode: String,
    pub version: &'static str,
}

pub async fn api_health(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "ok",
        mode: state.config.build.mode.to_string(),
        version: env!("CARGO_PKG_VERSION"),
    };

    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_body_shape() {
        let body = HealthResponse {
            status: "ok",
            mode: "export".to_string(),
            version: "0.1.0",
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"status": "ok", "mode": "export", "version": "0.1.0"})
        );
    }
}
