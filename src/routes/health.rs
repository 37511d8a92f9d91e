use axum::{extract::State, response::Json, http::StatusCode};
use serde::Serialize;
use crate::db::{self, Store};

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: i64,
}

impl HealthResponse {
    fn now(status: &str) -> Self {
        HealthResponse {
            status: status.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse::now("ok")))
}

/// Succeeds only if a connection can be checked out and answers a query.
pub async fn ready_check(State(store): State<Store>) -> (StatusCode, Json<HealthResponse>) {
    let result = match store.session().await {
        Ok(mut conn) => db::ping(&mut conn).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::now("ok"))),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::now("unavailable")))
        }
    }
}
