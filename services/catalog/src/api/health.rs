//! 健康检查与 metrics 端点

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use catalog_adapter_postgres::check_connection;
use catalog_telemetry::HealthStatus;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use sqlx::PgPool;

#[derive(Clone)]
struct OpsState {
    pool: PgPool,
    metrics: PrometheusHandle,
}

pub fn ops_routes(pool: PgPool, metrics: PrometheusHandle) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(render_metrics))
        .with_state(OpsState { pool, metrics })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn readiness_check(State(state): State<OpsState>) -> (StatusCode, Json<HealthStatus>) {
    let mut status = HealthStatus::new();

    match check_connection(&state.pool).await {
        Ok(()) => status.add_check("postgres", true, None),
        Err(e) => status.add_check("postgres", false, Some(e.to_string())),
    }

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status))
}

async fn render_metrics(State(state): State<OpsState>) -> String {
    state.metrics.render()
}
