//! 服务启动与装配

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use catalog_adapter_postgres::{
    create_pool, PostgresConfig, PostgresProductStore, PostgresVariantStore,
};
use catalog_config::AppConfig;
use catalog_ports::VariantStore;
use catalog_telemetry::{init_metrics, init_tracing, init_tracing_json, TryInitError};
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{catalog_routes, ops_routes, AppState};
use crate::application::{CatalogProductService, CatalogVariantService};

/// 初始化服务运行时
pub fn init_runtime(config: &AppConfig) -> Result<(), TryInitError> {
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level)?;
    } else {
        init_tracing(&config.telemetry.log_level)?;
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );
    Ok(())
}

pub fn postgres_config(config: &AppConfig) -> PostgresConfig {
    PostgresConfig::new(config.database.url.expose_secret().clone())
        .with_max_connections(config.database.max_connections)
        .with_acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
}

/// 装配存储与服务
pub fn build_state(pool: PgPool) -> AppState {
    let variant_store: Arc<dyn VariantStore> = Arc::new(PostgresVariantStore::new(pool.clone()));
    let product_store = Arc::new(PostgresProductStore::new(pool, variant_store.clone()));

    AppState::new(
        Arc::new(CatalogProductService::new(product_store, variant_store.clone())),
        Arc::new(CatalogVariantService::new(variant_store)),
    )
}

/// 加载配置并运行 HTTP 服务，直到收到关闭信号
pub async fn run(config_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load(config_dir)?;
    init_runtime(&config)?;

    let metrics = init_metrics()?;

    let pool = create_pool(&postgres_config(&config)).await?;
    info!(max_connections = config.database.max_connections, "Database pool created");

    let app: Router = catalog_routes(build_state(pool.clone()))
        .merge(ops_routes(pool, metrics))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// 等待关闭信号
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
