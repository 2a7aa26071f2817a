//! HTTP API
//!
//! 路由、请求参数校验以及错误到 Problem Details 的映射。

mod error;
mod health;
mod products;
mod variants;

pub use error::{ApiError, ApiResult};
pub use health::ops_routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::application::{ProductService, VariantService};

/// 路由共享状态
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductService>,
    pub variants: Arc<dyn VariantService>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductService>, variants: Arc<dyn VariantService>) -> Self {
        Self { products, variants }
    }
}

/// 商品与变体路由
pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/products/{id}", get(products::get_product))
        .route("/products/{id}/variant", post(variants::create_variant))
        .route("/products/{id}/variant/{variant_id}", get(variants::get_variant))
        .with_state(state)
}
