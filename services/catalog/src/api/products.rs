//! 商品接口

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use catalog_errors::{AppError, AppResult};
use catalog_ports::{Product, ProductFilter, ProductWithVariants};
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ApiResult;
use super::AppState;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]{2,255}$").unwrap());

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductWithVariants>> {
    let product = state.products.get_by_id(&id).await?;
    Ok(Json(product))
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<ProductWithVariants>>> {
    let filter = parse_list_params(&params)?;
    let products = state.products.get_all(&filter).await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(product) = payload.map_err(|_| AppError::invalid_param(["body"]))?;
    let created = state.products.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// 校验列表查询参数：`pid` 必填且为整数，`vid` 为整数，`name` 符合命名规则
fn parse_list_params(params: &HashMap<String, String>) -> AppResult<ProductFilter> {
    let value = |key: &str| params.get(key).map(String::as_str).unwrap_or_default();

    let pid = value(ProductFilter::PID);
    if pid.is_empty() {
        return Err(AppError::missing_param([ProductFilter::PID]));
    }
    if pid.parse::<i64>().is_err() {
        return Err(AppError::invalid_param([ProductFilter::PID]));
    }

    let vid = value(ProductFilter::VID);
    if !vid.is_empty() && vid.parse::<i64>().is_err() {
        return Err(AppError::invalid_param([ProductFilter::VID]));
    }

    let name = value(ProductFilter::NAME);
    if !name.is_empty() && !NAME_REGEX.is_match(name) {
        return Err(AppError::invalid_param([ProductFilter::NAME]));
    }

    Ok(ProductFilter::from_params(params))
}
