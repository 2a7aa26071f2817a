//! 变体接口

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use catalog_errors::AppError;
use catalog_ports::Variant;

use super::error::ApiResult;
use super::AppState;

pub async fn get_variant(
    State(state): State<AppState>,
    Path((pid, id)): Path<(String, String)>,
) -> ApiResult<Json<Variant>> {
    let variant = state.variants.get_by_id(&id, &pid).await?;
    Ok(Json(variant))
}

/// 路径中的商品 id 必须与请求体的 `product_id` 一致
pub async fn create_variant(
    State(state): State<AppState>,
    Path(pid): Path<String>,
    payload: Result<Json<Variant>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Variant>)> {
    let Json(variant) = payload.map_err(|_| AppError::invalid_param(["body"]))?;

    if variant.product_id != pid {
        return Err(AppError::invalid_param(["pid"]).into());
    }

    let created = state.variants.create(variant).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
