//! 应用服务层
//!
//! 在调用存储之前做必填字段校验，并把单条商品查询的 no-rows 翻译为领域错误。

mod product_service;
mod variant_service;

pub use product_service::*;
pub use variant_service::*;

use async_trait::async_trait;
use catalog_errors::AppResult;
use catalog_ports::{Product, ProductFilter, ProductWithVariants, Variant};

/// 商品服务
#[async_trait]
pub trait ProductService: Send + Sync {
    async fn get_by_id(&self, id: &str) -> AppResult<ProductWithVariants>;

    async fn get_all(&self, filter: &ProductFilter) -> AppResult<Vec<ProductWithVariants>>;

    async fn create(&self, product: Product) -> AppResult<Product>;
}

/// 变体服务
#[async_trait]
pub trait VariantService: Send + Sync {
    async fn get_by_id(&self, id: &str, product_id: &str) -> AppResult<Variant>;

    async fn create(&self, variant: Variant) -> AppResult<Variant>;
}

/// 返回值为空串的字段名，保持声明顺序
fn missing_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| *name)
        .collect()
}
