//! Store trait 定义

use async_trait::async_trait;
use catalog_errors::AppResult;

use crate::{Product, ProductFilter, ProductWithVariants, Variant, VariantInfo};

/// 变体存储
#[async_trait]
pub trait VariantStore: Send + Sync {
    /// 按 (id, product_id) 查找，未命中返回 `AppError::NoRows`
    async fn get_by_id(&self, id: &str, product_id: &str) -> AppResult<Variant>;

    /// 插入变体，成功时原样返回输入
    async fn create(&self, variant: Variant) -> AppResult<Variant>;

    /// 商品的全部变体，按存储顺序；没有变体时返回空列表
    async fn get_variant_data(&self, product_id: &str) -> AppResult<Vec<VariantInfo>>;
}

/// 商品存储
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// 按 id 查找，变体列表留空；未命中返回 `AppError::NoRows`
    async fn get_by_id(&self, id: &str) -> AppResult<ProductWithVariants>;

    /// 按过滤条件列出商品，并为每个商品挂载变体
    async fn get_all(&self, filter: &ProductFilter) -> AppResult<Vec<ProductWithVariants>>;

    /// 插入商品，成功时原样返回输入
    async fn create(&self, product: Product) -> AppResult<Product>;
}
