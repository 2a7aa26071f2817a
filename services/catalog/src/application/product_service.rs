use std::sync::Arc;

use async_trait::async_trait;
use catalog_errors::{AppError, AppResult};
use catalog_ports::{Product, ProductFilter, ProductStore, ProductWithVariants, VariantStore};
use tracing::{debug, warn};

use super::{missing_fields, ProductService};

/// `EntityNotFound` 中商品的实体名
pub const PRODUCTS_ENTITY: &str = "products";

pub struct CatalogProductService {
    store: Arc<dyn ProductStore>,
    variant_store: Arc<dyn VariantStore>,
}

impl CatalogProductService {
    pub fn new(store: Arc<dyn ProductStore>, variant_store: Arc<dyn VariantStore>) -> Self {
        Self {
            store,
            variant_store,
        }
    }
}

#[async_trait]
impl ProductService for CatalogProductService {
    async fn get_by_id(&self, id: &str) -> AppResult<ProductWithVariants> {
        let product = self.store.get_by_id(id).await.map_err(|e| {
            if e.is_no_rows() {
                AppError::entity_not_found(id, PRODUCTS_ENTITY)
            } else {
                e
            }
        })?;

        // 变体查询失败时整个读取失败，不返回缺少变体的商品
        let variants = self.variant_store.get_variant_data(id).await?;
        debug!(id, variants = variants.len(), "Product loaded");

        Ok(product.with_variants(variants))
    }

    async fn get_all(&self, filter: &ProductFilter) -> AppResult<Vec<ProductWithVariants>> {
        self.store.get_all(filter).await
    }

    async fn create(&self, product: Product) -> AppResult<Product> {
        let missing = missing_fields(&[
            ("id", product.id.as_str()),
            ("name", product.name.as_str()),
            ("brand_name", product.brand_name.as_str()),
            ("details", product.details.as_str()),
            ("image_url", product.image_url.as_str()),
        ]);

        if !missing.is_empty() {
            warn!(?missing, "Rejecting product with missing fields");
            return Err(AppError::missing_param(missing));
        }

        self.store.create(product).await
    }
}
