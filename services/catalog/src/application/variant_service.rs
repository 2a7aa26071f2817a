use std::sync::Arc;

use async_trait::async_trait;
use catalog_errors::{AppError, AppResult};
use catalog_ports::{Variant, VariantStore};
use tracing::warn;

use super::{missing_fields, VariantService};

pub struct CatalogVariantService {
    store: Arc<dyn VariantStore>,
}

impl CatalogVariantService {
    pub fn new(store: Arc<dyn VariantStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl VariantService for CatalogVariantService {
    /// no-rows 不做翻译，原样交给调用方
    async fn get_by_id(&self, id: &str, product_id: &str) -> AppResult<Variant> {
        self.store.get_by_id(id, product_id).await
    }

    async fn create(&self, variant: Variant) -> AppResult<Variant> {
        let missing = missing_fields(&[
            ("id", variant.id.as_str()),
            ("product_id", variant.product_id.as_str()),
            ("name", variant.name.as_str()),
            ("details", variant.details.as_str()),
        ]);

        if !missing.is_empty() {
            warn!(?missing, "Rejecting variant with missing fields");
            return Err(AppError::missing_param(missing));
        }

        self.store.create(variant).await
    }
}
