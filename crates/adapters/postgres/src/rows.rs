//! 数据库行结构

use catalog_ports::{ProductWithVariants, Variant, VariantInfo};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(crate) struct ProductRow {
    pub id: String,
    pub name: String,
    pub brand_name: String,
    pub details: String,
    pub image_url: String,
}

impl From<ProductRow> for ProductWithVariants {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            brand_name: row.brand_name,
            details: row.details,
            image_url: row.image_url,
            variant: Vec::new(),
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct VariantRow {
    pub id: String,
    pub product_id: String,
    pub variant_name: String,
    pub variant_details: String,
}

impl From<VariantRow> for Variant {
    fn from(row: VariantRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            name: row.variant_name,
            details: row.variant_details,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct VariantInfoRow {
    pub id: String,
    pub variant_name: String,
    pub variant_details: String,
}

impl From<VariantInfoRow> for VariantInfo {
    fn from(row: VariantInfoRow) -> Self {
        Self {
            id: row.id,
            name: row.variant_name,
            details: row.variant_details,
        }
    }
}
