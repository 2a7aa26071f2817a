//! PostgreSQL 变体存储

use async_trait::async_trait;
use catalog_errors::{AppError, AppResult};
use catalog_ports::{Variant, VariantInfo, VariantStore};
use sqlx::PgPool;
use tracing::debug;

use crate::{observe, single_row};
use crate::rows::{VariantInfoRow, VariantRow};

const STORE: &str = "variants";

pub struct PostgresVariantStore {
    pool: PgPool,
}

impl PostgresVariantStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VariantStore for PostgresVariantStore {
    async fn get_by_id(&self, id: &str, product_id: &str) -> AppResult<Variant> {
        debug!(id, product_id, "Fetching variant");

        let result = sqlx::query_as::<_, VariantRow>(
            "SELECT id, product_id, variant_name, variant_details
             FROM variants WHERE id = $1 AND product_id = $2",
        )
        .bind(id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await;

        observe(STORE, "get_by_id", &result);
        single_row::<VariantRow, _>(result)
    }

    async fn create(&self, variant: Variant) -> AppResult<Variant> {
        debug!(id = %variant.id, product_id = %variant.product_id, "Inserting variant");

        let result = sqlx::query(
            "INSERT INTO variants (id, product_id, variant_name, variant_details)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&variant.id)
        .bind(&variant.product_id)
        .bind(&variant.name)
        .bind(&variant.details)
        .execute(&self.pool)
        .await;

        observe(STORE, "create", &result);
        result.map_err(AppError::database)?;

        Ok(variant)
    }

    async fn get_variant_data(&self, product_id: &str) -> AppResult<Vec<VariantInfo>> {
        debug!(product_id, "Fetching variants of product");

        let result = sqlx::query_as::<_, VariantInfoRow>(
            "SELECT id, variant_name, variant_details FROM variants WHERE product_id = $1",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await;

        observe(STORE, "get_variant_data", &result);

        match result {
            Ok(rows) => Ok(rows.into_iter().map(Into::into).collect()),
            Err(sqlx::Error::RowNotFound) => Ok(Vec::new()),
            Err(e) => Err(AppError::database(e)),
        }
    }
}
