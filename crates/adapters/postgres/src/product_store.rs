//! PostgreSQL 商品存储

use std::sync::Arc;

use async_trait::async_trait;
use catalog_errors::{AppError, AppResult};
use catalog_ports::{Product, ProductFilter, ProductStore, ProductWithVariants, VariantStore};
use sqlx::PgPool;
use tracing::debug;

use crate::enrich::attach_variants;
use crate::query::product_where_clause;
use crate::rows::ProductRow;
use crate::{observe, single_row};

const STORE: &str = "products";

const SELECT_PRODUCTS: &str = "SELECT id, name, brand_name, details, image_url FROM products";

/// 商品存储
///
/// 列表查询对每个返回的商品再查询一次变体（N+1），以换取实现简单。
pub struct PostgresProductStore {
    pool: PgPool,
    variant_store: Arc<dyn VariantStore>,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool, variant_store: Arc<dyn VariantStore>) -> Self {
        Self {
            pool,
            variant_store,
        }
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn get_by_id(&self, id: &str) -> AppResult<ProductWithVariants> {
        debug!(id, "Fetching product");

        let result = sqlx::query_as::<_, ProductRow>(&format!("{} WHERE id = $1", SELECT_PRODUCTS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await;

        observe(STORE, "get_by_id", &result);
        single_row::<ProductRow, _>(result)
    }

    async fn get_all(&self, filter: &ProductFilter) -> AppResult<Vec<ProductWithVariants>> {
        let clause = product_where_clause(filter);
        let sql = clause.apply_to(SELECT_PRODUCTS);
        debug!(%sql, params = ?clause.values(), vid = ?filter.vid, "Listing products");

        let mut query = sqlx::query_as::<_, ProductRow>(&sql);
        for value in clause.values() {
            query = query.bind(value);
        }

        let result = query.fetch_all(&self.pool).await;
        observe(STORE, "get_all", &result);

        let rows = match result {
            Ok(rows) => rows,
            Err(sqlx::Error::RowNotFound) => return Ok(Vec::new()),
            Err(e) => return Err(AppError::database(e)),
        };

        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            let product =
                attach_variants(self.variant_store.as_ref(), row.into(), filter.vid.as_deref())
                    .await?;
            products.push(product);
        }

        Ok(products)
    }

    async fn create(&self, product: Product) -> AppResult<Product> {
        debug!(id = %product.id, "Inserting product");

        let result = sqlx::query(
            "INSERT INTO products (id, name, brand_name, details, image_url)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(&product.brand_name)
        .bind(&product.details)
        .bind(&product.image_url)
        .execute(&self.pool)
        .await;

        observe(STORE, "create", &result);
        result.map_err(AppError::database)?;

        Ok(product)
    }
}
