//! catalog-adapter-postgres - PostgreSQL 适配器

mod connection;
mod enrich;
mod product_store;
mod query;
mod rows;
mod variant_store;

pub use connection::*;
pub use enrich::*;
pub use product_store::*;
pub use query::*;
pub use variant_store::*;

use catalog_errors::{AppError, AppResult};

/// 记录查询次数与失败次数
fn observe<T>(store: &'static str, op: &'static str, result: &Result<T, sqlx::Error>) {
    metrics::counter!("catalog_db_queries_total", "store" => store, "op" => op).increment(1);

    if let Err(e) = result {
        if !matches!(e, sqlx::Error::RowNotFound) {
            metrics::counter!("catalog_db_errors_total", "store" => store, "op" => op)
                .increment(1);
        }
    }
}

/// 单行查询结果映射：无行为 `NoRows`，其余驱动错误为 `Database`
fn single_row<R, T>(result: Result<Option<R>, sqlx::Error>) -> AppResult<T>
where
    T: From<R>,
{
    match result {
        Ok(Some(row)) => Ok(row.into()),
        Ok(None) | Err(sqlx::Error::RowNotFound) => Err(AppError::NoRows),
        Err(e) => Err(AppError::database(e)),
    }
}
