//! 动态 WHERE 子句构建

use catalog_ports::ProductFilter;

/// 过滤参数到列名的映射，顺序即谓词与占位符的顺序
const PRODUCT_FILTER_COLUMNS: [(&str, &str); 2] =
    [(ProductFilter::PID, "id"), (ProductFilter::NAME, "name")];

/// 带位置参数的 WHERE 子句
///
/// `values[i]` 绑定到占位符 `$(i + 1)`。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    conditions: Vec<String>,
    values: Vec<String>,
}

impl WhereClause {
    /// 追加一个等值谓词，占位符编号随之递增
    pub fn push_eq(&mut self, column: &str, value: impl Into<String>) {
        self.values.push(value.into());
        self.conditions
            .push(format!("{} = ${}", column, self.values.len()));
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// `WHERE a = $1 AND b = $2`，无条件时为空串
    pub fn to_sql(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// 拼接到基础查询之后
    pub fn apply_to(&self, base: &str) -> String {
        if self.is_empty() {
            base.to_string()
        } else {
            format!("{} {}", base, self.to_sql())
        }
    }
}

/// 由商品过滤条件生成 WHERE 子句，`vid` 不参与
pub fn product_where_clause(filter: &ProductFilter) -> WhereClause {
    let mut clause = WhereClause::default();

    for (key, column) in PRODUCT_FILTER_COLUMNS {
        if let Some(value) = filter.value(key) {
            clause.push_eq(column, value);
        }
    }

    clause
}
