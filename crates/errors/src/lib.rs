//! catalog-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 底层驱动错误的装箱形式
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 必填字段为空
    #[error("Missing parameter(s): {}", .fields.join(", "))]
    MissingParam { fields: Vec<String> },

    /// 字段格式不合法
    #[error("Invalid parameter(s): {}", .fields.join(", "))]
    InvalidParam { fields: Vec<String> },

    /// 按主键查询未找到记录
    #[error("No '{entity}' found for id: '{id}'")]
    EntityNotFound { id: String, entity: String },

    /// 查询成功但没有匹配行
    #[error("No rows in result set")]
    NoRows,

    #[error("Database error: {0}")]
    Database(#[source] BoxError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn missing_param<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingParam {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn invalid_param<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::InvalidParam {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entity_not_found(id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self::EntityNotFound {
            id: id.into(),
            entity: entity.into(),
        }
    }

    pub fn database(err: impl Into<BoxError>) -> Self {
        Self::Database(err.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 是否为 no-rows 信号
    pub fn is_no_rows(&self) -> bool {
        matches!(self, Self::NoRows)
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParam { .. } => 400,
            Self::InvalidParam { .. } => 400,
            Self::EntityNotFound { .. } => 404,
            Self::NoRows => 404,
            Self::Database(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type(),
            title: self.problem_title(),
            status: self.status_code(),
            detail: self.to_string(),
            instance: None,
            params: self.params(),
        }
    }

    fn params(&self) -> Option<Vec<String>> {
        match self {
            Self::MissingParam { fields } | Self::InvalidParam { fields } => Some(fields.clone()),
            _ => None,
        }
    }

    fn problem_type(&self) -> String {
        match self {
            Self::MissingParam { .. } => "/problems/missing-param".to_string(),
            Self::InvalidParam { .. } => "/problems/invalid-param".to_string(),
            Self::EntityNotFound { .. } | Self::NoRows => "/problems/not-found".to_string(),
            Self::Database(_) => "/problems/database".to_string(),
            Self::Internal(_) => "/problems/internal".to_string(),
        }
    }

    fn problem_title(&self) -> String {
        match self {
            Self::MissingParam { .. } => "Missing Parameter".to_string(),
            Self::InvalidParam { .. } => "Invalid Parameter".to_string(),
            Self::EntityNotFound { .. } | Self::NoRows => "Resource Not Found".to_string(),
            Self::Database(_) => "Database Error".to_string(),
            Self::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// 出错的参数名
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<String>>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_missing_param_lists_every_field() {
        let err = AppError::missing_param(["id", "brand_name"]);
        assert_eq!(err.to_string(), "Missing parameter(s): id, brand_name");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_entity_not_found_message() {
        let err = AppError::entity_not_found("1", "products");
        assert_eq!(err.to_string(), "No 'products' found for id: '1'");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_database_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = AppError::database(io);

        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("connection reset"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_no_rows_is_distinct() {
        assert!(AppError::NoRows.is_no_rows());
        assert!(!AppError::entity_not_found("1", "products").is_no_rows());
    }

    #[test]
    fn test_problem_details_serialization() {
        let details = AppError::invalid_param(["pid"]).to_problem_details();
        let json = serde_json::to_value(&details).unwrap();

        assert_eq!(json["status"], 400);
        assert_eq!(json["title"], "Invalid Parameter");
        assert_eq!(json["params"], serde_json::json!(["pid"]));
        assert!(json.get("instance").is_none());
    }

    #[test]
    fn test_problem_details_omits_params_for_not_found() {
        let json = serde_json::to_value(AppError::NoRows.to_problem_details()).unwrap();
        assert!(json.get("params").is_none());
        assert_eq!(json["type"], "/problems/not-found");
    }
}
