//! 行数来源错误类型
//!
//! 行数来源（RowCounter）返回的错误，代价估算器原样向上传递

use thiserror::Error;

use crate::core::error::codes::{ErrorCode, ToPublicError};

/// 行数查询结果类型
pub type RowCountResult<T> = Result<T, RowCountError>;

/// 行数来源错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowCountError {
    #[error("未知的表: {0}")]
    UnknownTable(String),
    #[error("存储错误: {0}")]
    Storage(String),
}

impl From<std::io::Error> for RowCountError {
    fn from(e: std::io::Error) -> Self {
        RowCountError::Storage(e.to_string())
    }
}

impl ToPublicError for RowCountError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            RowCountError::UnknownTable(_) => ErrorCode::ResourceNotFound,
            RowCountError::Storage(_) => ErrorCode::ExecutionError,
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            // 存储细节不对外暴露
            RowCountError::Storage(_) => ErrorCode::ExecutionError.default_message().to_string(),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_table_display() {
        let err = RowCountError::UnknownTable("orders".to_string());
        assert_eq!(err.to_string(), "未知的表: orders");
        assert_eq!(err.to_error_code(), ErrorCode::ResourceNotFound);
    }

    #[test]
    fn test_storage_error_hides_detail() {
        let err: RowCountError =
            std::io::Error::new(std::io::ErrorKind::Other, "disk /dev/sda1 failed").into();
        let public = err.to_public_error();
        assert_eq!(public.code, ErrorCode::ExecutionError);
        assert!(!public.message.contains("sda1"));
    }
}
