//! 查询代价估算错误类型
//!
//! 涵盖语句分类、表名提取以及行数查询过程中的错误

use thiserror::Error;

use crate::core::error::codes::{ErrorCode, ToPublicError};
use crate::core::error::storage::RowCountError;

/// 代价估算结果类型别名
pub type QueryCostResult<T> = Result<T, QueryCostError>;

/// 代价估算错误类型
///
/// 结构性错误（缺少子句等）不携带语句文本，调用方持有原始语句
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryCostError {
    #[error("未知的查询类型")]
    UnknownQueryType,

    #[error("INSERT 语句缺少 INTO 子句")]
    IntoStatementMissing,

    #[error("UPDATE 语句缺少 SET 子句")]
    SetStatementMissing,

    #[error("DELETE 语句缺少 FROM 子句")]
    FromStatementMissing,

    #[error("DELETE 语句至少需要三个字段")]
    DeleteMinimumThreeFields,

    #[error(transparent)]
    RowCount(#[from] RowCountError),
}

impl QueryCostError {
    /// 是否为语句结构错误（分类或表名提取阶段产生）
    pub fn is_statement_error(&self) -> bool {
        !matches!(self, QueryCostError::RowCount(_))
    }
}

impl ToPublicError for QueryCostError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            QueryCostError::UnknownQueryType => ErrorCode::SyntaxError,
            QueryCostError::IntoStatementMissing
            | QueryCostError::SetStatementMissing
            | QueryCostError::FromStatementMissing
            | QueryCostError::DeleteMinimumThreeFields => ErrorCode::InvalidStatement,
            QueryCostError::RowCount(e) => e.to_error_code(),
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            QueryCostError::RowCount(e) => e.to_public_message(),
            _ => self.to_string(),
        }
    }
}
