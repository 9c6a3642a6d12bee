//! 统一错误处理 for querycost
//!
//! - `query` - 语句分类、表名提取和代价估算错误
//! - `storage` - 行数来源错误，代价估算器原样透传
//! - `config` - 配置加载和校验错误
//! - `codes` - 对外错误码，供上层 API 使用
//!
//! 所有错误都立即返回给调用方，核心逻辑中不做恢复、重试或日志记录

pub mod codes;
pub mod config;
pub mod query;
pub mod storage;

pub use codes::{ErrorCategory, ErrorCode, PublicError, ToPublicError};
pub use config::{ConfigError, ConfigResult};
pub use query::{QueryCostError, QueryCostResult};
pub use storage::{RowCountError, RowCountResult};
