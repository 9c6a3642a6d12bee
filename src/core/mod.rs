pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{
    ConfigError, ConfigResult, ErrorCode, PublicError, QueryCostError, QueryCostResult,
    RowCountError, RowCountResult, ToPublicError,
};

// 核心数据类型
pub use types::{Cost, ParamValue, QueryKind};
