//! 配置错误类型

use thiserror::Error;

use crate::core::error::codes::{ErrorCode, ToPublicError};

/// 配置结果类型
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置加载、保存和校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("IO错误: {0}")]
    Io(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("代价公式参数无效: {0}")]
    InvalidCostFormula(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e.to_string())
    }
}

impl ToPublicError for ConfigError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            ConfigError::InvalidCostFormula(_) | ConfigError::Parse(_) => {
                ErrorCode::ValidationError
            }
            ConfigError::Io(_) | ConfigError::Serialize(_) => ErrorCode::InternalError,
        }
    }

    fn to_public_message(&self) -> String {
        match self {
            ConfigError::Io(_) => "IO操作失败".to_string(),
            _ => self.to_string(),
        }
    }
}
