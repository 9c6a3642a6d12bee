//! 对外错误码定义
//!
//! 代价估算结果通常由上层 API 返回给客户端，本模块将内部错误映射为稳定的错误码。
//!
//! 错误码格式: XXYY
//! - XX: 错误类别 (00=成功, 01=语法, 02=执行, 03=验证, 05=资源, 09=系统)
//! - YY: 具体错误

use serde::{Deserialize, Serialize};

/// 对外错误码
///
/// 错误码一旦定义不应随意修改，保证客户端兼容性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ErrorCode {
    #[default]
    Success = 0,

    // ==================== 语法错误 (01xx) ====================
    /// 无法识别的语句类型
    SyntaxError = 100,
    /// 语句缺少必要的子句
    InvalidStatement = 102,

    // ==================== 执行错误 (02xx) ====================
    /// 行数来源执行失败
    ExecutionError = 200,

    // ==================== 验证错误 (03xx) ====================
    /// 配置参数不合法
    ValidationError = 300,

    // ==================== 资源错误 (05xx) ====================
    /// 表不存在
    ResourceNotFound = 500,

    // ==================== 系统错误 (09xx) ====================
    InternalError = 900,
    Unknown = 999,
}

impl ErrorCode {
    /// 获取错误码的 i32 值
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// 根据 i32 值获取错误码
    pub fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(ErrorCode::Success),
            100 => Some(ErrorCode::SyntaxError),
            102 => Some(ErrorCode::InvalidStatement),
            200 => Some(ErrorCode::ExecutionError),
            300 => Some(ErrorCode::ValidationError),
            500 => Some(ErrorCode::ResourceNotFound),
            900 => Some(ErrorCode::InternalError),
            999 => Some(ErrorCode::Unknown),
            _ => None,
        }
    }

    /// 获取错误类别
    pub fn category(&self) -> ErrorCategory {
        match self.as_i32() {
            0 => ErrorCategory::Success,
            100..=199 => ErrorCategory::Syntax,
            200..=299 => ErrorCategory::Execution,
            300..=399 => ErrorCategory::Validation,
            500..=599 => ErrorCategory::Resource,
            900..=999 => ErrorCategory::System,
            _ => ErrorCategory::Unknown,
        }
    }

    /// 获取默认的错误消息
    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "成功",
            ErrorCode::SyntaxError => "语法错误",
            ErrorCode::InvalidStatement => "无效语句",
            ErrorCode::ExecutionError => "执行错误",
            ErrorCode::ValidationError => "验证错误",
            ErrorCode::ResourceNotFound => "资源未找到",
            ErrorCode::InternalError => "内部服务器错误",
            ErrorCode::Unknown => "未知错误",
        }
    }

    /// 判断是否为客户端错误
    pub fn is_client_error(&self) -> bool {
        (100..=499).contains(&self.as_i32())
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_i32(), self.default_message())
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Success,
    Syntax,
    Execution,
    Validation,
    Resource,
    System,
    Unknown,
}

/// 对外错误信息 - 用于序列化到响应中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicError {
    pub code: ErrorCode,
    pub message: String,
}

impl PublicError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// 使用默认消息创建错误
    pub fn with_default_message(code: ErrorCode) -> Self {
        Self::new(code, code.default_message())
    }
}

/// 内部错误到对外错误的转换 trait
///
/// 实现此 trait 可以将内部错误转换为对外错误，过滤敏感信息
pub trait ToPublicError {
    /// 转换为对外错误
    fn to_public_error(&self) -> PublicError {
        PublicError::new(self.to_error_code(), self.to_public_message())
    }

    /// 获取对外错误码
    fn to_error_code(&self) -> ErrorCode;

    /// 获取对外错误消息（过滤敏感信息）
    fn to_public_message(&self) -> String;
}
