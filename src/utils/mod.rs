// 工具模块 - 仅用于导出各个子模块，不包含具体实现

// 日志模块
pub mod logging;

// 字符串工具模块
pub mod string_utils;
pub use string_utils::{
    clean_table_identifier, find_keyword, leading_keyword, split_fields, strip_identifier_quotes,
};
