//! 查询代价估算模块
//!
//! 不执行语句，按语句类别和目标表行数估算相对代价，用于在执行前计量或限流
//!
//! ## 模块结构
//!
//! - `query_type` - 语句分类与表名提取
//! - `config` - 代价公式配置
//! - `formula` - 代价公式
//! - `coster` - 代价估算器，串联各阶段

pub mod config;
pub mod coster;
pub mod formula;
pub mod query_type;

pub use config::{CostFormulaConfig, VerbCost};
pub use coster::{
    build_query_coster, CostEstimate, FormulaQueryCoster, QueryCoster, QueryCosterType,
    EMPTY_TABLE_ROW_COUNT,
};
pub use formula::CostFormula;
pub use query_type::QueryType;
