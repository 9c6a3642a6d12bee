// 核心类型模块
//
// 包含代价估算使用的基础类型：查询类别、绑定参数和代价值

pub mod kind;
pub mod param;

pub use kind::QueryKind;
pub use param::ParamValue;

/// 代价值
///
/// 无量纲的相对分数，仅用于比较不同查询的开销，不代表执行时间
pub type Cost = u64;
