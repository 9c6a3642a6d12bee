//! 行数来源
//!
//! - `row_counter` - 行数来源接口，由宿主程序注入代价估算器
//! - `stats` - 基于内存统计信息的默认实现

pub mod row_counter;
pub mod stats;

pub use row_counter::RowCounter;
pub use stats::{TableStatistics, TableStatisticsManager};
