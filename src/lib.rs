//! querycost - SQL 语句代价估算
//!
//! 在不执行语句的前提下，根据语句类别和目标表的近似行数估算相对代价，
//! 供上层在执行可能昂贵的语句之前进行计量或限流。
//!
//! ```
//! use std::sync::Arc;
//! use querycost::query::cost::{FormulaQueryCoster, QueryCoster};
//! use querycost::storage::TableStatisticsManager;
//!
//! let stats = Arc::new(TableStatisticsManager::new());
//! stats.set_row_count("keys", 10_000);
//!
//! let coster = FormulaQueryCoster::new(stats.clone());
//! let cost = coster.query_cost(&(), "SELECT * FROM keys WHERE id = 1", &[]).unwrap();
//! assert!(cost > 0);
//! ```

pub mod config;
pub mod core;
pub mod query;
pub mod storage;
pub mod utils;
