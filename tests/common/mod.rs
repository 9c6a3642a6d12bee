//! 集成测试共享工具模块
//!
//! 提供行数来源测试替身和常用断言

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use querycost::core::error::{RowCountError, RowCountResult};
use querycost::query::cost::FormulaQueryCoster;
use querycost::storage::{RowCounter, TableStatisticsManager};

/// 测试表的行数
pub const SMALL_TABLE_ROWS: u64 = 10_000;

/// 测试表名
pub const SMALL_TABLE: &str = "small";

/// 固定行数的行数来源
///
/// 只认识 `small` 表，其余表返回 `UnknownTable`，并记录调用次数
#[derive(Debug, Default)]
pub struct FixedRowCounter {
    calls: AtomicUsize,
}

impl FixedRowCounter {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RowCounter for FixedRowCounter {
    fn row_count(&self, _tx: &(), table_name: &str) -> RowCountResult<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if table_name == SMALL_TABLE {
            Ok(SMALL_TABLE_ROWS)
        } else {
            Err(RowCountError::UnknownTable(table_name.to_string()))
        }
    }
}

/// 创建使用默认公式和 `FixedRowCounter` 的估算器
pub fn fixed_coster() -> FormulaQueryCoster<Arc<FixedRowCounter>> {
    FormulaQueryCoster::new(Arc::new(FixedRowCounter::default()))
}

/// 创建预置若干表行数的统计信息管理器
pub fn stats_with(tables: &[(&str, u64)]) -> Arc<TableStatisticsManager> {
    let stats = Arc::new(TableStatisticsManager::new());
    for (name, rows) in tables {
        stats.set_row_count(name, *rows);
    }
    stats
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}
