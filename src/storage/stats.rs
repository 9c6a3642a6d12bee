//! 表统计信息管理器模块
//!
//! 在内存中维护各表的近似行数，作为 `RowCounter` 的默认实现。
//! 行数由宿主程序在收集统计信息后写入，读取时返回快照值

use std::collections::HashMap;
use std::time::SystemTime;

use parking_lot::RwLock;

use crate::config::TableStatsConfig;
use crate::core::error::{RowCountError, RowCountResult};
use crate::storage::row_counter::RowCounter;

/// 表统计信息
#[derive(Debug, Clone, PartialEq)]
pub struct TableStatistics {
    /// 表名称
    pub table_name: String,
    /// 近似行数
    pub row_count: u64,
    /// 最后更新时间
    pub last_analyzed: SystemTime,
}

impl TableStatistics {
    pub fn new(table_name: impl Into<String>, row_count: u64) -> Self {
        Self {
            table_name: table_name.into(),
            row_count,
            last_analyzed: SystemTime::now(),
        }
    }
}

/// 表统计信息管理器
///
/// 线程安全。多个代价估算器共享同一份统计信息时用 `Arc<TableStatisticsManager>` 包装，
/// `clone` 得到的是独立快照，之后的写入互不可见
#[derive(Debug, Default)]
pub struct TableStatisticsManager {
    table_stats: RwLock<HashMap<String, TableStatistics>>,
}

impl TableStatisticsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从配置中的 `[[tables]]` 条目创建
    pub fn from_config(tables: &[TableStatsConfig]) -> Self {
        let manager = Self::new();
        manager.load_from_config(tables);
        manager
    }

    /// 写入配置中的表行数，已存在的表会被覆盖
    pub fn load_from_config(&self, tables: &[TableStatsConfig]) {
        let mut stats = self.table_stats.write();
        for entry in tables {
            stats.insert(
                entry.name.clone(),
                TableStatistics::new(entry.name.clone(), entry.row_count),
            );
        }
    }

    /// 获取表统计信息
    pub fn get_table_stats(&self, table_name: &str) -> Option<TableStatistics> {
        self.table_stats.read().get(table_name).cloned()
    }

    /// 更新表统计信息
    pub fn update_table_stats(&self, stats: TableStatistics) {
        self.table_stats
            .write()
            .insert(stats.table_name.clone(), stats);
    }

    /// 设置表行数，同时刷新分析时间
    pub fn set_row_count(&self, table_name: &str, row_count: u64) {
        self.update_table_stats(TableStatistics::new(table_name, row_count));
    }

    /// 移除表，之后对该表的行数查询返回 `UnknownTable`
    pub fn remove_table(&self, table_name: &str) -> Option<TableStatistics> {
        self.table_stats.write().remove(table_name)
    }

    /// 清除所有统计信息
    pub fn clear_all(&self) {
        self.table_stats.write().clear();
    }

    /// 获取所有表名称
    pub fn get_all_tables(&self) -> Vec<String> {
        self.table_stats.read().keys().cloned().collect()
    }
}

impl Clone for TableStatisticsManager {
    fn clone(&self) -> Self {
        Self {
            table_stats: RwLock::new(self.table_stats.read().clone()),
        }
    }
}

impl<Tx: ?Sized> RowCounter<Tx> for TableStatisticsManager {
    fn row_count(&self, _tx: &Tx, table_name: &str) -> RowCountResult<u64> {
        self.table_stats
            .read()
            .get(table_name)
            .map(|s| s.row_count)
            .ok_or_else(|| RowCountError::UnknownTable(table_name.to_string()))
    }
}
