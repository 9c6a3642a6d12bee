//! 行数来源接口
//!
//! 代价估算器通过此接口获取表的近似行数。事务上下文 `Tx` 对估算器不透明，
//! 原样传递给实现者；实现者负责 IO、超时和取消

use std::sync::Arc;

use crate::core::error::RowCountResult;

/// 表行数来源
///
/// 对于存储中不存在的表必须返回 `RowCountError::UnknownTable`
pub trait RowCounter<Tx: ?Sized = ()>: Send + Sync {
    fn row_count(&self, tx: &Tx, table_name: &str) -> RowCountResult<u64>;
}

impl<Tx: ?Sized, T: RowCounter<Tx> + ?Sized> RowCounter<Tx> for Arc<T> {
    fn row_count(&self, tx: &Tx, table_name: &str) -> RowCountResult<u64> {
        (**self).row_count(tx, table_name)
    }
}

impl<Tx: ?Sized, T: RowCounter<Tx> + ?Sized> RowCounter<Tx> for &T {
    fn row_count(&self, tx: &Tx, table_name: &str) -> RowCountResult<u64> {
        (**self).row_count(tx, table_name)
    }
}

impl<Tx: ?Sized, T: RowCounter<Tx> + ?Sized> RowCounter<Tx> for Box<T> {
    fn row_count(&self, tx: &Tx, table_name: &str) -> RowCountResult<u64> {
        (**self).row_count(tx, table_name)
    }
}
