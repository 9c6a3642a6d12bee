//! 查询类别标签
//!
//! 不携带语句文本的查询类别，用于代价公式和配置中按类别索引

use serde::{Deserialize, Serialize};
use std::fmt;

/// 查询类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl QueryKind {
    /// 全部类别
    pub const ALL: [QueryKind; 4] = [
        QueryKind::Select,
        QueryKind::Insert,
        QueryKind::Update,
        QueryKind::Delete,
    ];

    /// 语句的引导关键字（小写）
    pub fn keyword(&self) -> &'static str {
        match self {
            QueryKind::Select => "select",
            QueryKind::Insert => "insert",
            QueryKind::Update => "update",
            QueryKind::Delete => "delete",
        }
    }

    /// 按引导关键字查找类别，大小写不敏感
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
    }

    /// 是否为扫描型操作（代价随行数增长）
    pub fn is_scan(&self) -> bool {
        !matches!(self, QueryKind::Insert)
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryKind::Select => "SELECT",
            QueryKind::Insert => "INSERT",
            QueryKind::Update => "UPDATE",
            QueryKind::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}
