//! 查询类型模块
//!
//! 根据语句的引导关键字把原始语句分类为四种查询类型，并按各自的语法规则提取目标表名。
//!
//! 表名提取基于空白分词，不是完整的 SQL 语法：
//! - 不含 FROM 的 SELECT（如 `select 3`）得到空表名，不视为错误
//! - 子查询、注释和多语句输入的行为不做保证

use std::fmt;
use std::str::FromStr;

use crate::core::error::{QueryCostError, QueryCostResult};
use crate::core::types::{Cost, QueryKind};
use crate::query::cost::formula::CostFormula;
use crate::utils::string_utils::{clean_table_identifier, find_keyword, leading_keyword, split_fields};

const FROM: &str = "from";
const INTO: &str = "into";
const SET: &str = "set";

/// DELETE 语句的最少字段数: `delete from <table>`
const DELETE_MIN_FIELDS: usize = 3;

/// 查询类型，携带原始语句文本
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryType {
    Select(String),
    Insert(String),
    Update(String),
    Delete(String),
}

impl QueryType {
    /// 按引导关键字对语句分类
    ///
    /// 关键字大小写不敏感，忽略首尾空白。无法识别时返回 `UnknownQueryType`
    pub fn from_statement(statement: &str) -> QueryCostResult<Self> {
        let kind = QueryKind::from_keyword(leading_keyword(statement))
            .ok_or(QueryCostError::UnknownQueryType)?;
        Ok(Self::with_kind(kind, statement.to_string()))
    }

    /// 用指定类别包装语句，不做分类检查
    pub fn with_kind(kind: QueryKind, statement: String) -> Self {
        match kind {
            QueryKind::Select => QueryType::Select(statement),
            QueryKind::Insert => QueryType::Insert(statement),
            QueryKind::Update => QueryType::Update(statement),
            QueryKind::Delete => QueryType::Delete(statement),
        }
    }

    pub fn kind(&self) -> QueryKind {
        match self {
            QueryType::Select(_) => QueryKind::Select,
            QueryType::Insert(_) => QueryKind::Insert,
            QueryType::Update(_) => QueryKind::Update,
            QueryType::Delete(_) => QueryKind::Delete,
        }
    }

    /// 原始语句文本
    pub fn statement(&self) -> &str {
        match self {
            QueryType::Select(s)
            | QueryType::Insert(s)
            | QueryType::Update(s)
            | QueryType::Delete(s) => s,
        }
    }

    /// 提取目标表名，引号会被去掉
    pub fn table_name(&self) -> QueryCostResult<String> {
        let fields = split_fields(self.statement());
        match self {
            QueryType::Select(_) => select_table_name(&fields),
            QueryType::Insert(_) => insert_table_name(&fields),
            QueryType::Update(_) => update_table_name(&fields),
            QueryType::Delete(_) => delete_table_name(&fields),
        }
    }

    /// 按本类型的公式计算代价
    pub fn calculate_cost(&self, formula: &CostFormula, row_count: u64) -> Cost {
        formula.calculate(self.kind(), row_count)
    }
}

impl FromStr for QueryType {
    type Err = QueryCostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_statement(s)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.statement().trim())
    }
}

/// `select <cols> from <table> [where ...]`
fn select_table_name(fields: &[&str]) -> QueryCostResult<String> {
    let table = find_keyword(fields, FROM)
        .and_then(|idx| fields.get(idx + 1))
        .map(|field| clean_table_identifier(field))
        .unwrap_or_default();
    Ok(table)
}

/// `insert into <table> (...) values (...)`
fn insert_table_name(fields: &[&str]) -> QueryCostResult<String> {
    let table = find_keyword(fields, INTO)
        .and_then(|idx| fields.get(idx + 1))
        .map(|field| clean_table_identifier(field))
        .unwrap_or_default();
    require_table(table, QueryCostError::IntoStatementMissing)
}

/// `update <table> set <assignments> [where ...]`
fn update_table_name(fields: &[&str]) -> QueryCostResult<String> {
    match find_keyword(fields, SET) {
        Some(idx) if idx >= 2 => require_table(
            clean_table_identifier(fields[1]),
            QueryCostError::SetStatementMissing,
        ),
        _ => Err(QueryCostError::SetStatementMissing),
    }
}

/// `delete from <table> [where ...]`
fn delete_table_name(fields: &[&str]) -> QueryCostResult<String> {
    if fields.len() < DELETE_MIN_FIELDS {
        return Err(QueryCostError::DeleteMinimumThreeFields);
    }
    if !fields[1].eq_ignore_ascii_case(FROM) {
        return Err(QueryCostError::FromStatementMissing);
    }
    require_table(
        clean_table_identifier(fields[2]),
        QueryCostError::FromStatementMissing,
    )
}

/// 只有 SELECT 允许空表名，写操作清理后为空（如 `""`、`(a)`）按缺少子句处理
fn require_table(table: String, missing: QueryCostError) -> QueryCostResult<String> {
    if table.is_empty() {
        Err(missing)
    } else {
        Ok(table)
    }
}
