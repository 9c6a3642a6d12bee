//! 代价估算器模块
//!
//! 把语句分类、表名提取、行数查询和代价公式串联起来：
//!
//! 语句 → 查询类型 → 表名 → 行数 → 代价
//!
//! 任一阶段失败立即返回，不做重试或降级。估算器不保存调用间状态，
//! 也不缓存表名或行数，每次调用都重新解析并查询

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::Config;
use crate::core::error::{ConfigError, ConfigResult, QueryCostResult};
use crate::core::types::{Cost, ParamValue, QueryKind};
use crate::query::cost::config::CostFormulaConfig;
use crate::query::cost::formula::CostFormula;
use crate::query::cost::query_type::QueryType;
use crate::storage::row_counter::RowCounter;

/// 不含 FROM 的 SELECT 使用的行数
pub const EMPTY_TABLE_ROW_COUNT: u64 = 0;

/// 查询代价估算接口
pub trait QueryCoster<Tx: ?Sized = ()>: Send + Sync {
    /// 估算语句代价
    ///
    /// `params` 是语句的绑定参数，属于调用约定的一部分，不参与计算
    fn query_cost(&self, tx: &Tx, statement: &str, params: &[ParamValue]) -> QueryCostResult<Cost>;
}

/// 一次估算的明细
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub kind: QueryKind,
    /// 空字符串表示语句不涉及表
    pub table_name: String,
    pub row_count: u64,
    pub cost: Cost,
}

/// 基于公式的代价估算器
///
/// 行数来源在构造时注入，生命周期内不变
#[derive(Debug, Clone)]
pub struct FormulaQueryCoster<R> {
    row_counter: R,
    formula: CostFormula,
}

impl<R> FormulaQueryCoster<R> {
    /// 使用默认公式创建估算器
    pub fn new(row_counter: R) -> Self {
        Self::with_formula(row_counter, CostFormula::default())
    }

    pub fn with_formula(row_counter: R, formula: CostFormula) -> Self {
        Self {
            row_counter,
            formula,
        }
    }

    /// 校验配置中的代价公式后创建估算器
    pub fn from_config(row_counter: R, config: &Config) -> ConfigResult<Self> {
        Self::from_formula_config(row_counter, config.cost)
    }

    pub fn from_formula_config(row_counter: R, config: CostFormulaConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_formula(row_counter, CostFormula::new(config)))
    }

    pub fn formula(&self) -> &CostFormula {
        &self.formula
    }

    pub fn row_counter(&self) -> &R {
        &self.row_counter
    }

    /// 估算语句代价并返回明细
    pub fn estimate<Tx: ?Sized>(
        &self,
        tx: &Tx,
        statement: &str,
        _params: &[ParamValue],
    ) -> QueryCostResult<CostEstimate>
    where
        R: RowCounter<Tx>,
    {
        let query_type = QueryType::from_statement(statement)?;
        log::trace!("语句分类为 {}", query_type.kind());

        let table_name = query_type.table_name()?;
        let row_count = if table_name.is_empty() && query_type.kind() == QueryKind::Select {
            EMPTY_TABLE_ROW_COUNT
        } else {
            self.row_counter.row_count(tx, &table_name)?
        };

        let cost = query_type.calculate_cost(&self.formula, row_count);
        log::debug!(
            "查询代价: kind={}, table={:?}, rows={}, cost={}",
            query_type.kind(),
            table_name,
            row_count,
            cost
        );

        Ok(CostEstimate {
            kind: query_type.kind(),
            table_name,
            row_count,
            cost,
        })
    }
}

impl<Tx: ?Sized, R: RowCounter<Tx>> QueryCoster<Tx> for FormulaQueryCoster<R> {
    fn query_cost(&self, tx: &Tx, statement: &str, params: &[ParamValue]) -> QueryCostResult<Cost> {
        self.estimate(tx, statement, params).map(|e| e.cost)
    }
}

/// 估算器类型
///
/// 基于 EXPLAIN 的估算需要真实数据库连接，目前只提供公式估算器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryCosterType {
    #[default]
    Formula,
}

impl QueryCosterType {
    /// 按类型构建估算器
    pub fn build<Tx, R>(
        &self,
        row_counter: R,
        config: CostFormulaConfig,
    ) -> ConfigResult<Box<dyn QueryCoster<Tx>>>
    where
        Tx: ?Sized + 'static,
        R: RowCounter<Tx> + 'static,
    {
        match self {
            QueryCosterType::Formula => Ok(Box::new(FormulaQueryCoster::from_formula_config(
                row_counter,
                config,
            )?)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCosterType::Formula => "formula",
        }
    }
}

impl fmt::Display for QueryCosterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryCosterType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formula" => Ok(QueryCosterType::Formula),
            other => Err(ConfigError::Parse(format!("未知的估算器类型: {}", other))),
        }
    }
}

/// 按配置构建估算器
pub fn build_query_coster<Tx, R>(row_counter: R, config: &Config) -> ConfigResult<Box<dyn QueryCoster<Tx>>>
where
    Tx: ?Sized + 'static,
    R: RowCounter<Tx> + 'static,
{
    config.coster.build(row_counter, config.cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{QueryCostError, RowCountError, RowCountResult};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const ROWS: u64 = 10_000;

    /// 只认识 `small` 表，并记录调用次数
    #[derive(Default)]
    struct CountingRowCounter {
        calls: AtomicUsize,
    }

    impl RowCounter for CountingRowCounter {
        fn row_count(&self, _tx: &(), table_name: &str) -> RowCountResult<u64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if table_name == "small" {
                Ok(ROWS)
            } else {
                Err(RowCountError::UnknownTable(table_name.to_string()))
            }
        }
    }

    #[test]
    fn test_estimate_breakdown() {
        let coster = FormulaQueryCoster::new(CountingRowCounter::default());
        let estimate = coster
            .estimate(&(), "DELETE FROM small WHERE id = ?", &[ParamValue::Int(1)])
            .expect("estimate should succeed");

        assert_eq!(estimate.kind, QueryKind::Delete);
        assert_eq!(estimate.table_name, "small");
        assert_eq!(estimate.row_count, ROWS);
        assert_eq!(estimate.cost, coster.formula().calculate(QueryKind::Delete, ROWS));
    }

    #[test]
    fn test_select_without_table_skips_row_counter() {
        let coster = FormulaQueryCoster::new(CountingRowCounter::default());
        let cost = coster.query_cost(&(), "SELECT 3", &[]).expect("constant select");

        assert_eq!(cost, coster.formula().calculate(QueryKind::Select, EMPTY_TABLE_ROW_COUNT));
        assert_eq!(coster.row_counter().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_structural_error_skips_row_counter() {
        let coster = FormulaQueryCoster::new(CountingRowCounter::default());
        let err = coster.query_cost(&(), "UPDATE small a = 1", &[]).unwrap_err();

        assert_eq!(err, QueryCostError::SetStatementMissing);
        assert_eq!(coster.row_counter().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_write_with_empty_table_is_not_costed() {
        let coster = FormulaQueryCoster::new(CountingRowCounter::default());
        let cases = [
            (r#"DELETE FROM "" WHERE a = 1"#, QueryCostError::FromStatementMissing),
            ("INSERT INTO (a) VALUES (1)", QueryCostError::IntoStatementMissing),
            (r#"UPDATE "" SET a = 1"#, QueryCostError::SetStatementMissing),
        ];
        for (statement, expected) in cases {
            assert_eq!(coster.query_cost(&(), statement, &[]), Err(expected), "{}", statement);
        }
        assert_eq!(coster.row_counter().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_from_config_rejects_invalid_formula() {
        let mut config = Config::default();
        config.cost.select.per_row_cost = -0.5;
        let result = FormulaQueryCoster::from_config(CountingRowCounter::default(), &config);
        assert!(matches!(result, Err(ConfigError::InvalidCostFormula(_))));
    }

    #[test]
    fn test_coster_type_parse_and_build() {
        assert_eq!("Formula".parse::<QueryCosterType>(), Ok(QueryCosterType::Formula));
        assert!("explain".parse::<QueryCosterType>().is_err());

        let coster: Box<dyn QueryCoster> =
            build_query_coster(CountingRowCounter::default(), &Config::default())
                .expect("default config is valid");
        assert_eq!(
            coster.query_cost(&(), "INSERT INTO small(a) VALUES (1)", &[]),
            Ok(CostFormula::default().calculate(QueryKind::Insert, ROWS))
        );
    }
}
