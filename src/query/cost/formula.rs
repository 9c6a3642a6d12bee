//! 代价公式模块
//!
//! 按查询类别把表行数映射为代价值。纯函数，相同输入总是得到相同结果

use crate::core::types::{Cost, QueryKind};
use crate::query::cost::config::CostFormulaConfig;

/// 代价公式
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostFormula {
    config: CostFormulaConfig,
}

impl CostFormula {
    /// 使用给定配置创建公式
    ///
    /// 调用方负责先执行 `CostFormulaConfig::validate`
    pub fn new(config: CostFormulaConfig) -> Self {
        Self { config }
    }

    /// 计算代价
    ///
    /// `base_cost + floor(row_count * per_row_cost)`，溢出时饱和到 `u64::MAX`
    pub fn calculate(&self, kind: QueryKind, row_count: u64) -> Cost {
        let verb = self.config.verb(kind);
        let row_cost = (row_count as f64 * verb.per_row_cost).floor();
        // f64 -> u64 的 as 转换是饱和的，NaN 变为 0
        verb.base_cost.saturating_add(row_cost as u64)
    }

    pub fn config(&self) -> &CostFormulaConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::cost::config::VerbCost;

    #[test]
    fn test_default_formula_values() {
        let formula = CostFormula::default();
        assert_eq!(formula.calculate(QueryKind::Select, 10_000), 2);
        assert_eq!(formula.calculate(QueryKind::Update, 10_000), 4);
        assert_eq!(formula.calculate(QueryKind::Delete, 10_000), 4);
        assert_eq!(formula.calculate(QueryKind::Insert, 10_000), 1);
        assert_eq!(formula.calculate(QueryKind::Select, 0), 1);
    }

    #[test]
    fn test_formula_is_monotonic() {
        let formula = CostFormula::default();
        for kind in QueryKind::ALL {
            let mut previous = 0;
            for rows in (0..2_000_000u64).step_by(7_919) {
                let cost = formula.calculate(kind, rows);
                assert!(cost >= previous, "{} cost decreased at {} rows", kind, rows);
                previous = cost;
            }
        }
    }

    #[test]
    fn test_insert_grows_slower_than_scans() {
        let formula = CostFormula::default();
        let rows = 50_000_000;
        let insert = formula.calculate(QueryKind::Insert, rows);
        for kind in [QueryKind::Select, QueryKind::Update, QueryKind::Delete] {
            assert!(formula.calculate(kind, rows) > insert);
        }
    }

    #[test]
    fn test_saturates_on_overflow() {
        let config = CostFormulaConfig::default().with_select(VerbCost::new(u64::MAX, 1.0));
        let formula = CostFormula::new(config);
        assert_eq!(formula.calculate(QueryKind::Select, u64::MAX), u64::MAX);
    }
}
