//! 代价公式配置模块
//!
//! 每种查询类别的代价为 `base_cost + floor(row_count * per_row_cost)`。
//! 扫描型操作（SELECT/UPDATE/DELETE）随行数线性增长，INSERT 接近常数
//!
//! ## 使用示例
//!
//! ```rust
//! use querycost::query::cost::{CostFormulaConfig, VerbCost};
//!
//! // 使用默认配置
//! let config = CostFormulaConfig::default();
//!
//! // 自定义 SELECT 的行系数
//! let custom = CostFormulaConfig::default().with_select(VerbCost::new(1, 0.001));
//! assert!(custom.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigError, ConfigResult};
use crate::core::types::QueryKind;

/// 单一类别的代价参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerbCost {
    /// 固定开销，与行数无关
    pub base_cost: u64,
    /// 每行开销，必须为非负有限值
    pub per_row_cost: f64,
}

impl VerbCost {
    pub const fn new(base_cost: u64, per_row_cost: f64) -> Self {
        Self {
            base_cost,
            per_row_cost,
        }
    }
}

/// 代价公式配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostFormulaConfig {
    pub select: VerbCost,
    pub insert: VerbCost,
    pub update: VerbCost,
    pub delete: VerbCost,
}

impl Default for CostFormulaConfig {
    fn default() -> Self {
        Self {
            select: VerbCost::new(1, 0.0001),
            insert: VerbCost::new(1, 0.00001),
            update: VerbCost::new(2, 0.0002),
            delete: VerbCost::new(2, 0.0002),
        }
    }
}

impl CostFormulaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 与行数无关的固定计费
    pub fn flat() -> Self {
        let defaults = Self::default();
        Self {
            select: VerbCost::new(defaults.select.base_cost, 0.0),
            insert: VerbCost::new(defaults.insert.base_cost, 0.0),
            update: VerbCost::new(defaults.update.base_cost, 0.0),
            delete: VerbCost::new(defaults.delete.base_cost, 0.0),
        }
    }

    pub fn with_select(mut self, cost: VerbCost) -> Self {
        self.select = cost;
        self
    }

    pub fn with_insert(mut self, cost: VerbCost) -> Self {
        self.insert = cost;
        self
    }

    pub fn with_update(mut self, cost: VerbCost) -> Self {
        self.update = cost;
        self
    }

    pub fn with_delete(mut self, cost: VerbCost) -> Self {
        self.delete = cost;
        self
    }

    /// 获取指定类别的代价参数
    pub fn verb(&self, kind: QueryKind) -> VerbCost {
        match kind {
            QueryKind::Select => self.select,
            QueryKind::Insert => self.insert,
            QueryKind::Update => self.update,
            QueryKind::Delete => self.delete,
        }
    }

    /// 校验配置
    ///
    /// 每行系数必须为非负有限值，否则代价不再随行数单调不减；
    /// INSERT 的每行系数不能超过任何扫描型类别
    pub fn validate(&self) -> ConfigResult<()> {
        for kind in QueryKind::ALL {
            let coeff = self.verb(kind).per_row_cost;
            if !coeff.is_finite() || coeff < 0.0 {
                return Err(ConfigError::InvalidCostFormula(format!(
                    "{} 的每行代价必须为非负有限值，实际为 {}",
                    kind, coeff
                )));
            }
        }

        let insert_coeff = self.insert.per_row_cost;
        if let Some(kind) = QueryKind::ALL
            .into_iter()
            .filter(QueryKind::is_scan)
            .find(|k| self.verb(*k).per_row_cost < insert_coeff)
        {
            return Err(ConfigError::InvalidCostFormula(format!(
                "INSERT 的每行代价 ({}) 不能大于 {} 的每行代价 ({})",
                insert_coeff,
                kind,
                self.verb(kind).per_row_cost
            )));
        }
        Ok(())
    }
}
